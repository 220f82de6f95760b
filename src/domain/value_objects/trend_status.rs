use serde::{Deserialize, Serialize};

/// Memory trend classification for a monitored process
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendStatus {
    Ok,
    Warning,
    Leak,
}

impl std::fmt::Display for TrendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "WARNING"),
            Self::Leak => write!(f, "POTENTIAL LEAK"),
        }
    }
}

impl TrendStatus {
    #[must_use]
    pub const fn emoji(&self) -> &str {
        match self {
            Self::Ok => "✓",
            Self::Warning | Self::Leak => "⚠️ ",
        }
    }

    #[must_use]
    pub const fn is_leak(&self) -> bool {
        matches!(self, Self::Leak)
    }
}
