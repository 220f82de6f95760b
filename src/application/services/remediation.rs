use std::collections::BTreeMap;

use serde::Serialize;

/// Built-in checklists for the processes the sampler watches by default.
const BUILTIN_CHECKLISTS: &[(&str, &[&str])] = &[
    (
        "agrr_daemon",
        &[
            "Check agrr daemon logs: agrr daemon logs",
            "Restart daemon: agrr daemon restart",
            "Review Python code in lib/core/agrr_core/",
            "Check for unclosed resources (files, connections)",
        ],
    ),
    (
        "solid_queue",
        &[
            "Check for stuck jobs: rails solid_queue:status",
            "Review job definitions in app/jobs/",
            "Consider reducing JOB_CONCURRENCY",
        ],
    ),
    (
        "puma",
        &[
            "Review Rails logs in log/production.log",
            "Check for memory-heavy requests",
            "Consider adding worker timeout",
            "Profile with rack-mini-profiler or derailed",
        ],
    ),
];

/// Used for leaking processes that have no checklist of their own.
const GENERIC_CHECKLIST: &[&str] = &[
    "Compare heap snapshots taken early and late in the run",
    "Check for unclosed resources (files, connections)",
    "Look for caches or queues that grow without bound",
];

/// A follow-up suggestion printed at the end of every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStep {
    pub text: &'static str,
    pub details: &'static [&'static str],
}

pub const NEXT_STEPS: &[NextStep] = &[
    NextStep {
        text: "For longer-term monitoring, keep the sampler running for 24+ hours",
        details: &[],
    },
    NextStep {
        text: "Monitor in production environment with real traffic",
        details: &[],
    },
    NextStep {
        text: "Set up alerting for memory usage thresholds",
        details: &[],
    },
    NextStep {
        text: "Consider using application-level profiling tools:",
        details: &[
            "Ruby: memory_profiler, derailed_benchmarks",
            "Python: memory_profiler, tracemalloc",
        ],
    },
];

/// Process name to remediation checklist. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RemediationCatalog {
    checklists: BTreeMap<String, Vec<String>>,
}

impl RemediationCatalog {
    #[must_use]
    pub fn builtin() -> Self {
        let checklists = BUILTIN_CHECKLISTS
            .iter()
            .map(|(name, steps)| {
                (
                    (*name).to_string(),
                    steps.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect();
        Self { checklists }
    }

    /// Built-in catalog with `overrides` added or replacing entries by name.
    #[must_use]
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut catalog = Self::builtin();
        for (name, steps) in overrides {
            catalog.checklists.insert(name.clone(), steps.clone());
        }
        catalog
    }

    /// Checklist for `process`, or the generic checklist if it has none.
    #[must_use]
    pub fn checklist(&self, process: &str) -> Vec<String> {
        self.checklists.get(process).map_or_else(
            || GENERIC_CHECKLIST.iter().map(|s| (*s).to_string()).collect(),
            Clone::clone,
        )
    }

    #[must_use]
    pub fn has_checklist(&self, process: &str) -> bool {
        self.checklists.contains_key(process)
    }
}

impl Default for RemediationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_default_processes() {
        let catalog = RemediationCatalog::builtin();
        assert!(catalog.has_checklist("agrr_daemon"));
        assert!(catalog.has_checklist("solid_queue"));
        assert!(catalog.has_checklist("puma"));
        assert_eq!(catalog.checklist("agrr_daemon").len(), 4);
        assert_eq!(catalog.checklist("solid_queue").len(), 3);
        assert!(catalog.checklist("puma")[3].contains("rack-mini-profiler"));
    }

    #[test]
    fn unknown_process_gets_generic_checklist() {
        let catalog = RemediationCatalog::builtin();
        assert!(!catalog.has_checklist("nginx"));
        assert_eq!(catalog.checklist("nginx").len(), GENERIC_CHECKLIST.len());
    }

    #[test]
    fn overrides_replace_and_extend() {
        let mut overrides = BTreeMap::new();
        overrides.insert("puma".to_string(), vec!["Restart puma".to_string()]);
        overrides.insert("sidekiq".to_string(), vec!["Check queues".to_string()]);
        let catalog = RemediationCatalog::with_overrides(&overrides);
        assert_eq!(catalog.checklist("puma"), vec!["Restart puma".to_string()]);
        assert_eq!(catalog.checklist("sidekiq"), vec!["Check queues".to_string()]);
        assert_eq!(catalog.checklist("solid_queue").len(), 3);
    }

    #[test]
    fn next_steps_end_with_profiling_tools() {
        assert_eq!(NEXT_STEPS.len(), 4);
        assert_eq!(NEXT_STEPS[3].details.len(), 2);
    }
}
