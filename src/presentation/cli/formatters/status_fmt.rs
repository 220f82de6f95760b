use colored::{ColoredString, Colorize};

use crate::domain::value_objects::growth_thresholds::status_for_growth;
use crate::domain::value_objects::trend_status::TrendStatus;

pub const RULE_WIDTH: usize = 70;

#[must_use]
pub fn status_badge(status: TrendStatus) -> String {
    let label = format!("{} {status}", status.emoji());
    match status {
        TrendStatus::Leak => format!("{}", label.red().bold()),
        TrendStatus::Warning => format!("{}", label.yellow().bold()),
        TrendStatus::Ok => format!("{}", label.green()),
    }
}

#[must_use]
pub fn colorize_growth(growth_rate_percent: f64) -> ColoredString {
    let text = format!("{growth_rate_percent:.2}%");
    match status_for_growth(growth_rate_percent) {
        TrendStatus::Leak => text.red().bold(),
        TrendStatus::Warning => text.yellow(),
        TrendStatus::Ok => text.green(),
    }
}

/// Full-width `=` rule, title, rule.
pub fn print_banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule.cyan());
    println!("{}", title.bold().cyan());
    println!("{}", rule.cyan());
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}
