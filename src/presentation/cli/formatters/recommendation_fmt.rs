use colored::Colorize;

use crate::application::services::remediation::NextStep;
use crate::application::services::report::Recommendation;

use super::status_fmt::print_banner;

/// Evidence and checklist lines for one leaking process.
#[must_use]
pub fn recommendation_lines(rec: &Recommendation) -> Vec<String> {
    let mut lines = vec![
        format!(
            "   - Memory grew by {:.1}% during monitoring",
            rec.growth_rate_percent
        ),
        format!(
            "   - Starting: {:.1} MB → Ending: {:.1} MB",
            rec.early_avg, rec.late_avg
        ),
        format!(
            "   - Compared the first and last {} sample(s)",
            rec.window
        ),
        "   - Action required:".to_string(),
    ];
    lines.extend(
        rec.actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("     {}. {action}", i + 1)),
    );
    lines
}

#[must_use]
pub fn next_step_lines(steps: &[NextStep]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, step) in steps.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, step.text));
        lines.extend(step.details.iter().map(|d| format!("   - {d}")));
    }
    lines
}

pub fn print_recommendations(recommendations: &[Recommendation]) {
    println!();
    print_banner("RECOMMENDATIONS");

    if recommendations.is_empty() {
        println!();
        println!("{}", "✓ No significant memory leaks detected!".green().bold());
        println!();
        println!("All processes show stable memory usage.");
        return;
    }

    for rec in recommendations {
        println!();
        println!("{}", format!("⚠️  {}:", rec.process).red().bold());
        for line in recommendation_lines(rec) {
            println!("{line}");
        }
    }
}

pub fn print_next_steps(steps: &[NextStep]) {
    println!();
    print_banner("NEXT STEPS");
    println!();
    for line in next_step_lines(steps) {
        println!("{line}");
    }
}
