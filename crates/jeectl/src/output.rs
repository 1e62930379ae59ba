//! Terminal output for jeectl

use crate::client::{HealthInfo, StatsInfo};
use indicatif::{ProgressBar, ProgressStyle};
use jee_common::ResultRecord;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Lines of a solution shown by `demo`
pub const DEMO_PREVIEW_LINES: usize = 6;

/// Successful record; failures surface as the command's error instead
pub fn print_record(record: &ResultRecord) {
    println!(
        "{}  Topic: {}  Confidence: {}",
        "[OK]".bright_green(),
        record.topic.as_deref().unwrap_or("-").cyan(),
        confidence_label(record.confidence)
    );
    println!();
    if let Some(solution) = &record.solution {
        println!("{}", solution);
    }
}

/// Record as pretty JSON, the same shape the server returns
pub fn print_json(record: &ResultRecord) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

pub fn print_health(server: &str, health: &HealthInfo) {
    let status = if health.status == "healthy" {
        health.status.bright_green().to_string()
    } else {
        health.status.yellow().to_string()
    };
    println!("{}  {}", "[HEALTH]".bright_cyan(), server);
    println!("  Status:   {}", status);
    println!("  Service:  {} {}", health.service, health.version.dimmed());
    println!("  Model:    {}", health.ai_model);
    println!("  Uptime:   {}s", health.uptime_seconds);
}

pub fn print_stats(stats: &StatsInfo) {
    println!(
        "{}  {} subjects ({})",
        "[STATS]".bright_cyan(),
        stats.total_subjects,
        stats.status
    );
    println!("  Subjects: {}", stats.subjects.join(", "));
    println!("  Features:");
    for feature in &stats.features {
        println!("    * {}", feature);
    }
}

/// Confidence as a percentage, coloured green at 90% and above
pub fn confidence_label(confidence: f64) -> String {
    let text = format!("{:.1}%", confidence * 100.0);
    if confidence >= 0.90 {
        text.bright_green().to_string()
    } else {
        text.yellow().to_string()
    }
}

/// First `lines` lines of a solution, with a marker when cut
pub fn preview(solution: &str, lines: usize) -> String {
    let total = solution.lines().count();
    let mut out: Vec<&str> = solution.lines().take(lines).collect();
    if total > lines {
        out.push("...");
    }
    out.join("\n")
}

/// Spinner for remote calls; hidden when stdout is not a terminal
pub fn thinking_spinner(message: &str) -> ProgressBar {
    if !io::stdout().is_terminal() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.magenta} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_cuts_long_solutions() {
        let text = "a\nb\nc\nd";
        assert_eq!(preview(text, 2), "a\nb\n...");
        assert_eq!(preview(text, 4), text);
        assert_eq!(preview(text, 10), text);
    }

    #[test]
    fn test_confidence_label_percent() {
        assert!(confidence_label(0.923).contains("92.3%"));
        assert!(confidence_label(0.85).contains("85.0%"));
    }
}
