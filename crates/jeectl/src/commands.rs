//! Subcommand implementations

use crate::client::SolverClient;
use crate::output;
use crate::DEMO_QUESTIONS;
use anyhow::Result;
use jee_common::{ResultRecord, Solver, SolverConfig};
use owo_colors::OwoColorize;

/// Where questions are answered
pub enum Backend {
    /// In-process solver with no artificial delay
    Local(Solver),
    Remote(SolverClient),
}

impl Backend {
    pub fn from_server(server: Option<&str>) -> Result<Self> {
        match server {
            Some(url) => Ok(Backend::Remote(SolverClient::new(url)?)),
            None => Ok(Backend::Local(Solver::new(SolverConfig::instant())?)),
        }
    }

    pub async fn solve(&self, question: &str, subject: Option<&str>) -> Result<ResultRecord> {
        match self {
            Backend::Local(solver) => Ok(solver.solve(question, subject).await),
            Backend::Remote(client) => {
                let spinner = output::thinking_spinner("solving...");
                let result = client.solve(question, subject).await;
                spinner.finish_and_clear();
                result
            }
        }
    }
}

pub async fn ask(
    question: &str,
    subject: Option<&str>,
    server: Option<&str>,
    json: bool,
) -> Result<()> {
    let backend = Backend::from_server(server)?;
    let record = backend.solve(question, subject).await?;

    if json {
        output::print_json(&record)?;
    } else if record.success {
        output::print_record(&record);
    }

    if !record.success {
        anyhow::bail!("{}", record.error.unwrap_or_default());
    }
    Ok(())
}

pub async fn demo(server: Option<&str>) -> Result<()> {
    let backend = Backend::from_server(server)?;
    let mut failures = 0;

    println!("{}\n", "Running sample JEE questions".bold());
    for (i, question) in DEMO_QUESTIONS.iter().enumerate() {
        println!("{} {}", format!("Test {}:", i + 1).bright_cyan(), question);
        let record = backend.solve(question, None).await?;
        if record.success {
            println!(
                "{}  {} ({})",
                "[OK]".bright_green(),
                record.topic.as_deref().unwrap_or("-"),
                output::confidence_label(record.confidence)
            );
            if let Some(solution) = &record.solution {
                println!("{}", output::preview(solution, output::DEMO_PREVIEW_LINES).dimmed());
            }
        } else {
            failures += 1;
            println!(
                "{}  {}",
                "[FAILED]".bright_red(),
                record.error.as_deref().unwrap_or("unknown error")
            );
        }
        println!("{}", "-".repeat(50));
    }

    if failures > 0 {
        anyhow::bail!("{} of {} sample questions failed", failures, DEMO_QUESTIONS.len());
    }
    println!("\n{}", "All sample questions solved".bright_green());
    Ok(())
}

pub async fn health(server: &str) -> Result<()> {
    let client = SolverClient::new(server)?;
    let info = client.health().await?;
    output::print_health(client.base_url(), &info);
    Ok(())
}

pub async fn stats(server: &str) -> Result<()> {
    let client = SolverClient::new(server)?;
    let info = client.stats().await?;
    output::print_stats(&info);
    Ok(())
}
