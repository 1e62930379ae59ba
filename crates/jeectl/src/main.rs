//! JEE Control - CLI client for the JEE solver
//!
//! Solves questions in-process or against a running jeed.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jeectl::client::DEFAULT_SERVER;
use jeectl::commands;

#[derive(Parser)]
#[command(name = "jeectl")]
#[command(about = "JEE AI Solver - Physics, Chemistry and Mathematics helper", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single question
    Ask {
        /// Question text
        question: String,

        /// physics, chemistry or mathematics (detected when omitted)
        #[arg(long)]
        subject: Option<String>,

        /// Send the question to a running server instead of solving locally
        #[arg(long)]
        server: Option<String>,

        /// Print the raw result record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in sample questions
    Demo {
        #[arg(long)]
        server: Option<String>,
    },

    /// Show server health
    Health {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Show server capabilities
    Stats {
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            subject,
            server,
            json,
        } => commands::ask(&question, subject.as_deref(), server.as_deref(), json).await,
        Commands::Demo { server } => commands::demo(server.as_deref()).await,
        Commands::Health { server } => commands::health(&server).await,
        Commands::Stats { server } => commands::stats(&server).await,
    }
}
