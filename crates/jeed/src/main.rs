//! jeed - JEE solver HTTP daemon
//!
//! Serves the landing page and the /solve endpoint.

use anyhow::{Context, Result};
use clap::Parser;
use jee_common::{Solver, SERVICE_NAME};
use jeed::config::Config;
use jeed::server::{self, AppState};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jeed")]
#[command(about = "JEE AI Solver - question classification and solution templates over HTTP")]
#[command(version)]
struct Cli {
    /// Config file (default: $JEE_SOLVER_CONFIG or /etc/jee-solver/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen port (overrides PORT and the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Bind address (overrides HOST and the config file)
    #[arg(long)]
    host: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if cli.debug {
        config.server.debug = true;
    }
    if let Some(level) = cli.log_level {
        config.server.log_level = level;
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    config.validate()?;

    info!("{} v{} starting", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    info!("  Subjects supported: Physics, Chemistry, Mathematics");
    info!(
        "  Confidence band {:.2}..={:.2}, delay {}..={}ms",
        config.solver.confidence_min,
        config.solver.confidence_max,
        config.solver.delay_min_ms,
        config.solver.delay_max_ms
    );

    let solver = Solver::new(config.solver.clone()).context("building solver")?;
    let state = AppState::new(solver)?;

    server::run(state, &config).await
}
