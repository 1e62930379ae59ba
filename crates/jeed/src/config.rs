//! Configuration management for jeed.
//!
//! Loads settings from a TOML file (path from `--config`, then
//! `JEE_SOLVER_CONFIG`, then /etc/jee-solver/config.toml) or uses defaults.
//! Process environment overrides the file: PORT, HOST, DEBUG/FLASK_DEBUG.

use anyhow::{Context, Result};
use jee_common::SolverConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// System-wide config file path
pub const CONFIG_PATH: &str = "/etc/jee-solver/config.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "JEE_SOLVER_CONFIG";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode: verbose logging
    #[serde(default)]
    pub debug: bool,

    /// Log filter used when RUST_LOG is unset and debug is off
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout enforced by the transport
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub solver: SolverConfig,
}

impl Config {
    /// Load config, falling back to defaults when no file is found.
    ///
    /// An explicitly named file (argument or environment) must exist and
    /// parse; only the system-wide default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = named {
            return Self::load_from_path(&path);
        }

        Ok(Self::load_from_path(Path::new(CONFIG_PATH)).unwrap_or_else(|e| {
            warn!("Config not found, using defaults: {:#}", e);
            Config::default()
        }))
    }

    /// Load config from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => warn!("Ignoring invalid PORT value: {:?}", port),
            }
        }
        if let Some(host) = lookup("HOST") {
            if !host.trim().is_empty() {
                self.server.host = host.trim().to_string();
            }
        }
        if let Some(flag) = lookup("DEBUG").or_else(|| lookup("FLASK_DEBUG")) {
            self.server.debug = parse_flag(&flag);
        }
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        self.solver.validate().context("invalid [solver] section")?;
        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than zero");
        }
        let timeout_ms = self.server.request_timeout_secs.saturating_mul(1000);
        if self.solver.delay_max_ms >= timeout_ms {
            anyhow::bail!(
                "solver delay_max_ms ({}) must be below the request timeout ({}ms)",
                self.solver.delay_max_ms,
                timeout_ms
            );
        }
        Ok(())
    }

    /// host:port string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Effective log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &str {
        if self.server.debug {
            "debug"
        } else {
            &self.server.log_level
        }
    }
}

/// Interpret a boolean environment flag
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
