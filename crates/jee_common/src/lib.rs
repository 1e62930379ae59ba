//! Shared types and logic for the JEE solver.
//!
//! Classification, the template library and the dispatcher live here so
//! that both the daemon and the CLI can solve questions.

pub mod classifier;
pub mod error;
pub mod numbers;
pub mod record;
pub mod solver;
pub mod subject;
pub mod templates;

pub use classifier::{classify, infer_subject};
pub use error::{ConfigError, ErrorKind, SolveError};
pub use numbers::extract_numbers;
pub use record::ResultRecord;
pub use solver::{Solver, SolverConfig};
pub use subject::{Subject, Topic};
pub use templates::lookup;

/// Service name reported by the daemon and the CLI
pub const SERVICE_NAME: &str = "JEE AI Solver";

/// Solver identification string
pub const MODEL_NAME: &str = "Custom JEE Solver v1.0";
