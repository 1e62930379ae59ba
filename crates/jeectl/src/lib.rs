//! JEE solver CLI library
//!
//! Command implementations, the HTTP client and terminal output, split
//! out of the binary so they can be tested.

pub mod client;
pub mod commands;
pub mod output;

/// Sample questions run by `jeectl demo`
pub const DEMO_QUESTIONS: [&str; 4] = [
    "A ball is thrown vertically upward with initial velocity 20 m/s. Find the maximum height reached.",
    "Find the derivative of x³ + 2x² - 5x + 1",
    "Calculate the molarity of a solution containing 40g NaOH in 500ml water.",
    "A particle moves with constant acceleration 2 m/s². If it travels 10m in first 2 seconds, find its initial velocity.",
];
