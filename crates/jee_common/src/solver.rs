//! Dispatcher: validate → classify → template → decorate → record.
//!
//! Confidence and the simulated "thinking" delay come from an injected,
//! seedable random source. Both are UX placeholders, not quality signals.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};

use crate::classifier::classify;
use crate::error::{ConfigError, SolveError};
use crate::numbers::{extract_numbers, format_values};
use crate::record::ResultRecord;
use crate::subject::{Subject, Topic};
use crate::templates::{lookup, STUDY_TIPS};

/// Dispatcher settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverConfig {
    /// Lower bound of the decorative confidence band
    #[serde(default = "default_confidence_min")]
    pub confidence_min: f64,

    /// Upper bound of the decorative confidence band
    #[serde(default = "default_confidence_max")]
    pub confidence_max: f64,

    /// Simulated processing delay, lower bound in milliseconds
    #[serde(default = "default_delay_min_ms")]
    pub delay_min_ms: u64,

    /// Simulated processing delay, upper bound in milliseconds
    #[serde(default = "default_delay_max_ms")]
    pub delay_max_ms: u64,

    /// Append the study-tips footer to every solution
    #[serde(default)]
    pub include_study_tips: bool,
}

fn default_confidence_min() -> f64 {
    0.85
}

fn default_confidence_max() -> f64 {
    0.98
}

fn default_delay_min_ms() -> u64 {
    1_000
}

fn default_delay_max_ms() -> u64 {
    3_000
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            confidence_min: default_confidence_min(),
            confidence_max: default_confidence_max(),
            delay_min_ms: default_delay_min_ms(),
            delay_max_ms: default_delay_max_ms(),
            include_study_tips: false,
        }
    }
}

impl SolverConfig {
    /// Default settings without the simulated delay
    pub fn instant() -> Self {
        Self {
            delay_min_ms: 0,
            delay_max_ms: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
        if !in_unit(self.confidence_min) || !in_unit(self.confidence_max) {
            return Err(ConfigError::ConfidenceOutOfRange {
                min: self.confidence_min,
                max: self.confidence_max,
            });
        }
        if self.confidence_min > self.confidence_max {
            return Err(ConfigError::InvertedRange {
                field: "confidence",
                min: self.confidence_min.to_string(),
                max: self.confidence_max.to_string(),
            });
        }
        if self.delay_min_ms > self.delay_max_ms {
            return Err(ConfigError::InvertedRange {
                field: "delay_ms",
                min: self.delay_min_ms.to_string(),
                max: self.delay_max_ms.to_string(),
            });
        }
        Ok(())
    }
}

/// Question dispatcher. Build once, share behind an `Arc`.
pub struct Solver {
    config: SolverConfig,
    rng: Mutex<StdRng>,
}

impl Solver {
    /// Solver seeded from OS entropy
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Deterministic solver for tests and reproducible runs
    pub fn with_seed(config: SolverConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve a question. Every failure is folded into the returned record.
    pub async fn solve(&self, question: &str, subject: Option<&str>) -> ResultRecord {
        match self.try_solve(question, subject).await {
            Ok(record) => record,
            Err(e) => {
                if e.is_validation() {
                    debug!("Rejected question: {}", e);
                } else {
                    warn!("Solve failed ({}): {}", e.kind().as_str(), e);
                }
                ResultRecord::failure(&e)
            }
        }
    }

    async fn try_solve(
        &self,
        question: &str,
        subject: Option<&str>,
    ) -> Result<ResultRecord, SolveError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SolveError::EmptyQuestion);
        }
        let hint = subject.map(str::parse::<Subject>).transpose()?;

        let (delay, confidence) = self.draw()?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let (subject, topic) = classify(question, hint);
        let solution = compose(question, subject, topic, self.config.include_study_tips)?;
        debug!(
            "Solved as {} / {} (confidence {:.2}, delay {}ms)",
            subject,
            topic,
            confidence,
            delay.as_millis()
        );
        Ok(ResultRecord::success(solution, confidence, topic))
    }

    /// Draw the delay and confidence for one request
    fn draw(&self) -> Result<(Duration, f64), SolveError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| SolveError::Internal("random source unavailable".to_string()))?;
        let delay_ms = rng.gen_range(self.config.delay_min_ms..=self.config.delay_max_ms);
        let confidence = rng.gen_range(self.config.confidence_min..=self.config.confidence_max);
        Ok((Duration::from_millis(delay_ms), confidence))
    }
}

/// Build the solution text shown to the user
pub fn compose(
    question: &str,
    subject: Subject,
    topic: Topic,
    include_study_tips: bool,
) -> Result<String, SolveError> {
    let mut out = String::new();
    write!(out, "📚 Topic Identified: {}\n\n", topic)?;

    let values = extract_numbers(question);
    if !values.is_empty() {
        write!(out, "🔢 Values detected: {}\n\n", format_values(&values))?;
    }

    out.push_str(lookup(subject, topic));
    if include_study_tips {
        write!(out, "\n\n{}", STUDY_TIPS)?;
    }
    out.push_str("\n\n✅ Solution completed successfully!");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn solver() -> Solver {
        Solver::with_seed(SolverConfig::instant(), 7).unwrap()
    }

    #[tokio::test]
    async fn test_empty_question() {
        for q in ["", "   ", "\n\t"] {
            let record = solver().solve(q, Some("physics")).await;
            assert!(!record.success);
            assert_eq!(record.error.as_deref(), Some("Question cannot be empty"));
            assert_eq!(record.confidence, 0.0);
            assert_eq!(record.error_kind(), Some(ErrorKind::Validation));
        }
    }

    #[tokio::test]
    async fn test_empty_question_checked_before_subject() {
        let record = solver().solve("", Some("biology")).await;
        assert_eq!(record.error.as_deref(), Some("Question cannot be empty"));
    }

    #[tokio::test]
    async fn test_invalid_subject() {
        let record = solver().solve("some question", Some("biology")).await;
        assert!(!record.success);
        let error = record.error.unwrap();
        assert!(error.contains("physics, chemistry, mathematics"));
        assert!(record.solution.is_none());
    }

    #[tokio::test]
    async fn test_subject_is_case_insensitive() {
        let record = solver().solve("Find the derivative", Some(" MATHEMATICS ")).await;
        assert!(record.success);
        assert_eq!(record.topic.as_deref(), Some("Calculus"));
    }

    #[tokio::test]
    async fn test_derivative_question() {
        let record = solver()
            .solve("Find the derivative of x^2", Some("mathematics"))
            .await;
        assert!(record.success);
        assert_eq!(record.topic.as_deref(), Some("Calculus"));
        assert!((0.85..=0.98).contains(&record.confidence));
        let solution = record.solution.unwrap();
        assert!(solution.starts_with("📚 Topic Identified: Calculus"));
        assert!(solution.contains("d/dx"));
        assert!(solution.contains("🔢 Values detected: 2"));
        assert!(solution.ends_with("✅ Solution completed successfully!"));
        assert!(record.error.is_none());
    }

    #[tokio::test]
    async fn test_no_subject_infers() {
        let record = solver()
            .solve("Calculate the molarity of the acid", None)
            .await;
        assert!(record.success);
        assert_eq!(record.topic.as_deref(), Some("Solutions"));
    }

    #[tokio::test]
    async fn test_fallback_topic_label() {
        let record = solver().solve("Explain this please", Some("chemistry")).await;
        assert_eq!(record.topic.as_deref(), Some("Chemistry Problem"));
        assert!(record.solution.unwrap().contains("CHEMISTRY PROBLEM"));
    }

    #[tokio::test]
    async fn test_study_tips_toggle() {
        let config = SolverConfig {
            include_study_tips: true,
            ..SolverConfig::instant()
        };
        let with_tips = Solver::with_seed(config, 1).unwrap();
        let record = with_tips.solve("velocity of a car", Some("physics")).await;
        assert!(record.solution.unwrap().contains("Study Tips"));

        let record = solver().solve("velocity of a car", Some("physics")).await;
        assert!(!record.solution.unwrap().contains("Study Tips"));
    }

    #[tokio::test]
    async fn test_seeded_confidence_is_reproducible() {
        let a = Solver::with_seed(SolverConfig::instant(), 42).unwrap();
        let b = Solver::with_seed(SolverConfig::instant(), 42).unwrap();
        for _ in 0..5 {
            let ra = a.solve("wave frequency", Some("physics")).await;
            let rb = b.solve("wave frequency", Some("physics")).await;
            assert_eq!(ra.confidence, rb.confidence);
        }
    }

    #[tokio::test]
    async fn test_fixed_confidence_band() {
        let config = SolverConfig {
            confidence_min: 0.9,
            confidence_max: 0.9,
            ..SolverConfig::instant()
        };
        let s = Solver::with_seed(config, 3).unwrap();
        let record = s.solve("matrix", Some("mathematics")).await;
        assert_eq!(record.confidence, 0.9);
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let config = SolverConfig {
            delay_min_ms: 30,
            delay_max_ms: 30,
            ..SolverConfig::default()
        };
        let s = Solver::with_seed(config, 0).unwrap();
        let start = std::time::Instant::now();
        let record = s.solve("force", Some("physics")).await;
        assert!(record.success);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_config_validation() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(SolverConfig::instant().validate().is_ok());

        let bad = SolverConfig {
            confidence_min: 0.99,
            confidence_max: 0.5,
            ..SolverConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::InvertedRange { field: "confidence", .. })
        ));

        let bad = SolverConfig {
            confidence_max: 1.5,
            ..SolverConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::ConfidenceOutOfRange { .. })
        ));

        let bad = SolverConfig {
            delay_min_ms: 10,
            delay_max_ms: 5,
            ..SolverConfig::default()
        };
        assert!(Solver::new(bad).is_err());
    }

    #[test]
    fn test_compose_without_numbers() {
        let text = compose("no digits here", Subject::Physics, Topic::PhysicsGeneral, false).unwrap();
        assert!(!text.contains("Values detected"));
        assert!(text.contains("PHYSICS PROBLEM"));
    }
}
