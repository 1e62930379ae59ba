//! Result record returned for every solve request.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, SolveError};
use crate::subject::Topic;

/// Outcome of one solve call. Built once, serialized, discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Decorative value, not a model confidence. Zero on failure.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip)]
    kind: Option<ErrorKind>,
}

impl ResultRecord {
    pub fn success(solution: String, confidence: f64, topic: Topic) -> Self {
        Self {
            success: true,
            solution: Some(solution),
            error: None,
            confidence,
            topic: Some(topic.label().to_string()),
            kind: None,
        }
    }

    pub fn failure(err: &SolveError) -> Self {
        Self {
            success: false,
            solution: None,
            error: Some(err.to_string()),
            confidence: 0.0,
            topic: None,
            kind: Some(err.kind()),
        }
    }

    /// Failure class, `None` for successes and for deserialized records
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.kind
    }
}
