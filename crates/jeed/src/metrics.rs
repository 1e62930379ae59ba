//! Prometheus metrics for the solve endpoint.

use anyhow::Result;
use prometheus::{
    register_histogram_with_registry, register_int_counter_vec_with_registry, Encoder, Histogram,
    IntCounterVec, Registry, TextEncoder,
};

/// Solver metrics, one registry per server instance
#[derive(Clone)]
pub struct SolverMetrics {
    pub requests_total: IntCounterVec,
    pub failures_total: IntCounterVec,
    pub duration_seconds: Histogram,
    registry: Registry,
}

impl SolverMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests_total = register_int_counter_vec_with_registry!(
            "jee_solve_requests_total",
            "Successful solve requests by subject and topic",
            &["subject", "topic"],
            registry
        )?;

        let failures_total = register_int_counter_vec_with_registry!(
            "jee_solve_failures_total",
            "Failed solve requests by failure kind",
            &["kind"],
            registry
        )?;

        let duration_seconds = register_histogram_with_registry!(
            "jee_solve_duration_seconds",
            "Time spent answering a solve request",
            vec![0.01, 0.1, 0.5, 1.0, 2.0, 3.0, 5.0, 10.0],
            registry
        )?;

        Ok(Self {
            requests_total,
            failures_total,
            duration_seconds,
            registry,
        })
    }

    pub fn record_success(&self, subject: &str, topic: &str) {
        self.requests_total.with_label_values(&[subject, topic]).inc();
    }

    /// kind: validation, internal, malformed
    pub fn record_failure(&self, kind: &str) {
        self.failures_total.with_label_values(&[kind]).inc();
    }

    pub fn observe_duration(&self, seconds: f64) {
        self.duration_seconds.observe(seconds);
    }

    /// Prometheus text exposition
    pub fn export(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_export() {
        let metrics = SolverMetrics::new().unwrap();
        metrics.record_success("mathematics", "Calculus");
        metrics.record_success("mathematics", "Calculus");
        metrics.record_failure("validation");
        metrics.observe_duration(0.2);

        let text = metrics.export().unwrap();
        assert!(text.contains(
            "jee_solve_requests_total{subject=\"mathematics\",topic=\"Calculus\"} 2"
        ));
        assert!(text.contains("jee_solve_failures_total{kind=\"validation\"} 1"));
        assert!(text.contains("jee_solve_duration_seconds_count 1"));
    }

    #[test]
    fn test_independent_registries() {
        let a = SolverMetrics::new().unwrap();
        let b = SolverMetrics::new().unwrap();
        a.record_failure("internal");
        assert!(!b.export().unwrap().contains("kind=\"internal\""));
    }
}
