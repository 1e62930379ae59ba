//! HTTP client for a running jeed

use anyhow::{Context, Result};
use jee_common::ResultRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default server address, matching the daemon's default port
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Server-side delay tops out at a few seconds; leave headroom
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct SolveBody<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<&'a str>,
}

/// GET /health
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub ai_model: String,
    #[serde(default)]
    pub uptime_seconds: u64,
}

/// GET /api/stats
#[derive(Debug, Clone, Deserialize)]
pub struct StatsInfo {
    pub total_subjects: usize,
    pub subjects: Vec<String>,
    pub features: Vec<String>,
    pub status: String,
}

pub struct SolverClient {
    client: reqwest::Client,
    base_url: String,
}

impl SolverClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /solve. Validation failures come back as a record, not an error.
    pub async fn solve(&self, question: &str, subject: Option<&str>) -> Result<ResultRecord> {
        let url = format!("{}/solve", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&SolveBody { question, subject })
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.base_url))?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        serde_json::from_str::<ResultRecord>(&text)
            .with_context(|| format!("Unexpected response ({}): {}", status, text))
    }

    pub async fn health(&self) -> Result<HealthInfo> {
        self.get_json("/health").await
    }

    pub async fn stats(&self) -> Result<StatsInfo> {
        self.get_json("/api/stats").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.base_url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Request to {} failed ({}): {}", path, status, text);
        }

        resp.json()
            .await
            .with_context(|| format!("Failed to parse response from {}", path))
    }
}
