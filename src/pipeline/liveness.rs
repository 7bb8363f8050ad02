use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::{ToolEntry, UrlStatus};
use crate::error::Result;

/// Raw result of one liveness probe, before the status policy is applied.
/// Failure kinds are kept distinct here; they only collapse to `Invalid`
/// at the policy boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Status(u16),
    Failed(ProbeFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    Timeout,
    Connect(String),
    Request(String),
}

impl ProbeOutcome {
    /// Status policy: 200 is live, 403 is restricted, any other status is an
    /// HTTP error, and every probe failure degrades to `Invalid`.
    pub fn into_status(self) -> UrlStatus {
        match self {
            ProbeOutcome::Status(200) => UrlStatus::Ok,
            ProbeOutcome::Status(403) => UrlStatus::Restricted,
            ProbeOutcome::Status(code) => UrlStatus::HttpError(code),
            ProbeOutcome::Failed(_) => UrlStatus::Invalid,
        }
    }
}

/// Port for issuing liveness probes, so tests can substitute a stub
#[async_trait]
pub trait UrlProber: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Production prober: a HEAD request with redirects followed and a fixed
/// timeout, no retry.
pub struct ReqwestProber {
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UrlProber for ReqwestProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
            Err(e) if e.is_timeout() => ProbeOutcome::Failed(ProbeFailure::Timeout),
            Err(e) if e.is_connect() => ProbeOutcome::Failed(ProbeFailure::Connect(e.to_string())),
            Err(e) => ProbeOutcome::Failed(ProbeFailure::Request(e.to_string())),
        }
    }
}

/// Classifies every entry with one sequential probe each, then keeps only
/// the live ones. A failed probe never aborts the run; it only affects its
/// own entry.
pub async fn validate_entries(prober: &dyn UrlProber, entries: Vec<ToolEntry>) -> Vec<ToolEntry> {
    let total = entries.len();
    let mut classified = Vec::with_capacity(total);

    for mut entry in entries {
        let outcome = prober.probe(&entry.url).await;
        debug!(url = %entry.url, ?outcome, "probe finished");
        entry.url_status = Some(outcome.into_status());
        classified.push(entry);
    }

    let live: Vec<ToolEntry> = classified
        .into_iter()
        .filter(|entry| matches!(entry.url_status, Some(UrlStatus::Ok)))
        .collect();

    if live.len() < total {
        warn!("dropped {} of {} entries with non-live URLs", total - live.len(), total);
    }
    live
}
