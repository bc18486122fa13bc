//! Coming-soon status polling
//!
//! A failed fetch never erases what the client already knows: the monitor
//! keeps the last good value and raises a visible degradation notice until
//! the next successful fetch.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::error::StatusError;

/// Where the coming-soon status comes from
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self) -> Result<bool, StatusError>;
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    enabled: bool,
    success: bool,
}

/// `GET /api/coming-soon-status` over HTTP
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: reqwest::Client,
    url: String,
}

impl HttpStatusSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!(
                "{}/api/coming-soon-status",
                base_url.trim_end_matches('/')
            ),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self) -> Result<bool, StatusError> {
        let payload: StatusPayload = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !payload.success {
            return Err(StatusError::Unsuccessful);
        }
        Ok(payload.enabled)
    }
}

/// Visible notice that the status shown may be stale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedNotice {
    pub message: String,
    pub since: DateTime<Utc>,
    pub consecutive_failures: u32,
}

/// What the client should display after a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Last known state; `None` until the first successful fetch
    pub enabled: Option<bool>,
    pub degraded: Option<DegradedNotice>,
}

/// Tracks the last known status across fetches
pub struct StatusMonitor<S> {
    source: S,
    last_known: Option<bool>,
    degraded: Option<DegradedNotice>,
}

impl<S: StatusSource> StatusMonitor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_known: None,
            degraded: None,
        }
    }

    /// Seed with a value known before the first fetch (e.g. the static switch)
    pub fn with_initial(source: S, enabled: bool) -> Self {
        Self {
            source,
            last_known: Some(enabled),
            degraded: None,
        }
    }

    /// Fetch once and fold the outcome into the snapshot
    pub async fn refresh(&mut self) -> StatusSnapshot {
        match self.source.fetch().await {
            Ok(enabled) => {
                self.last_known = Some(enabled);
                self.degraded = None;
            }
            Err(err) => {
                warn!(error = %err, last_known = ?self.last_known, "Coming-soon status unavailable");
                let notice = match self.degraded.take() {
                    Some(previous) => DegradedNotice {
                        message: err.to_string(),
                        since: previous.since,
                        consecutive_failures: previous.consecutive_failures + 1,
                    },
                    None => DegradedNotice {
                        message: err.to_string(),
                        since: Utc::now(),
                        consecutive_failures: 1,
                    },
                };
                self.degraded = Some(notice);
            }
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            enabled: self.last_known,
            degraded: self.degraded.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted outcomes
    struct ScriptedSource {
        outcomes: Mutex<VecDeque<Option<bool>>>,
    }

    impl ScriptedSource {
        fn new(outcomes: impl IntoIterator<Item = Option<bool>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch(&self) -> Result<bool, StatusError> {
            match self.outcomes.lock().unwrap().pop_front().flatten() {
                Some(enabled) => Ok(enabled),
                None => Err(StatusError::Unsuccessful),
            }
        }
    }

    #[tokio::test]
    async fn test_success_records_value() {
        let mut monitor = StatusMonitor::new(ScriptedSource::new([Some(true)]));
        let snapshot = monitor.refresh().await;
        assert_eq!(snapshot.enabled, Some(true));
        assert!(snapshot.degraded.is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_value_and_flags_degraded() {
        let mut monitor = StatusMonitor::new(ScriptedSource::new([Some(false), None, None]));
        monitor.refresh().await;

        let snapshot = monitor.refresh().await;
        assert_eq!(snapshot.enabled, Some(false));
        let notice = snapshot.degraded.expect("degraded notice");
        assert_eq!(notice.consecutive_failures, 1);
        assert!(!notice.message.is_empty());

        let again = monitor.refresh().await;
        let second = again.degraded.expect("still degraded");
        assert_eq!(second.consecutive_failures, 2);
        assert_eq!(second.since, notice.since);
    }

    #[tokio::test]
    async fn test_recovery_clears_notice() {
        let mut monitor =
            StatusMonitor::with_initial(ScriptedSource::new([None, Some(true)]), false);

        let degraded = monitor.refresh().await;
        assert_eq!(degraded.enabled, Some(false));
        assert!(degraded.degraded.is_some());

        let recovered = monitor.refresh().await;
        assert_eq!(recovered.enabled, Some(true));
        assert!(recovered.degraded.is_none());
    }

    #[tokio::test]
    async fn test_failure_before_any_success_has_no_value() {
        let mut monitor = StatusMonitor::new(ScriptedSource::new([None]));
        let snapshot = monitor.refresh().await;
        assert_eq!(snapshot.enabled, None);
        assert!(snapshot.degraded.is_some());
    }

    #[test]
    fn test_http_source_url() {
        let source = HttpStatusSource::new("http://localhost:3000/");
        assert_eq!(source.url(), "http://localhost:3000/api/coming-soon-status");
    }
}
