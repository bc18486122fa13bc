//! Site configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::Countdown;

/// Default launch instant: 2026-01-01T00:00:00Z in epoch milliseconds
pub const DEFAULT_LAUNCH_DATE_MS: i64 = 1_767_225_600_000;

/// Process-wide static site configuration
///
/// Immutable once loaded. Changing the coming-soon switch requires a restart
/// (a redeploy, for the hosted site).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Master switch: when set, visitors are sent to the gating page
    #[serde(default)]
    pub coming_soon_mode: bool,

    /// Countdown target in epoch milliseconds
    #[serde(default = "default_launch_date")]
    pub launch_date: i64,

    /// Social profile links shown on the gating page and in the footer
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            coming_soon_mode: false,
            launch_date: DEFAULT_LAUNCH_DATE_MS,
            social_links: SocialLinks::default(),
        }
    }
}

/// Social profile links
///
/// Opaque strings; the gate never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            twitter: "https://twitter.com/".to_string(),
            linkedin: "https://www.linkedin.com/".to_string(),
            github: "https://github.com/".to_string(),
        }
    }
}

fn default_launch_date() -> i64 {
    DEFAULT_LAUNCH_DATE_MS
}

impl SiteConfig {
    /// Configuration with the given coming-soon switch and defaults elsewhere
    pub fn with_coming_soon(coming_soon_mode: bool) -> Self {
        Self {
            coming_soon_mode,
            ..Default::default()
        }
    }

    /// Launch instant, if `launch_date` is within chrono's representable range
    pub fn launch_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.launch_date)
    }

    /// Countdown to launch as seen at `now`
    pub fn countdown_at(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::between(now.timestamp_millis(), self.launch_date)
    }

    /// Countdown to launch as seen right now
    pub fn countdown(&self) -> Countdown {
        self.countdown_at(Utc::now())
    }
}
