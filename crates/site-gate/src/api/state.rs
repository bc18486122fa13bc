//! Application state for API handlers

use crate::admin::AdminCredential;
use crate::config::GateConfig;
use crate::cookies::CookiePolicy;
use crate::edge::AllowList;
use site_config::SiteConfig;
use std::sync::Arc;

/// Shared application state
///
/// Built once from [`GateConfig`] and cloned into every handler and the
/// edge gate; nothing in it changes after startup.
#[derive(Clone)]
pub struct AppState {
    /// Static site configuration
    pub site: Arc<SiteConfig>,

    /// Admin secret
    pub credential: Arc<AdminCredential>,

    /// Cookie attributes for this deployment
    pub cookies: CookiePolicy,

    /// Paths exempt from the edge gate
    pub allow_list: Arc<AllowList>,

    /// Require an admin session on the toggle endpoint
    pub guard_toggle: bool,

    /// Service version
    pub version: String,

    /// Service start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create application state from configuration
    pub fn from_config(config: &GateConfig) -> Self {
        Self {
            site: Arc::new(config.site.clone()),
            credential: Arc::new(AdminCredential::new(config.admin.password.clone())),
            cookies: CookiePolicy::new(config.environment.secure_cookies()),
            allow_list: Arc::new(AllowList::default()),
            guard_toggle: config.admin.guard_toggle,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let secs = (chrono::Utc::now() - self.started_at).num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}
