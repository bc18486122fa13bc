//! Configuration for site-gate
//!
//! Loaded once at startup, layering built-in defaults, an optional config
//! file and `PORTFOLIO__`-prefixed environment variables (nested keys are
//! separated by `__`, e.g. `PORTFOLIO__SITE__COMING_SOON_MODE=true`).

use serde::{Deserialize, Serialize};
use site_config::{DeployEnvironment, SiteConfig};
use std::net::{Ipv4Addr, SocketAddr};

/// Main gate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Static site configuration
    #[serde(default)]
    pub site: SiteConfig,

    /// Admin override configuration
    #[serde(default)]
    pub admin: AdminConfig,

    /// Deployment environment
    #[serde(default)]
    pub environment: DeployEnvironment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
        }
    }
}

/// Admin override configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Shared admin secret; logins are refused while unset
    #[serde(default)]
    pub password: Option<String>,

    /// Require an admin session on the toggle endpoint itself
    #[serde(default)]
    pub guard_toggle: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 3000))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GateConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&GateConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Development configuration with the given coming-soon switch
    pub fn development(coming_soon_mode: bool) -> Self {
        Self {
            site: SiteConfig::with_coming_soon(coming_soon_mode),
            environment: DeployEnvironment::Development,
            ..Default::default()
        }
    }
}
