//! Deployment environments
//!
//! The environment only influences how cookies are issued: production cookies
//! carry the `Secure` attribute, development cookies do not so that the site
//! works over plain `http://localhost`.

use serde::{Deserialize, Serialize};

/// Environment the site is deployed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeployEnvironment {
    /// Local development
    #[default]
    Development,

    /// Public production deployment
    Production,
}

impl DeployEnvironment {
    /// Should cookies be marked `Secure`?
    pub fn secure_cookies(&self) -> bool {
        matches!(self, DeployEnvironment::Production)
    }

    /// Parse a loosely written environment name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "production" | "prod" => Some(DeployEnvironment::Production),
            "development" | "dev" => Some(DeployEnvironment::Development),
            _ => None,
        }
    }
}
