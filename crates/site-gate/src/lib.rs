//! Site Gate - request-side launch gating for the portfolio site
//!
//! This crate provides:
//! - The edge gate middleware deciding redirect vs continue per request
//! - The admin override (shared-secret login, session cookie, toggle)
//! - The coming-soon status REST API
//! - Server lifecycle management
//!
//! The edge gate reads only the static coming-soon switch and the admin
//! session cookie. The gating override cookie written by the toggle feeds the
//! status API alone, so flipping it never changes which requests are
//! redirected.

pub mod admin;
pub mod api;
pub mod config;
pub mod cookies;
pub mod edge;
pub mod error;
pub mod server;

pub use admin::{AdminCredential, LoginOutcome};
pub use api::{create_router, AppState};
pub use config::GateConfig;
pub use cookies::CookiePolicy;
pub use edge::{decide, AllowList, GateDecision};
pub use error::{ApiError, ApiResult, GateError, GateResult};
pub use server::Server;
