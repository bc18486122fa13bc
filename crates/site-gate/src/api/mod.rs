//! HTTP API: router, shared state and request handlers

pub mod handlers;
mod router;
mod state;

pub use router::create_router;
pub use state::AppState;
