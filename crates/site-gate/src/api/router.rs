//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::edge::edge_gate;
use crate::error::ApiError;
use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main router
///
/// The edge gate wraps every route, so its decision is made before any page
/// or API handler runs.
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/coming-soon-status", get(handlers::coming_soon_status))
        .route("/toggle-coming-soon", post(handlers::toggle_coming_soon))
        .route("/admin/login", post(handlers::admin_login))
        .route("/admin/logout", post(handlers::admin_logout))
        .route("/site", get(handlers::site_info))
        .route("/health", get(handlers::health_check));

    let mut router = Router::new()
        .route("/coming-soon", get(handlers::coming_soon_page))
        .nest("/api", api_routes)
        .fallback(handlers::content_page)
        .layer(middleware::from_fn_with_state(state.clone(), edge_gate))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(CorsAny)
                .allow_methods(CorsAny)
                .allow_headers(CorsAny),
        );
    }

    router.with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(detail).into_response()
}
