//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the service collaborators handed to handlers
//! - `routes/`: HTTP routes + handlers
//! - `view.rs`: rendered views and redirects
//! - `flash.rs`: one-request messages carried across redirects
//! - `consts.rs`: routes, view names and model attribute names
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware;

pub mod consts;
pub mod errors;
pub mod flash;
pub mod routes;
pub mod services;
pub mod view;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Method override has to see the request before routing, so the routed
/// application sits behind an outer router as its fallback.
pub fn build_app(services: services::AppServices, flash: Arc<flash::FlashStore>) -> Router {
    let routed = Router::new()
        .route(consts::urls::HEALTH, get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(Arc::new(services)))
        .layer(Extension(flash));

    Router::new().fallback_service(routed).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(axum::middleware::from_fn(middleware::method_override)),
    )
}
