//! Yoga Studio - course, instructor and participant dashboard
//!
//! Library exports for testing and external use.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod views;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;

/// The complete application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
