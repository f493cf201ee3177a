//! Shared error pages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tera::Context;

use crate::error::Error;
use crate::views::Views;

/// Load error state with the failure message and a retry link.
pub fn load_error(views: &Views, err: &Error) -> Response {
    let mut context = Context::new();
    context.insert("message", &err.to_string());
    match views.render("load_error.html", &context) {
        Ok(page) => (err.status_code(), page).into_response(),
        Err(render_err) => render_err.into_response(),
    }
}

pub fn not_found(views: &Views) -> Response {
    match views.render("not_found.html", &Context::new()) {
        Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Error page for a failed single-record read: 404 for missing records,
/// the load error state otherwise.
pub fn read_error(views: &Views, err: &Error) -> Response {
    match err {
        Error::NotFound(_) => not_found(views),
        _ => load_error(views, err),
    }
}
