//! Dashboard Routes
//!
//! Routes:
//! - GET / - Dashboard page (full reload of all collections)
//! - GET /api/dashboard - Derived dashboard as JSON
//! - GET /courses/:id - Course detail page

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::CookieJar;
use studio_models::RecordId;
use tera::Context;

use super::pages;
use crate::views::dashboard::{CourseDetail, DashboardView};
use crate::views::dates::local_today;
use crate::views::notice::take_notice;
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/dashboard", get(dashboard_json))
        .route("/courses/:id", get(course_detail))
}

/// Dashboard page.
///
/// GET /
///
/// Every render reloads all three collections. When any of them fails the
/// load error state replaces the whole page.
async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, notice) = take_notice(jar);

    let snapshot = match state.dashboard.refresh().await {
        Ok(snapshot) => snapshot,
        Err(err) => return (jar, pages::load_error(&state.views, &err)).into_response(),
    };

    let view = DashboardView::build(&snapshot, local_today());
    let page = Context::from_serialize(&view)
        .map_err(Error::from)
        .and_then(|mut context| {
            context.insert("notice", &notice);
            state.views.render("dashboard.html", &context)
        });

    match page {
        Ok(page) => (jar, page).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Dashboard as JSON.
///
/// GET /api/dashboard
async fn dashboard_json(State(state): State<AppState>) -> Result<Json<DashboardView>> {
    let snapshot = state.dashboard.refresh().await?;
    Ok(Json(DashboardView::build(&snapshot, local_today())))
}

/// Course detail page.
///
/// GET /courses/:id
async fn course_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(id) = RecordId::parse(&id) else {
        return pages::not_found(&state.views);
    };

    let snapshot = match state.dashboard.current().await {
        Ok(snapshot) => snapshot,
        Err(err) => return pages::load_error(&state.views, &err),
    };

    let Some(course) = CourseDetail::build(&snapshot, &id) else {
        return pages::not_found(&state.views);
    };

    let mut context = Context::new();
    context.insert("course", &course);
    match state.views.render("course_detail.html", &context) {
        Ok(page) => page.into_response(),
        Err(err) => err.into_response(),
    }
}
