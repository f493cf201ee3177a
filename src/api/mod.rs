//! HTTP routes for the studio dashboard.
//!
//! This module combines all routes into a single router.

mod dashboard;
mod dialogs;
mod pages;
pub mod status;

use axum::Router;

use crate::views::forms::{CourseForm, InstructorForm, ParticipantForm};
use crate::AppState;

/// Build the complete router.
///
/// Route structure:
/// - / - Dashboard page
/// - /api/dashboard - Dashboard as JSON
/// - /courses/:id - Course detail
/// - /{courses,instructors,participants}/* - Create, edit and delete dialogs
/// - /health - Health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(dashboard::routes())
        .merge(dialogs::routes::<CourseForm>())
        .merge(dialogs::routes::<InstructorForm>())
        .merge(dialogs::routes::<ParticipantForm>())
}
