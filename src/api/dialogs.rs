//! Dialog Routes
//!
//! Create, edit and delete dialogs, generic over the record kind.
//!
//! Routes (per kind, e.g. `courses`):
//! - GET /{kind}/new - Open create dialog
//! - POST /{kind} - Submit create dialog
//! - GET /{kind}/:id/edit - Open edit dialog (loads the record)
//! - POST /{kind}/:id - Submit edit dialog
//! - GET /{kind}/:id/delete - Delete confirmation
//! - POST /{kind}/:id/delete - Delete the record

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::{CookieJar, Form};
use studio_models::{Course, Record, RecordId};
use tracing::warn;

use super::pages;
use crate::error::{Error, Result};
use crate::views::dates::local_today;
use crate::views::dialog::{DeleteDialog, Dialog, DialogMode};
use crate::views::forms::EntityForm;
use crate::views::notice::set_notice;
use crate::AppState;

pub fn routes<T: EntityForm>() -> Router<AppState> {
    let base = format!("/{}", T::PATH);
    Router::new()
        .route(&base, post(create::<T>))
        .route(&format!("{base}/new"), get(open_create::<T>))
        .route(&format!("{base}/:id"), post(update::<T>))
        .route(&format!("{base}/:id/edit"), get(open_edit::<T>))
        .route(
            &format!("{base}/:id/delete"),
            get(confirm_delete::<T>).post(delete::<T>),
        )
}

// ============================================================================
// Create / edit
// ============================================================================

async fn open_create<T: EntityForm>(State(state): State<AppState>) -> Response {
    let snapshot = match state.dashboard.current().await {
        Ok(snapshot) => snapshot,
        Err(err) => return pages::load_error(&state.views, &err),
    };
    let dialog = Dialog::<T>::create(local_today());
    render_dialog(&state, &dialog, &snapshot.courses, StatusCode::OK)
}

async fn open_edit<T: EntityForm>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = RecordId::parse(&id) else {
        return pages::not_found(&state.views);
    };

    let record = match state.dashboard.get::<T::Fields>(&id).await {
        Ok(record) => record,
        Err(err) => return pages::read_error(&state.views, &err),
    };
    let snapshot = match state.dashboard.current().await {
        Ok(snapshot) => snapshot,
        Err(err) => return pages::load_error(&state.views, &err),
    };

    let dialog = Dialog::<T>::edit(id, &record.fields);
    render_dialog(&state, &dialog, &snapshot.courses, StatusCode::OK)
}

async fn create<T: EntityForm>(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<T>,
) -> Response {
    submit(state, jar, DialogMode::Create, form).await
}

async fn update<T: EntityForm>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: CookieJar,
    Form(form): Form<T>,
) -> Response {
    let Some(id) = RecordId::parse(&id) else {
        return pages::not_found(&state.views);
    };
    submit(state, jar, DialogMode::Edit(id), form).await
}

async fn submit<T: EntityForm>(
    state: AppState,
    jar: CookieJar,
    mode: DialogMode,
    form: T,
) -> Response {
    let dialog = Dialog::submit(mode, form);
    if !dialog.is_submitting() {
        let courses = course_options(&state).await;
        return render_dialog(&state, &dialog, &courses, StatusCode::UNPROCESSABLE_ENTITY);
    }

    let fields = dialog.form.to_fields();
    match state.dashboard.save(dialog.record_id(), &fields).await {
        Ok(_) => {
            let jar = set_notice(jar, &dialog.succeed());
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            warn!(kind = T::PATH, error = %err, "Failed to save record");
            let dialog = dialog.fail();
            let courses = course_options(&state).await;
            render_dialog(&state, &dialog, &courses, err.status_code())
        }
    }
}

/// Courses for the dialog's select; empty when they cannot be loaded.
async fn course_options(state: &AppState) -> Vec<Record<Course>> {
    match state.dashboard.current().await {
        Ok(snapshot) => snapshot.courses.clone(),
        Err(err) => {
            warn!(error = %err, "Course options unavailable");
            Vec::new()
        }
    }
}

fn render_dialog<T: EntityForm>(
    state: &AppState,
    dialog: &Dialog<T>,
    courses: &[Record<Course>],
    status: StatusCode,
) -> Response {
    match state.views.render_with(T::TEMPLATE, &dialog.view(courses)) {
        Ok(page) => (status, page).into_response(),
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Delete
// ============================================================================

async fn confirm_delete<T: EntityForm>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = RecordId::parse(&id) else {
        return pages::not_found(&state.views);
    };

    match state.dashboard.get::<T::Fields>(&id).await {
        Ok(record) => render_delete(&state, &DeleteDialog::open::<T>(&id, &record.fields), StatusCode::OK),
        Err(err) => pages::read_error(&state.views, &err),
    }
}

async fn delete<T: EntityForm>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> Response {
    let Some(id) = RecordId::parse(&id) else {
        return pages::not_found(&state.views);
    };

    let dialog = match delete_dialog::<T>(&state, &id).await {
        Ok(dialog) => dialog,
        Err(err) => return pages::read_error(&state.views, &err),
    };

    match state.dashboard.delete::<T::Fields>(&id).await {
        Ok(()) => {
            let jar = set_notice(jar, &dialog.succeed());
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            warn!(kind = T::PATH, %id, error = %err, "Failed to delete record");
            render_delete(&state, &dialog.fail(), err.status_code())
        }
    }
}

/// The confirmation for a record, named from the loaded snapshot or, when
/// the snapshot does not hold it, from the store. Only a record the store
/// reports as missing is an error; any other read failure leaves the
/// dialog with a generic name.
async fn delete_dialog<T: EntityForm>(state: &AppState, id: &RecordId) -> Result<DeleteDialog> {
    if let Ok(snapshot) = state.dashboard.current().await {
        if let Some(record) = T::collection(&snapshot).iter().find(|r| &r.id == id) {
            return Ok(DeleteDialog::open::<T>(id, &record.fields));
        }
    }
    match state.dashboard.get::<T::Fields>(id).await {
        Ok(record) => Ok(DeleteDialog::open::<T>(id, &record.fields)),
        Err(err @ Error::NotFound(_)) => Err(err),
        Err(err) => {
            warn!(kind = T::PATH, %id, error = %err, "Record name unavailable");
            Ok(DeleteDialog::unnamed::<T>(id))
        }
    }
}

fn render_delete(state: &AppState, dialog: &DeleteDialog, status: StatusCode) -> Response {
    match state.views.render_with("delete_confirm.html", dialog) {
        Ok(page) => (status, page).into_response(),
        Err(err) => err.into_response(),
    }
}
