//! Presentation layer.
//!
//! - Dashboard (derived page views of a snapshot)
//! - Dates (schedule parsing and German display formats)
//! - Dialog (create/edit/delete state machine)
//! - Forms (per-kind form values and validation)
//! - Notice (one-shot notifications carried across a redirect)
//!
//! Pages are rendered with Tera from templates compiled into the binary.

pub mod dashboard;
pub mod dates;
pub mod dialog;
pub mod forms;
pub mod notice;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

const TEMPLATES: [(&str, &str); 9] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("load_error.html", include_str!("../../templates/load_error.html")),
    ("course_detail.html", include_str!("../../templates/course_detail.html")),
    ("course_form.html", include_str!("../../templates/course_form.html")),
    ("instructor_form.html", include_str!("../../templates/instructor_form.html")),
    ("participant_form.html", include_str!("../../templates/participant_form.html")),
    ("delete_confirm.html", include_str!("../../templates/delete_confirm.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<Html<String>> {
        Ok(Html(self.tera.render(name, context)?))
    }

    /// Render with a serializable value as the whole context.
    pub fn render_with<S: Serialize>(&self, name: &str, value: &S) -> Result<Html<String>> {
        let context = Context::from_serialize(value)?;
        self.render(name, &context)
    }
}
