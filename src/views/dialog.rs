//! Create/edit/delete dialogs.
//!
//! A dialog is opened by a GET (create or edit), submitted by a POST and
//! either closes with a success notice or stays open with an error notice
//! and the entered values. Navigating away discards the edits.

use chrono::NaiveDate;
use serde::Serialize;
use studio_models::{Course, Record, RecordId};

use super::forms::{EntityForm, FieldErrors};
use super::notice::Notice;

pub const DELETE_FAILED: &str = "Eintrag konnte nicht gelöscht werden.";

/// Delete confirmation name when the record could not be read.
pub const UNNAMED_RECORD: &str = "Eintrag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogPhase {
    Open,
    Submitting,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Dialog<T: EntityForm> {
    pub mode: DialogMode,
    pub phase: DialogPhase,
    pub form: T,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
}

impl<T: EntityForm> Dialog<T> {
    pub fn create(today: NaiveDate) -> Self {
        Self::open(DialogMode::Create, T::blank(today))
    }

    pub fn edit(id: RecordId, fields: &T::Fields) -> Self {
        Self::open(DialogMode::Edit(id), T::from_fields(fields))
    }

    fn open(mode: DialogMode, form: T) -> Self {
        Self {
            mode,
            phase: DialogPhase::Open,
            form,
            errors: FieldErrors::new(),
            notice: None,
        }
    }

    /// Enter the submitting phase with the posted values.
    ///
    /// Validation failures keep the dialog open with per-field errors; the
    /// caller must not contact the store in that case.
    pub fn submit(mode: DialogMode, form: T) -> Self {
        let errors = form.validate();
        let phase = if errors.is_empty() {
            DialogPhase::Submitting
        } else {
            DialogPhase::Open
        };
        Self {
            mode,
            phase,
            form,
            errors,
            notice: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    /// The store rejected the submission: stay open with an error notice.
    pub fn fail(mut self) -> Self {
        let message = match self.mode {
            DialogMode::Create => T::CREATE_FAILED,
            DialogMode::Edit(_) => T::UPDATE_FAILED,
        };
        self.phase = DialogPhase::Failed;
        self.notice = Some(Notice::error(message));
        self
    }

    /// Notice shown on the dashboard after a successful submission.
    pub fn succeed(&self) -> Notice {
        match self.mode {
            DialogMode::Create => Notice::success(T::CREATED),
            DialogMode::Edit(_) => Notice::success(T::UPDATED),
        }
    }

    pub fn record_id(&self) -> Option<&RecordId> {
        match &self.mode {
            DialogMode::Create => None,
            DialogMode::Edit(id) => Some(id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Create => T::TITLE_CREATE,
            DialogMode::Edit(_) => T::TITLE_EDIT,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            DialogMode::Create => T::SUBMIT_CREATE,
            DialogMode::Edit(_) => "Speichern",
        }
    }

    pub fn action(&self) -> String {
        match &self.mode {
            DialogMode::Create => format!("/{}", T::PATH),
            DialogMode::Edit(id) => format!("/{}/{}", T::PATH, id),
        }
    }

    /// Template context: dialog texts, entered values, errors and the
    /// course options with the current selection marked.
    pub fn view<'a>(&'a self, courses: &[Record<Course>]) -> DialogView<'a, T> {
        let selected = self.form.selected_courses();
        let courses = courses
            .iter()
            .map(|course| CourseOption {
                id: course.id.to_string(),
                name: course.fields.display_name().to_string(),
                selected: selected.contains(&course.id.as_str()),
            })
            .collect();

        DialogView {
            title: self.title(),
            action: self.action(),
            submit_label: self.submit_label(),
            phase: self.phase,
            form: &self.form,
            errors: &self.errors,
            notice: self.notice.as_ref(),
            courses,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DialogView<'a, T: Serialize> {
    pub title: &'static str,
    pub action: String,
    pub submit_label: &'static str,
    pub phase: DialogPhase,
    pub form: &'a T,
    pub errors: &'a FieldErrors,
    pub notice: Option<&'a Notice>,
    pub courses: Vec<CourseOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

// ============================================================================
// Delete confirmation
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DeleteDialog {
    pub name: String,
    pub action: String,
    pub notice: Option<Notice>,
}

impl DeleteDialog {
    pub fn open<T: EntityForm>(id: &RecordId, fields: &T::Fields) -> Self {
        Self {
            name: T::record_name(fields),
            action: format!("/{}/{}/delete", T::PATH, id),
            notice: None,
        }
    }

    /// A confirmation for a record whose name could not be read.
    pub fn unnamed<T: EntityForm>(id: &RecordId) -> Self {
        Self {
            name: UNNAMED_RECORD.to_string(),
            action: format!("/{}/{}/delete", T::PATH, id),
            notice: None,
        }
    }

    pub fn succeed(&self) -> Notice {
        Notice::success(format!("\"{}\" wurde gelöscht.", self.name))
    }

    pub fn fail(mut self) -> Self {
        self.notice = Some(Notice::error(DELETE_FAILED));
        self
    }
}
