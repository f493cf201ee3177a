//! Create/edit forms of the three record kinds.
//!
//! Each form holds the raw submitted strings, validates required fields and
//! converts into the typed field set sent to the record store. Empty
//! optional inputs become absent fields.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use studio_models::{Course, Instructor, Participant, Record, RecordFields, RecordId};

use super::dates::{parse_schedule, tomorrow_default};
use crate::services::Snapshot;

/// Validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Behaviour shared by the three forms.
pub trait EntityForm: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Fields: RecordFields;

    /// Route segment, e.g. `courses`.
    const PATH: &'static str;
    const TEMPLATE: &'static str;
    const TITLE_CREATE: &'static str;
    const TITLE_EDIT: &'static str;
    const SUBMIT_CREATE: &'static str;
    const CREATED: &'static str;
    const UPDATED: &'static str;
    const CREATE_FAILED: &'static str;
    const UPDATE_FAILED: &'static str = "Fehler beim Speichern.";

    /// Initial values of a create dialog.
    fn blank(today: NaiveDate) -> Self;

    /// Initial values of an edit dialog.
    fn from_fields(fields: &Self::Fields) -> Self;

    fn validate(&self) -> FieldErrors;

    fn to_fields(&self) -> Self::Fields;

    /// The records of this kind in a snapshot.
    fn collection(snapshot: &Snapshot) -> &[Record<Self::Fields>];

    /// Name shown in the delete confirmation and its notice.
    fn record_name(fields: &Self::Fields) -> String;

    /// Course ids currently selected in the form.
    fn selected_courses(&self) -> Vec<&str> {
        Vec::new()
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn required(errors: &mut FieldErrors, field: &'static str, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

// ============================================================================
// Course
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub location: String,
}

impl EntityForm for CourseForm {
    type Fields = Course;

    const PATH: &'static str = "courses";
    const TEMPLATE: &'static str = "course_form.html";
    const TITLE_CREATE: &'static str = "Neuen Kurs erstellen";
    const TITLE_EDIT: &'static str = "Kurs bearbeiten";
    const SUBMIT_CREATE: &'static str = "Erstellen";
    const CREATED: &'static str = "Neuer Kurs wurde erstellt.";
    const UPDATED: &'static str = "Kurs wurde aktualisiert.";
    const CREATE_FAILED: &'static str = "Fehler beim Erstellen.";

    fn blank(today: NaiveDate) -> Self {
        Self {
            schedule: tomorrow_default(today),
            ..Default::default()
        }
    }

    fn from_fields(fields: &Course) -> Self {
        Self {
            name: fields.name.clone().unwrap_or_default(),
            description: fields.description.clone().unwrap_or_default(),
            schedule: fields.schedule.clone().unwrap_or_default(),
            location: fields.location.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "name", &self.name, "Kursname ist erforderlich.");
        required(&mut errors, "schedule", &self.schedule, "Zeitplan ist erforderlich.");
        if !errors.contains_key("schedule") && parse_schedule(&self.schedule).is_none() {
            errors.insert("schedule", "Ungültiges Datum.");
        }
        errors
    }

    fn to_fields(&self) -> Course {
        Course {
            name: optional(&self.name),
            description: optional(&self.description),
            schedule: optional(&self.schedule),
            location: optional(&self.location),
        }
    }

    fn collection(snapshot: &Snapshot) -> &[Record<Course>] {
        &snapshot.courses
    }

    fn record_name(fields: &Course) -> String {
        fields.name.clone().unwrap_or_else(|| "Kurs".to_string())
    }
}

// ============================================================================
// Instructor
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub contact: String,
    /// Course id, empty for none.
    #[serde(default)]
    pub assigned_course: String,
}

impl EntityForm for InstructorForm {
    type Fields = Instructor;

    const PATH: &'static str = "instructors";
    const TEMPLATE: &'static str = "instructor_form.html";
    const TITLE_CREATE: &'static str = "Kursleiter hinzufügen";
    const TITLE_EDIT: &'static str = "Kursleiter bearbeiten";
    const SUBMIT_CREATE: &'static str = "Hinzufügen";
    const CREATED: &'static str = "Kursleiter wurde hinzugefügt.";
    const UPDATED: &'static str = "Kursleiter wurde aktualisiert.";
    const CREATE_FAILED: &'static str = "Fehler beim Erstellen.";

    fn blank(_today: NaiveDate) -> Self {
        Self::default()
    }

    fn from_fields(fields: &Instructor) -> Self {
        Self {
            first_name: fields.first_name.clone().unwrap_or_default(),
            last_name: fields.last_name.clone().unwrap_or_default(),
            contact: fields.contact.clone().unwrap_or_default(),
            assigned_course: fields
                .assigned_course
                .as_ref()
                .map(RecordId::to_string)
                .unwrap_or_default(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "first_name", &self.first_name, "Vorname ist erforderlich.");
        required(&mut errors, "last_name", &self.last_name, "Nachname ist erforderlich.");
        errors
    }

    fn to_fields(&self) -> Instructor {
        Instructor {
            first_name: optional(&self.first_name),
            last_name: optional(&self.last_name),
            contact: optional(&self.contact),
            assigned_course: RecordId::parse(&self.assigned_course),
        }
    }

    fn collection(snapshot: &Snapshot) -> &[Record<Instructor>] {
        &snapshot.instructors
    }

    fn record_name(fields: &Instructor) -> String {
        fields.full_name().unwrap_or_default()
    }

    fn selected_courses(&self) -> Vec<&str> {
        if self.assigned_course.is_empty() {
            Vec::new()
        } else {
            vec![self.assigned_course.as_str()]
        }
    }
}

// ============================================================================
// Participant
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Course ids; one form value per selected option.
    #[serde(default)]
    pub enrolled_courses: Vec<String>,
}

impl EntityForm for ParticipantForm {
    type Fields = Participant;

    const PATH: &'static str = "participants";
    const TEMPLATE: &'static str = "participant_form.html";
    const TITLE_CREATE: &'static str = "Teilnehmer anmelden";
    const TITLE_EDIT: &'static str = "Teilnehmer bearbeiten";
    const SUBMIT_CREATE: &'static str = "Anmelden";
    const CREATED: &'static str = "Teilnehmer wurde angemeldet.";
    const UPDATED: &'static str = "Teilnehmer wurde aktualisiert.";
    const CREATE_FAILED: &'static str = "Fehler beim Anmelden.";

    fn blank(_today: NaiveDate) -> Self {
        Self::default()
    }

    fn from_fields(fields: &Participant) -> Self {
        Self {
            first_name: fields.first_name.clone().unwrap_or_default(),
            last_name: fields.last_name.clone().unwrap_or_default(),
            email: fields.email.clone().unwrap_or_default(),
            enrolled_courses: fields
                .enrolled_courses
                .iter()
                .map(RecordId::to_string)
                .collect(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "first_name", &self.first_name, "Vorname ist erforderlich.");
        required(&mut errors, "last_name", &self.last_name, "Nachname ist erforderlich.");
        if !self.email.is_empty() && !looks_like_email(&self.email) {
            errors.insert("email", "Ungültige E-Mail-Adresse.");
        }
        errors
    }

    fn to_fields(&self) -> Participant {
        Participant {
            first_name: optional(&self.first_name),
            last_name: optional(&self.last_name),
            email: optional(&self.email),
            enrolled_courses: self
                .enrolled_courses
                .iter()
                .filter_map(|id| RecordId::parse(id))
                .collect(),
        }
    }

    fn collection(snapshot: &Snapshot) -> &[Record<Participant>] {
        &snapshot.participants
    }

    fn record_name(fields: &Participant) -> String {
        fields.full_name()
    }

    fn selected_courses(&self) -> Vec<&str> {
        self.enrolled_courses.iter().map(String::as_str).collect()
    }
}
