//! Wire format of the record store.
//!
//! Field names are the store's own. Every field is an optional string;
//! absent values are left out of request bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kurs_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kurs_beschreibung: Option<String>,
    /// `YYYY-MM-DD` or an ISO date-time string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kurs_zeitplan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kurs_ort: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructorWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kursleiter_vorname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kursleiter_nachname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kursleiter_kontakt: Option<String>,
    /// URL of one course record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zugewiesener_kurs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teilnehmer_vorname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teilnehmer_nachname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teilnehmer_email: Option<String>,
    /// One course URL or a comma-separated list of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angemeldete_kurse: Option<String>,
}

/// Record body as returned by the store.
///
/// In list responses the identifier is the object key, so `id` is
/// optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordBody<W> {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "createdat")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedat")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub fields: W,
}

/// Request body for create and update calls.
#[derive(Debug, Serialize)]
pub struct FieldsEnvelope<'a, W> {
    pub fields: &'a W,
}
