//! Field sets of courses, instructors and participants.

use serde::{Deserialize, Serialize};

use crate::record::{Collection, RecordFields};
use crate::wire::{CourseWire, InstructorWire, ParticipantWire};
use crate::{RecordId, ReferenceCodec};

/// Display name for a course without a name.
pub const UNNAMED_COURSE: &str = "Unbenannter Kurs";

/// A scheduled yoga course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Date or date-time string as stored, e.g. `2025-08-12T10:00`.
    pub schedule: Option<String>,
    pub location: Option<String>,
}

impl Course {
    /// The course name, or the unnamed placeholder.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED_COURSE,
        }
    }
}

impl RecordFields for Course {
    type Wire = CourseWire;

    const COLLECTION: Collection = Collection::Courses;

    fn from_wire(wire: CourseWire, _codec: &ReferenceCodec) -> Self {
        Self {
            name: wire.kurs_name,
            description: wire.kurs_beschreibung,
            schedule: wire.kurs_zeitplan,
            location: wire.kurs_ort,
        }
    }

    fn to_wire(&self, _codec: &ReferenceCodec) -> CourseWire {
        CourseWire {
            kurs_name: non_empty(&self.name),
            kurs_beschreibung: non_empty(&self.description),
            kurs_zeitplan: non_empty(&self.schedule),
            kurs_ort: non_empty(&self.location),
        }
    }
}

/// An instructor, optionally assigned to one course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Contact phone number.
    pub contact: Option<String>,
    pub assigned_course: Option<RecordId>,
}

impl Instructor {
    /// `"{first} {last}"` trimmed; `None` when both are empty.
    pub fn full_name(&self) -> Option<String> {
        let name = join_name(&self.first_name, &self.last_name);
        (!name.is_empty()).then_some(name)
    }
}

impl RecordFields for Instructor {
    type Wire = InstructorWire;

    const COLLECTION: Collection = Collection::Instructors;

    fn from_wire(wire: InstructorWire, codec: &ReferenceCodec) -> Self {
        Self {
            assigned_course: codec.decode(wire.zugewiesener_kurs.as_deref()),
            first_name: wire.kursleiter_vorname,
            last_name: wire.kursleiter_nachname,
            contact: wire.kursleiter_kontakt,
        }
    }

    fn to_wire(&self, codec: &ReferenceCodec) -> InstructorWire {
        InstructorWire {
            kursleiter_vorname: non_empty(&self.first_name),
            kursleiter_nachname: non_empty(&self.last_name),
            kursleiter_kontakt: non_empty(&self.contact),
            zugewiesener_kurs: self.assigned_course.as_ref().map(|id| codec.encode(id)),
        }
    }
}

/// A participant, enrolled in any number of courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub enrolled_courses: Vec<RecordId>,
}

impl Participant {
    /// `"{first} {last}"` trimmed; may be empty.
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

impl RecordFields for Participant {
    type Wire = ParticipantWire;

    const COLLECTION: Collection = Collection::Participants;

    fn from_wire(wire: ParticipantWire, codec: &ReferenceCodec) -> Self {
        Self {
            enrolled_courses: codec.decode_many(wire.angemeldete_kurse.as_deref()),
            first_name: wire.teilnehmer_vorname,
            last_name: wire.teilnehmer_nachname,
            email: wire.teilnehmer_email,
        }
    }

    fn to_wire(&self, codec: &ReferenceCodec) -> ParticipantWire {
        ParticipantWire {
            teilnehmer_vorname: non_empty(&self.first_name),
            teilnehmer_nachname: non_empty(&self.last_name),
            teilnehmer_email: non_empty(&self.email),
            angemeldete_kurse: codec.encode_many(&self.enrolled_courses),
        }
    }
}

fn join_name(first: &Option<String>, last: &Option<String>) -> String {
    format!(
        "{} {}",
        first.as_deref().unwrap_or(""),
        last.as_deref().unwrap_or("")
    )
    .trim()
    .to_string()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
