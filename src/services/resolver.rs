//! Cross-references between courses, instructors and participants.
//!
//! Builds three lookups from a snapshot:
//! - course id → course
//! - course id → instructor (later instructors win)
//! - course id → participants (input order, duplicates kept)

use std::collections::HashMap;

use studio_models::{Course, Instructor, Participant, Record, RecordId, PLACEHOLDER};

use crate::services::Snapshot;

pub struct CrossReferences<'a> {
    courses: HashMap<&'a RecordId, &'a Record<Course>>,
    instructors: HashMap<&'a RecordId, &'a Record<Instructor>>,
    participants: HashMap<&'a RecordId, Vec<&'a Record<Participant>>>,
}

impl<'a> CrossReferences<'a> {
    pub fn build(snapshot: &'a Snapshot) -> Self {
        let courses = snapshot
            .courses
            .iter()
            .map(|course| (&course.id, course))
            .collect();

        let mut instructors = HashMap::new();
        for instructor in &snapshot.instructors {
            if let Some(course_id) = &instructor.fields.assigned_course {
                instructors.insert(course_id, instructor);
            }
        }

        let mut participants: HashMap<&RecordId, Vec<&Record<Participant>>> = HashMap::new();
        for participant in &snapshot.participants {
            for course_id in &participant.fields.enrolled_courses {
                participants.entry(course_id).or_default().push(participant);
            }
        }

        Self {
            courses,
            instructors,
            participants,
        }
    }

    pub fn course(&self, id: &RecordId) -> Option<&'a Record<Course>> {
        self.courses.get(id).copied()
    }

    pub fn instructor(&self, course_id: &RecordId) -> Option<&'a Record<Instructor>> {
        self.instructors.get(course_id).copied()
    }

    /// Full name of the course's instructor; `None` without an instructor
    /// or when the instructor has no name.
    pub fn instructor_name(&self, course_id: &RecordId) -> Option<String> {
        self.instructor(course_id)
            .and_then(|instructor| instructor.fields.full_name())
    }

    pub fn participants(&self, course_id: &RecordId) -> &[&'a Record<Participant>] {
        self.participants
            .get(course_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn participant_count(&self, course_id: &RecordId) -> usize {
        self.participants(course_id).len()
    }

    pub fn participant_names(&self, course_id: &RecordId) -> Vec<String> {
        self.participants(course_id)
            .iter()
            .map(|participant| participant.fields.full_name())
            .collect()
    }

    /// Name of a referenced course, or `—` when the reference is absent,
    /// dangling or the course has no name.
    pub fn course_name(&self, reference: Option<&RecordId>) -> String {
        reference
            .and_then(|id| self.course(id))
            .and_then(|course| course.fields.name.clone())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Names of the participant's courses that resolve and carry a name,
    /// in reference order.
    pub fn participant_course_names(&self, participant: &Participant) -> Vec<String> {
        participant
            .enrolled_courses
            .iter()
            .filter_map(|id| self.course(id))
            .filter_map(|course| course.fields.name.clone())
            .collect()
    }
}
