//! Derived views of a snapshot: the dashboard page and the course detail.

use chrono::NaiveDate;
use serde::Serialize;
use studio_models::{Course, Record, RecordId, PLACEHOLDER};

use super::dates::{format_long, format_short, format_time, is_today, is_today_or_future};
use crate::services::{ordering, CrossReferences, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Today,
    Upcoming,
    Past,
}

impl CourseStatus {
    pub fn of(schedule: Option<&str>, today: NaiveDate) -> Self {
        if is_today(schedule, today) {
            CourseStatus::Today
        } else if is_today_or_future(schedule, today) {
            CourseStatus::Upcoming
        } else {
            CourseStatus::Past
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub courses: usize,
    pub instructors: usize,
    pub participants: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseCard {
    pub id: String,
    pub name: String,
    /// `"{short}, {time} Uhr"`
    pub when: String,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub participant_count: usize,
    pub status: CourseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorRow {
    pub id: String,
    pub name: String,
    pub contact: Option<String>,
    /// Only set when the assigned course resolves to a name.
    pub course: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub stats: Stats,
    pub courses: Vec<CourseCard>,
    pub participants: Vec<ParticipantRow>,
    pub instructors: Vec<InstructorRow>,
}

impl DashboardView {
    pub fn build(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let xrefs = CrossReferences::build(snapshot);

        let mut courses: Vec<_> = snapshot.courses.iter().collect();
        ordering::sort_courses(&mut courses);
        let mut participants: Vec<_> = snapshot.participants.iter().collect();
        ordering::sort_participants(&mut participants);
        let mut instructors: Vec<_> = snapshot.instructors.iter().collect();
        ordering::sort_instructors(&mut instructors);

        let courses = courses
            .into_iter()
            .map(|course| course_card(course, &xrefs, today))
            .collect();

        let participants = participants
            .into_iter()
            .map(|p| ParticipantRow {
                id: p.id.to_string(),
                name: p.fields.full_name(),
                email: non_empty(&p.fields.email).unwrap_or_else(|| PLACEHOLDER.to_string()),
                courses: xrefs.participant_course_names(&p.fields),
            })
            .collect();

        let instructors = instructors
            .into_iter()
            .map(|i| {
                let course = xrefs.course_name(i.fields.assigned_course.as_ref());
                InstructorRow {
                    id: i.id.to_string(),
                    name: i.fields.full_name().unwrap_or_default(),
                    contact: non_empty(&i.fields.contact),
                    course: (course != PLACEHOLDER).then_some(course),
                }
            })
            .collect();

        Self {
            stats: Stats {
                courses: snapshot.courses.len(),
                instructors: snapshot.instructors.len(),
                participants: snapshot.participants.len(),
            },
            courses,
            participants,
            instructors,
        }
    }
}

fn course_card(course: &Record<Course>, xrefs: &CrossReferences<'_>, today: NaiveDate) -> CourseCard {
    let schedule = course.fields.schedule.as_deref();
    CourseCard {
        id: course.id.to_string(),
        name: course.fields.display_name().to_string(),
        when: format!("{}, {} Uhr", format_short(schedule), format_time(schedule)),
        location: non_empty(&course.fields.location),
        instructor: xrefs.instructor_name(&course.id),
        participant_count: xrefs.participant_count(&course.id),
        status: CourseStatus::of(schedule, today),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(String::from)
}

// ============================================================================
// Course detail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub when: String,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub participant_count: usize,
    pub participants: Vec<String>,
}

impl CourseDetail {
    /// `None` when the snapshot has no such course.
    pub fn build(snapshot: &Snapshot, id: &RecordId) -> Option<Self> {
        let xrefs = CrossReferences::build(snapshot);
        let course = xrefs.course(id)?;
        Some(Self {
            id: course.id.to_string(),
            name: course.fields.name.clone().unwrap_or_else(|| "Kurs".to_string()),
            description: non_empty(&course.fields.description),
            when: format_long(course.fields.schedule.as_deref()),
            location: non_empty(&course.fields.location),
            instructor: xrefs.instructor_name(id),
            participant_count: xrefs.participant_count(id),
            participants: xrefs.participant_names(id),
        })
    }
}
