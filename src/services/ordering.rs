//! Display ordering of the collections. All sorts are stable.

use studio_models::{Course, Instructor, Participant, Record};

/// Courses by schedule string, lexically. Missing schedules sort first.
pub fn sort_courses(courses: &mut [&Record<Course>]) {
    courses.sort_by(|a, b| {
        let a = a.fields.schedule.as_deref().unwrap_or("");
        let b = b.fields.schedule.as_deref().unwrap_or("");
        a.cmp(b)
    });
}

/// Instructors by last name, case-insensitive.
pub fn sort_instructors(instructors: &mut [&Record<Instructor>]) {
    instructors.sort_by_cached_key(|i| last_name_key(&i.fields.last_name));
}

/// Participants by last name, case-insensitive.
pub fn sort_participants(participants: &mut [&Record<Participant>]) {
    participants.sort_by_cached_key(|p| last_name_key(&p.fields.last_name));
}

fn last_name_key(last_name: &Option<String>) -> String {
    last_name.as_deref().unwrap_or("").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_models::RecordId;

    fn record<F>(id: &str, fields: F) -> Record<F> {
        Record {
            id: RecordId::new(id),
            created_at: None,
            updated_at: None,
            fields,
        }
    }

    fn course(id: &str, schedule: Option<&str>) -> Record<Course> {
        record(
            id,
            Course {
                schedule: schedule.map(String::from),
                ..Default::default()
            },
        )
    }

    fn participant(id: &str, last: Option<&str>) -> Record<Participant> {
        record(
            id,
            Participant {
                last_name: last.map(String::from),
                ..Default::default()
            },
        )
    }

    fn ids<F>(records: &[&Record<F>]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_courses_by_schedule_missing_first() {
        let all = vec![
            course("late", Some("2026-11-02T18:00")),
            course("none", None),
            course("early", Some("2026-10-20T10:00")),
            course("day-only", Some("2026-10-20")),
        ];
        let mut sorted: Vec<_> = all.iter().collect();
        sort_courses(&mut sorted);
        assert_eq!(ids(&sorted), vec!["none", "day-only", "early", "late"]);
    }

    #[test]
    fn test_participants_case_insensitive_and_stable() {
        let all = vec![
            participant("b1", Some("becker")),
            participant("a", Some("Arnold")),
            participant("b2", Some("Becker")),
            participant("none", None),
            participant("b3", Some("BECKER")),
        ];
        let mut sorted: Vec<_> = all.iter().collect();
        sort_participants(&mut sorted);
        assert_eq!(ids(&sorted), vec!["none", "a", "b1", "b2", "b3"]);
    }

    #[test]
    fn test_instructors_by_last_name() {
        let all = vec![
            record(
                "z",
                Instructor {
                    last_name: Some("Zeller".to_string()),
                    ..Default::default()
                },
            ),
            record(
                "m",
                Instructor {
                    last_name: Some("müller".to_string()),
                    ..Default::default()
                },
            ),
        ];
        let mut sorted: Vec<_> = all.iter().collect();
        sort_instructors(&mut sorted);
        assert_eq!(ids(&sorted), vec!["m", "z"]);
    }
}
