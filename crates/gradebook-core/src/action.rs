//! Record mutations.
//!
//! Every change to a [`Record`] goes through [`transition`], which takes the
//! current record and one [`Action`] and produces either the next record or a
//! [`Rejection`]. The input record is never modified.

use crate::error::Rejection;
use crate::model::{Course, Record, Semester};

/// The four kinds of change a record accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a course, creating its semester on first use.
    AddCourse {
        semester: String,
        name: String,
        points: f64,
        grade: f64,
    },
    /// Replace the whole record, e.g. after an import.
    SetRecord(Record),
    /// Flip the `ignored` flag of a semester.
    ToggleSemesterIgnored { semester: String },
    /// Flip the `ignored` flag of the first course named `course` in `semester`.
    ToggleCourseIgnored { semester: String, course: String },
}

impl Action {
    pub fn add_course(
        semester: impl Into<String>,
        name: impl Into<String>,
        points: f64,
        grade: f64,
    ) -> Self {
        Action::AddCourse {
            semester: semester.into(),
            name: name.into(),
            points,
            grade,
        }
    }

    pub fn toggle_semester(semester: impl Into<String>) -> Self {
        Action::ToggleSemesterIgnored {
            semester: semester.into(),
        }
    }

    pub fn toggle_course(semester: impl Into<String>, course: impl Into<String>) -> Self {
        Action::ToggleCourseIgnored {
            semester: semester.into(),
            course: course.into(),
        }
    }

    /// Short label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddCourse { .. } => "add_course",
            Action::SetRecord(_) => "set_record",
            Action::ToggleSemesterIgnored { .. } => "toggle_semester_ignored",
            Action::ToggleCourseIgnored { .. } => "toggle_course_ignored",
        }
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The record that replaces the current one.
    Next(Record),
    /// The action was not applied; the current record stays as it is.
    Rejected(Rejection),
}

impl Transition {
    pub fn into_result(self) -> Result<Record, Rejection> {
        match self {
            Transition::Next(record) => Ok(record),
            Transition::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Apply `action` to `record`, returning the next record or why it was refused.
pub fn transition(record: &Record, action: Action) -> Transition {
    match action {
        Action::AddCourse {
            semester,
            name,
            points,
            grade,
        } => add_course(record, semester, name, points, grade),
        Action::SetRecord(next) => Transition::Next(next),
        Action::ToggleSemesterIgnored { semester } => {
            let mut next = record.clone();
            match next.semester_mut(&semester) {
                Some(s) => {
                    s.ignored = !s.ignored;
                    Transition::Next(next)
                }
                None => Transition::Rejected(Rejection::SemesterNotFound(semester)),
            }
        }
        Action::ToggleCourseIgnored { semester, course } => {
            let mut next = record.clone();
            let Some(s) = next.semester_mut(&semester) else {
                return Transition::Rejected(Rejection::SemesterNotFound(semester));
            };
            match s.course_mut(&course) {
                Some(c) => {
                    c.ignored = !c.ignored;
                    Transition::Next(next)
                }
                None => Transition::Rejected(Rejection::CourseNotFound { semester, course }),
            }
        }
    }
}

fn add_course(
    record: &Record,
    semester: String,
    name: String,
    points: f64,
    grade: f64,
) -> Transition {
    if semester.is_empty() {
        return Transition::Rejected(Rejection::EmptySemesterName);
    }
    if name.is_empty() {
        return Transition::Rejected(Rejection::EmptyCourseName);
    }
    // NaN cannot be written to the document, so it would break the round trip.
    if !points.is_finite() {
        return Transition::Rejected(Rejection::NonFiniteValue { field: "points" });
    }
    if !grade.is_finite() {
        return Transition::Rejected(Rejection::NonFiniteValue { field: "grade" });
    }

    let course = Course::new(name, points, grade);
    let mut next = record.clone();
    match next.semester_mut(&semester) {
        Some(existing) => existing.courses.push(course),
        None => {
            let mut created = Semester::new(semester);
            created.courses.push(course);
            next.semesters.push(created);
        }
    }
    Transition::Next(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(record: &Record, action: Action) -> Record {
        transition(record, action).into_result().unwrap()
    }

    fn fall_and_spring() -> Record {
        let mut record = Record::new();
        record = apply(&record, Action::add_course("Fall", "Math", 4.0, 90.0));
        record = apply(&record, Action::add_course("Fall", "Bio", 3.0, 80.0));
        apply(&record, Action::add_course("Spring", "CS", 5.0, 100.0))
    }

    #[test]
    fn add_course_creates_semester() {
        let record = apply(&Record::new(), Action::add_course("Fall", "Math", 4.0, 85.0));
        assert_eq!(record.semesters.len(), 1);
        let fall = &record.semesters[0];
        assert_eq!(fall.name, "Fall");
        assert!(!fall.ignored);
        assert_eq!(fall.courses, vec![Course::new("Math", 4.0, 85.0)]);
        assert!(!fall.courses[0].ignored);
    }

    #[test]
    fn add_course_appends_to_existing_semester_in_order() {
        let record = fall_and_spring();
        let names: Vec<_> = record.semesters.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Fall", "Spring"]);
        let courses: Vec<_> = record.semesters[0]
            .courses
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(courses, vec!["Math", "Bio"]);
    }

    #[test]
    fn add_course_keeps_duplicates() {
        let mut record = fall_and_spring();
        record = apply(&record, Action::add_course("Fall", "Math", 2.0, 70.0));
        assert_eq!(record.semesters[0].courses.len(), 3);
        assert_eq!(record.semesters.len(), 2);
    }

    #[test]
    fn add_course_with_empty_names_is_rejected() {
        let record = fall_and_spring();
        assert_eq!(
            transition(&record, Action::add_course("", "X", 1.0, 90.0)),
            Transition::Rejected(Rejection::EmptySemesterName)
        );
        assert_eq!(
            transition(&record, Action::add_course("S", "", 1.0, 90.0)),
            Transition::Rejected(Rejection::EmptyCourseName)
        );
    }

    #[test]
    fn add_course_with_nan_is_rejected() {
        let rejected = transition(&Record::new(), Action::add_course("Fall", "Math", f64::NAN, 90.0));
        assert_eq!(
            rejected,
            Transition::Rejected(Rejection::NonFiniteValue { field: "points" })
        );
        let rejected = transition(
            &Record::new(),
            Action::add_course("Fall", "Math", 4.0, f64::INFINITY),
        );
        assert_eq!(
            rejected,
            Transition::Rejected(Rejection::NonFiniteValue { field: "grade" })
        );
    }

    #[test]
    fn transition_does_not_touch_input() {
        let record = fall_and_spring();
        let before = record.clone();
        let _ = transition(&record, Action::toggle_semester("Fall"));
        let _ = transition(&record, Action::add_course("Fall", "Art", 1.0, 60.0));
        assert_eq!(record, before);
    }

    #[test]
    fn set_record_replaces_verbatim() {
        let replacement = fall_and_spring();
        let record = apply(&Record::new(), Action::SetRecord(replacement.clone()));
        assert_eq!(record, replacement);
    }

    #[test]
    fn toggle_semester_flips_flag() {
        let record = apply(&fall_and_spring(), Action::toggle_semester("Spring"));
        assert!(record.semester("Spring").unwrap().ignored);
        assert!(!record.semester("Fall").unwrap().ignored);
        let record = apply(&record, Action::toggle_semester("Spring"));
        assert!(!record.semester("Spring").unwrap().ignored);
    }

    #[test]
    fn toggle_missing_semester_is_not_found() {
        let outcome = transition(&fall_and_spring(), Action::toggle_semester("Summer"));
        assert_eq!(
            outcome,
            Transition::Rejected(Rejection::SemesterNotFound("Summer".into()))
        );
    }

    #[test]
    fn toggle_course_twice_restores_record() {
        let record = fall_and_spring();
        let once = apply(&record, Action::toggle_course("Fall", "Bio"));
        assert!(once.semester("Fall").unwrap().course("Bio").unwrap().ignored);
        assert!(!once.semester("Fall").unwrap().course("Math").unwrap().ignored);
        let twice = apply(&once, Action::toggle_course("Fall", "Bio"));
        assert_eq!(twice, record);
    }

    #[test]
    fn toggle_course_affects_first_duplicate_only() {
        let record = apply(&fall_and_spring(), Action::add_course("Fall", "Math", 2.0, 70.0));
        let record = apply(&record, Action::toggle_course("Fall", "Math"));
        let fall = record.semester("Fall").unwrap();
        assert!(fall.courses[0].ignored);
        assert!(!fall.courses[2].ignored);
    }

    #[test]
    fn toggle_missing_course_is_not_found() {
        let record = fall_and_spring();
        let outcome = transition(&record, Action::toggle_course("Fall", "CS"));
        assert_eq!(
            outcome,
            Transition::Rejected(Rejection::CourseNotFound {
                semester: "Fall".into(),
                course: "CS".into(),
            })
        );
        let outcome = transition(&record, Action::toggle_course("Winter", "CS"));
        assert_eq!(
            outcome,
            Transition::Rejected(Rejection::SemesterNotFound("Winter".into()))
        );
    }

    #[test]
    fn action_kinds() {
        assert_eq!(Action::toggle_semester("Fall").kind(), "toggle_semester_ignored");
        assert_eq!(Action::SetRecord(Record::new()).kind(), "set_record");
    }
}
