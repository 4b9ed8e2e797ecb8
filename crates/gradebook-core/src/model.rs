//! Core data model types for gradebook.
//!
//! A [`Record`] is an ordered list of semesters, each holding an ordered list
//! of courses. Field order here is the field order of the exported document.

use serde::{Deserialize, Serialize};

/// A single course with its credit weight and grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name, the identity key within its semester.
    pub name: String,
    /// Credit weight (unitless).
    pub points: f64,
    /// Grade on a 0-100 scale.
    pub grade: f64,
    /// Excluded from aggregates when set.
    #[serde(default)]
    pub ignored: bool,
}

impl Course {
    /// Create a course that counts towards aggregates.
    pub fn new(name: impl Into<String>, points: f64, grade: f64) -> Self {
        Self {
            name: name.into(),
            points,
            grade,
            ignored: false,
        }
    }
}

/// A named, independently ignorable group of courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester name, unique within a record.
    pub name: String,
    /// When set, none of this semester's courses count.
    #[serde(default)]
    pub ignored: bool,
    /// Courses in insertion order.
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create an empty, counted semester.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignored: false,
            courses: Vec::new(),
        }
    }

    /// First course with the given name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    pub(crate) fn course_mut(&mut self, name: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.name == name)
    }
}

/// The whole academic record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Semesters in insertion order.
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Record {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Semester with the given name.
    pub fn semester(&self, name: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.name == name)
    }

    pub(crate) fn semester_mut(&mut self, name: &str) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.name == name)
    }

    /// Total number of courses across all semesters, ignored ones included.
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(|s| s.courses.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            semesters: vec![Semester {
                name: "Fall".into(),
                ignored: false,
                courses: vec![Course::new("Math", 4.0, 90.0), Course::new("Bio", 3.0, 80.0)],
            }],
        }
    }

    #[test]
    fn lookup_by_name() {
        let record = sample();
        assert!(record.semester("Fall").is_some());
        assert!(record.semester("Spring").is_none());
        let fall = record.semester("Fall").unwrap();
        assert_eq!(fall.course("Bio").unwrap().grade, 80.0);
        assert!(fall.course("CS").is_none());
    }

    #[test]
    fn course_lookup_returns_first_duplicate() {
        let mut record = sample();
        record.semesters[0].courses.push(Course::new("Math", 2.0, 50.0));
        let fall = record.semester("Fall").unwrap();
        assert_eq!(fall.course("Math").unwrap().points, 4.0);
    }

    #[test]
    fn course_count_includes_ignored() {
        let mut record = sample();
        record.semesters[0].courses[0].ignored = true;
        assert_eq!(record.course_count(), 2);
        assert!(!record.is_empty());
        assert!(Record::new().is_empty());
    }

    #[test]
    fn missing_flags_default_to_counted() {
        let json = r#"{"semesters":[{"name":"Fall","courses":[{"name":"Math","points":4,"grade":90}]}]}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(!record.semesters[0].ignored);
        assert!(!record.semesters[0].courses[0].ignored);
    }
}
