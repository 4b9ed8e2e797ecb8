//! Error types for record mutations and document import/export.
//!
//! A [`Rejection`] is not a failure of the program: it explains why an action
//! left the record unchanged. Callers can tell a silently rejected input apart
//! from a target that does not exist without string matching.

use thiserror::Error;

/// Why an action was not applied to the record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// AddCourse with an empty semester name.
    #[error("semester name is empty")]
    EmptySemesterName,

    /// AddCourse with an empty course name.
    #[error("course name is empty")]
    EmptyCourseName,

    /// AddCourse with a NaN or infinite points/grade value.
    #[error("{field} is not a finite number")]
    NonFiniteValue { field: &'static str },

    /// No semester with this name in the current record.
    #[error("semester not found: {0}")]
    SemesterNotFound(String),

    /// The semester exists but has no course with this name.
    #[error("course not found: {semester}/{course}")]
    CourseNotFound { semester: String, course: String },
}

impl Rejection {
    /// Returns `true` if the action targeted an entity absent from the record.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Rejection::SemesterNotFound(_) | Rejection::CourseNotFound { .. }
        )
    }
}

/// Errors from exporting or importing a record document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The declared media type is not the document format's media type.
    #[error("unsupported media type: expected {expected}, found {found}")]
    UnsupportedMediaType {
        expected: &'static str,
        found: String,
    },

    /// The text is not a well-formed record document.
    #[error("failed to parse record document")]
    Parse(#[source] serde_json::Error),

    /// The record could not be written as a document.
    #[error("failed to serialize record document")]
    Serialize(#[source] serde_json::Error),
}
