//! JSON record documents.
//!
//! Export writes the record as pretty JSON in exactly the shape of the data
//! model; import parses that shape back. Importing does not judge the content
//! of a well-formed document: use [`validate_record`] to look for suspicious
//! entries.

use std::path::Path;

use crate::error::DocumentError;
use crate::model::Record;

/// Media type of a record document.
pub const MEDIA_TYPE: &str = "application/json";

/// File name offered when exporting.
pub const EXPORT_FILENAME: &str = "grades.json";

/// Serialize a record as a pretty-printed JSON document.
pub fn export(record: &Record) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(record).map_err(DocumentError::Serialize)
}

/// Parse a record document.
pub fn import(text: &str) -> Result<Record, DocumentError> {
    serde_json::from_str(text).map_err(DocumentError::Parse)
}

/// Parse a record document whose media type was declared by the caller.
///
/// A declared type other than [`MEDIA_TYPE`] is refused before parsing.
/// `None` means the caller has no type information and skips the check.
pub fn import_with_media_type(
    text: &str,
    media_type: Option<&str>,
) -> Result<Record, DocumentError> {
    if let Some(declared) = media_type {
        check_media_type(declared)?;
    }
    import(text)
}

/// Accept `application/json`, ignoring case and parameters like `charset`.
pub fn check_media_type(declared: &str) -> Result<(), DocumentError> {
    let essence = declared.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case(MEDIA_TYPE) {
        Ok(())
    } else {
        Err(DocumentError::UnsupportedMediaType {
            expected: MEDIA_TYPE,
            found: declared.to_string(),
        })
    }
}

/// Media type implied by a file's extension, if it is a known one.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("json"))
        .map(|_| MEDIA_TYPE)
}

/// A warning from record validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    /// The semester the warning is about.
    pub semester: String,
    /// The course, if the warning is about a single course.
    pub course: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    /// `semester/course`, or just `semester` for semester-level warnings.
    pub fn location(&self) -> String {
        match &self.course {
            Some(course) => format!("{}/{course}", self.semester),
            None => self.semester.clone(),
        }
    }
}

/// Check a record for entries that would confuse lookups or aggregation.
pub fn validate_record(record: &Record) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen_semesters = std::collections::HashSet::new();

    for semester in &record.semesters {
        let warn = |course: Option<&str>, message: String| ValidationWarning {
            semester: semester.name.clone(),
            course: course.map(str::to_string),
            message,
        };

        if semester.name.is_empty() {
            warnings.push(warn(None, "semester name is empty".into()));
        }
        if !seen_semesters.insert(semester.name.as_str()) {
            warnings.push(warn(
                None,
                format!("duplicate semester name: {}", semester.name),
            ));
        }

        let mut seen_courses = std::collections::HashSet::new();
        for course in &semester.courses {
            let name = Some(course.name.as_str());
            if course.name.is_empty() {
                warnings.push(warn(name, "course name is empty".into()));
            }
            if !seen_courses.insert(course.name.as_str()) {
                warnings.push(warn(
                    name,
                    format!(
                        "duplicate course name: {} (toggles only reach the first)",
                        course.name
                    ),
                ));
            }
            if !course.points.is_finite() || !course.grade.is_finite() {
                warnings.push(warn(name, "points or grade is not a finite number".into()));
                continue;
            }
            if course.points <= 0.0 {
                warnings.push(warn(
                    name,
                    format!("points must be positive, got {}", course.points),
                ));
            }
            if !(0.0..=100.0).contains(&course.grade) {
                warnings.push(warn(
                    name,
                    format!("grade {} is outside 0-100", course.grade),
                ));
            }
        }
    }

    warnings
}
