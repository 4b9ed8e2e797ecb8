//! The record store: owner of the live record.
//!
//! The store is the only place the live [`Record`] is replaced. An action or
//! import either swaps in a complete new record or leaves the old one alone.

use crate::action::{transition, Action, Transition};
use crate::document;
use crate::error::{DocumentError, Rejection};
use crate::model::Record;
use crate::statistics::{self, Aggregate, RecordSummary};

/// Holds exactly one live record.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    record: Record,
}

impl RecordStore {
    /// A store holding an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: Record) -> Self {
        Self { record }
    }

    /// The current record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    /// Apply an action. On rejection the current record is kept.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Rejection> {
        let kind = action.kind();
        match transition(&self.record, action) {
            Transition::Next(next) => {
                self.record = next;
                tracing::debug!(
                    action = kind,
                    semesters = self.record.semesters.len(),
                    "record updated"
                );
                Ok(())
            }
            Transition::Rejected(rejection) => {
                if rejection.is_not_found() {
                    tracing::warn!(action = kind, "{rejection}, record unchanged");
                } else {
                    tracing::debug!(action = kind, "ignoring action: {rejection}");
                }
                Err(rejection)
            }
        }
    }

    /// Parse a document and make it the live record.
    ///
    /// On any error the previous record stays authoritative.
    pub fn import(&mut self, text: &str, media_type: Option<&str>) -> Result<(), DocumentError> {
        let record = match document::import_with_media_type(text, media_type) {
            Ok(record) => record,
            Err(e) => {
                match std::error::Error::source(&e) {
                    Some(cause) => {
                        tracing::warn!("import failed, keeping current record: {e}: {cause}")
                    }
                    None => tracing::warn!("import failed, keeping current record: {e}"),
                }
                return Err(e);
            }
        };
        for warning in document::validate_record(&record) {
            tracing::debug!(semester = %warning.semester, "imported record: {}", warning.message);
        }
        self.record = record;
        tracing::debug!(
            action = "set_record",
            semesters = self.record.semesters.len(),
            "record imported"
        );
        Ok(())
    }

    /// The live record as a document.
    pub fn export(&self) -> Result<String, DocumentError> {
        document::export(&self.record)
    }

    pub fn aggregate(&self) -> Aggregate {
        statistics::aggregate(&self.record)
    }

    pub fn summary(&self) -> RecordSummary {
        statistics::summarize(&self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_courses() -> RecordStore {
        let mut store = RecordStore::new();
        store.dispatch(Action::add_course("Fall", "Math", 4.0, 90.0)).unwrap();
        store.dispatch(Action::add_course("Fall", "Bio", 3.0, 80.0)).unwrap();
        store.dispatch(Action::add_course("Spring", "CS", 5.0, 100.0)).unwrap();
        store
    }

    #[test]
    fn starts_empty() {
        let store = RecordStore::new();
        assert!(store.record().is_empty());
        assert!(store.aggregate().weighted_average().is_none());
    }

    #[test]
    fn dispatch_replaces_record() {
        let mut store = store_with_courses();
        assert_eq!(store.record().course_count(), 3);
        store.dispatch(Action::toggle_semester("Spring")).unwrap();
        let agg = store.aggregate();
        assert_eq!(agg.total_weight, 7.0);
        assert!((agg.weighted_average().unwrap() - 85.714).abs() < 0.001);
    }

    #[test]
    fn rejected_action_keeps_record() {
        let mut store = store_with_courses();
        let before = store.record().clone();

        let err = store.dispatch(Action::add_course("", "X", 1.0, 90.0)).unwrap_err();
        assert_eq!(err, Rejection::EmptySemesterName);
        let err = store.dispatch(Action::toggle_course("Fall", "Art")).unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(store.record(), &before);
    }

    #[test]
    fn import_replaces_record() {
        let source = store_with_courses();
        let text = source.export().unwrap();

        let mut store = RecordStore::new();
        store.import(&text, Some(document::MEDIA_TYPE)).unwrap();
        assert_eq!(store.record(), source.record());
    }

    #[test]
    fn import_over_existing_record_replaces_it() {
        let mut store = store_with_courses();
        let mut replacement = RecordStore::new();
        replacement
            .dispatch(Action::add_course("Autumn", "Art", 2.0, 77.0))
            .unwrap();
        let text = replacement.export().unwrap();

        store.import(&text, None).unwrap();
        assert_eq!(store.record(), replacement.record());
        assert_eq!(store.record().course_count(), 1);
    }

    #[test]
    fn failed_import_keeps_record() {
        let mut store = store_with_courses();
        let before = store.record().clone();

        let err = store.import("{ broken", Some(document::MEDIA_TYPE)).unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));

        let valid = RecordStore::new().export().unwrap();
        let err = store.import(&valid, Some("text/csv")).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedMediaType { .. }));

        assert_eq!(store.record(), &before);
    }

    #[test]
    fn summary_follows_record_order() {
        let store = store_with_courses();
        let summary = store.summary();
        let names: Vec<_> = summary.semesters.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Fall", "Spring"]);
        assert_eq!(summary.overall.total_weight, 12.0);
    }
}
