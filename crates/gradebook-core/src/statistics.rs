//! Weighted-average aggregation over a record.
//!
//! A course counts when neither it nor its semester is ignored. Each counted
//! course adds `points` to the total weight and `grade * points` to the
//! weighted sum.

use serde::{Deserialize, Serialize};

use crate::model::{Course, Record};

/// Running totals over a set of counted courses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Sum of points.
    pub total_weight: f64,
    /// Sum of `grade * points`.
    pub weighted_sum: f64,
    /// Number of courses that contributed.
    pub course_count: usize,
}

impl Aggregate {
    fn add(&mut self, course: &Course) {
        self.total_weight += course.points;
        self.weighted_sum += course.grade * course.points;
        self.course_count += 1;
    }

    /// `weighted_sum / total_weight`, or `None` when the total weight is zero.
    pub fn weighted_average(&self) -> Option<f64> {
        if self.total_weight == 0.0 {
            None
        } else {
            Some(self.weighted_sum / self.total_weight)
        }
    }
}

/// Totals for one semester, computed over its own unignored courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSummary {
    pub name: String,
    /// Whether the semester is excluded from the overall aggregate.
    pub ignored: bool,
    pub aggregate: Aggregate,
}

/// Overall totals plus one summary per semester, in record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub overall: Aggregate,
    pub semesters: Vec<SemesterSummary>,
}

fn counted_courses<'a>(courses: &'a [Course]) -> impl Iterator<Item = &'a Course> + 'a {
    courses.iter().filter(|c| !c.ignored)
}

/// Aggregate over every counted course in the record.
pub fn aggregate(record: &Record) -> Aggregate {
    let mut total = Aggregate::default();
    for semester in record.semesters.iter().filter(|s| !s.ignored) {
        for course in counted_courses(&semester.courses) {
            total.add(course);
        }
    }
    total
}

/// Overall aggregate plus per-semester aggregates.
///
/// A semester's own totals skip its ignored courses but not the semester's
/// own flag, so an ignored semester still reports what it would contribute.
pub fn summarize(record: &Record) -> RecordSummary {
    let semesters = record
        .semesters
        .iter()
        .map(|semester| {
            let mut aggregate = Aggregate::default();
            for course in counted_courses(&semester.courses) {
                aggregate.add(course);
            }
            SemesterSummary {
                name: semester.name.clone(),
                ignored: semester.ignored,
                aggregate,
            }
        })
        .collect();

    RecordSummary {
        overall: aggregate(record),
        semesters,
    }
}
