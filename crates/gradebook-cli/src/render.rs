//! Text rendering of a record and its aggregates.

use std::fmt::Write;

use comfy_table::{Cell, Table};

use gradebook_core::statistics::{Aggregate, RecordSummary};
use gradebook_core::Record;

/// Shown in place of an average when nothing counts.
pub const NO_AVERAGE: &str = "n/a";

/// Format `value` with `digits` significant digits (`85.714` -> `85.71`).
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", digits - 1, value);
    }
    // The exponent after rounding, so 99.996 counts as 1.000e2.
    let scientific = format!("{:.*e}", digits - 1, value);
    let magnitude = scientific
        .rsplit('e')
        .next()
        .and_then(|exp| exp.parse::<i64>().ok())
        .unwrap_or(0);
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}

pub fn format_average(aggregate: &Aggregate, digits: usize) -> String {
    aggregate
        .weighted_average()
        .map(|avg| format_significant(avg, digits))
        .unwrap_or_else(|| NO_AVERAGE.to_string())
}

/// One table per semester followed by the overall figures.
pub fn render_tables(record: &Record, summary: &RecordSummary, digits: usize) -> String {
    let mut out = String::new();

    if record.is_empty() {
        let _ = writeln!(out, "No courses yet. Add one with `gradebook add`.");
    }

    for (semester, totals) in record.semesters.iter().zip(&summary.semesters) {
        let title = if semester.ignored {
            format!("{} (ignored)", semester.name)
        } else {
            semester.name.clone()
        };
        let _ = writeln!(out, "{title}");

        let mut table = Table::new();
        table.set_header(vec!["Name", "Points", "Grade", ""]);
        for course in &semester.courses {
            table.add_row(vec![
                Cell::new(&course.name),
                Cell::new(course.points),
                Cell::new(course.grade),
                Cell::new(if course.ignored { "ignored" } else { "" }),
            ]);
        }
        table.add_row(vec![
            Cell::new("Total"),
            Cell::new(totals.aggregate.total_weight),
            Cell::new(format_average(&totals.aggregate, digits)),
            Cell::new(""),
        ]);
        let _ = writeln!(out, "{table}\n");
    }

    let mut overall = Table::new();
    overall.add_row(vec![
        Cell::new("Overall Average"),
        Cell::new(format_average(&summary.overall, digits)),
    ]);
    overall.add_row(vec![
        Cell::new("Overall Points"),
        Cell::new(summary.overall.total_weight),
    ]);
    let _ = writeln!(out, "{overall}");

    out
}

/// Markdown version of [`render_tables`].
pub fn render_markdown(record: &Record, summary: &RecordSummary, digits: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Grades");

    for (semester, totals) in record.semesters.iter().zip(&summary.semesters) {
        let _ = writeln!(out);
        if semester.ignored {
            let _ = writeln!(out, "## {} (ignored)", semester.name);
        } else {
            let _ = writeln!(out, "## {}", semester.name);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "| Name | Points | Grade |");
        let _ = writeln!(out, "|------|--------|-------|");
        for course in &semester.courses {
            if course.ignored {
                let _ = writeln!(
                    out,
                    "| ~~{}~~ | {} | {} |",
                    course.name, course.points, course.grade
                );
            } else {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} |",
                    course.name, course.points, course.grade
                );
            }
        }
        let _ = writeln!(
            out,
            "| **Total** | **{}** | **{}** |",
            totals.aggregate.total_weight,
            format_average(&totals.aggregate, digits)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Overall Average:** {}  ",
        format_average(&summary.overall, digits)
    );
    let _ = writeln!(out, "**Overall Points:** {}", summary.overall.total_weight);
    out
}
