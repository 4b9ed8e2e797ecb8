//! The `gradebook validate` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::document;

use crate::session::Session;

pub async fn execute(record_path: &Path) -> Result<()> {
    let session = Session::open(record_path).await?;
    let record = session.store.record();

    println!(
        "Record: {} ({} semesters, {} courses)",
        record_path.display(),
        record.semesters.len(),
        record.course_count()
    );

    let warnings = document::validate_record(record);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.location(), w.message);
    }

    if warnings.is_empty() {
        println!("Record is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
