//! The `gradebook import` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use gradebook_core::document;

use crate::session::Session;

pub async fn execute(record_path: &Path, input: PathBuf) -> Result<()> {
    // An unknown extension declares no type, which is refused like a wrong one.
    let media_type = document::media_type_for_path(&input).unwrap_or_default();
    document::check_media_type(media_type)
        .with_context(|| format!("refusing to import {}", input.display()))?;

    let text = tokio::fs::read_to_string(&input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;

    // The current record is replaced wholesale, so it is never read: a
    // damaged working file can still be restored from a backup.
    let mut session = Session::replace(record_path);
    session
        .store
        .import(&text, Some(media_type))
        .with_context(|| format!("failed to import {}", input.display()))?;
    session.save().await?;

    for warning in document::validate_record(session.store.record()) {
        eprintln!("  [{}] WARNING: {}", warning.location(), warning.message);
    }

    let record = session.store.record();
    println!(
        "Imported {} semester(s), {} course(s) into {}",
        record.semesters.len(),
        record.course_count(),
        session.path().display()
    );
    Ok(())
}
