//! The `gradebook export` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::session::{write_document, Session};

pub async fn execute(record_path: &Path, output: PathBuf) -> Result<()> {
    let session = Session::open(record_path).await?;
    let text = session.store.export()?;
    write_document(&output, &text).await?;

    let record = session.store.record();
    println!(
        "Exported {} semester(s), {} course(s) to {}",
        record.semesters.len(),
        record.course_count(),
        output.display()
    );
    Ok(())
}
