//! The `gradebook add` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::Action;

use crate::session::Session;

pub async fn execute(
    record_path: &Path,
    semester: String,
    course: String,
    points: f64,
    grade: f64,
) -> Result<()> {
    let mut session = Session::open(record_path).await?;
    let label = format!("{semester}/{course}");

    match session
        .store
        .dispatch(Action::add_course(semester, course, points, grade))
    {
        Ok(()) => {
            session.save().await?;
            println!("Added {label} ({points} points, grade {grade})");
        }
        // Empty names are refused quietly; the record stays as it was.
        Err(rejection) => eprintln!("Nothing added: {rejection}"),
    }

    Ok(())
}
