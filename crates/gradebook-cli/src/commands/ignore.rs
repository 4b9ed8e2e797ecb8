//! The `gradebook ignore-semester` and `gradebook ignore-course` commands.
//!
//! Both toggle: running the same command twice restores the previous state.

use std::path::Path;

use anyhow::Result;

use gradebook_core::Action;

use crate::session::Session;

pub async fn semester(record_path: &Path, semester: String) -> Result<()> {
    let mut session = Session::open(record_path).await?;
    session
        .store
        .dispatch(Action::toggle_semester(semester.clone()))?;
    session.save().await?;

    let ignored = session
        .store
        .record()
        .semester(&semester)
        .is_some_and(|s| s.ignored);
    println!("{}", status_line(&semester, ignored));
    Ok(())
}

pub async fn course(record_path: &Path, semester: String, course: String) -> Result<()> {
    let mut session = Session::open(record_path).await?;
    session
        .store
        .dispatch(Action::toggle_course(semester.clone(), course.clone()))?;
    session.save().await?;

    let ignored = session
        .store
        .record()
        .semester(&semester)
        .and_then(|s| s.course(&course))
        .is_some_and(|c| c.ignored);
    println!("{}", status_line(&format!("{semester}/{course}"), ignored));
    Ok(())
}

fn status_line(target: &str, ignored: bool) -> String {
    if ignored {
        format!("{target} is now ignored")
    } else {
        format!("{target} counts again")
    }
}
