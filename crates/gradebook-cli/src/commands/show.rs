//! The `gradebook show` command.

use std::path::Path;

use anyhow::Result;

use crate::render;
use crate::session::Session;

pub async fn execute(record_path: &Path, format: &str, precision: usize) -> Result<()> {
    let session = Session::open(record_path).await?;
    let record = session.store.record();
    let summary = session.store.summary();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "markdown" | "md" => {
            print!("{}", render::render_markdown(record, &summary, precision));
        }
        "table" | "text" => {
            print!("{}", render::render_tables(record, &summary, precision));
        }
        other => anyhow::bail!("unknown format: {other} (expected table, json, or markdown)"),
    }

    Ok(())
}
