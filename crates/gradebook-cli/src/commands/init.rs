//! The `gradebook init` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::document;
use gradebook_core::Record;

pub fn execute(record_path: &Path) -> Result<()> {
    // Create gradebook.toml
    if Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    // Create an empty working record
    if record_path.exists() {
        println!("{} already exists, skipping.", record_path.display());
    } else {
        if let Some(parent) = record_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(record_path, document::export(&Record::new())?)?;
        println!("Created {}", record_path.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook add --semester Fall --course Math --points 4 --grade 90");
    println!("  2. Run: gradebook show");
    println!("  3. Run: gradebook export --output backup.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Working record that every command reads and updates.
record_path = "grades.json"

# Significant digits for printed averages.
precision = 4

# File written by `gradebook export` without --output.
export_filename = "grades.json"
"#;
