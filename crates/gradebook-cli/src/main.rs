//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod render;
mod session;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Weighted grade averages over an academic record"
)]
struct Cli {
    /// Working record file (overrides the config)
    #[arg(long, global = true)]
    record: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a course, creating its semester if needed
    Add {
        /// Semester name
        #[arg(long)]
        semester: String,

        /// Course name
        #[arg(long)]
        course: String,

        /// Credit points (weight)
        #[arg(long, allow_negative_numbers = true)]
        points: f64,

        /// Grade, 0-100
        #[arg(long, allow_negative_numbers = true)]
        grade: f64,
    },

    /// Toggle whether a semester counts towards the overall average
    IgnoreSemester {
        /// Semester name
        #[arg(long)]
        semester: String,
    },

    /// Toggle whether a course counts towards the averages
    IgnoreCourse {
        /// Semester name
        #[arg(long)]
        semester: String,

        /// Course name
        #[arg(long)]
        course: String,
    },

    /// Show courses, semester totals, and the overall average
    Show {
        /// Output format: table, json, markdown
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Write the record as a JSON document
    Export {
        /// Output file (default: export_filename from the config)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Replace the record with a JSON document
    Import {
        /// JSON document to import
        #[arg(long)]
        input: PathBuf,
    },

    /// Check the record for duplicates and suspicious values
    Validate,

    /// Create a starter config and an empty record
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;
    let record_path = cli.record.unwrap_or_else(|| config.record_path.clone());

    match cli.command {
        Commands::Add {
            semester,
            course,
            points,
            grade,
        } => commands::add::execute(&record_path, semester, course, points, grade).await,
        Commands::IgnoreSemester { semester } => {
            commands::ignore::semester(&record_path, semester).await
        }
        Commands::IgnoreCourse { semester, course } => {
            commands::ignore::course(&record_path, semester, course).await
        }
        Commands::Show { format } => {
            commands::show::execute(&record_path, &format, config.precision).await
        }
        Commands::Export { output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.export_filename));
            commands::export::execute(&record_path, output).await
        }
        Commands::Import { input } => commands::import::execute(&record_path, input).await,
        Commands::Validate => commands::validate::execute(&record_path).await,
        Commands::Init => commands::init::execute(&record_path),
    }
}
