//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use gradebook_core::document::EXPORT_FILENAME;

/// Top-level gradebook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Working record file that commands read and update.
    #[serde(default = "default_record_path")]
    pub record_path: PathBuf,
    /// Significant digits used when printing averages.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// File name written by `export` when no output path is given.
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

fn default_record_path() -> PathBuf {
    PathBuf::from(EXPORT_FILENAME)
}
fn default_precision() -> usize {
    4
}
fn default_export_filename() -> String {
    EXPORT_FILENAME.to_string()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            record_path: default_record_path(),
            precision: default_precision(),
            export_filename: default_export_filename(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_RECORD` overrides `record_path`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<GradebookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => GradebookConfig::default(),
    };

    if let Ok(record) = std::env::var("GRADEBOOK_RECORD") {
        config.record_path = PathBuf::from(record);
    }

    config.record_path = PathBuf::from(resolve_env_vars(&config.record_path.to_string_lossy()));
    config.export_filename = resolve_env_vars(&config.export_filename);

    if config.precision == 0 {
        anyhow::bail!("precision must be at least 1");
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
