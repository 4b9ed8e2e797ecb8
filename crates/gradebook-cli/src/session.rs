//! The working record file behind each command.
//!
//! A session reads the working record into a [`RecordStore`], lets a command
//! dispatch actions against it, and writes it back only if it changed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use gradebook_core::{Record, RecordStore};

pub struct Session {
    path: PathBuf,
    /// What is on disk, or `None` when the file was never read.
    loaded: Option<Record>,
    pub store: RecordStore,
}

impl Session {
    /// Open the working record. A missing file is an empty record.
    pub async fn open(path: &Path) -> Result<Self> {
        let mut store = RecordStore::new();
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read record: {}", path.display()))?;
            store
                .import(&text, None)
                .with_context(|| format!("failed to load record: {}", path.display()))?;
        } else {
            tracing::debug!("no record at {}, starting empty", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            loaded: Some(store.record().clone()),
            store,
        })
    }

    /// Start from an empty record without reading the file at `path`.
    ///
    /// The file is overwritten by the next [`Session::save`], whatever it held.
    pub fn replace(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            loaded: None,
            store: RecordStore::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.loaded.as_ref() != Some(self.store.record())
    }

    /// Write the record back if any action changed it.
    pub async fn save(&mut self) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        write_document(&self.path, &self.store.export()?).await?;
        self.loaded = Some(self.store.record().clone());
        Ok(true)
    }
}

/// Write a document, creating parent directories as needed.
pub async fn write_document(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, text)
        .await
        .with_context(|| format!("failed to write record to {}", path.display()))?;
    Ok(())
}
