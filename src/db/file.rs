// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON file backend.
//!
//! All keys live in one JSON object on disk. Every write rewrites the file
//! through a sibling temp file and a rename, so a crash mid-write leaves the
//! previous contents in place.

use crate::config::Config;
use crate::db::DurableBackend;
use crate::error::AppError;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Use `path` as the backing file. It is created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backend over the configured data file.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> anyhow::Result<Entries> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn write_entries(&self, entries: &Entries) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(entries).context("Failed to encode entries")?;
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

fn storage_error(err: anyhow::Error) -> AppError {
    AppError::Storage(format!("{:#}", err))
}

impl DurableBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut entries = self.read_entries().map_err(storage_error)?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        // An unreadable file is replaced rather than blocking every save.
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Discarding unreadable storage file");
            Entries::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).map_err(storage_error)?;
        tracing::debug!(path = %self.path.display(), key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        // Rewriting an unreadable file would drop every other key with it.
        let mut entries = self.read_entries().map_err(storage_error)?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries).map_err(storage_error)?;
        tracing::debug!(path = %self.path.display(), key, "Removed value");
        Ok(())
    }
}
