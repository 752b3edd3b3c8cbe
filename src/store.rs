// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Directory of saved result records.

use crate::error::StoreError;
use crate::report::record::{run_index_from_file_name, RECORD_EXTENSION};
use crate::report::ResultRecord;
use chrono::Local;
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        if source.kind() == ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Path of record `name`, which must be a plain file name inside the
    /// store directory.
    fn record_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let mut components = Path::new(name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if plain && !name.contains(['/', '\\']) {
            Ok(self.dir.join(name))
        } else {
            Err(StoreError::InvalidName(name.to_string()))
        }
    }

    /// Record file names in the directory, sorted. A missing directory is empty.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(Self::io_error(&self.dir, err)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| Self::io_error(&self.dir, err))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// One more than the largest run index among stored records (1 if none).
    pub fn next_run_index(&self) -> Result<u32, StoreError> {
        let max = self
            .list()?
            .iter()
            .filter_map(|name| run_index_from_file_name(name))
            .max()
            .unwrap_or(0);
        Ok(max + 1)
    }

    /// Write a record, creating the directory if needed. Returns its path.
    pub fn save(&self, record: &ResultRecord) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|err| Self::io_error(&self.dir, err))?;
        let path = self.dir.join(record.file_name(&Local::now()));
        let json = record.to_json()?;
        fs::write(&path, json).map_err(|err| Self::io_error(&path, err))?;
        info!("[ResultStore] Saved {}", path.display());
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<ResultRecord, StoreError> {
        let path = self.record_path(name)?;
        let json = fs::read_to_string(&path).map_err(|err| Self::io_error(&path, err))?;
        ResultRecord::from_json(&json).map_err(|source| StoreError::Decode { path, source })
    }

    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.record_path(name)?;
        fs::remove_file(&path).map_err(|err| Self::io_error(&path, err))?;
        info!("[ResultStore] Deleted {}", path.display());
        Ok(())
    }
}
