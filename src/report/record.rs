// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The persisted result record.
//!
//! ```json
//! {
//!   "parameters": {"m": 45, "n": 9, "k": 6, "j": 4, "s": 4, "coverage": 1},
//!   "run_index": 3,
//!   "selected_k_groups": [["A", "B", "C", "D", "E", "F"], ...]
//! }
//! ```
//!
//! Record files are named
//! `m-n-k-j-s-coverage-run_index-group_count-timestamp.json`.

use crate::problem::Parameters;
use crate::report::CanonicalSelection;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Timestamp layout used in record file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File extension of record files.
pub const RECORD_EXTENSION: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub parameters: Parameters,
    pub run_index: u32,
    pub selected_k_groups: Vec<Vec<String>>,
}

impl ResultRecord {
    pub fn new(parameters: Parameters, run_index: u32, selection: CanonicalSelection) -> Self {
        Self {
            parameters,
            run_index,
            selected_k_groups: selection.into_groups(),
        }
    }

    pub fn group_count(&self) -> usize {
        self.selected_k_groups.len()
    }

    /// The record's file name for a given creation time.
    pub fn file_name<Tz>(&self, created: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format!(
            "{}-{}-{}-{}.{}",
            self.parameters.name_prefix(),
            self.run_index,
            self.group_count(),
            created.format(TIMESTAMP_FORMAT),
            RECORD_EXTENSION
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Run index embedded in a record file name, if the name has the record shape.
///
/// The index is the seventh `-`-separated field.
pub fn run_index_from_file_name(name: &str) -> Option<u32> {
    let stem = name.strip_suffix(&format!(".{}", RECORD_EXTENSION))?;
    let fields: Vec<&str> = stem.split('-').collect();
    if fields.len() != 9 {
        return None;
    }
    fields[6].parse().ok()
}
