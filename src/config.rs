// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration for the `cover` front end.
//!
//! Read from an optional TOML file; every field has a default:
//!
//! ```toml
//! results_dir = "results"
//! solver = "microlp"
//!
//! [bounds]
//! m = { min = 45, max = 54 }
//! n = { min = 7, max = 25 }
//! k = { min = 4, max = 7 }
//! s = { min = 3, max = 7 }
//! ```
//!
//! `COVER_RESULTS_DIR` overrides `results_dir`.

use crate::engine::SolverKind;
use crate::error::{ConfigError, ParameterError};
use crate::problem::Parameters;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the results directory.
pub const RESULTS_DIR_ENV: &str = "COVER_RESULTS_DIR";

/// Inclusive accepted range for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Range {
    pub min: usize,
    pub max: usize,
}

impl Range {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn check(&self, name: &'static str, value: usize) -> Result<(), ParameterError> {
        if (self.min..=self.max).contains(&value) {
            Ok(())
        } else {
            Err(ParameterError::OutOfBounds {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Parameter ranges accepted by the interactive front end.
///
/// These keep enumeration tractable; the engine itself only enforces the
/// ordering constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    pub m: Range,
    pub n: Range,
    pub k: Range,
    pub s: Range,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            m: Range::new(45, 54),
            n: Range::new(7, 25),
            k: Range::new(4, 7),
            s: Range::new(3, 7),
        }
    }
}

impl InputBounds {
    /// Check bounds, then the engine's own constraints.
    pub fn check(&self, params: &Parameters) -> Result<(), ParameterError> {
        self.m.check("m", params.m)?;
        self.n.check("n", params.n)?;
        self.k.check("k", params.k)?;
        self.s.check("s", params.s)?;
        params.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub results_dir: PathBuf,
    pub solver: SolverKind,
    pub bounds: InputBounds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            solver: SolverKind::default(),
            bounds: InputBounds::default(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, else defaults; then apply the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&text, path)?
            }
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(RESULTS_DIR_ENV) {
            config.results_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}
