// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Expected search results (a stalled greedy run, an infeasible or failed
//! solver call) are not errors; they are variants of the selector outcomes.

use std::path::PathBuf;
use thiserror::Error;

/// Result of a selection run.
pub type Result<T> = std::result::Result<T, CoverError>;

/// Invalid run parameters or universe. Raised before any enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameters must satisfy s <= j <= k <= n (got s={s}, j={j}, k={k}, n={n})")]
    Ordering { n: usize, k: usize, j: usize, s: usize },

    #[error("s must be at least 1")]
    EmptySubgroup,

    #[error("coverage must be at least 1")]
    Coverage,

    #[error("universe has {actual} elements but n={expected}")]
    UniverseSizeMismatch { expected: usize, actual: usize },

    #[error("universe has {n} elements, at most {max} are supported")]
    UniverseTooLarge { n: usize, max: usize },

    #[error("duplicate element label: {0}")]
    DuplicateElement(String),

    #[error("element labels must not be empty")]
    EmptyLabel,

    #[error("unknown element label: {0}")]
    UnknownElement(String),

    #[error("cannot draw n={n} samples from an alphabet of m={m}")]
    SampleExceedsAlphabet { n: usize, m: usize },

    #[error("{name} must be between {min} and {max} (got {value})")]
    OutOfBounds {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Failure of a selection run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Some j-group is contained in no candidate k-group's reach, so no
    /// selection can satisfy it.
    #[error("no k-group covers j-group [{}]; k, j and s cannot reach full coverage", .j_group.join(","))]
    StructuralInfeasibility { j_group: Vec<String> },

    #[error("selection worker failed: {0}")]
    Worker(String),
}

/// Failure of the on-disk result store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("result file not found: {0}")]
    NotFound(PathBuf),

    #[error("not a result file name: {0:?}")]
    InvalidName(String),

    #[error("invalid result file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode result record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure loading configuration or constructing a solver from it.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown ILP solver: {0}")]
    UnknownSolver(String),
}
