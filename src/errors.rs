// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error taxonomy for catalogue operations.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::models::record::ValidationError;

/// Failures reading or writing the JSON file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {} as a JSON list of events: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode events for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Event #{} has an invalid \"{field}\" value: {reason}", .index + 1)]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

/// Advisory failures surfaced to the user; none of them change state.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}.")]
    Validation(#[from] ValidationError),
    #[error("Select an event in the table first.")]
    NoSelection,
    #[error("Open a JSON file first.")]
    NoFilePath,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
