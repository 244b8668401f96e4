// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! JSON file storage for the record list.
//!
//! Responsibilities:
//! - Read a JSON array of events with case-insensitive keys and lenient defaults.
//! - Write the full list back as indented JSON, overwriting the file.
//! - Treat a blank path (and, on read, a missing file) as "nothing to do".

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::StorageError;
use crate::models::record::{Record, RecordField};

/// Key used for the identifier in the JSON file.
const ID_KEY: &str = "id";

/// Load every record stored at `path`, preserving file order.
///
/// A blank path or a path that does not name an existing file yields an
/// empty list. Keys are matched case-insensitively, unknown keys are ignored,
/// absent or `null` text fields become `""`, and a record without an id
/// (absent or `null`) gets a fresh one.
///
/// # Errors
///
/// Returns [`StorageError`] when the file cannot be read, is not a JSON
/// array of objects, or holds a value of the wrong type.
pub fn load(path: &Path) -> Result<Vec<Record>, StorageError> {
    if is_blank(path) || !path.is_file() {
        tracing::debug!(path = %path.display(), "nothing to load");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content).map_err(|err| match err {
        ParseFailure::Json(source) => StorageError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Field(err) => err,
    })?;

    tracing::info!(path = %path.display(), count = records.len(), "loaded events");
    Ok(records)
}

/// Write `records` to `path` as an indented JSON array, replacing the file.
///
/// A blank path is a no-op.
///
/// # Errors
///
/// Returns [`StorageError::Io`] when the file cannot be written.
pub fn save(path: &Path, records: &[Record]) -> Result<(), StorageError> {
    if is_blank(path) {
        tracing::debug!("save skipped: no path");
        return Ok(());
    }

    let json = serde_json::to_string_pretty(records).map_err(|source| StorageError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = records.len(), "saved events");
    Ok(())
}

/// True for an empty or whitespace-only path.
pub fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

/// Force a `.json` extension unless the path already has one (any case).
pub fn ensure_json_extension(mut path: PathBuf) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("json")
    );

    if replace {
        path.set_extension("json");
    }
    path
}

enum ParseFailure {
    Json(serde_json::Error),
    Field(StorageError),
}

fn parse_records(content: &str) -> Result<Vec<Record>, ParseFailure> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let objects: Option<Vec<Map<String, Value>>> =
        serde_json::from_str(content).map_err(ParseFailure::Json)?;

    objects
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, object)| record_from_object(index, object).map_err(ParseFailure::Field))
        .collect()
}

fn record_from_object(index: usize, object: &Map<String, Value>) -> Result<Record, StorageError> {
    let mut record = Record {
        id: Uuid::new_v4(),
        ..Record::default()
    };

    for (key, value) in object {
        if key.eq_ignore_ascii_case(ID_KEY) {
            if let Some(id) = parse_id(index, value)? {
                record.id = id;
            }
            continue;
        }

        let Some(field) = RecordField::ALL
            .into_iter()
            .find(|f| key.eq_ignore_ascii_case(f.json_key()))
        else {
            continue;
        };

        let text = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => {
                return Err(StorageError::InvalidField {
                    index,
                    field: field.json_key(),
                    reason: format!("expected a string, found {other}"),
                });
            }
        };
        record.set(field, text);
    }

    Ok(record)
}

/// `None` for a `null` id, which is treated like a missing one.
fn parse_id(index: usize, value: &Value) -> Result<Option<Uuid>, StorageError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|err| StorageError::InvalidField {
                index,
                field: ID_KEY,
                reason: err.to_string(),
            }),
        other => Err(StorageError::InvalidField {
            index,
            field: ID_KEY,
            reason: format!("expected a UUID string, found {other}"),
        }),
    }
}
