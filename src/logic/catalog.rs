// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Catalogue facade the UI drives: record store, open file path, and storage calls.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::errors::{CatalogError, CatalogResult};
use crate::logic::{storage, store::RecordStore};
use crate::models::filter::RecordFilter;
use crate::models::record::{Record, RecordFields};

/// Record store bound to the JSON file it was opened from.
#[derive(Debug, Default)]
pub struct Catalog {
    store: RecordStore,
    path: Option<PathBuf>,
}

impl Catalog {
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// File the catalogue was opened from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load `path` and replace the full set with its contents.
    ///
    /// On failure nothing changes, including the remembered path.
    pub fn open_file(&mut self, path: &Path) -> CatalogResult<usize> {
        let records = storage::load(path)?;
        Ok(self.install(path.to_path_buf(), records))
    }

    /// Install records that were loaded elsewhere, e.g. on a worker thread.
    pub fn install(&mut self, path: PathBuf, records: Vec<Record>) -> usize {
        self.store.replace_all(records);
        self.path = Some(path);
        self.store.len()
    }

    /// Opened path plus an owned copy of the full set, ready to be written
    /// with [`storage::save`] off the UI thread.
    pub fn save_snapshot(&self) -> CatalogResult<(PathBuf, Vec<Record>)> {
        let path = self
            .path
            .as_deref()
            .filter(|p| !storage::is_blank(p))
            .ok_or(CatalogError::NoFilePath)?;
        Ok((path.to_path_buf(), self.store.records().to_vec()))
    }

    /// Remember a new target, e.g. after "Save as".
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// Records matching the faculty, speciality and event-type predicates.
    pub fn apply_filter(&self, filter: &RecordFilter) -> Vec<Record> {
        self.store.filter(filter)
    }

    /// Validate form input and append a new record, returning its id.
    pub fn add(&mut self, fields: &RecordFields) -> CatalogResult<Uuid> {
        let record = Record::with_new_id(fields.validated()?);
        let id = record.id;
        self.store.add(record);
        Ok(id)
    }

    /// Validate form input and overwrite the selected record.
    ///
    /// An id that is no longer in the store is a silent no-op (`Ok(false)`).
    pub fn edit(&mut self, selected: Option<Uuid>, fields: &RecordFields) -> CatalogResult<bool> {
        let id = selected.ok_or(CatalogError::NoSelection)?;
        let fields = fields.validated()?;
        Ok(self.store.update(id, fields))
    }

    /// Remove the selected record; an unknown id removes nothing.
    pub fn delete(&mut self, selected: Option<Uuid>) -> CatalogResult<usize> {
        let id = selected.ok_or(CatalogError::NoSelection)?;
        Ok(self.store.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fields(name: &str, faculty: &str, event_type: &str) -> RecordFields {
        RecordFields {
            full_name: name.into(),
            faculty: faculty.into(),
            event_type: event_type.into(),
            ..Default::default()
        }
    }

    #[test]
    fn open_edit_save_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("events.json");
        let mut seed = Catalog::default();
        seed.set_path(path.clone());
        seed.add(&fields("Jane Doe", "Law", "Seminar")).unwrap();
        seed.add(&fields("John Roe", "Physics", "Debate")).unwrap();
        let (target, records) = seed.save_snapshot().unwrap();
        storage::save(&target, &records).unwrap();

        let mut catalog = Catalog::default();
        assert_eq!(catalog.open_file(&path).unwrap(), 2);
        assert_eq!(catalog.path(), Some(path.as_path()));

        let id = catalog.store().records()[1].id;
        assert!(catalog.edit(Some(id), &fields("John Roe", "History", "Debate")).unwrap());
        let (target, records) = catalog.save_snapshot().unwrap();
        assert_eq!(target, path);
        storage::save(&target, &records).unwrap();

        let mut reopened = Catalog::default();
        reopened.open_file(&path).unwrap();
        assert_eq!(reopened.store(), catalog.store());
        assert_eq!(
            reopened
                .apply_filter(&RecordFilter::new("hist", "", ""))
                .len(),
            1
        );
    }

    #[test]
    fn add_with_empty_full_name_is_rejected() {
        let mut catalog = Catalog::default();
        catalog.add(&fields("Jane Doe", "Law", "Seminar")).unwrap();

        let err = catalog.add(&fields("  ", "Law", "Seminar")).unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(catalog.store().len(), 1);
    }

    #[test]
    fn add_stores_trimmed_values() {
        let mut catalog = Catalog::default();

        let id = catalog.add(&fields(" Jane ", " Law ", " Seminar ")).unwrap();

        let stored = catalog.store().get(id).unwrap();
        assert_eq!(stored.full_name, "Jane");
        assert_eq!(stored.faculty, "Law");
    }

    #[test]
    fn edit_and_delete_require_selection() {
        let mut catalog = Catalog::default();
        catalog.add(&fields("Jane Doe", "Law", "Seminar")).unwrap();

        assert!(matches!(
            catalog.edit(None, &fields("X", "Y", "Z")),
            Err(CatalogError::NoSelection)
        ));
        assert!(matches!(catalog.delete(None), Err(CatalogError::NoSelection)));
        assert_eq!(catalog.store().len(), 1);
    }

    #[test]
    fn edit_validation_failure_changes_nothing() {
        let mut catalog = Catalog::default();
        let id = catalog.add(&fields("Jane Doe", "Law", "Seminar")).unwrap();
        let before = catalog.store().clone();

        let err = catalog.edit(Some(id), &fields("Jane Doe", "", "Seminar"));

        assert!(matches!(err, Err(CatalogError::Validation(_))));
        assert_eq!(catalog.store(), &before);
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut catalog = Catalog::default();
        catalog.add(&fields("Jane Doe", "Law", "Seminar")).unwrap();
        let before = catalog.store().clone();
        let ghost = Uuid::new_v4();

        assert!(!catalog.edit(Some(ghost), &fields("A", "B", "C")).unwrap());
        assert_eq!(catalog.delete(Some(ghost)).unwrap(), 0);
        assert_eq!(catalog.store(), &before);
    }

    #[test]
    fn save_without_open_file_fails() {
        let catalog = Catalog::default();

        assert!(matches!(
            catalog.save_snapshot(),
            Err(CatalogError::NoFilePath)
        ));
    }

    #[test]
    fn failed_open_keeps_previous_state() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.json");
        let bad = tmp.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();

        let mut catalog = Catalog::default();
        catalog.set_path(good.clone());
        catalog.add(&fields("Jane Doe", "Law", "Seminar")).unwrap();

        let err = catalog.open_file(&bad).unwrap_err();

        assert!(matches!(err, CatalogError::Storage(_)));
        assert_eq!(catalog.store().len(), 1);
        assert_eq!(catalog.path(), Some(good.as_path()));
    }

    #[test]
    fn opening_missing_file_gives_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("new.json");
        let mut catalog = Catalog::default();
        catalog.add(&fields("Jane Doe", "Law", "Seminar")).unwrap();

        assert_eq!(catalog.open_file(&path).unwrap(), 0);
        assert!(catalog.store().is_empty());
        assert_eq!(catalog.path(), Some(path.as_path()));
    }
}
