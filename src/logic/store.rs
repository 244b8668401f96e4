// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! In-memory record list: the full set plus filtered snapshots of it.

use uuid::Uuid;

use crate::models::filter::RecordFilter;
use crate::models::record::{Record, RecordFields};

/// Authoritative, insertion-ordered list of every loaded or added record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    #[cfg(test)]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Full set, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Discard the current contents and install `records` as given.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        tracing::debug!(old = self.records.len(), new = records.len(), "replacing events");
        self.records = records;
    }

    /// Append a record whose id was generated by the caller.
    pub fn add(&mut self, record: Record) {
        tracing::debug!(id = %record.id, "adding event");
        self.records.push(record);
    }

    /// Overwrite the mutable fields of the first record with `id`.
    ///
    /// Returns `false` (and changes nothing) when no record has that id.
    pub fn update(&mut self, id: Uuid, fields: RecordFields) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.apply(fields);
                tracing::debug!(%id, "updated event");
                true
            }
            None => {
                tracing::debug!(%id, "update ignored: no such event");
                false
            }
        }
    }

    /// Remove every record with `id`, returning how many were dropped.
    pub fn remove(&mut self, id: Uuid) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = before - self.records.len();
        tracing::debug!(%id, removed, "removed events");
        removed
    }

    /// Records matching every non-blank predicate, in full-set order.
    pub fn filter(&self, filter: &RecordFilter) -> Vec<Record> {
        let compiled = filter.compile();
        self.records
            .iter()
            .filter(|r| compiled.matches(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, faculty: &str, speciality: &str, event_type: &str) -> Record {
        Record::with_new_id(RecordFields {
            full_name: name.into(),
            faculty: faculty.into(),
            speciality: speciality.into(),
            event_type: event_type.into(),
            ..Default::default()
        })
    }

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            record("A", "Law", "Civil", "Seminar"),
            record("B", "Computer Science", "Systems", "Hackathon"),
            record("C", "Law School", "Criminal", "Debate"),
            record("D", "Physics", "Systems", "Seminar"),
        ])
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.full_name.as_str()).collect()
    }

    #[test]
    fn empty_store_filters_to_empty() {
        let store = RecordStore::default();

        for filter in [
            RecordFilter::default(),
            RecordFilter::new("law", "", ""),
            RecordFilter::new("x", "y", "z"),
        ] {
            assert!(store.filter(&filter).is_empty());
        }
    }

    #[test]
    fn faculty_filter_picks_exactly_matching_record() {
        let law = record("A", "Law", "", "");
        let cs = record("B", "Computer Science", "", "");
        let store = RecordStore::new(vec![law.clone(), cs]);

        assert_eq!(store.filter(&RecordFilter::new("law", "", "")), vec![law]);
    }

    #[test]
    fn filter_includes_record_for_any_case_variant() {
        let store = sample_store();
        let target = store.records()[1].clone();

        for variant in [
            target.faculty.clone(),
            target.faculty.to_uppercase(),
            target.faculty.to_lowercase(),
            "cOMPUTER sCIENCE".to_string(),
        ] {
            let view = store.filter(&RecordFilter::new(variant, "", ""));
            assert!(view.contains(&target));
        }
    }

    #[test]
    fn filter_preserves_order_and_ands_predicates() {
        let store = sample_store();

        assert_eq!(
            names(&store.filter(&RecordFilter::new("law", "", ""))),
            vec!["A", "C"]
        );
        assert_eq!(
            names(&store.filter(&RecordFilter::new("", "systems", "seminar"))),
            vec!["D"]
        );
        assert_eq!(
            names(&store.filter(&RecordFilter::default())),
            vec!["A", "B", "C", "D"]
        );
    }

    #[test]
    fn filter_is_pure() {
        let store = sample_store();
        let before = store.clone();
        let filter = RecordFilter::new("law", "", "");

        let first = store.filter(&filter);
        let second = store.filter(&filter);

        assert_eq!(first, second);
        assert_eq!(store, before);
    }

    #[test]
    fn add_then_remove_restores_previous_set() {
        let mut store = sample_store();
        let before = store.clone();
        let extra = record("E", "Law", "", "Seminar");
        let id = extra.id;

        store.add(extra);
        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(store.records().last().map(|r| r.id), Some(id));

        assert_eq!(store.remove(id), 1);
        assert_eq!(store, before);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = sample_store();
        let before = store.clone();

        let touched = store.update(
            Uuid::new_v4(),
            RecordFields {
                full_name: "Nobody".into(),
                ..Default::default()
            },
        );

        assert!(!touched);
        assert_eq!(store, before);
    }

    #[test]
    fn update_overwrites_fields_in_place() {
        let mut store = sample_store();
        let id = store.records()[2].id;

        let touched = store.update(
            id,
            RecordFields {
                full_name: "Changed".into(),
                faculty: "History".into(),
                event_type: "Meetup".into(),
                ..Default::default()
            },
        );

        assert!(touched);
        let updated = &store.records()[2];
        assert_eq!(updated.id, id);
        assert_eq!(updated.full_name, "Changed");
        assert_eq!(updated.speciality, "");
        assert_eq!(names(store.records()), vec!["A", "B", "Changed", "D"]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut store = sample_store();
        let before = store.clone();

        assert_eq!(store.remove(Uuid::new_v4()), 0);
        assert_eq!(store, before);
    }

    #[test]
    fn remove_drops_every_duplicate_id() {
        let a = record("A", "Law", "", "");
        let mut dup = a.clone();
        dup.full_name = "A2".into();
        let mut store = RecordStore::new(vec![a.clone(), record("B", "", "", ""), dup]);

        assert_eq!(store.remove(a.id), 2);
        assert_eq!(names(store.records()), vec!["B"]);
    }

    #[test]
    fn replace_all_keeps_given_order() {
        let mut store = sample_store();
        let fresh = vec![record("Z", "", "", ""), record("Y", "", "", "")];

        store.replace_all(fresh.clone());

        assert_eq!(store.records(), fresh.as_slice());
    }
}
