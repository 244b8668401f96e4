// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Substring predicates applied to the record list.

use super::record::{Record, RecordField};

/// Filter text for the three searchable fields. Blank strings match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub faculty: String,
    pub speciality: String,
    pub event_type: String,
}

impl RecordFilter {
    #[cfg(test)]
    pub fn new(
        faculty: impl Into<String>,
        speciality: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        Self {
            faculty: faculty.into(),
            speciality: speciality.into(),
            event_type: event_type.into(),
        }
    }

    /// Record fields this filter can constrain.
    pub const FIELDS: [RecordField; 3] = [
        RecordField::Faculty,
        RecordField::Speciality,
        RecordField::EventType,
    ];

    /// Predicate text for a filterable field, `None` for the others.
    pub fn get(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Faculty => Some(&self.faculty),
            RecordField::Speciality => Some(&self.speciality),
            RecordField::EventType => Some(&self.event_type),
            _ => None,
        }
    }

    /// Set predicate text; ignored for fields that are not filterable.
    pub fn set(&mut self, field: RecordField, value: String) {
        match field {
            RecordField::Faculty => self.faculty = value,
            RecordField::Speciality => self.speciality = value,
            RecordField::EventType => self.event_type = value,
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        Self::FIELDS
            .iter()
            .all(|f| self.get(*f).is_none_or(|text| text.trim().is_empty()))
    }

    /// Compile into lowercase needles, dropping blank predicates.
    pub fn compile(&self) -> CompiledFilter {
        let needles = Self::FIELDS
            .iter()
            .filter_map(|field| {
                let text = self.get(*field)?;
                if text.trim().is_empty() {
                    None
                } else {
                    Some((*field, text.to_lowercase()))
                }
            })
            .collect();
        CompiledFilter { needles }
    }

    #[cfg(test)]
    pub fn matches(&self, record: &Record) -> bool {
        self.compile().matches(record)
    }
}

/// Lowercased needles ready to test against many records.
#[derive(Clone, Debug, Default)]
pub struct CompiledFilter {
    needles: Vec<(RecordField, String)>,
}

impl CompiledFilter {
    pub fn matches(&self, record: &Record) -> bool {
        self.needles
            .iter()
            .all(|(field, needle)| record.field(*field).to_lowercase().contains(needle.as_str()))
    }
}
