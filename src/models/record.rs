// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Parliament event record and the form-side field set used to build one.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// One catalogued event entry.
///
/// Serialization emits camelCase keys in declaration order; reading is
/// handled by [`crate::logic::storage`] because keys match case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    pub full_name: String,
    pub faculty: String,
    pub department: String,
    pub speciality: String,
    pub event_type: String,
    pub time_frame: String,
    pub description: String,
}

impl Record {
    /// Build a record with a freshly generated id from already validated fields.
    pub fn with_new_id(fields: RecordFields) -> Self {
        let mut record = Self {
            id: Uuid::new_v4(),
            ..Default::default()
        };
        record.apply(fields);
        record
    }

    /// Overwrite every mutable field, keeping the id.
    pub fn apply(&mut self, fields: RecordFields) {
        self.full_name = fields.full_name;
        self.faculty = fields.faculty;
        self.department = fields.department;
        self.speciality = fields.speciality;
        self.event_type = fields.event_type;
        self.time_frame = fields.time_frame;
        self.description = fields.description;
    }

    /// Copy the mutable fields back out, e.g. to populate the edit form.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            full_name: self.full_name.clone(),
            faculty: self.faculty.clone(),
            department: self.department.clone(),
            speciality: self.speciality.clone(),
            event_type: self.event_type.clone(),
            time_frame: self.time_frame.clone(),
            description: self.description.clone(),
        }
    }

    /// Replace a single text field.
    pub fn set(&mut self, field: RecordField, value: String) {
        let slot = match field {
            RecordField::FullName => &mut self.full_name,
            RecordField::Faculty => &mut self.faculty,
            RecordField::Department => &mut self.department,
            RecordField::Speciality => &mut self.speciality,
            RecordField::EventType => &mut self.event_type,
            RecordField::TimeFrame => &mut self.time_frame,
            RecordField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Value of a single text field.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::FullName => &self.full_name,
            RecordField::Faculty => &self.faculty,
            RecordField::Department => &self.department,
            RecordField::Speciality => &self.speciality,
            RecordField::EventType => &self.event_type,
            RecordField::TimeFrame => &self.time_frame,
            RecordField::Description => &self.description,
        }
    }
}

/// The seven text attributes of a record, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordField {
    FullName,
    Faculty,
    Department,
    Speciality,
    EventType,
    TimeFrame,
    Description,
}

impl RecordField {
    pub const ALL: [RecordField; 7] = [
        RecordField::FullName,
        RecordField::Faculty,
        RecordField::Department,
        RecordField::Speciality,
        RecordField::EventType,
        RecordField::TimeFrame,
        RecordField::Description,
    ];

    /// Fields that must be non-empty when a record is built from the form.
    pub const REQUIRED: [RecordField; 3] = [
        RecordField::FullName,
        RecordField::Faculty,
        RecordField::EventType,
    ];

    /// JSON key written on save.
    pub fn json_key(self) -> &'static str {
        match self {
            RecordField::FullName => "fullName",
            RecordField::Faculty => "faculty",
            RecordField::Department => "department",
            RecordField::Speciality => "speciality",
            RecordField::EventType => "eventType",
            RecordField::TimeFrame => "timeFrame",
            RecordField::Description => "description",
        }
    }

    /// Human label used in the form and in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            RecordField::FullName => "Full name",
            RecordField::Faculty => "Faculty",
            RecordField::Department => "Department",
            RecordField::Speciality => "Speciality",
            RecordField::EventType => "Event type",
            RecordField::TimeFrame => "Time frame",
            RecordField::Description => "Description",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutable record fields as entered in the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub full_name: String,
    pub faculty: String,
    pub department: String,
    pub speciality: String,
    pub event_type: String,
    pub time_frame: String,
    pub description: String,
}

impl RecordFields {
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::FullName => &self.full_name,
            RecordField::Faculty => &self.faculty,
            RecordField::Department => &self.department,
            RecordField::Speciality => &self.speciality,
            RecordField::EventType => &self.event_type,
            RecordField::TimeFrame => &self.time_frame,
            RecordField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: RecordField, value: String) {
        let slot = match field {
            RecordField::FullName => &mut self.full_name,
            RecordField::Faculty => &mut self.faculty,
            RecordField::Department => &mut self.department,
            RecordField::Speciality => &mut self.speciality,
            RecordField::EventType => &mut self.event_type,
            RecordField::TimeFrame => &mut self.time_frame,
            RecordField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Trim every field and check the required ones.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming each required field that is
    /// empty after trimming.
    pub fn validated(&self) -> Result<RecordFields, ValidationError> {
        let mut trimmed = RecordFields::default();
        for field in RecordField::ALL {
            trimmed.set(field, self.get(field).trim().to_string());
        }

        let missing: Vec<RecordField> = RecordField::REQUIRED
            .into_iter()
            .filter(|field| trimmed.get(*field).is_empty())
            .collect();

        if missing.is_empty() {
            Ok(trimmed)
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Required form fields were left empty.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} required", describe_missing(.missing))]
pub struct ValidationError {
    pub missing: Vec<RecordField>,
}

fn describe_missing(missing: &[RecordField]) -> String {
    let labels: Vec<String> = missing.iter().map(|f| format!("\"{f}\"")).collect();
    match labels.len() {
        1 => format!("{} is", labels[0]),
        _ => format!("{} are", labels.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> RecordFields {
        RecordFields {
            full_name: "  Jane Doe ".into(),
            faculty: "Law".into(),
            event_type: "Seminar\n".into(),
            ..Default::default()
        }
    }

    #[test]
    fn validated_trims_every_field() {
        let fields = sample_fields().validated().expect("fields are valid");

        assert_eq!(fields.full_name, "Jane Doe");
        assert_eq!(fields.event_type, "Seminar");
        assert_eq!(fields.department, "");
    }

    #[test]
    fn validated_lists_missing_required_fields() {
        let fields = RecordFields {
            full_name: "   ".into(),
            faculty: "Law".into(),
            ..Default::default()
        };

        let err = fields.validated().unwrap_err();

        assert_eq!(
            err.missing,
            vec![RecordField::FullName, RecordField::EventType]
        );
        assert_eq!(
            err.to_string(),
            "\"Full name\", \"Event type\" are required"
        );
    }

    #[test]
    fn apply_keeps_id() {
        let mut record = Record::with_new_id(sample_fields().validated().unwrap());
        let id = record.id;

        record.apply(RecordFields {
            full_name: "John Roe".into(),
            ..Default::default()
        });

        assert_eq!(record.id, id);
        assert_eq!(record.full_name, "John Roe");
        assert_eq!(record.faculty, "");
    }

    #[test]
    fn new_ids_are_distinct() {
        let a = Record::with_new_id(RecordFields::default());
        let b = Record::with_new_id(RecordFields::default());

        assert_ne!(a.id, b.id);
        assert!(!a.id.is_nil());
    }
}
