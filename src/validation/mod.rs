use thiserror::Error;

use crate::dto::CreateNoteDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    MissingField,
    TooShort,
    TooLong,
}

/// A single failed constraint on one input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

/// All field violations collected from one `validate` call, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid note input: {}", .0.iter().map(|v| v.message.as_str()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<FieldViolation>);

/// Length constraints for one string field. Checks run in a fixed order
/// (required, then minimum, then maximum) and report the first failure.
#[derive(Debug, Clone)]
pub struct StringField {
    field: &'static str,
    label: &'static str,
    min_len: usize,
    max_len: usize,
}

impl StringField {
    pub const fn new(
        field: &'static str,
        label: &'static str,
        min_len: usize,
        max_len: usize,
    ) -> Self {
        Self {
            field,
            label,
            min_len,
            max_len,
        }
    }

    pub fn check(&self, value: &str) -> Option<FieldViolation> {
        if value.is_empty() {
            return Some(self.violation(
                ViolationKind::MissingField,
                format!("{} is required", self.label),
            ));
        }

        let len = value.chars().count();
        if len < self.min_len {
            return Some(self.violation(
                ViolationKind::TooShort,
                format!("{} must be at least {} characters", self.label, self.min_len),
            ));
        }
        if len > self.max_len {
            return Some(self.violation(
                ViolationKind::TooLong,
                format!("{} must not exceed {} characters", self.label, self.max_len),
            ));
        }

        None
    }

    fn violation(&self, kind: ViolationKind, message: String) -> FieldViolation {
        FieldViolation {
            field: self.field,
            kind,
            message,
        }
    }
}

/// Constraints on note input, checked before anything reaches the API.
/// Every field is evaluated independently so the caller gets all
/// violations at once instead of just the first one.
#[derive(Debug, Clone)]
pub struct NoteSchema {
    title: StringField,
    content: StringField,
}

impl Default for NoteSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteSchema {
    pub const fn new() -> Self {
        Self {
            title: StringField::new("title", "Title", 3, 100),
            content: StringField::new("content", "Content", 10, 1000),
        }
    }

    pub fn validate(&self, input: &CreateNoteDto) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();

        if let Some(v) = self.title.check(&input.title) {
            violations.push(v);
        }
        if let Some(v) = self.content.check(&input.content) {
            violations.push(v);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }
}
