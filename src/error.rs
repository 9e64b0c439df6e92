use std::fmt;

use thiserror::Error;

use crate::validation::ValidationError;

/// Kind of identifier that failed to resolve to a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Person,
    Task,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Person => f.write_str("person"),
            ReferenceKind::Task => f.write_str("task"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Task '{task_id}' needs capacity for '{person_id}' beyond day {horizon_days}")]
    HorizonExceeded {
        task_id: String,
        person_id: String,
        horizon_days: u32,
    },

    #[error("Unresolved {kind} reference: {id}")]
    UnresolvedReference { kind: ReferenceKind, id: String },
}

pub type Result<T> = std::result::Result<T, TimelineError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_lists_every_problem() {
        let err = TimelineError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::InvalidHours, "bad hours"),
            ValidationError::new(ValidationErrorKind::MissingPersonId, "no person"),
        ]);
        assert_eq!(err.to_string(), "Invalid input: bad hours; no person");
    }

    #[test]
    fn test_unresolved_reference_message() {
        let err = TimelineError::UnresolvedReference {
            kind: ReferenceKind::Person,
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "Unresolved person reference: 42");
    }
}
