//! Input validation for workload timelines.
//!
//! Checks the task snapshot before any allocation happens. Detects:
//! - Negative or non-finite hours
//! - Missing task or person identifiers
//! - Duplicate task IDs
//!
//! All problems are collected so the caller can fix the input in one pass.
//! Dependency references are informational and never fail validation;
//! unknown or self-referencing ones are logged and ignored.

use std::collections::HashSet;
use std::fmt;

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Hours are negative, NaN, or infinite.
    InvalidHours,
    /// A task has an empty identifier.
    MissingTaskId,
    /// An assignment has an empty person identifier.
    MissingPersonId,
    /// Two tasks share the same ID.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a task snapshot for timeline allocation.
///
/// Checks:
/// 1. Every task has a non-empty ID
/// 2. No duplicate task IDs
/// 3. Every assignment has a non-empty person ID
/// 4. Every assignment's hours are finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut task_ids = HashSet::new();

    for (index, task) in tasks.iter().enumerate() {
        if task.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTaskId,
                format!("Task at position {index} has no ID"),
            ));
        } else if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        for (pos, assignment) in task.assignments.iter().enumerate() {
            if assignment.person_id.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPersonId,
                    format!("Assignment {pos} of task '{}' has no person ID", task.id),
                ));
            }
            if !assignment.hours.is_finite() || assignment.hours < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidHours,
                    format!(
                        "Assignment {pos} of task '{}' has invalid hours: {}",
                        task.id, assignment.hours
                    ),
                ));
            }
        }
    }

    warn_on_dangling_dependencies(tasks, &task_ids);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn warn_on_dangling_dependencies(tasks: &[Task], task_ids: &HashSet<&str>) {
    for task in tasks {
        for dep in &task.dependencies {
            if dep == &task.id {
                tracing::warn!(task_id = %task.id, "Task depends on itself; ignored");
            } else if !task_ids.contains(dep.as_str()) {
                tracing::warn!(
                    task_id = %task.id,
                    dependency = %dep,
                    "Unknown dependency; ignored"
                );
            }
        }
    }
}
