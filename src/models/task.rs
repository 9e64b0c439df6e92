//! Task and assignment models.
//!
//! A task is a unit of work carrying an ordered list of person-hour
//! assignments. Tasks are owned by an external record store; the engine
//! only reads a snapshot.
//!
//! # Ordering
//! Assignment order within a task is significant: it is the tie-break for
//! allocation order and is preserved exactly as given.
//!
//! # Identifiers
//! IDs are held as strings. On input, JSON numbers are accepted too and
//! stored in their decimal form, so integer-keyed records deserialize
//! directly (`3` and `"3"` name the same person).

use serde::{Deserialize, Deserializer, Serialize};

/// Wire form of an identifier: a JSON string or integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Unsigned(n) => n.to_string(),
            WireId::Signed(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    WireId::deserialize(deserializer).map(String::from)
}

fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<WireId>::deserialize(deserializer)?;
    Ok(ids.into_iter().map(String::from).collect())
}

/// A task whose assignments are packed into the workload timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Person-hour assignments, in allocation order.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// IDs of tasks this task depends on.
    ///
    /// Informational only: allocation follows input order, not dependency order.
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub dependencies: Vec<String>,
}

/// Hours of work for one person on one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned person identifier.
    #[serde(alias = "personnel_id", deserialize_with = "deserialize_id")]
    pub person_id: String,
    /// Hours of work (non-negative, finite). Zero is a no-op.
    pub hours: f64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(person_id: impl Into<String>, hours: f64) -> Self {
        Self {
            person_id: person_id.into(),
            hours,
        }
    }

    /// Whether this assignment contributes no work.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hours == 0.0
    }
}

impl Task {
    /// Creates a new task with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            assignments: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends an assignment of `hours` to `person_id`.
    pub fn with_assignment(mut self, person_id: impl Into<String>, hours: f64) -> Self {
        self.assignments.push(Assignment::new(person_id, hours));
        self
    }

    /// Adds a dependency on another task.
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    /// Summed hours across all assignments.
    ///
    /// This is the task's reported duration, which may exceed its wall-clock
    /// span when work runs in parallel across people.
    pub fn total_hours(&self) -> f64 {
        self.assignments.iter().map(|a| a.hours).sum()
    }

    /// Whether this task has any assignments.
    pub fn has_assignments(&self) -> bool {
        !self.assignments.is_empty()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
