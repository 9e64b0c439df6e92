//! Timeline result model.
//!
//! The full output of one engine invocation: segments in emission order,
//! the project duration, per-person workload totals, and per-task spans.
//!
//! Maps are ordered (`BTreeMap`) so identical input always serializes to
//! identical bytes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DayHour, Segment};

/// A task's overall interval on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpan {
    /// Task display name, copied from the input.
    pub name: String,
    /// Summed assignment hours (not the wall-clock span length).
    pub duration: f64,
    /// Running start: `(1, 0)` unless a segment placed earlier.
    pub start: DayHour,
    /// Latest segment end.
    pub end: DayHour,
}

impl TaskSpan {
    /// Whether any segment was placed for this task.
    pub fn is_scheduled(&self) -> bool {
        self.end.day > 0
    }

    /// Number of calendar days touched, inclusive (0 if unscheduled).
    pub fn day_count(&self) -> u32 {
        if self.is_scheduled() {
            self.end.day - self.start.day + 1
        } else {
            0
        }
    }
}

/// Result of packing tasks into the workload timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineResult {
    /// Segments in emission order.
    pub timeline: Vec<Segment>,
    /// Highest day touched by any segment (0 if none).
    pub project_duration: u32,
    /// Total allocated hours per person.
    pub personnel_hours: BTreeMap<String, f64>,
    /// Span and summed hours per task.
    pub task_durations: BTreeMap<String, TaskSpan>,
}

impl TimelineResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no segments were produced.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.timeline.len()
    }

    /// Returns all segments of a given task, in emission order.
    pub fn segments_for_task(&self, task_id: &str) -> Vec<&Segment> {
        self.timeline
            .iter()
            .filter(|s| s.task_id == task_id)
            .collect()
    }

    /// Returns all segments of a given person, in emission order.
    pub fn segments_for_person(&self, person_id: &str) -> Vec<&Segment> {
        self.timeline
            .iter()
            .filter(|s| s.person_id == person_id)
            .collect()
    }

    /// Hours allocated to a person on a given day.
    pub fn person_day_load(&self, person_id: &str, day: u32) -> f64 {
        self.timeline
            .iter()
            .filter(|s| s.person_id == person_id && s.day == day)
            .map(|s| s.duration)
            .sum()
    }

    /// Total hours allocated to a person (0 if unknown).
    pub fn person_hours(&self, person_id: &str) -> f64 {
        self.personnel_hours.get(person_id).copied().unwrap_or(0.0)
    }

    /// Span of a given task.
    pub fn task_span(&self, task_id: &str) -> Option<&TaskSpan> {
        self.task_durations.get(task_id)
    }
}
