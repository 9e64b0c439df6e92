//! Online reducer from the segment stream to a [`TimelineResult`].
//!
//! | Output | Fold |
//! |--------|------|
//! | `project_duration` | max segment day |
//! | `personnel_hours` | sum of durations by person |
//! | `task_durations` | running start / latest end per task, summed hours |
//!
//! Every segment is folded exactly once, as it is emitted.

use crate::models::{DayHour, Segment, Task, TaskSpan, TimelineResult};

/// Running start/end of the task currently being allocated.
///
/// Starts at `start = (1, 0)`, `end = (0, 0)`. Only an earlier coordinate
/// moves the start and only a later one moves the end, so a scheduled task
/// always reports its start at the origin of the timeline.
#[derive(Debug, Clone)]
struct SpanTracker {
    start: DayHour,
    end: DayHour,
}

impl Default for SpanTracker {
    fn default() -> Self {
        Self {
            start: DayHour::new(1, 0.0),
            end: DayHour::new(0, 0.0),
        }
    }
}

impl SpanTracker {
    fn observe(&mut self, segment: &Segment) {
        let start = segment.start();
        let end = segment.end();
        if start < self.start {
            self.start = start;
        }
        if end > self.end {
            self.end = end;
        }
    }
}

/// Streaming accumulator for timeline statistics.
#[derive(Debug, Clone, Default)]
pub struct TimelineAccumulator {
    result: TimelineResult,
    current: SpanTracker,
}

impl TimelineAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `person_id` appears in the workload totals, even at 0 hours.
    pub fn register_person(&mut self, person_id: &str) {
        if !self.result.personnel_hours.contains_key(person_id) {
            self.result
                .personnel_hours
                .insert(person_id.to_string(), 0.0);
        }
    }

    /// Folds one segment of the task currently being allocated.
    pub fn push_segment(&mut self, segment: Segment) {
        self.result.project_duration = self.result.project_duration.max(segment.day);
        *self
            .result
            .personnel_hours
            .entry(segment.person_id.clone())
            .or_insert(0.0) += segment.duration;
        self.current.observe(&segment);
        self.result.timeline.push(segment);
    }

    /// Closes the current task and records its span.
    ///
    /// A task that produced no segments keeps the seed span: start `(1, 0)`,
    /// end `(0, 0)`. Task IDs are unique after validation.
    pub fn finish_task(&mut self, task: &Task) -> &TaskSpan {
        let tracker = std::mem::take(&mut self.current);
        let span = TaskSpan {
            name: task.name.clone(),
            duration: task.total_hours(),
            start: tracker.start,
            end: tracker.end,
        };
        self.result
            .task_durations
            .entry(task.id.clone())
            .or_insert(span)
    }

    /// Number of segments folded so far.
    pub fn segment_count(&self) -> usize {
        self.result.timeline.len()
    }

    /// Consumes the accumulator and returns the result.
    pub fn finish(self) -> TimelineResult {
        self.result
    }
}
