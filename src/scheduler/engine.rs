//! Capacity-aware workload timeline engine.
//!
//! # Algorithm
//!
//! 1. Validate the configuration and the task snapshot; reject wholesale on
//!    any problem.
//! 2. Create a fresh [`CapacityLedger`] for this call.
//! 3. For each task in input order, for each assignment in input order,
//!    allocate its hours first-fit from day 1 through the shared ledger.
//! 4. Fold every emitted segment into the [`TimelineAccumulator`].
//!
//! Tasks are never reordered: dependencies are carried through for display
//! but do not gate allocation.
//!
//! # Complexity
//! O(segments + full days skipped) per assignment.

use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};
use crate::models::{Task, TimelineResult};
use crate::validation::validate_tasks;

use super::{CapacityLedger, TimelineAccumulator};

/// Input container for a timeline computation.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TimelineRequest {
    /// Tasks in allocation order.
    pub tasks: Vec<Task>,
    /// Per-request configuration. `None` = use the engine's.
    #[serde(default)]
    pub config: Option<TimelineConfig>,
}

impl TimelineRequest {
    /// Creates a new request.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            config: None,
        }
    }

    /// Overrides the engine configuration for this request.
    pub fn with_config(mut self, config: TimelineConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Packs task assignments into a person/day capacity grid.
///
/// Stateless between calls: every call builds and discards its own ledger,
/// so one engine can serve concurrent callers.
///
/// # Example
///
/// ```
/// use workload_timeline::models::Task;
/// use workload_timeline::scheduler::TimelineEngine;
///
/// let tasks = vec![
///     Task::new("T1").with_name("Design").with_assignment("alice", 5.0),
///     Task::new("T2").with_name("Build").with_assignment("alice", 5.0),
/// ];
///
/// let result = TimelineEngine::new().compute(&tasks).unwrap();
/// assert_eq!(result.segment_count(), 3);
/// assert_eq!(result.project_duration, 2);
/// assert_eq!(result.person_hours("alice"), 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimelineEngine {
    config: TimelineConfig,
}

impl TimelineEngine {
    /// Creates an engine with the default 8-hour day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: TimelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Computes the timeline for `tasks`.
    ///
    /// # Errors
    /// - [`TimelineError::InvalidConfig`] if the configuration is unusable.
    /// - [`TimelineError::InvalidInput`] with every detected problem.
    /// - [`TimelineError::HorizonExceeded`] if a horizon is configured and
    ///   some assignment cannot fit before it.
    pub fn compute(&self, tasks: &[Task]) -> Result<TimelineResult> {
        self.config.validate()?;
        validate_tasks(tasks).map_err(TimelineError::InvalidInput)?;

        let mut ledger = CapacityLedger::new(self.config.day_capacity_hours);
        let mut acc = TimelineAccumulator::new();

        for task in tasks {
            for assignment in &task.assignments {
                acc.register_person(&assignment.person_id);

                for segment in ledger.allocate(&task.id, assignment) {
                    if let Some(horizon_days) = self.config.horizon_days {
                        if segment.day > horizon_days {
                            return Err(TimelineError::HorizonExceeded {
                                task_id: task.id.clone(),
                                person_id: assignment.person_id.clone(),
                                horizon_days,
                            });
                        }
                    }
                    tracing::trace!(
                        task_id = %segment.task_id,
                        person_id = %segment.person_id,
                        day = segment.day,
                        start_hour = segment.start_hour,
                        duration = segment.duration,
                        "Segment placed"
                    );
                    acc.push_segment(segment);
                }
            }

            let span = acc.finish_task(task);
            tracing::debug!(
                task_id = %task.id,
                start_day = span.start.day,
                end_day = span.end.day,
                hours = span.duration,
                "Task allocated"
            );
        }

        let result = acc.finish();
        tracing::debug!(
            tasks = tasks.len(),
            segments = result.segment_count(),
            project_duration = result.project_duration,
            "Timeline computed"
        );
        Ok(result)
    }

    /// Computes the timeline for a request.
    pub fn compute_request(&self, request: &TimelineRequest) -> Result<TimelineResult> {
        match &request.config {
            Some(config) => Self::new()
                .with_config(config.clone())
                .compute(&request.tasks),
            None => self.compute(&request.tasks),
        }
    }
}
