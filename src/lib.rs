//! Capacity-aware workload timeline engine.
//!
//! Packs the person-hour assignments of a task list into a day/person grid
//! where every person has a fixed number of working hours per day, and
//! derives a Gantt-style schedule plus workload statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Assignment`, `Segment`, `DayHour`,
//!   `TaskSpan`, `TimelineResult`
//! - **`validation`**: Input integrity checks (hours, identifiers, duplicate IDs)
//! - **`scheduler`**: `CapacityLedger`, lazy per-assignment allocation,
//!   streaming reducer, and the `TimelineEngine` entry point
//! - **`config`**: Day capacity and optional day horizon
//! - **`report`**: Name resolution and Gantt row grouping for display
//!
//! # Architecture
//!
//! The engine is a pure function of its input snapshot: each call builds a
//! fresh ledger, runs to completion, and returns a `TimelineResult`. No
//! state survives between calls.

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use config::TimelineConfig;
pub use error::{Result, TimelineError};
pub use scheduler::TimelineEngine;
