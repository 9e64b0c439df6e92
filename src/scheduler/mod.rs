//! Capacity-aware allocation and timeline reduction.
//!
//! # Algorithm
//!
//! `TimelineEngine` walks tasks and their assignments in input order and
//! packs each assignment's hours first-fit into a shared per-person,
//! per-day `CapacityLedger`, rolling over to the next day whenever the
//! current one is full. It is greedy and deterministic, not optimal.
//!
//! # Reduction
//!
//! `TimelineAccumulator` folds the emitted segments into project duration,
//! per-person hours, and per-task spans in a single streaming pass.

mod accumulator;
mod allocation;
mod engine;
mod ledger;

pub use accumulator::TimelineAccumulator;
pub use allocation::AssignmentAllocation;
pub use engine::{TimelineEngine, TimelineRequest};
pub use ledger::CapacityLedger;
