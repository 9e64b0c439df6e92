//! Per-invocation capacity ledger.
//!
//! Records how many hours each person has already consumed on each day.
//! A person's day fills contiguously from hour 0 upward, so the consumed
//! amount doubles as the next free start hour.
//!
//! One ledger is created per engine call and shared by every task and
//! assignment of that call; it is discarded with the call.

use std::collections::{BTreeMap, HashMap};

use super::AssignmentAllocation;
use crate::models::Assignment;

/// Hours consumed per (person, day).
///
/// Absent entries mean nothing consumed. Stored entries are always in
/// `(0, day_capacity]`.
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    day_capacity: f64,
    used: HashMap<String, BTreeMap<u32, f64>>,
}

impl CapacityLedger {
    /// Creates an empty ledger with the given hours per person-day.
    pub fn new(day_capacity: f64) -> Self {
        Self {
            day_capacity,
            used: HashMap::new(),
        }
    }

    /// Hours available per person-day.
    #[inline]
    pub fn day_capacity(&self) -> f64 {
        self.day_capacity
    }

    /// Hours already consumed by `person_id` on `day`.
    pub fn used(&self, person_id: &str, day: u32) -> f64 {
        self.used
            .get(person_id)
            .and_then(|days| days.get(&day))
            .copied()
            .unwrap_or(0.0)
    }

    /// Hours still free for `person_id` on `day`.
    pub fn remaining(&self, person_id: &str, day: u32) -> f64 {
        (self.day_capacity - self.used(person_id, day)).max(0.0)
    }

    /// Whether `person_id` has no capacity left on `day`.
    #[inline]
    pub fn is_full(&self, person_id: &str, day: u32) -> bool {
        self.used(person_id, day) >= self.day_capacity
    }

    /// First day at or after `from` on which `person_id` has free capacity.
    pub fn first_open_day(&self, person_id: &str, from: u32) -> u32 {
        let mut day = from;
        while self.is_full(person_id, day) {
            day += 1;
        }
        day
    }

    /// Records `hours` of work for `person_id` on `day`.
    ///
    /// Callers never consume more than [`remaining`](Self::remaining).
    pub fn consume(&mut self, person_id: &str, day: u32, hours: f64) {
        if hours <= 0.0 {
            return;
        }
        *self
            .used
            .entry(person_id.to_string())
            .or_default()
            .entry(day)
            .or_insert(0.0) += hours;
    }

    /// Consumed hours per day for `person_id`, in day order.
    pub fn days_for(&self, person_id: &str) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.used
            .get(person_id)
            .into_iter()
            .flat_map(|days| days.iter().map(|(&day, &hours)| (day, hours)))
    }

    /// Starts allocating `assignment` for `task_id` against this ledger.
    ///
    /// The returned iterator yields segments lazily and writes each one
    /// into the ledger as it is produced.
    pub fn allocate<'a>(
        &'a mut self,
        task_id: &'a str,
        assignment: &'a Assignment,
    ) -> AssignmentAllocation<'a> {
        AssignmentAllocation::new(self, task_id, &assignment.person_id, assignment.hours)
    }
}

impl Default for CapacityLedger {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DAY_CAPACITY_HOURS)
    }
}
