//! Day-rollover allocation of a single assignment.
//!
//! # Algorithm
//!
//! State is `(day, hour, remaining)`, starting at `(1, 0, hours)`.
//! Each step:
//!
//! 1. Skip days on which the person is already full (`hour` resets to 0).
//! 2. If the person has started the day, resume at the consumed hour.
//! 3. Take `chunk = min(capacity - consumed, remaining)`.
//! 4. Emit a segment, write it into the ledger, decrement `remaining`.
//! 5. Advance `hour`; roll over to the next day once the day is full.
//!
//! The iterator ends when `remaining` reaches zero, so a zero-hour
//! assignment yields nothing.
//!
//! # Complexity
//! O(segments + full days skipped).

use super::CapacityLedger;
use crate::models::Segment;

/// Lazy segment sequence for one assignment.
///
/// Created by [`CapacityLedger::allocate`]. Every yielded segment has
/// already been recorded in the ledger; dropping the iterator early leaves
/// the ledger holding only the segments yielded so far.
#[derive(Debug)]
pub struct AssignmentAllocation<'a> {
    ledger: &'a mut CapacityLedger,
    task_id: &'a str,
    person_id: &'a str,
    day: u32,
    hour: f64,
    remaining: f64,
}

impl<'a> AssignmentAllocation<'a> {
    pub(crate) fn new(
        ledger: &'a mut CapacityLedger,
        task_id: &'a str,
        person_id: &'a str,
        hours: f64,
    ) -> Self {
        Self {
            ledger,
            task_id,
            person_id,
            day: 1,
            hour: 0.0,
            remaining: hours,
        }
    }

    /// Hours not yet placed.
    #[inline]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Day the next segment will be searched from.
    #[inline]
    pub fn current_day(&self) -> u32 {
        self.day
    }
}

impl Iterator for AssignmentAllocation<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.remaining <= 0.0 {
            return None;
        }
        let capacity = self.ledger.day_capacity();

        let open_day = self.ledger.first_open_day(self.person_id, self.day);
        if open_day != self.day {
            self.day = open_day;
            self.hour = 0.0;
        }

        let used = self.ledger.used(self.person_id, self.day);
        if used > 0.0 {
            self.hour = used;
        }

        let chunk = (capacity - used).min(self.remaining);
        let segment = Segment::new(self.task_id, self.person_id, self.day, self.hour, chunk);

        self.remaining -= chunk;
        self.ledger.consume(self.person_id, self.day, chunk);

        self.hour += chunk;
        if self.hour >= capacity {
            self.day += 1;
            self.hour = 0.0;
        }

        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn placements(segments: &[Segment]) -> Vec<(u32, f64, f64)> {
        segments
            .iter()
            .map(|s| (s.day, s.start_hour, s.duration))
            .collect()
    }

    #[test]
    fn test_fits_in_one_day() {
        let mut ledger = CapacityLedger::default();
        let assignment = Assignment::new("alice", 3.0);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(placements(&segments), vec![(1, 0.0, 3.0)]);
        assert_eq!(segments[0].task_id, "T1");
        assert_eq!(segments[0].person_id, "alice");
        assert_eq!(ledger.used("alice", 1), 3.0);
    }

    #[test]
    fn test_day_rollover() {
        let mut ledger = CapacityLedger::default();
        let assignment = Assignment::new("alice", 10.0);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(placements(&segments), vec![(1, 0.0, 8.0), (2, 0.0, 2.0)]);
    }

    #[test]
    fn test_resumes_where_day_left_off() {
        let mut ledger = CapacityLedger::default();
        ledger.consume("alice", 1, 5.0);
        let assignment = Assignment::new("alice", 2.0);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(placements(&segments), vec![(1, 5.0, 2.0)]);
        assert_eq!(ledger.used("alice", 1), 7.0);
    }

    #[test]
    fn test_skips_full_days() {
        let mut ledger = CapacityLedger::default();
        ledger.consume("alice", 1, 8.0);
        ledger.consume("alice", 2, 8.0);
        ledger.consume("alice", 3, 6.0);
        let assignment = Assignment::new("alice", 5.0);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(placements(&segments), vec![(3, 6.0, 2.0), (4, 0.0, 3.0)]);
    }

    #[test]
    fn test_fills_gap_left_by_earlier_days() {
        // Day 1 partly used, day 2 full: the allocation starts on day 1.
        let mut ledger = CapacityLedger::default();
        ledger.consume("alice", 1, 4.0);
        ledger.consume("alice", 2, 8.0);
        let assignment = Assignment::new("alice", 6.0);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(placements(&segments), vec![(1, 4.0, 4.0), (3, 0.0, 2.0)]);
    }

    #[test]
    fn test_zero_hours_yields_nothing() {
        let mut ledger = CapacityLedger::default();
        let assignment = Assignment::new("alice", 0.0);
        assert_eq!(ledger.allocate("T1", &assignment).count(), 0);
        assert_eq!(ledger.days_for("alice").count(), 0);
    }

    #[test]
    fn test_fractional_hours() {
        let mut ledger = CapacityLedger::default();
        ledger.consume("alice", 1, 6.5);
        let assignment = Assignment::new("alice", 2.5);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(placements(&segments), vec![(1, 6.5, 1.5), (2, 0.0, 1.0)]);
    }

    #[test]
    fn test_multi_day_assignment() {
        let mut ledger = CapacityLedger::default();
        let assignment = Assignment::new("alice", 20.0);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(
            placements(&segments),
            vec![(1, 0.0, 8.0), (2, 0.0, 8.0), (3, 0.0, 4.0)]
        );
    }

    #[test]
    fn test_lazy_progress() {
        let mut ledger = CapacityLedger::default();
        let assignment = Assignment::new("alice", 12.0);
        let mut alloc = ledger.allocate("T1", &assignment);

        assert_eq!(alloc.remaining(), 12.0);
        let first = alloc.next().unwrap();
        assert_eq!(first.duration, 8.0);
        assert_eq!(alloc.remaining(), 4.0);
        assert_eq!(alloc.current_day(), 2);
        assert!(alloc.next().is_some());
        assert!(alloc.next().is_none());
    }

    #[test]
    fn test_custom_capacity() {
        let mut ledger = CapacityLedger::new(6.0);
        let assignment = Assignment::new("alice", 10.0);
        let segments: Vec<_> = ledger.allocate("T1", &assignment).collect();

        assert_eq!(placements(&segments), vec![(1, 0.0, 6.0), (2, 0.0, 4.0)]);
    }
}
