//! Timeline segment model.
//!
//! A segment is one capacity-fitting chunk of an assignment's hours,
//! placed on a specific person's day at a specific start hour.
//!
//! # Time Representation
//! Days are 1-based. Hours are offsets within a single working day,
//! `0 <= start_hour` and `start_hour + duration <= day capacity`.

use serde::{Deserialize, Serialize};

/// A (day, hour) coordinate on the timeline.
///
/// Ordered lexicographically: day first, then hour.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct DayHour {
    /// 1-based day number (0 only for the origin of an empty span).
    pub day: u32,
    /// Hour offset within the day.
    pub hour: f64,
}

impl DayHour {
    /// Creates a new coordinate.
    pub fn new(day: u32, hour: f64) -> Self {
        Self { day, hour }
    }
}

/// One contiguous chunk of work on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Owning task ID.
    pub task_id: String,
    /// Person doing the work.
    pub person_id: String,
    /// 1-based day number.
    pub day: u32,
    /// Hour offset within the day at which the chunk starts.
    pub start_hour: f64,
    /// Hours of work in this chunk (> 0).
    pub duration: f64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(
        task_id: impl Into<String>,
        person_id: impl Into<String>,
        day: u32,
        start_hour: f64,
        duration: f64,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            person_id: person_id.into(),
            day,
            start_hour,
            duration,
        }
    }

    /// Hour offset at which the chunk ends.
    #[inline]
    pub fn end_hour(&self) -> f64 {
        self.start_hour + self.duration
    }

    /// Start coordinate.
    #[inline]
    pub fn start(&self) -> DayHour {
        DayHour::new(self.day, self.start_hour)
    }

    /// End coordinate (same day, hour after the last worked hour).
    #[inline]
    pub fn end(&self) -> DayHour {
        DayHour::new(self.day, self.end_hour())
    }
}
