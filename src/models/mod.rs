//! Workload timeline domain models.
//!
//! Input types describe what needs doing (tasks with person-hour
//! assignments); output types describe where the work landed
//! (segments on a day/person grid, task spans, workload totals).
//!
//! # Domain Mappings
//!
//! | workload-timeline | Project Management | Operations |
//! |-------------------|--------------------|------------|
//! | Task | Work item | Job |
//! | Assignment | Staffing line | Crew allocation |
//! | Segment | Gantt bar | Shift slot |
//! | TaskSpan | Planned start/finish | Job window |

mod segment;
mod task;
mod timeline;

pub use segment::{DayHour, Segment};
pub use task::{Assignment, Task};
pub use timeline::{TaskSpan, TimelineResult};
