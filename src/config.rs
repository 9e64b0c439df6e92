use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Hours one person can work in one day unless configured otherwise.
pub const DEFAULT_DAY_CAPACITY_HOURS: f64 = 8.0;

/// Configuration for a timeline engine.
///
/// The defaults reproduce the standard 8-hour day with no day ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Hours per person-day. Must be finite and positive.
    pub day_capacity_hours: f64,
    /// Optional ceiling on the day number any segment may land on.
    /// `None` = unbounded; allocation keeps rolling over until it fits.
    pub horizon_days: Option<u32>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            day_capacity_hours: DEFAULT_DAY_CAPACITY_HOURS,
            horizon_days: None,
        }
    }
}

impl TimelineConfig {
    /// Sets the hours available per person-day.
    pub fn with_day_capacity(mut self, hours: f64) -> Self {
        self.day_capacity_hours = hours;
        self
    }

    /// Caps allocation at the given day.
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = Some(days);
        self
    }

    /// Checks that the configuration can drive an allocation.
    pub fn validate(&self) -> Result<()> {
        if !self.day_capacity_hours.is_finite() || self.day_capacity_hours <= 0.0 {
            return Err(TimelineError::InvalidConfig(format!(
                "day_capacity_hours must be finite and positive, got {}",
                self.day_capacity_hours
            )));
        }
        if self.horizon_days == Some(0) {
            return Err(TimelineError::InvalidConfig(
                "horizon_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
