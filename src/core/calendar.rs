//! Day/night clock
//!
//! Time of day lives on the circular domain [0, 1) where one full turn is a
//! day. Every time the day wraps, the season moves forward by a small fixed
//! step, also modulo 1.

use serde::{Deserialize, Serialize};

/// Coarse period of the day, used for HUD labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPeriod {
    Night,   // [0.00, 0.25)
    Morning, // [0.25, 0.50)
    Day,     // [0.50, 0.75)
    Evening, // [0.75, 1.00)
}

impl DayPeriod {
    pub fn from_time_of_day(time: f64) -> Self {
        if time < 0.25 {
            DayPeriod::Night
        } else if time < 0.5 {
            DayPeriod::Morning
        } else if time < 0.75 {
            DayPeriod::Day
        } else {
            DayPeriod::Evening
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayPeriod::Night => "Night",
            DayPeriod::Morning => "Morning",
            DayPeriod::Day => "Day",
            DayPeriod::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Time of day plus the slow seasonal phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayClock {
    time_of_day: f64,
    season: f64,
    season_step: f64,
}

impl DayClock {
    pub fn new(time_of_day: f64, season_step: f64) -> Self {
        Self {
            time_of_day: wrap_unit(time_of_day),
            season: 0.0,
            season_step,
        }
    }

    /// Move the clock forward by `delta` days.
    ///
    /// Returns how many times the day wrapped past 1.0; the season advances
    /// by `season_step` per wrap. A negative delta runs the clock backwards
    /// without touching the season. A non-finite delta leaves the clock
    /// unchanged. Constant time for any delta.
    pub fn advance(&mut self, delta: f64) -> u64 {
        if !delta.is_finite() {
            return 0;
        }
        let sum = self.time_of_day + delta;
        if sum < 1.0 {
            self.time_of_day = wrap_unit(sum);
            return 0;
        }

        let wraps = sum.floor();
        self.time_of_day = wrap_unit(sum - wraps);
        let season_gain = (self.season_step * wraps).rem_euclid(1.0);
        if season_gain.is_finite() {
            self.season = wrap_unit(self.season + season_gain);
        }
        wraps as u64
    }

    pub fn time_of_day(&self) -> f64 {
        self.time_of_day
    }

    pub fn season(&self) -> f64 {
        self.season
    }

    pub fn period(&self) -> DayPeriod {
        DayPeriod::from_time_of_day(self.time_of_day)
    }
}

/// Reduce to [0, 1). `rem_euclid` returns 1.0 for tiny negative inputs.
fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
