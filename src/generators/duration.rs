//! Visit timing model
//!
//! Maps a triage level to a stay-duration range and derives the triage and
//! discharge instants of a visit from its arrival.

use chrono::{DateTime, Duration, Utc};

use crate::simulation::{RandomSource, SimulationError, SimulationResult};
use crate::types::TriageLevel;

/// Inclusive range of minutes between arrival and triage
pub const TRIAGE_DELAY_MINUTES: (i64, i64) = (5, 30);

/// Triage and discharge instants of one visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitTimeline {
    /// Instant triage completed
    pub triage_time: DateTime<Utc>,
    /// Instant the patient left
    pub discharge_time: DateTime<Utc>,
}

/// Triage-level driven stay durations
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceDurationModel;

impl ResourceDurationModel {
    /// Create the model
    pub fn new() -> Self {
        Self
    }

    /// Stay-duration range in minutes for a raw triage level, as `[low, high)`
    pub fn stay_range_minutes(&self, level: u8) -> SimulationResult<(i64, i64)> {
        match level {
            1 => Ok((180, 360)),
            2 => Ok((120, 240)),
            3 => Ok((90, 180)),
            4 => Ok((60, 120)),
            5 => Ok((30, 90)),
            other => Err(SimulationError::invalid_argument(format!(
                "Triage level must be between 1 and 5, got {}",
                other
            ))),
        }
    }

    /// Minutes from arrival to triage
    pub fn triage_delay(&self, rng: &mut RandomSource) -> Duration {
        Duration::minutes(rng.uniform_inclusive(TRIAGE_DELAY_MINUTES.0, TRIAGE_DELAY_MINUTES.1))
    }

    /// Time between triage and discharge for `level`
    pub fn stay_duration(&self, level: TriageLevel, rng: &mut RandomSource) -> SimulationResult<Duration> {
        let (low, high) = self.stay_range_minutes(level.value())?;
        Ok(Duration::minutes(rng.uniform_exclusive(low, high)))
    }

    /// Derive the triage and discharge instants for an arrival
    pub fn schedule(
        &self,
        arrival_time: DateTime<Utc>,
        level: TriageLevel,
        rng: &mut RandomSource,
    ) -> SimulationResult<VisitTimeline> {
        let triage_time = arrival_time + self.triage_delay(rng);
        let discharge_time = triage_time + self.stay_duration(level, rng)?;
        Ok(VisitTimeline { triage_time, discharge_time })
    }
}
