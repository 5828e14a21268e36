//! Staff roster generation
//!
//! Each staff member keeps one role for the whole window and works both daily
//! shifts: day `[07:00, 19:00)` and night `[19:00, 07:00 next day)`. Rows are
//! emitted per staff member, day by day, day shift first.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use tracing::{debug, instrument};

use crate::records::{ShiftAssignment, SHIFT_HOURS};
use crate::simulation::{RandomSource, SimulationError, SimulationResult, SimulationWindow};
use crate::types::{ShiftKind, StaffId, StaffRole};

/// Builds the shift roster over a simulation window
#[derive(Debug, Clone, Copy)]
pub struct StaffRosterGenerator {
    window: SimulationWindow,
}

impl StaffRosterGenerator {
    /// Create a roster generator for `window`
    pub fn new(window: SimulationWindow) -> Self {
        Self { window }
    }

    /// Generate `2 × days` shifts for every staff id, in id order
    #[instrument(skip_all, fields(staff = staff_ids.len(), days = self.window.days()))]
    pub fn generate(
        &self,
        staff_ids: &[StaffId],
        rng: &mut RandomSource,
    ) -> SimulationResult<Vec<ShiftAssignment>> {
        if staff_ids.is_empty() {
            return Err(SimulationError::invalid_argument(
                "Staff count must be greater than 0",
            ));
        }

        let days = self.window.days();
        let mut shifts = Vec::with_capacity(staff_ids.len() * days as usize * 2);

        for &staff_id in staff_ids {
            let role = *rng.choose(&StaffRole::ALL)?;
            for day in 0..days {
                for kind in [ShiftKind::Day, ShiftKind::Night] {
                    let shift_start = self.shift_start(day, kind)?;
                    shifts.push(ShiftAssignment {
                        staff_id,
                        role,
                        shift_start,
                        shift_end: shift_start + Duration::hours(SHIFT_HOURS),
                    });
                }
            }
        }

        debug!("Generated {} roster rows", shifts.len());
        Ok(shifts)
    }

    fn shift_start(&self, day: u32, kind: ShiftKind) -> SimulationResult<DateTime<Utc>> {
        let time = NaiveTime::from_hms_opt(kind.start_hour(), 0, 0).ok_or_else(|| {
            SimulationError::invalid_argument(format!("Invalid shift hour {}", kind.start_hour()))
        })?;
        Ok(Utc.from_utc_datetime(&self.window.date_of_day(day).and_time(time)))
    }
}
