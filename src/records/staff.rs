//! Staff roster rows

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::records::TableRecord;
use crate::types::{ShiftKind, StaffId, StaffRole};

/// Length of every shift
pub const SHIFT_HOURS: i64 = 12;

/// One shift worked by one staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Staff member working the shift
    pub staff_id: StaffId,
    /// Role of the staff member, constant across the roster
    pub role: StaffRole,
    /// Inclusive start of the shift
    pub shift_start: DateTime<Utc>,
    /// Exclusive end of the shift
    pub shift_end: DateTime<Utc>,
}

impl ShiftAssignment {
    /// Whether this is the day or the night shift
    pub fn kind(&self) -> ShiftKind {
        if self.shift_start.hour() == ShiftKind::Night.start_hour() {
            ShiftKind::Night
        } else {
            ShiftKind::Day
        }
    }

    /// Length of the shift
    pub fn duration(&self) -> Duration {
        self.shift_end - self.shift_start
    }
}

impl TableRecord for ShiftAssignment {
    const TABLE_NAME: &'static str = "staff";
    const COLUMNS: &'static [&'static str] = &["staff_id", "role", "shift_start", "shift_end"];
}
