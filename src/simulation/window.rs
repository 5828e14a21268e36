//! Simulated calendar span
//!
//! This module contains the [`SimulationWindow`] value object that bounds every
//! arrival and shift produced by one invocation.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::simulation::{SimulationError, SimulationResult};

/// Half-open calendar interval `[start, start + days)` covered by a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationWindow {
    start: DateTime<Utc>,
    days: u32,
}

impl SimulationWindow {
    /// Create a window starting at `start` and lasting `days` whole days
    pub fn new(start: DateTime<Utc>, days: usize) -> SimulationResult<Self> {
        if days == 0 {
            return Err(SimulationError::invalid_argument(
                "Simulation window must span at least one day",
            ));
        }
        let too_long =
            || SimulationError::invalid_argument(format!("Simulation window too long: {} days", days));
        let days = u32::try_from(days).map_err(|_| too_long())?;
        // the last night shift runs into the day after the window
        start
            .checked_add_signed(Duration::days(i64::from(days) + 1))
            .ok_or_else(too_long)?;
        Ok(Self { start, days })
    }

    /// Create a window starting at midnight UTC of `date`
    pub fn starting_on(date: NaiveDate, days: usize) -> SimulationResult<Self> {
        let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        Self::new(start, days)
    }

    /// First instant of the window
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Number of simulated days
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Exclusive end instant of the window
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.duration()
    }

    /// Total length of the window
    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
    }

    /// Whether `instant` falls inside `[start, end)`
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end()
    }

    /// Calendar date of the zero-based simulated day `day`
    pub fn date_of_day(&self, day: u32) -> NaiveDate {
        (self.start + Duration::days(i64::from(day))).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_window_end_is_start_plus_days() {
        let window = SimulationWindow::starting_on(jan_15(), 7).unwrap();
        assert_eq!(window.start(), Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(window.end(), Utc.with_ymd_and_hms(2025, 1, 22, 0, 0, 0).unwrap());
        assert_eq!(window.days(), 7);
    }

    #[test]
    fn test_window_is_half_open() {
        let window = SimulationWindow::starting_on(jan_15(), 1).unwrap();
        assert!(window.contains(window.start()));
        assert!(window.contains(window.end() - Duration::seconds(1)));
        assert!(!window.contains(window.end()));
        assert!(!window.contains(window.start() - Duration::seconds(1)));
    }

    #[test]
    fn test_zero_day_window_is_rejected() {
        let result = SimulationWindow::starting_on(jan_15(), 0);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }

    #[test]
    fn test_unrepresentable_window_is_rejected() {
        let result = SimulationWindow::starting_on(jan_15(), 100_000_000);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));

        let near_max = (DateTime::<Utc>::MAX_UTC - Duration::days(1)).date_naive();
        let result = SimulationWindow::starting_on(near_max, 1);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }

    #[test]
    fn test_date_of_day_crosses_month_boundary() {
        let window =
            SimulationWindow::starting_on(NaiveDate::from_ymd_opt(2025, 1, 30).unwrap(), 3).unwrap();
        assert_eq!(window.date_of_day(2), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    }
}
