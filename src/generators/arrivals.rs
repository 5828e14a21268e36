//! Patient arrival process
//!
//! Arrivals are drawn uniformly over the simulation window, sorted, and only then
//! numbered. Patient ids therefore follow arrival order by construction.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

use crate::simulation::{RandomSource, SimulationError, SimulationResult, SimulationWindow};
use crate::types::PatientId;

/// A numbered patient arrival
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// Identifier assigned from the arrival's rank
    pub patient_id: PatientId,
    /// Instant of arrival
    pub arrival_time: DateTime<Utc>,
}

/// Uniform arrival process over a simulation window
#[derive(Debug, Clone, Copy)]
pub struct ArrivalProcess {
    window: SimulationWindow,
}

impl ArrivalProcess {
    /// Create an arrival process for `window`
    pub fn new(window: SimulationWindow) -> Self {
        Self { window }
    }

    /// Draw `num_patients` arrivals in chronological order
    ///
    /// Instants have one-second resolution and lie in `[start, end)`.
    #[instrument(skip(self, rng), fields(days = self.window.days()))]
    pub fn generate(&self, num_patients: usize, rng: &mut RandomSource) -> SimulationResult<Vec<Arrival>> {
        if num_patients == 0 {
            return Err(SimulationError::invalid_argument(
                "Number of patients must be greater than 0",
            ));
        }

        let window_seconds = self.window.duration().num_seconds();
        let mut instants: Vec<DateTime<Utc>> = (0..num_patients)
            .map(|_| self.window.start() + Duration::seconds(rng.uniform_exclusive(0, window_seconds)))
            .collect();

        instants.sort();

        let arrivals: Vec<Arrival> = instants
            .into_iter()
            .enumerate()
            .map(|(index, arrival_time)| Arrival { patient_id: PatientId::from_index(index), arrival_time })
            .collect();

        debug!("Drew {} arrivals", arrivals.len());
        Ok(arrivals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window(days: usize) -> SimulationWindow {
        SimulationWindow::starting_on(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(), days).unwrap()
    }

    #[test]
    fn test_arrivals_are_sorted_and_numbered() {
        let mut rng = RandomSource::from_seed(42);
        let arrivals = ArrivalProcess::new(window(7)).generate(250, &mut rng).unwrap();

        assert_eq!(arrivals.len(), 250);
        for (index, arrival) in arrivals.iter().enumerate() {
            assert_eq!(arrival.patient_id, PatientId::from_index(index));
        }
        for pair in arrivals.windows(2) {
            assert!(pair[0].arrival_time <= pair[1].arrival_time);
        }
    }

    #[test]
    fn test_arrivals_stay_inside_window() {
        let window = window(2);
        let mut rng = RandomSource::from_seed(7);
        let arrivals = ArrivalProcess::new(window).generate(1000, &mut rng).unwrap();
        assert!(arrivals.iter().all(|a| window.contains(a.arrival_time)));
    }

    #[test]
    fn test_zero_patients_is_invalid() {
        let mut rng = RandomSource::from_seed(1);
        let result = ArrivalProcess::new(window(1)).generate(0, &mut rng);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }

    #[test]
    fn test_single_arrival() {
        let mut rng = RandomSource::from_seed(5);
        let arrivals = ArrivalProcess::new(window(1)).generate(1, &mut rng).unwrap();
        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].patient_id.to_string(), "P0001");
    }
}
