//! Generation request parameters
//!
//! [`GenerationParams`] is the typed form of the `{ staff_count, days }` request
//! config. [`GenerationParams::from_json`] accepts the loosely-typed JSON a
//! request layer receives (numbers, numeric strings, camelCase keys) and coerces
//! it, failing with [`SimulationError::ConfigurationError`] when a value cannot be
//! read as an integer.

use chrono::NaiveDate;
use serde_json::Value;

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{default_start_date, defaults, SimulationConfig};

/// Parameters of one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Number of staff members; must be positive
    pub staff_count: i64,
    /// Number of simulated days; must be positive
    pub days: i64,
    /// Seed for the invocation's random source; drawn when absent
    pub seed: Option<u64>,
    /// First simulated day
    pub start_date: NaiveDate,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            staff_count: defaults::STAFF_COUNT as i64,
            days: defaults::DAYS as i64,
            seed: None,
            start_date: default_start_date(),
        }
    }
}

impl GenerationParams {
    /// Set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Coerce request JSON into a patient count and parameters
    ///
    /// A missing `rows` defaults to 1000 patients and missing keys in `params`
    /// take their defaults. Recognized keys: `staffCount`/`staff_count`, `days`,
    /// `seed`, `startDate`/`start_date`.
    pub fn from_json(rows: Option<&Value>, params: Option<&Value>) -> SimulationResult<(i64, Self)> {
        let num_patients = match rows {
            Some(value) => coerce_integer("rows", value)?,
            None => defaults::NUM_PATIENTS as i64,
        };

        let mut parsed = Self::default();
        let params = match params {
            None | Some(Value::Null) => return Ok((num_patients, parsed)),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(SimulationError::configuration_error(format!(
                    "params must be an object, got {}",
                    other
                )))
            }
        };

        if let Some(value) = params.get("staffCount").or_else(|| params.get("staff_count")) {
            parsed.staff_count = coerce_integer("staffCount", value)?;
        }
        if let Some(value) = params.get("days") {
            parsed.days = coerce_integer("days", value)?;
        }
        if let Some(value) = params.get("seed") {
            if !value.is_null() {
                let seed = coerce_integer("seed", value)?;
                parsed.seed = Some(u64::try_from(seed).map_err(|_| {
                    SimulationError::configuration_error(format!("seed must be non-negative, got {}", seed))
                })?);
            }
        }
        if let Some(value) = params.get("startDate").or_else(|| params.get("start_date")) {
            parsed.start_date = coerce_date("startDate", value)?;
        }

        Ok((num_patients, parsed))
    }

    /// Validate counts and build a [`SimulationConfig`] for `num_patients`
    ///
    /// Non-positive counts fail with [`SimulationError::InvalidArgument`].
    pub fn to_config(&self, num_patients: i64) -> SimulationResult<SimulationConfig> {
        Ok(SimulationConfig {
            num_patients: positive("num_patients", num_patients)?,
            staff_count: positive("staff_count", self.staff_count)?,
            days: positive("days", self.days)?,
            start_date: self.start_date,
            seed: self.seed,
            ..SimulationConfig::default()
        })
    }
}

fn positive(name: &str, value: i64) -> SimulationResult<usize> {
    if value <= 0 {
        return Err(SimulationError::invalid_argument(format!(
            "{} must be greater than 0, got {}",
            name, value
        )));
    }
    usize::try_from(value).map_err(|_| {
        SimulationError::invalid_argument(format!("{} is too large: {}", name, value))
    })
}

/// Read an integer the way a lenient request layer would
///
/// Integers pass through, floats are truncated toward zero, and strings are
/// parsed after trimming. Everything else is a configuration error.
fn coerce_integer(name: &str, value: &Value) -> SimulationResult<i64> {
    let malformed = || {
        SimulationError::configuration_error(format!("{} must be an integer, got {}", name, value))
    };

    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Ok(integer)
            } else {
                number
                    .as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
                    .ok_or_else(malformed)
            }
        }
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}

fn coerce_date(name: &str, value: &Value) -> SimulationResult<NaiveDate> {
    value
        .as_str()
        .and_then(|text| NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok())
        .ok_or_else(|| {
            SimulationError::configuration_error(format!("{} must be a YYYY-MM-DD date, got {}", name, value))
        })
}
