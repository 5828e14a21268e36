//! Dataset generator seam
//!
//! A request layer selects a generator by its method name and hands it the raw
//! `rows` and `params` JSON. [`EdScenarioGenerator`] is the agent-based ED
//! scenario behind the `"agent"` method.

use serde_json::Value;
use tracing::instrument;

use crate::simulation::{generate, GenerationParams, SimulationResult, SimulationTables};

/// A synthetic dataset generator addressed by method name
pub trait DatasetGenerator {
    /// What one call produces
    type Output;

    /// Method name the generator is registered under
    fn method(&self) -> &'static str;

    /// Coerce the raw request values and generate
    fn generate(&self, rows: Option<&Value>, params: Option<&Value>) -> SimulationResult<Self::Output>;
}

/// Agent-based emergency department scenario generator
#[derive(Debug, Clone, Copy, Default)]
pub struct EdScenarioGenerator;

impl EdScenarioGenerator {
    /// Method name used to select this generator
    pub const METHOD: &'static str = "agent";
}

impl DatasetGenerator for EdScenarioGenerator {
    type Output = SimulationTables;

    fn method(&self) -> &'static str {
        Self::METHOD
    }

    #[instrument(skip_all, fields(method = Self::METHOD))]
    fn generate(&self, rows: Option<&Value>, params: Option<&Value>) -> SimulationResult<SimulationTables> {
        let (num_patients, params) = GenerationParams::from_json(rows, params)?;
        generate(num_patients, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationError;
    use serde_json::json;

    #[test]
    fn test_method_name() {
        assert_eq!(EdScenarioGenerator.method(), "agent");
    }

    #[test]
    fn test_generate_from_request_json() {
        let tables = EdScenarioGenerator
            .generate(Some(&json!("40")), Some(&json!({"staffCount": 4, "days": "2", "seed": 3})))
            .unwrap();
        assert_eq!(tables.patients.len(), 40);
        assert_eq!(tables.staff.len(), 4 * 2 * 2);
        assert_eq!(tables.seed, 3);
    }

    #[test]
    fn test_coercion_failure_is_configuration_error() {
        let result = EdScenarioGenerator.generate(Some(&json!(10)), Some(&json!({"days": "a week"})));
        assert!(matches!(result, Err(SimulationError::ConfigurationError(_))));
    }

    #[test]
    fn test_non_positive_rows_is_invalid_argument() {
        let result = EdScenarioGenerator.generate(Some(&json!(0)), None);
        assert!(matches!(result, Err(SimulationError::InvalidArgument(_))));
    }
}
