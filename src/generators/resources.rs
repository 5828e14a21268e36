//! Bed utilization generation
//!
//! Every patient gets an independently drawn bed for the span between triage and
//! discharge. Occupancy is not tracked, so two patients may hold the same bed at
//! the same time.

use tracing::{debug, instrument};

use crate::records::{PatientRecord, ResourceUsageRecord};
use crate::simulation::{RandomSource, SimulationResult};
use crate::types::{BedId, ResourceType};

/// Assigns beds and utilization windows to patients
#[derive(Debug, Clone)]
pub struct ResourceUsageGenerator {
    beds: Vec<BedId>,
}

impl Default for ResourceUsageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceUsageGenerator {
    /// Create a generator over the standard five-bed pool
    pub fn new() -> Self {
        Self { beds: BedId::pool() }
    }

    /// Beds that can be assigned
    pub fn beds(&self) -> &[BedId] {
        &self.beds
    }

    /// One utilization row per patient, in patient order
    #[instrument(skip_all, fields(patients = patients.len()))]
    pub fn generate(
        &self,
        patients: &[PatientRecord],
        rng: &mut RandomSource,
    ) -> SimulationResult<Vec<ResourceUsageRecord>> {
        let records = patients
            .iter()
            .map(|patient| -> SimulationResult<ResourceUsageRecord> {
                Ok(ResourceUsageRecord {
                    patient_id: patient.patient_id,
                    resource_id: *rng.choose(&self.beds)?,
                    resource_type: ResourceType::EdBed,
                    start_utilization_time: patient.triage_time,
                    end_utilization_time: patient.discharge_time,
                })
            })
            .collect::<SimulationResult<Vec<_>>>()?;

        debug!("Assigned {} bed utilization windows", records.len());
        Ok(records)
    }
}
