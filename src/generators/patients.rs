//! Patient table generation
//!
//! Combines the arrival process, clinical sampling and the timing model into
//! complete patient rows. Per patient, draws happen in a fixed order: complaint,
//! triage level, triage delay, stay duration, demographics, disposition, staff.

use tracing::{debug, instrument};

use crate::generators::{Arrival, ClinicalAssignment, ResourceDurationModel};
use crate::records::{hours_between, PatientRecord};
use crate::simulation::{RandomSource, SimulationError, SimulationResult};
use crate::types::StaffId;

/// Builds patient rows from numbered arrivals
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientGenerator {
    clinical: ClinicalAssignment,
    durations: ResourceDurationModel,
}

impl PatientGenerator {
    /// Create a patient generator
    pub fn new() -> Self {
        Self { clinical: ClinicalAssignment::new(), durations: ResourceDurationModel::new() }
    }

    /// Build one row per arrival, keeping arrival order
    ///
    /// `primary_staff_id` is drawn uniformly from `staff_ids`.
    #[instrument(skip_all, fields(patients = arrivals.len(), staff = staff_ids.len()))]
    pub fn generate(
        &self,
        arrivals: &[Arrival],
        staff_ids: &[StaffId],
        rng: &mut RandomSource,
    ) -> SimulationResult<Vec<PatientRecord>> {
        if staff_ids.is_empty() {
            return Err(SimulationError::invalid_argument(
                "At least one staff member is required to attend patients",
            ));
        }

        let records = arrivals
            .iter()
            .map(|arrival| self.generate_one(arrival, staff_ids, rng))
            .collect::<SimulationResult<Vec<_>>>()?;

        debug!("Generated {} patient records", records.len());
        Ok(records)
    }

    fn generate_one(
        &self,
        arrival: &Arrival,
        staff_ids: &[StaffId],
        rng: &mut RandomSource,
    ) -> SimulationResult<PatientRecord> {
        let assessment = self.clinical.assess(rng)?;
        let timeline = self.durations.schedule(arrival.arrival_time, assessment.triage_level, rng)?;
        let demographics = self.clinical.demographics(rng)?;
        let disposition = self.clinical.disposition(assessment.triage_level, rng);
        let primary_staff_id = *rng.choose(staff_ids)?;

        Ok(PatientRecord {
            patient_id: arrival.patient_id,
            arrival_time: arrival.arrival_time,
            age: demographics.age,
            gender: demographics.gender,
            comorbidities: demographics.comorbidities,
            chief_complaint: assessment.chief_complaint,
            triage_level: assessment.triage_level,
            triage_time: timeline.triage_time,
            discharge_time: timeline.discharge_time,
            disposition,
            primary_staff_id,
            length_of_stay_hours: hours_between(arrival.arrival_time, timeline.discharge_time),
        })
    }
}
