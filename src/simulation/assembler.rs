//! Output assembly
//!
//! Combines the patient, roster and bed utilization rows into one
//! [`SimulationTables`] value and checks the cross-table references before
//! handing it out.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::records::{PatientRecord, ResourceUsageRecord, ShiftAssignment, Table};
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{PatientId, StaffId};

/// The three tables of one ED scenario, always produced together
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTables {
    /// One row per simulated patient, in arrival order
    pub patients: Table<PatientRecord>,
    /// Shift roster, per staff member and day
    pub staff: Table<ShiftAssignment>,
    /// One bed utilization row per patient
    pub resources: Table<ResourceUsageRecord>,
    /// Seed the tables were generated from
    pub seed: u64,
}

impl SimulationTables {
    /// Distinct staff ids present in the roster, in first-seen order
    pub fn staff_ids(&self) -> Vec<StaffId> {
        let mut seen = HashSet::new();
        self.staff
            .iter()
            .map(|shift| shift.staff_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Check every cross-table reference
    ///
    /// - patient ids are unique
    /// - every `primary_staff_id` exists in the roster
    /// - resource rows and patient rows are in one-to-one correspondence
    pub fn verify_integrity(&self) -> SimulationResult<()> {
        let mut patient_ids: HashSet<PatientId> = HashSet::with_capacity(self.patients.len());
        for patient in &self.patients {
            if !patient_ids.insert(patient.patient_id) {
                return Err(SimulationError::integrity_error(format!(
                    "Duplicate patient id {}",
                    patient.patient_id
                )));
            }
        }

        let staff_ids: HashSet<StaffId> = self.staff.iter().map(|s| s.staff_id).collect();
        if let Some(orphan) = self.patients.iter().find(|p| !staff_ids.contains(&p.primary_staff_id)) {
            return Err(SimulationError::integrity_error(format!(
                "Patient {} references unknown staff member {}",
                orphan.patient_id, orphan.primary_staff_id
            )));
        }

        let mut usage_counts: HashMap<PatientId, usize> = HashMap::with_capacity(self.resources.len());
        for usage in &self.resources {
            if !patient_ids.contains(&usage.patient_id) {
                return Err(SimulationError::integrity_error(format!(
                    "Resource usage references unknown patient {}",
                    usage.patient_id
                )));
            }
            *usage_counts.entry(usage.patient_id).or_insert(0) += 1;
        }

        if let Some((patient_id, count)) = usage_counts.iter().find(|(_, count)| **count > 1) {
            return Err(SimulationError::integrity_error(format!(
                "Patient {} has {} resource usage rows",
                patient_id, count
            )));
        }

        if usage_counts.len() != patient_ids.len() {
            return Err(SimulationError::integrity_error(format!(
                "{} of {} patients have no resource usage row",
                patient_ids.len() - usage_counts.len(),
                patient_ids.len()
            )));
        }

        Ok(())
    }
}

/// Builds [`SimulationTables`] from generated rows
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputAssembler;

impl OutputAssembler {
    /// Wrap the rows into tables and verify their references
    ///
    /// On failure no tables are returned.
    pub fn assemble(
        patients: Vec<PatientRecord>,
        staff: Vec<ShiftAssignment>,
        resources: Vec<ResourceUsageRecord>,
        seed: u64,
    ) -> SimulationResult<SimulationTables> {
        let tables = SimulationTables {
            patients: Table::new(patients),
            staff: Table::new(staff),
            resources: Table::new(resources),
            seed,
        };

        tables.verify_integrity()?;

        debug!(
            "Assembled {} patient, {} staff and {} resource rows",
            tables.patients.len(),
            tables.staff.len(),
            tables.resources.len()
        );
        Ok(tables)
    }
}
