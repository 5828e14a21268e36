//! Resource utilization rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::TableRecord;
use crate::types::{BedId, PatientId, ResourceType};

/// Bed occupied by one patient between triage and discharge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsageRecord {
    /// Patient occupying the resource
    pub patient_id: PatientId,
    /// Bed drawn from the pool
    pub resource_id: BedId,
    /// Kind of resource
    pub resource_type: ResourceType,
    /// Start of occupation (the patient's triage time)
    pub start_utilization_time: DateTime<Utc>,
    /// End of occupation (the patient's discharge time)
    pub end_utilization_time: DateTime<Utc>,
}

impl ResourceUsageRecord {
    /// Whether two utilization windows on the same bed overlap
    ///
    /// The generator does not prevent this; it is exposed for analysis only.
    pub fn overlaps(&self, other: &ResourceUsageRecord) -> bool {
        self.resource_id == other.resource_id
            && self.start_utilization_time < other.end_utilization_time
            && other.start_utilization_time < self.end_utilization_time
    }
}

impl TableRecord for ResourceUsageRecord {
    const TABLE_NAME: &'static str = "resources";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "resource_id",
        "resource_type",
        "start_utilization_time",
        "end_utilization_time",
    ];
}
