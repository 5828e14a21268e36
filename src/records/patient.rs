//! Patient table rows
//!
//! This module contains the [`PatientRecord`] row and the [`Comorbidities`] set
//! rendered into its `comorbidities` column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::records::TableRecord;
use crate::types::{ChiefComplaint, Comorbidity, Disposition, Gender, PatientId, StaffId, TriageLevel};

/// Literal written when a patient has no comorbidities
pub const NO_COMORBIDITIES: &str = "None";

/// Distinct comorbidities of one patient, in draw order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Comorbidities(Vec<Comorbidity>);

impl Comorbidities {
    /// A patient without comorbidities
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Wrap an already-distinct list of conditions
    pub fn from_conditions(conditions: Vec<Comorbidity>) -> Self {
        Self(conditions)
    }

    /// Conditions in draw order
    pub fn conditions(&self) -> &[Comorbidity] {
        &self.0
    }

    /// Whether the patient has no comorbidities
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Comorbidities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{}", NO_COMORBIDITIES);
        }
        for (i, condition) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

impl FromStr for Comorbidities {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == NO_COMORBIDITIES {
            return Ok(Self::none());
        }
        let conditions = s
            .split(',')
            .map(|part| part.trim().parse::<Comorbidity>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(conditions))
    }
}

impl Serialize for Comorbidities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Comorbidities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One simulated ED visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Sequential identifier in arrival order
    pub patient_id: PatientId,
    /// Instant the patient arrived, inside the simulation window
    pub arrival_time: DateTime<Utc>,
    /// Age in years
    pub age: u8,
    /// Recorded gender
    pub gender: Gender,
    /// Chronic conditions, or `None`
    pub comorbidities: Comorbidities,
    /// Presenting complaint
    pub chief_complaint: ChiefComplaint,
    /// Acuity assigned at triage
    pub triage_level: TriageLevel,
    /// Instant triage completed
    pub triage_time: DateTime<Utc>,
    /// Instant the patient left the department
    pub discharge_time: DateTime<Utc>,
    /// Outcome of the visit
    pub disposition: Disposition,
    /// Staff member responsible for the patient
    pub primary_staff_id: StaffId,
    /// Hours between arrival and discharge
    pub length_of_stay_hours: f64,
}

impl PatientRecord {
    /// Whether the arrival, triage and discharge instants are in order
    pub fn is_chronological(&self) -> bool {
        self.arrival_time <= self.triage_time && self.triage_time <= self.discharge_time
    }
}

impl TableRecord for PatientRecord {
    const TABLE_NAME: &'static str = "patients";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "arrival_time",
        "age",
        "gender",
        "comorbidities",
        "chief_complaint",
        "triage_level",
        "triage_time",
        "discharge_time",
        "disposition",
        "primary_staff_id",
        "length_of_stay_hours",
    ];
}

/// Hours elapsed between two instants, with second precision
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_record() -> PatientRecord {
        let arrival = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        let triage = arrival + Duration::minutes(10);
        let discharge = triage + Duration::minutes(110);
        PatientRecord {
            patient_id: PatientId(1),
            arrival_time: arrival,
            age: 34,
            gender: Gender::Female,
            comorbidities: Comorbidities::from_conditions(vec![
                Comorbidity::Asthma,
                Comorbidity::Diabetes,
            ]),
            chief_complaint: ChiefComplaint::Headache,
            triage_level: TriageLevel::new(4).unwrap(),
            triage_time: triage,
            discharge_time: discharge,
            disposition: Disposition::Discharged,
            primary_staff_id: StaffId(2),
            length_of_stay_hours: hours_between(arrival, discharge),
        }
    }

    #[test]
    fn test_comorbidities_display() {
        assert_eq!(Comorbidities::none().to_string(), "None");
        let two = Comorbidities::from_conditions(vec![Comorbidity::Copd, Comorbidity::Hypertension]);
        assert_eq!(two.to_string(), "COPD, Hypertension");
    }

    #[test]
    fn test_comorbidities_parse() {
        assert!("None".parse::<Comorbidities>().unwrap().is_none());
        let parsed: Comorbidities = "Asthma, Diabetes".parse().unwrap();
        assert_eq!(parsed.conditions(), &[Comorbidity::Asthma, Comorbidity::Diabetes]);
        assert!("Asthma, Gout".parse::<Comorbidities>().is_err());
    }

    #[test]
    fn test_length_of_stay_hours() {
        let record = sample_record();
        assert!((record.length_of_stay_hours - 2.0).abs() < 1e-9);
        assert!(record.is_chronological());
    }

    #[test]
    fn test_serialized_header_matches_columns() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_record()).unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header = data.lines().next().unwrap();
        assert_eq!(header, PatientRecord::COLUMNS.join(","));
    }

    #[test]
    fn test_serialized_row_values() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["patient_id"], "P0001");
        assert_eq!(json["comorbidities"], "Asthma, Diabetes");
        assert_eq!(json["chief_complaint"], "Headache");
        assert_eq!(json["triage_level"], 4);
        assert_eq!(json["primary_staff_id"], "S002");
        assert_eq!(json["arrival_time"], "2025-01-15T08:00:00Z");
    }
}
