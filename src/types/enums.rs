//! Enumeration types for the ED scenario simulator
//!
//! This module contains the fixed categorical vocabularies used by the generators:
//! chief complaints, comorbidities, gender, disposition, staff roles, resource and
//! shift kinds, and export formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presenting complaint recorded at intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChiefComplaint {
    /// Chest pain, always triaged as high acuity
    #[serde(rename = "Chest Pain")]
    ChestPain,
    /// Headache
    #[serde(rename = "Headache")]
    Headache,
    /// Abdominal pain
    #[serde(rename = "Abdominal Pain")]
    AbdominalPain,
    /// Flu-like symptoms
    #[serde(rename = "Flu-like Symptoms")]
    FluLikeSymptoms,
    /// Severe trauma, always triage level 1
    #[serde(rename = "Severe Trauma")]
    SevereTrauma,
    /// Fracture
    #[serde(rename = "Fracture")]
    Fracture,
    /// General weakness
    #[serde(rename = "General Weakness")]
    GeneralWeakness,
}

impl ChiefComplaint {
    /// The complete complaint vocabulary, sampled uniformly
    pub const ALL: [ChiefComplaint; 7] = [
        ChiefComplaint::ChestPain,
        ChiefComplaint::Headache,
        ChiefComplaint::AbdominalPain,
        ChiefComplaint::FluLikeSymptoms,
        ChiefComplaint::SevereTrauma,
        ChiefComplaint::Fracture,
        ChiefComplaint::GeneralWeakness,
    ];
}

impl fmt::Display for ChiefComplaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChiefComplaint::ChestPain => write!(f, "Chest Pain"),
            ChiefComplaint::Headache => write!(f, "Headache"),
            ChiefComplaint::AbdominalPain => write!(f, "Abdominal Pain"),
            ChiefComplaint::FluLikeSymptoms => write!(f, "Flu-like Symptoms"),
            ChiefComplaint::SevereTrauma => write!(f, "Severe Trauma"),
            ChiefComplaint::Fracture => write!(f, "Fracture"),
            ChiefComplaint::GeneralWeakness => write!(f, "General Weakness"),
        }
    }
}

/// Chronic condition a patient may present with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Comorbidity {
    /// Hypertension
    Hypertension,
    /// Diabetes
    Diabetes,
    /// Asthma
    Asthma,
    /// Chronic obstructive pulmonary disease
    #[serde(rename = "COPD")]
    Copd,
}

impl Comorbidity {
    /// Comorbidity vocabulary sampled without replacement
    pub const ALL: [Comorbidity; 4] =
        [Comorbidity::Hypertension, Comorbidity::Diabetes, Comorbidity::Asthma, Comorbidity::Copd];
}

impl fmt::Display for Comorbidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comorbidity::Hypertension => write!(f, "Hypertension"),
            Comorbidity::Diabetes => write!(f, "Diabetes"),
            Comorbidity::Asthma => write!(f, "Asthma"),
            Comorbidity::Copd => write!(f, "COPD"),
        }
    }
}

impl FromStr for Comorbidity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hypertension" => Ok(Comorbidity::Hypertension),
            "diabetes" => Ok(Comorbidity::Diabetes),
            "asthma" => Ok(Comorbidity::Asthma),
            "copd" => Ok(Comorbidity::Copd),
            _ => Err(format!("Unknown comorbidity: {}", s)),
        }
    }
}

/// Recorded patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Final patient outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Disposition {
    /// Admitted to an inpatient unit
    Admitted,
    /// Discharged from the department
    Discharged,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Admitted => write!(f, "Admitted"),
            Disposition::Discharged => write!(f, "Discharged"),
        }
    }
}

/// Clinical role held by a staff member for the whole roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    /// Emergency physician
    #[serde(rename = "ER Physician")]
    ErPhysician,
    /// Emergency nurse
    #[serde(rename = "ER Nurse")]
    ErNurse,
    /// Physician assistant
    #[serde(rename = "Physician Assistant")]
    PhysicianAssistant,
}

impl StaffRole {
    /// Roles sampled uniformly when building the roster
    pub const ALL: [StaffRole; 3] =
        [StaffRole::ErPhysician, StaffRole::ErNurse, StaffRole::PhysicianAssistant];
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffRole::ErPhysician => write!(f, "ER Physician"),
            StaffRole::ErNurse => write!(f, "ER Nurse"),
            StaffRole::PhysicianAssistant => write!(f, "Physician Assistant"),
        }
    }
}

/// Kind of physical resource tracked in the utilization table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// Emergency department bed
    #[serde(rename = "ED Bed")]
    EdBed,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::EdBed => write!(f, "ED Bed"),
        }
    }
}

/// Which of the two daily 12-hour shifts a roster row covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    /// 07:00 to 19:00
    Day,
    /// 19:00 to 07:00 the next day
    Night,
}

impl ShiftKind {
    /// Hour of day at which the shift starts
    pub fn start_hour(&self) -> u32 {
        match self {
            ShiftKind::Day => 7,
            ShiftKind::Night => 19,
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftKind::Day => write!(f, "Day"),
            ShiftKind::Night => write!(f, "Night"),
        }
    }
}

/// Output formats for exported tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// One JSON object per line
    JsonLines,
}

impl OutputFormat {
    /// File extension used for exported tables
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::JsonLines => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::JsonLines => write!(f, "JSON Lines"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "json-lines" | "jsonlines" | "json" => Ok(OutputFormat::JsonLines),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
