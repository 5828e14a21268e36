//! Statistics collection and reporting
//!
//! [`GenerationSummary`] condenses one [`SimulationTables`] value into the
//! figures a caller previews before exporting: row counts, the triage and
//! disposition mix, bed usage and stay length.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::simulation::SimulationTables;
use crate::types::Disposition;

/// Summary figures for one generated scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Seed the tables were generated from
    pub seed: u64,
    /// Number of patient rows
    pub patient_rows: usize,
    /// Number of roster rows
    pub staff_rows: usize,
    /// Number of bed utilization rows
    pub resource_rows: usize,
    /// Distinct staff members on the roster
    pub staff_members: usize,
    /// Patients per triage level (1 = most severe)
    pub triage_distribution: BTreeMap<u8, usize>,
    /// Patients per disposition label
    pub disposition_distribution: BTreeMap<String, usize>,
    /// Utilization rows per bed
    pub bed_usage: BTreeMap<String, usize>,
    /// Mean length of stay in hours
    pub mean_length_of_stay_hours: f64,
    /// Longest length of stay in hours
    pub max_length_of_stay_hours: f64,
}

impl GenerationSummary {
    /// Compute the summary of `tables`
    pub fn from_tables(tables: &SimulationTables) -> Self {
        let mut triage_distribution = BTreeMap::new();
        let mut disposition_distribution = BTreeMap::new();
        let mut total_stay = 0.0;
        let mut max_stay: f64 = 0.0;

        for patient in &tables.patients {
            *triage_distribution.entry(patient.triage_level.value()).or_insert(0) += 1;
            *disposition_distribution.entry(patient.disposition.to_string()).or_insert(0) += 1;
            total_stay += patient.length_of_stay_hours;
            max_stay = max_stay.max(patient.length_of_stay_hours);
        }

        let mut bed_usage = BTreeMap::new();
        for usage in &tables.resources {
            *bed_usage.entry(usage.resource_id.to_string()).or_insert(0) += 1;
        }

        let mean_length_of_stay_hours = if tables.patients.is_empty() {
            0.0
        } else {
            total_stay / tables.patients.len() as f64
        };

        Self {
            seed: tables.seed,
            patient_rows: tables.patients.len(),
            staff_rows: tables.staff.len(),
            resource_rows: tables.resources.len(),
            staff_members: tables.staff_ids().len(),
            triage_distribution,
            disposition_distribution,
            bed_usage,
            mean_length_of_stay_hours,
            max_length_of_stay_hours: max_stay,
        }
    }

    /// Share of patients admitted, as a percentage
    pub fn admitted_percentage(&self) -> f64 {
        let admitted = self
            .disposition_distribution
            .get(&Disposition::Admitted.to_string())
            .copied()
            .unwrap_or(0);
        percentage(admitted, self.patient_rows)
    }

    /// Share of patients at `level`, as a percentage
    pub fn triage_percentage(&self, level: u8) -> f64 {
        percentage(self.triage_distribution.get(&level).copied().unwrap_or(0), self.patient_rows)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation Summary")?;
        writeln!(f, "==================")?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Patients: {}", self.patient_rows)?;
        writeln!(f, "  Staff shifts: {} ({} staff members)", self.staff_rows, self.staff_members)?;
        writeln!(f, "  Bed utilization rows: {}", self.resource_rows)?;
        writeln!(f)?;
        writeln!(f, "Triage levels:")?;
        for (level, count) in &self.triage_distribution {
            writeln!(f, "  Level {}: {} ({:.1}%)", level, count, self.triage_percentage(*level))?;
        }
        writeln!(f, "Dispositions:")?;
        for (label, count) in &self.disposition_distribution {
            writeln!(f, "  {}: {} ({:.1}%)", label, count, percentage(*count, self.patient_rows))?;
        }
        writeln!(f, "Bed usage:")?;
        for (bed, count) in &self.bed_usage {
            writeln!(f, "  {}: {}", bed, count)?;
        }
        write!(
            f,
            "Length of stay: mean {:.2}h, max {:.2}h",
            self.mean_length_of_stay_hours, self.max_length_of_stay_hours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{generate, GenerationParams};

    fn summary() -> GenerationSummary {
        let params = GenerationParams { staff_count: 4, days: 3, ..Default::default() }.with_seed(21);
        GenerationSummary::from_tables(&generate(200, &params).unwrap())
    }

    #[test]
    fn test_counts_match_tables() {
        let summary = summary();
        assert_eq!(summary.seed, 21);
        assert_eq!(summary.patient_rows, 200);
        assert_eq!(summary.resource_rows, 200);
        assert_eq!(summary.staff_rows, 4 * 3 * 2);
        assert_eq!(summary.staff_members, 4);
        assert_eq!(summary.triage_distribution.values().sum::<usize>(), 200);
        assert_eq!(summary.disposition_distribution.values().sum::<usize>(), 200);
        assert_eq!(summary.bed_usage.values().sum::<usize>(), 200);
    }

    #[test]
    fn test_stay_figures_are_bounded() {
        let summary = summary();
        assert!(summary.mean_length_of_stay_hours > 0.0);
        assert!(summary.mean_length_of_stay_hours <= summary.max_length_of_stay_hours);
        // worst case: 30 minute triage delay plus a 6 hour stay
        assert!(summary.max_length_of_stay_hours <= 6.5);
        assert!(summary.admitted_percentage() <= 100.0);
    }

    #[test]
    fn test_report_mentions_every_section() {
        let report = summary().to_string();
        assert!(report.contains("Seed: 21"));
        assert!(report.contains("Triage levels:"));
        assert!(report.contains("Dispositions:"));
        assert!(report.contains("Bed usage:"));
        assert!(report.contains("Length of stay"));
    }
}
