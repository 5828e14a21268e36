//! ED Scenario Simulator
//!
//! A synthetic emergency department data generator. One call produces three
//! consistent tables: patient visits, the staff shift roster and bed
//! utilization.
//!
//! # Overview
//!
//! Patients arrive uniformly over a window of whole days. Each patient gets a
//! chief complaint, a triage level conditioned on it, demographics, a
//! disposition, a triage delay and a stay duration drawn from the triage level,
//! and an attending staff member. Every patient then holds one of five ED beds
//! from triage to discharge. Staff members keep one role for the whole window
//! and are rostered on both twelve-hour shifts every day.
//!
//! ## Key Features
//!
//! - **Reproducible**: one seeded RNG per call; equal seeds give equal tables
//! - **Consistent**: cross-table references are checked before tables are returned
//! - **Request friendly**: lenient JSON coercion behind [`DatasetGenerator`]
//! - **Exportable**: CSV or JSON Lines files via [`TableExporter`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ed_scenario_simulator::*;
//!
//! let params = GenerationParams { staff_count: 5, days: 7, ..Default::default() }.with_seed(7);
//! let tables = generate(100, &params)?;
//!
//! assert_eq!(tables.patients.len(), 100);
//! assert_eq!(tables.resources.len(), 100);
//! assert_eq!(tables.staff.len(), 70);
//! # Ok::<(), SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, categorical values, triage levels and configuration
//! - [`records`]: the row types of the three tables
//! - [`generators`]: arrival, clinical, timing, bed and roster sampling
//! - [`simulation`]: orchestration, randomness, errors, logging and summaries
//! - [`output`]: CSV and JSON Lines export
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod generators;
pub mod output;
pub mod records;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    BedId, ChiefComplaint, Comorbidity, ConfigValidationError, Disposition, Gender,
    OutputFormat, PatientId, ResourceType, ShiftKind, SimulationConfig, StaffId, StaffRole,
    TriageLevel,
};

// Table rows
pub use records::{
    Comorbidities, PatientRecord, ResourceUsageRecord, ShiftAssignment, Table, TableRecord,
};

// Generators
pub use generators::{
    ArrivalProcess, ClinicalAssignment, PatientGenerator, ResourceDurationModel,
    ResourceUsageGenerator, StaffRosterGenerator,
};

// Simulation entry points
pub use simulation::{
    generate, DatasetGenerator, EdScenarioGenerator, GenerationParams, GenerationSummary,
    LoggingConfig, RandomSource, SimulationError, SimulationOrchestrator, SimulationResult,
    SimulationTables, SimulationWindow,
};

// Export
pub use output::TableExporter;
