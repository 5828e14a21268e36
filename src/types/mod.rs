//! Core types and identifiers for the ED scenario simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the generation pipeline.
//!
//! # Overview
//!
//! - **Identifiers**: sequential patient, staff and bed codes (`P0001`, `S001`, `EDBed1`)
//! - **Enums**: fixed categorical vocabularies (complaints, comorbidities, roles, ...)
//! - **Triage**: validated acuity level newtype
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use ed_scenario_simulator::types::*;
//!
//! let patient = PatientId::from_index(0);
//! assert_eq!(patient.to_string(), "P0001");
//!
//! let config = SimulationConfig {
//!     num_patients: 100,
//!     staff_count: 5,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod triage;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use triage::*;
