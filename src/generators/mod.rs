//! Table generators
//!
//! This module contains the sampling components of an ED scenario. Each one takes
//! the invocation's [`RandomSource`](crate::simulation::RandomSource) by `&mut`
//! and holds no other mutable state.
//!
//! - [`ArrivalProcess`]: chronologically ordered, numbered arrivals
//! - [`ClinicalAssignment`]: complaint, triage, demographics, disposition
//! - [`ResourceDurationModel`]: triage delay and stay duration per triage level
//! - [`PatientGenerator`]: complete patient rows
//! - [`ResourceUsageGenerator`]: bed utilization rows
//! - [`StaffRosterGenerator`]: day/night shift roster

pub mod arrivals;
pub mod clinical;
pub mod duration;
pub mod patients;
pub mod resources;
pub mod roster;

pub use arrivals::*;
pub use clinical::*;
pub use duration::*;
pub use patients::*;
pub use resources::*;
pub use roster::*;
