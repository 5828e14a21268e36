//! Table rows produced by the generators
//!
//! This module contains the three row types of an ED scenario and the generic
//! [`Table`] container that carries them.
//!
//! - [`PatientRecord`]: one simulated visit
//! - [`ShiftAssignment`]: one roster shift
//! - [`ResourceUsageRecord`]: one bed occupation

pub mod patient;
pub mod resource;
pub mod staff;
pub mod table;

pub use patient::*;
pub use resource::*;
pub use staff::*;
pub use table::*;
