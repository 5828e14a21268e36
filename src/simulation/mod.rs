//! Simulation orchestration and control
//!
//! This module turns a validated configuration into the three ED tables.
//!
//! # Overview
//!
//! - **SimulationOrchestrator**: runs the generators in their fixed draw order
//! - **RandomSource**: the single seeded RNG threaded through one invocation
//! - **SimulationWindow**: the `[start, start + days)` interval arrivals fall in
//! - **OutputAssembler**: builds [`SimulationTables`] and checks cross-table references
//! - **GenerationParams** / **DatasetGenerator**: request-facing entry points
//! - **GenerationSummary**: row counts and distributions for a generated scenario
//! - **SimulationError**: error type shared by every step
//!
//! # Usage Example
//!
//! ```rust
//! use ed_scenario_simulator::simulation::*;
//!
//! let params = GenerationParams { staff_count: 5, days: 7, ..Default::default() }.with_seed(42);
//! let tables = generate(100, &params)?;
//!
//! assert_eq!(tables.patients.len(), 100);
//! assert_eq!(tables.staff.len(), 5 * 7 * 2);
//!
//! let summary = GenerationSummary::from_tables(&tables);
//! println!("{}", summary);
//! # Ok::<(), SimulationError>(())
//! ```

pub mod assembler;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod params;
pub mod random;
pub mod statistics;
pub mod window;

pub use assembler::*;
pub use dataset::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use params::*;
pub use random::*;
pub use statistics::*;
pub use window::*;
