//! Participatory Budget Core - Rust Engine
//!
//! Deterministic simulation of one participatory-budgeting election.
//!
//! # Architecture
//!
//! - **models**: Domain types (Voter, Electorate, CostTable, Event)
//! - **selection**: Affordability checker
//! - **election**: Search loop, settlement and reporting
//!
//! # Critical Invariants
//!
//! 1. Items are tried in cost-table order; the first affordable one wins
//! 2. Supporter totals round half-to-even; costs are never rounded
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod election;
pub mod models;
pub mod selection;

// Re-exports for convenience
pub use election::{
    elect, elect_with_config, run_election, ElectionConfig, ElectionError, ElectionOutcome,
};
pub use models::{
    cost_table::{CostTable, Item},
    electorate::{Electorate, ElectorateError},
    event::{Event, EventLog},
    voter::{vote_set, VoteSet, Voter},
};
pub use selection::{find_affordable_item, find_purchasable_item};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn participatory_budget_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
