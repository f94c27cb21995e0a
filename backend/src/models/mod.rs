//! Domain models for the participatory budget election

pub mod amount;
pub mod cost_table;
pub mod electorate;
pub mod event;
pub mod voter;

// Re-exports
pub use amount::DisplayAmount;
pub use cost_table::{CostTable, Item};
pub use electorate::{Electorate, ElectorateError};
pub use event::{Event, EventLog};
pub use voter::{vote_set, VoteSet, Voter};
