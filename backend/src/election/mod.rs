//! Election Module
//!
//! Drives one participatory-budget election:
//! - Repeated affordability checks with uniform top-ups in between
//! - Settlement of the chosen item's supporters
//! - Report rendering and event logging
//!
//! # Critical Invariants
//!
//! 1. **Minimal top-up**: the reported total is the smallest multiple of
//!    `top_up` at which some item is affordable
//! 2. **Settlement**: every supporter of the chosen item ends at exactly 0;
//!    every other citizen keeps their topped-up balance
//! 3. **Determinism**: the same inputs always produce the same outcome
//!
//! # Example
//!
//! ```rust
//! use participatory_budget_core_rs::{vote_set, CostTable, Electorate, ElectionConfig};
//! use participatory_budget_core_rs::election;
//!
//! let electorate = Electorate::from_parallel(&[vote_set(["Park"])], &[0.0]).unwrap();
//! let costs = CostTable::new().with_item("Park", 0.0);
//!
//! let outcome = election::run_election(electorate, &costs, &ElectionConfig::default()).unwrap();
//! assert_eq!(outcome.report(), "After adding 0 to each citizen, Park is chosen.\nCitizen 1 has 0 remaining balance.\n");
//! ```

pub mod config;
pub mod engine;
pub mod outcome;

// Re-export public API
pub use config::{ElectionConfig, DEFAULT_TOP_UP};
pub use engine::{elect, elect_with_config, run_election, ElectionError};
pub use outcome::ElectionOutcome;
