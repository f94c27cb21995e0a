//! Election outcome and report rendering
//!
//! The report format is an external interface and must stay byte-exact:
//!
//! ```text
//! After adding {total_top_up} to each citizen, {item} is chosen.
//! Citizen {n} has {balance} remaining balance.
//! ```
//!
//! with one citizen line per voter, each line newline-terminated.

use crate::models::amount::DisplayAmount;
use crate::models::electorate::Electorate;
use crate::models::event::EventLog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one election
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionOutcome {
    /// Name of the chosen item
    pub item: String,

    /// Total added to each citizen before the item became affordable
    pub total_top_up: f64,

    /// Number of top-up rounds performed
    pub rounds: usize,

    /// Electorate after settlement
    pub electorate: Electorate,

    /// Every balance change made during the election
    pub events: EventLog,
}

impl ElectionOutcome {
    /// Final balances in citizen order
    pub fn balances(&self) -> Vec<f64> {
        self.electorate.balances()
    }

    /// Render the report exactly as `elect` prints it
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ElectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "After adding {} to each citizen, {} is chosen.",
            DisplayAmount(self.total_top_up),
            self.item
        )?;
        for (index, voter) in self.electorate.voters().iter().enumerate() {
            writeln!(
                f,
                "Citizen {} has {} remaining balance.",
                index + 1,
                DisplayAmount(voter.balance())
            )?;
        }
        Ok(())
    }
}
