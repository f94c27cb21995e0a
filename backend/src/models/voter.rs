//! Voter (citizen) model
//!
//! A voter owns a balance and the set of item names they support.
//! Voters have no identifier of their own: they are identified by their
//! position in the electorate (reported 1-based as "Citizen N").
//!
//! Balances change in exactly two ways:
//! - uniform top-up while the election searches for an affordable item
//! - settlement, which zeroes every supporter of the chosen item

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of item names a single voter supports
pub type VoteSet = BTreeSet<String>;

/// Build a [`VoteSet`] from item names
///
/// # Example
/// ```
/// use participatory_budget_core_rs::vote_set;
///
/// let votes = vote_set(["Park", "Trees"]);
/// assert!(votes.contains("Park"));
/// assert_eq!(votes.len(), 2);
/// ```
pub fn vote_set<I, S>(items: I) -> VoteSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// A voter taking part in the election
///
/// # Example
/// ```
/// use participatory_budget_core_rs::{vote_set, Voter};
///
/// let mut voter = Voter::new(vote_set(["Park"]), 2.5);
/// assert!(voter.is_supporter("Park"));
/// assert!(!voter.is_supporter("Lights"));
///
/// voter.top_up(1.0);
/// assert_eq!(voter.balance(), 3.5);
///
/// assert_eq!(voter.settle(), 3.5);
/// assert_eq!(voter.balance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    /// Names of the items this voter supports
    supports: VoteSet,

    /// Current balance (currency units, never negative in valid input)
    balance: f64,
}

impl Voter {
    /// Create a voter with the given support set and opening balance
    pub fn new(supports: VoteSet, balance: f64) -> Self {
        Self { supports, balance }
    }

    /// Items this voter supports
    pub fn supports(&self) -> &VoteSet {
        &self.supports
    }

    /// Check whether this voter supports `item`
    pub fn is_supporter(&self, item: &str) -> bool {
        self.supports.contains(item)
    }

    /// Current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add `amount` to the balance
    pub fn top_up(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Zero the balance, returning what it held before
    pub fn settle(&mut self) -> f64 {
        std::mem::replace(&mut self.balance, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voter_without_support() {
        let voter = Voter::new(VoteSet::new(), 10.0);
        assert!(voter.supports().is_empty());
        assert!(!voter.is_supporter("Park"));
    }

    #[test]
    fn test_top_up_accumulates() {
        let mut voter = Voter::new(vote_set(["Park"]), 25.0);
        for _ in 0..3 {
            voter.top_up(1.0);
        }
        assert_eq!(voter.balance(), 28.0);
    }

    #[test]
    fn test_settle_twice_returns_zero() {
        let mut voter = Voter::new(vote_set(["Park"]), 4.2);
        assert_eq!(voter.settle(), 4.2);
        assert_eq!(voter.settle(), 0.0);
    }
}
