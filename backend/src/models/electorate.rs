//! Electorate
//!
//! The ordered list of voters taking part in one election. Callers usually
//! hold two parallel sequences (vote sets and balances); `from_parallel`
//! pairs them up and rejects sequences of different lengths instead of
//! truncating.
//!
//! # Critical Invariants
//!
//! 1. **Order**: voter `i` is reported as "Citizen i+1"
//! 2. **Summation order**: supporter totals add balances in voter order,
//!    starting from zero, so float results are reproducible
//! 3. **Settlement**: only supporters of the settled item change balance

use crate::models::voter::{VoteSet, Voter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building an electorate
#[derive(Debug, Error, PartialEq)]
pub enum ElectorateError {
    #[error("Length mismatch: {vote_sets} vote sets but {balances} balances")]
    LengthMismatch { vote_sets: usize, balances: usize },
}

/// All voters of one election, in citizen order
///
/// # Example
///
/// ```rust
/// use participatory_budget_core_rs::{vote_set, Electorate};
///
/// let electorate = Electorate::from_parallel(
///     &[vote_set(["Park", "Lights"]), vote_set(["Lights"]), vote_set(["Park"])],
///     &[25.0, 0.0, 20.0],
/// )
/// .unwrap();
///
/// assert_eq!(electorate.num_voters(), 3);
/// assert_eq!(electorate.supporter_total("Park"), 45.0);
/// assert_eq!(electorate.supporter_total("Lights"), 25.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Electorate {
    voters: Vec<Voter>,
}

impl Electorate {
    /// Create an electorate from voters
    pub fn new(voters: Vec<Voter>) -> Self {
        Self { voters }
    }

    /// Pair up parallel vote-set and balance sequences
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` when the sequences differ in length.
    pub fn from_parallel(vote_sets: &[VoteSet], balances: &[f64]) -> Result<Self, ElectorateError> {
        if vote_sets.len() != balances.len() {
            return Err(ElectorateError::LengthMismatch {
                vote_sets: vote_sets.len(),
                balances: balances.len(),
            });
        }

        let voters = vote_sets
            .iter()
            .zip(balances)
            .map(|(votes, &balance)| Voter::new(votes.clone(), balance))
            .collect();

        Ok(Self { voters })
    }

    /// All voters in citizen order
    pub fn voters(&self) -> &[Voter] {
        &self.voters
    }

    /// Number of voters
    pub fn num_voters(&self) -> usize {
        self.voters.len()
    }

    /// Check whether there are no voters
    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Snapshot of every balance, in citizen order
    pub fn balances(&self) -> Vec<f64> {
        self.voters.iter().map(Voter::balance).collect()
    }

    /// Zero-based indices of the voters supporting `item`
    pub fn supporters<'a>(&'a self, item: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.voters
            .iter()
            .enumerate()
            .filter(move |(_, voter)| voter.is_supporter(item))
            .map(|(index, _)| index)
    }

    /// Unrounded sum of the balances of `item`'s supporters
    pub fn supporter_total(&self, item: &str) -> f64 {
        self.voters
            .iter()
            .filter(|voter| voter.is_supporter(item))
            .fold(0.0, |total, voter| total + voter.balance())
    }

    /// Add `amount` to every voter's balance
    pub fn top_up_all(&mut self, amount: f64) {
        for voter in &mut self.voters {
            voter.top_up(amount);
        }
    }

    /// Zero every supporter of `item`
    ///
    /// Returns `(index, previous_balance)` for each settled voter, in
    /// citizen order. Non-supporters are left untouched.
    pub fn settle_supporters(&mut self, item: &str) -> Vec<(usize, f64)> {
        self.voters
            .iter_mut()
            .enumerate()
            .filter(|(_, voter)| voter.is_supporter(item))
            .map(|(index, voter)| (index, voter.settle()))
            .collect()
    }
}
