//! Affordability Checker
//!
//! Finds the first item in a cost table whose supporters can pay for it.
//!
//! # Algorithm
//!
//! ```text
//! for item in cost table order:
//!     total = sum of balances of voters supporting item
//!     if round_half_even(total) >= cost: return item
//! return none
//! ```
//!
//! The check is pure: balances are read, never written. Items that voters
//! name but the cost table does not list are never considered.

use crate::election::ElectionError;
use crate::models::amount::{covers, round_total};
use crate::models::cost_table::{CostTable, Item};
use crate::models::electorate::{Electorate, ElectorateError};
use crate::models::voter::VoteSet;

/// Affordability of one item at a balance snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Affordability {
    /// Item name
    pub item: String,

    /// Item cost
    pub cost: f64,

    /// Number of voters supporting the item
    pub supporters: usize,

    /// Unrounded sum of supporter balances
    pub supporter_total: f64,

    /// Supporter total after rounding
    pub rounded_total: f64,
}

impl Affordability {
    /// Check whether supporters can pay for the item
    pub fn is_affordable(&self) -> bool {
        self.rounded_total >= self.cost
    }

    /// How much the rounded total falls short of the cost (0 if affordable)
    pub fn shortfall(&self) -> f64 {
        (self.cost - self.rounded_total).max(0.0)
    }
}

/// First item, in table order, whose supporter total covers its cost
fn first_affordable<'a>(
    costs: &'a CostTable,
    supporter_total: impl Fn(&str) -> f64,
) -> Option<&'a Item> {
    costs
        .iter()
        .find(|item| covers(supporter_total(item.name()), item.cost()))
}

/// Find the first purchasable item for a validated electorate
///
/// # Example
///
/// ```rust
/// use participatory_budget_core_rs::{vote_set, CostTable, Electorate};
/// use participatory_budget_core_rs::selection::find_affordable_item;
///
/// let electorate = Electorate::from_parallel(
///     &[vote_set(["Park", "Lights"]), vote_set(["Lights"]), vote_set(["Park"])],
///     &[25.0, 200.0, 20.0],
/// )
/// .unwrap();
/// let costs = CostTable::new().with_item("Park", 50.0).with_item("Lights", 100.0);
///
/// let item = find_affordable_item(&electorate, &costs).unwrap();
/// assert_eq!(item.name(), "Lights");
/// ```
pub fn find_affordable_item<'a>(electorate: &Electorate, costs: &'a CostTable) -> Option<&'a Item> {
    first_affordable(costs, |name| electorate.supporter_total(name))
}

/// Find the first purchasable item from parallel vote sets and balances
///
/// Returns `Ok(None)` when no item is affordable; that is a normal outcome,
/// not an error.
///
/// # Errors
///
/// Returns `ElectionError::Electorate(LengthMismatch)` when `vote_sets` and
/// `balances` differ in length.
///
/// # Example
///
/// ```rust
/// use participatory_budget_core_rs::{find_purchasable_item, vote_set, CostTable};
///
/// let votes = vec![
///     vote_set(["Park", "Trees"]),
///     vote_set(["Trees"]),
///     vote_set(["Park", "Lights"]),
///     vote_set(["Lights"]),
///     vote_set(["Park"]),
/// ];
/// let balances = [1.5, 2.4, 3.3, 4.2, 5.1];
/// let costs = CostTable::new()
///     .with_item("Park", 9.9)
///     .with_item("Trees", 2000.0)
///     .with_item("Lights", 3000.0);
///
/// assert_eq!(find_purchasable_item(&votes, &balances, &costs), Ok(Some("Park")));
/// ```
pub fn find_purchasable_item<'a>(
    vote_sets: &[VoteSet],
    balances: &[f64],
    costs: &'a CostTable,
) -> Result<Option<&'a str>, ElectionError> {
    if vote_sets.len() != balances.len() {
        return Err(ElectorateError::LengthMismatch {
            vote_sets: vote_sets.len(),
            balances: balances.len(),
        }
        .into());
    }

    let item = first_affordable(costs, |name| {
        vote_sets
            .iter()
            .zip(balances)
            .filter(|(votes, _)| votes.contains(name))
            .fold(0.0, |total, (_, balance)| total + balance)
    });

    Ok(item.map(Item::name))
}

/// Assess every item in table order
///
/// Used for diagnostics: shows how far each item is from being bought.
pub fn assess_items(electorate: &Electorate, costs: &CostTable) -> Vec<Affordability> {
    costs
        .iter()
        .map(|item| {
            let supporter_total = electorate.supporter_total(item.name());
            Affordability {
                item: item.name().to_string(),
                cost: item.cost(),
                supporters: electorate.supporters(item.name()).count(),
                supporter_total,
                rounded_total: round_total(supporter_total),
            }
        })
        .collect()
}
