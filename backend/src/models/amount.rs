//! Money amounts
//!
//! Balances and costs are plain `f64` values in whole currency units.
//! This module holds the two rules every component must agree on:
//!
//! - how a supporter total is rounded before it is compared with a cost
//! - how an amount is rendered in an election report
//!
//! # Rounding
//!
//! Totals round to the nearest whole unit with ties going to the even
//! neighbour, so `2.5` rounds to `2` and `3.5` rounds to `4`. Only exact
//! binary ties count as ties: the float sum of `1.5 + 3.3 + 5.1` sits a
//! hair away from `9.9` and still rounds to `10`.
//!
//! # Rendering
//!
//! Whole-number amounts print without a decimal point (`0`, `3`, `28`),
//! everything else prints its shortest round-trip decimal form (`2.4`,
//! `5.1`).

use std::fmt;

/// Round a supporter total to the nearest whole unit (ties to even)
///
/// # Example
/// ```
/// use participatory_budget_core_rs::models::amount::round_total;
///
/// assert_eq!(round_total(9.9), 10.0);
/// assert_eq!(round_total(2.5), 2.0);
/// assert_eq!(round_total(3.5), 4.0);
/// ```
pub fn round_total(total: f64) -> f64 {
    total.round_ties_even()
}

/// Check whether a supporter total covers a cost
///
/// The total is rounded, the cost is not.
pub fn covers(total: f64, cost: f64) -> bool {
    round_total(total) >= cost
}

/// Display adapter rendering an amount as election reports print it
///
/// # Example
/// ```
/// use participatory_budget_core_rs::models::amount::DisplayAmount;
///
/// assert_eq!(DisplayAmount(3.0).to_string(), "3");
/// assert_eq!(DisplayAmount(2.4).to_string(), "2.4");
/// assert_eq!(DisplayAmount(0.0).to_string(), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAmount(pub f64);

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 {
            // `+ 0.0` folds -0.0 into 0.0
            write!(f, "{:.0}", value + 0.0)
        } else {
            write!(f, "{}", value)
        }
    }
}
