//! Selection Module
//!
//! Decides which item, if any, can be bought with the balances voters hold
//! right now.
//!
//! # Critical Invariants
//!
//! 1. **Priority**: items are tried in cost-table order; the first
//!    affordable one wins
//! 2. **Rounding**: supporter totals round half-to-even before the `>=`
//!    comparison; costs are never rounded
//! 3. **Purity**: selection never changes a balance

pub mod affordability;

// Re-export public API
pub use affordability::{assess_items, find_affordable_item, find_purchasable_item, Affordability};
