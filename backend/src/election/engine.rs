//! Election Engine
//!
//! Runs one election: search for an affordable item, topping up every
//! citizen between attempts, then settle the winning item's supporters.
//!
//! # Election Flow
//!
//! ```text
//! round = 0
//! loop:
//!     1. Affordability check (cost-table order)
//!     2. Found → go to 4
//!     3. Not found → top up every citizen, round += 1, repeat
//! 4. Settle: zero every supporter of the chosen item
//! 5. Report
//! ```
//!
//! # Termination
//!
//! Each round raises the sum of all balances by `top_up × citizens`, so
//! the loop ends as soon as some listed item with at least one supporter
//! (or a cost that rounds to 0 or below) is reached. If no such item
//! exists the loop never ends; `ElectionConfig::max_rounds` turns that
//! into `ElectionError::Unreachable`.

use super::config::ElectionConfig;
use super::outcome::ElectionOutcome;
use crate::models::cost_table::CostTable;
use crate::models::electorate::{Electorate, ElectorateError};
use crate::models::event::{Event, EventLog};
use crate::models::voter::VoteSet;
use crate::selection::find_affordable_item;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running an election
#[derive(Debug, Error, PartialEq)]
pub enum ElectionError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No item became affordable after {rounds} top-up rounds")]
    Unreachable { rounds: usize },

    #[error("Electorate error: {0}")]
    Electorate(#[from] ElectorateError),
}

/// Run an election without printing anything
///
/// Takes ownership of the electorate; its settled state is returned in the
/// outcome.
///
/// # Errors
///
/// - `InvalidConfig` if the configuration fails validation
/// - `Unreachable` if `max_rounds` top-ups were applied without success
///
/// # Example
///
/// ```rust
/// use participatory_budget_core_rs::{run_election, vote_set, CostTable, ElectionConfig, Electorate};
///
/// let electorate = Electorate::from_parallel(
///     &[vote_set(["Park", "Lights"]), vote_set(["Lights"]), vote_set(["Park"])],
///     &[25.0, 0.0, 20.0],
/// )
/// .unwrap();
/// let costs = CostTable::new().with_item("Park", 50.0).with_item("Lights", 100.0);
///
/// let outcome = run_election(electorate, &costs, &ElectionConfig::default()).unwrap();
/// assert_eq!(outcome.item, "Park");
/// assert_eq!(outcome.total_top_up, 3.0);
/// assert_eq!(outcome.balances(), vec![0.0, 3.0, 0.0]);
/// ```
pub fn run_election(
    mut electorate: Electorate,
    costs: &CostTable,
    config: &ElectionConfig,
) -> Result<ElectionOutcome, ElectionError> {
    config.validate()?;

    let mut events = EventLog::new();
    let mut rounds = 0;
    let mut total_top_up = 0.0;

    let item = loop {
        if let Some(item) = find_affordable_item(&electorate, costs) {
            break item;
        }

        if config.max_rounds.is_some_and(|max| rounds >= max) {
            return Err(ElectionError::Unreachable { rounds });
        }

        electorate.top_up_all(config.top_up);
        total_top_up += config.top_up;
        rounds += 1;

        debug!(round = rounds, total_top_up, "no item affordable, topped up citizens");
        events.log(Event::TopUp {
            round: rounds,
            amount: config.top_up,
            total_top_up,
        });
    };

    let supporter_total = electorate.supporter_total(item.name());
    info!(
        item = item.name(),
        cost = item.cost(),
        supporter_total,
        rounds,
        "item chosen"
    );
    events.log(Event::ItemSelected {
        round: rounds,
        item: item.name().to_string(),
        cost: item.cost(),
        supporter_total,
    });

    for (index, previous_balance) in electorate.settle_supporters(item.name()) {
        debug!(citizen = index + 1, previous_balance, "settled supporter");
        events.log(Event::Settlement {
            round: rounds,
            citizen: index + 1,
            item: item.name().to_string(),
            previous_balance,
        });
    }

    Ok(ElectionOutcome {
        item: item.name().to_string(),
        total_top_up,
        rounds,
        electorate,
        events,
    })
}

/// Run an election with an explicit configuration and print its report
///
/// # Errors
///
/// See [`run_election`]; additionally returns `Electorate(LengthMismatch)`
/// when `vote_sets` and `balances` differ in length.
pub fn elect_with_config(
    vote_sets: &[VoteSet],
    balances: &[f64],
    costs: &CostTable,
    config: &ElectionConfig,
) -> Result<ElectionOutcome, ElectionError> {
    let electorate = Electorate::from_parallel(vote_sets, balances)?;
    let outcome = run_election(electorate, costs, config)?;
    print!("{}", outcome);
    Ok(outcome)
}

/// Elect the next budget item and print the report to standard output
///
/// Uses the default configuration: top-up of 1 per round, no round cap.
/// An election in which no item can ever become affordable does not
/// return; use [`elect_with_config`] with `max_rounds` to bound it.
///
/// # Errors
///
/// Returns `Electorate(LengthMismatch)` when `vote_sets` and `balances`
/// differ in length.
///
/// # Example
///
/// ```rust
/// use participatory_budget_core_rs::{elect, vote_set, CostTable};
///
/// let votes = vec![vote_set(["Park"]), vote_set(["Park"])];
/// let costs = CostTable::new().with_item("Park", 500.0);
///
/// // prints:
/// // After adding 0 to each citizen, Park is chosen.
/// // Citizen 1 has 0 remaining balance.
/// // Citizen 2 has 0 remaining balance.
/// let outcome = elect(&votes, &[1000.0, 2000.0], &costs).unwrap();
/// assert_eq!(outcome.balances(), vec![0.0, 0.0]);
/// ```
pub fn elect(
    vote_sets: &[VoteSet],
    balances: &[f64],
    costs: &CostTable,
) -> Result<ElectionOutcome, ElectionError> {
    elect_with_config(vote_sets, balances, costs, &ElectionConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::voter::vote_set;

    fn park_and_lights(balances: &[f64]) -> Electorate {
        Electorate::from_parallel(
            &[vote_set(["Park", "Lights"]), vote_set(["Lights"]), vote_set(["Park"])],
            balances,
        )
        .unwrap()
    }

    fn costs() -> CostTable {
        CostTable::new().with_item("Park", 50.0).with_item("Lights", 100.0)
    }

    #[test]
    fn test_no_top_up_when_immediately_affordable() {
        let outcome =
            run_election(park_and_lights(&[25.0, 200.0, 20.0]), &costs(), &ElectionConfig::default())
                .unwrap();

        assert_eq!(outcome.item, "Lights");
        assert_eq!(outcome.rounds, 0);
        assert_eq!(outcome.total_top_up, 0.0);
        assert!(outcome.events.events_of_type("TopUp").is_empty());
    }

    #[test]
    fn test_round_cap_reached() {
        let config = ElectionConfig::default().with_max_rounds(2);
        let result = run_election(park_and_lights(&[25.0, 0.0, 20.0]), &costs(), &config);

        assert_eq!(result, Err(ElectionError::Unreachable { rounds: 2 }));
    }

    #[test]
    fn test_round_cap_exactly_enough() {
        let config = ElectionConfig::default().with_max_rounds(3);
        let outcome = run_election(park_and_lights(&[25.0, 0.0, 20.0]), &costs(), &config).unwrap();

        assert_eq!(outcome.rounds, 3);
        assert_eq!(outcome.item, "Park");
    }

    #[test]
    fn test_invalid_config_rejected_before_search() {
        let config = ElectionConfig::default().with_top_up(0.0);
        let result = run_election(park_and_lights(&[25.0, 0.0, 20.0]), &costs(), &config);

        assert!(matches!(result, Err(ElectionError::InvalidConfig(_))));
    }

    #[test]
    fn test_settlement_events_name_citizens() {
        let outcome =
            run_election(park_and_lights(&[25.0, 0.0, 20.0]), &costs(), &ElectionConfig::default())
                .unwrap();

        let settled: Vec<Option<usize>> = outcome
            .events
            .events_of_type("Settlement")
            .iter()
            .map(|e| e.citizen())
            .collect();
        assert_eq!(settled, vec![Some(1), Some(3)]);
    }
}
