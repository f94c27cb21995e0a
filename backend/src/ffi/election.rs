//! PyO3 wrappers for the election operations

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{election_error_to_py, parse_cost_table};
use crate::election::{run_election, ElectionConfig};
use crate::models::electorate::Electorate;
use crate::models::voter::VoteSet;
use crate::selection::find_purchasable_item;

/// Return the first purchasable item, or None
///
/// # Arguments
///
/// * `votes` - One set of item names per citizen
/// * `balances` - One balance per citizen
/// * `costs` - Item costs; dict order is the priority order
///
/// # Errors
///
/// Raises ValueError if `votes` and `balances` differ in length.
#[pyfunction]
pub fn selected_item(
    votes: Vec<VoteSet>,
    balances: Vec<f64>,
    costs: &Bound<'_, PyDict>,
) -> PyResult<Option<String>> {
    let costs = parse_cost_table(costs)?;
    let item = find_purchasable_item(&votes, &balances, &costs).map_err(election_error_to_py)?;
    Ok(item.map(str::to_string))
}

/// Elect the next budget item and print the report through Python's `print`
///
/// # Returns
///
/// `(item, total_top_up, final_balances)`
///
/// # Errors
///
/// Raises:
/// - ValueError for mismatched inputs or a non-positive `top_up`
/// - RuntimeError if `max_rounds` top-ups were applied without success
#[pyfunction]
#[pyo3(signature = (votes, balances, costs, top_up=1.0, max_rounds=None))]
pub fn elect_next_budget_item(
    py: Python<'_>,
    votes: Vec<VoteSet>,
    balances: Vec<f64>,
    costs: &Bound<'_, PyDict>,
    top_up: f64,
    max_rounds: Option<usize>,
) -> PyResult<(String, f64, Vec<f64>)> {
    let costs = parse_cost_table(costs)?;
    let electorate = Electorate::from_parallel(&votes, &balances)
        .map_err(|e| election_error_to_py(e.into()))?;
    let config = ElectionConfig { top_up, max_rounds };

    let outcome = run_election(electorate, &costs, &config).map_err(election_error_to_py)?;

    // Print through sys.stdout so doctest and redirection see the report
    let kwargs = PyDict::new_bound(py);
    kwargs.set_item("end", "")?;
    PyModule::import_bound(py, "builtins")?
        .getattr("print")?
        .call((outcome.report(),), Some(&kwargs))?;

    let balances = outcome.balances();
    Ok((outcome.item, outcome.total_top_up, balances))
}
