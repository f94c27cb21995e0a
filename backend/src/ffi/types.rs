//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyErr)

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::election::ElectionError;
use crate::models::cost_table::CostTable;

/// Convert a Python dict of item costs to a CostTable
///
/// Python dicts keep insertion order, so the dict order becomes the
/// priority order of the table.
///
/// # Errors
///
/// Returns PyValueError if a key is not a string or a value is not a number.
pub fn parse_cost_table(py_costs: &Bound<'_, PyDict>) -> PyResult<CostTable> {
    let mut costs = CostTable::new();
    for (key, value) in py_costs.iter() {
        let name: String = key.extract().map_err(|_| {
            PyValueError::new_err(format!("Item names must be strings, got {}", key))
        })?;
        let cost: f64 = value.extract().map_err(|_| {
            PyValueError::new_err(format!("Cost of '{}' must be a number, got {}", name, value))
        })?;
        costs.insert(name, cost);
    }
    Ok(costs)
}

/// Map an election error onto a Python exception
///
/// - `Unreachable` → RuntimeError
/// - everything else (bad input) → ValueError
pub fn election_error_to_py(error: ElectionError) -> PyErr {
    match error {
        ElectionError::Unreachable { .. } => PyRuntimeError::new_err(error.to_string()),
        ElectionError::InvalidConfig(_) | ElectionError::Electorate(_) => {
            PyValueError::new_err(error.to_string())
        }
    }
}
