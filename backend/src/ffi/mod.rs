//! Python bindings
//!
//! Exposes the affordability check and the election driver to Python under
//! their long-standing Python names:
//!
//! ```python
//! from participatory_budget_core_rs import selected_item, elect_next_budget_item
//!
//! votes = [{"Park", "Lights"}, {"Lights"}, {"Park"}]
//! elect_next_budget_item(votes, [25, 0, 20], {"Park": 50, "Lights": 100})
//! # After adding 3 to each citizen, Park is chosen.
//! # Citizen 1 has 0 remaining balance.
//! # Citizen 2 has 3 remaining balance.
//! # Citizen 3 has 0 remaining balance.
//! ```

pub mod election;
pub mod types;

use pyo3::prelude::*;

/// Register every exported function on the extension module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(election::selected_item, m)?)?;
    m.add_function(wrap_pyfunction!(election::elect_next_budget_item, m)?)?;
    Ok(())
}
