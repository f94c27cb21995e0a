//! Bundled sample election: 3 items, 5 citizens

use participatory_budget_core_rs::{vote_set, CostTable, VoteSet};

pub fn votes() -> Vec<VoteSet> {
    vec![
        vote_set(["Park", "Trees"]),
        vote_set(["Trees"]),
        vote_set(["Park", "Lights"]),
        vote_set(["Lights"]),
        vote_set(["Park"]),
    ]
}

pub fn balances() -> Vec<f64> {
    vec![1.5, 2.4, 3.3, 4.2, 5.1]
}

pub fn costs() -> CostTable {
    CostTable::new()
        .with_item("Park", 1000.0)
        .with_item("Trees", 2000.0)
        .with_item("Lights", 3000.0)
}
