//! Tests for CostTable
//!
//! Table order is the tie-break order, so most tests here are about order.

use participatory_budget_core_rs::CostTable;

#[test]
fn test_cost_table_keeps_insertion_order() {
    let costs = CostTable::new()
        .with_item("Park", 1000.0)
        .with_item("Trees", 2000.0)
        .with_item("Lights", 3000.0);

    let names: Vec<&str> = costs.names().collect();
    assert_eq!(names, vec!["Park", "Trees", "Lights"]);
    assert_eq!(costs.len(), 3);
}

#[test]
fn test_cost_table_from_iterator() {
    let costs: CostTable = vec![("Lights", 100.0), ("Park", 50.0)].into_iter().collect();

    let items: Vec<(&str, f64)> = costs.iter().map(|i| (i.name(), i.cost())).collect();
    assert_eq!(items, vec![("Lights", 100.0), ("Park", 50.0)]);
}

#[test]
fn test_duplicate_name_updates_in_place() {
    let costs: CostTable = vec![("Park", 50.0), ("Lights", 100.0), ("Park", 10.0)]
        .into_iter()
        .collect();

    assert_eq!(costs.len(), 2);
    assert_eq!(costs.cost("Park"), Some(10.0));
    assert_eq!(costs.names().next(), Some("Park"));
}

#[test]
fn test_empty_cost_table() {
    let costs = CostTable::new();
    assert!(costs.is_empty());
    assert_eq!(costs.iter().count(), 0);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_deserialize_keeps_document_order() {
    // Not alphabetical: a sorted map would put Lights first
    let json = r#"{"Trees": 2000, "Park": 9.9, "Lights": 3000}"#;
    let costs: CostTable = serde_json::from_str(json).unwrap();

    let names: Vec<&str> = costs.names().collect();
    assert_eq!(names, vec!["Trees", "Park", "Lights"]);
    assert_eq!(costs.cost("Park"), Some(9.9));
}

#[test]
fn test_serialize_as_ordered_map() {
    let costs = CostTable::new().with_item("Park", 50.0).with_item("Lights", 100.5);

    let json = serde_json::to_string(&costs).unwrap();
    assert_eq!(json, r#"{"Park":50.0,"Lights":100.5}"#);
}

#[test]
fn test_deserialize_rejects_non_numeric_cost() {
    let result: Result<CostTable, _> = serde_json::from_str(r#"{"Park": "cheap"}"#);
    assert!(result.is_err());
}
