//! Tests for Voter and Electorate models

use participatory_budget_core_rs::{vote_set, Electorate, ElectorateError, Voter};

// ============================================================================
// Test Helpers
// ============================================================================

/// Five citizens voting over Park, Trees and Lights
fn create_test_electorate() -> Electorate {
    Electorate::from_parallel(
        &[
            vote_set(["Park", "Trees"]),
            vote_set(["Trees"]),
            vote_set(["Park", "Lights"]),
            vote_set(["Lights"]),
            vote_set(["Park"]),
        ],
        &[1.5, 2.4, 3.3, 4.2, 5.1],
    )
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_parallel_pairs_by_position() {
    let electorate = create_test_electorate();

    assert_eq!(electorate.num_voters(), 5);
    assert_eq!(electorate.voters()[1].balance(), 2.4);
    assert!(electorate.voters()[1].is_supporter("Trees"));
    assert!(!electorate.voters()[1].is_supporter("Park"));
}

#[test]
fn test_from_parallel_rejects_more_balances() {
    let result = Electorate::from_parallel(&[vote_set(["Park"])], &[1.0, 2.0]);

    assert_eq!(
        result,
        Err(ElectorateError::LengthMismatch {
            vote_sets: 1,
            balances: 2,
        })
    );
}

#[test]
fn test_from_parallel_rejects_more_vote_sets() {
    let result = Electorate::from_parallel(&[vote_set(["Park"]), vote_set(["Trees"])], &[1.0]);
    assert!(result.is_err());
}

#[test]
fn test_empty_electorate() {
    let electorate = Electorate::from_parallel(&[], &[]).unwrap();

    assert!(electorate.is_empty());
    assert_eq!(electorate.supporter_total("Park"), 0.0);
    assert!(electorate.balances().is_empty());
}

#[test]
fn test_error_message() {
    let error = ElectorateError::LengthMismatch {
        vote_sets: 3,
        balances: 2,
    };
    assert_eq!(error.to_string(), "Length mismatch: 3 vote sets but 2 balances");
}

// ============================================================================
// Balances
// ============================================================================

#[test]
fn test_supporter_total_sums_supporters_only() {
    let electorate = create_test_electorate();

    assert_eq!(electorate.supporter_total("Park"), 1.5 + 3.3 + 5.1);
    assert_eq!(electorate.supporter_total("Trees"), 1.5 + 2.4);
    assert_eq!(electorate.supporter_total("Lights"), 3.3 + 4.2);
}

#[test]
fn test_top_up_reaches_everyone() {
    let mut electorate = Electorate::new(vec![
        Voter::new(vote_set(["Park"]), 0.0),
        Voter::new(vote_set(Vec::<String>::new()), 10.0),
    ]);

    electorate.top_up_all(2.0);
    assert_eq!(electorate.balances(), vec![2.0, 12.0]);
}

#[test]
fn test_settle_unknown_item_changes_nothing() {
    let mut electorate = create_test_electorate();

    let settled = electorate.settle_supporters("Fountain");

    assert!(settled.is_empty());
    assert_eq!(electorate.balances(), vec![1.5, 2.4, 3.3, 4.2, 5.1]);
}

#[test]
fn test_settle_supporters_reports_previous_balances() {
    let mut electorate = create_test_electorate();

    let settled = electorate.settle_supporters("Lights");

    assert_eq!(settled, vec![(2, 3.3), (3, 4.2)]);
    assert_eq!(electorate.balances(), vec![1.5, 2.4, 0.0, 0.0, 5.1]);
}

#[test]
fn test_electorate_json_round_trip_keeps_voters() {
    let electorate = create_test_electorate();

    let json = serde_json::to_string(&electorate).unwrap();
    let restored: Electorate = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, electorate);
}
