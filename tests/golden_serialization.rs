use sortsearch_core::catalog::{AdviceConfig, SearchAdvice, SearchAlgorithm, SortAlgorithm};
use sortsearch_core::types::{AlgorithmProfile, Complexity};
use serde_json::{json, Value};

#[test]
fn golden_sort_profile_serialization() {
    let profile = SortAlgorithm::Quick.profile();
    let value = serde_json::to_value(&profile).unwrap();

    let expected = json!({
        "name": "quick",
        "best": "linearithmic",
        "average": "linearithmic",
        "worst": "quadratic",
        "auxiliary_space": "logarithmic",
        "stable": false,
        "in_place": true,
        "requires_sorted_input": false
    });

    assert_eq!(value, expected);
}

#[test]
fn golden_search_profile_serialization() {
    let profile = SearchAlgorithm::BinaryRecursive.profile();
    let value = serde_json::to_value(&profile).unwrap();

    let expected = json!({
        "name": "binary_recursive",
        "best": "constant",
        "average": "logarithmic",
        "worst": "logarithmic",
        "auxiliary_space": "logarithmic",
        "stable": true,
        "in_place": true,
        "requires_sorted_input": true
    });

    assert_eq!(value, expected);
}

#[test]
fn algorithm_names_serialize_as_snake_case() {
    assert_eq!(serde_json::to_value(SortAlgorithm::Insertion).unwrap(), json!("insertion"));
    assert_eq!(
        serde_json::to_value(SearchAlgorithm::BinaryIterative).unwrap(),
        json!("binary_iterative")
    );

    let parsed: SortAlgorithm = serde_json::from_value(json!("merge")).unwrap();
    assert_eq!(parsed, SortAlgorithm::Merge);
}

#[test]
fn profile_round_trips_through_json() {
    for algo in SortAlgorithm::ALL {
        let profile = algo.profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: AlgorithmProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}

#[test]
fn golden_advice_serialization() {
    let config = AdviceConfig::v0();
    assert_eq!(serde_json::to_value(&config).unwrap(), json!({ "small_input_threshold": 50 }));

    let advice = SearchAdvice {
        algorithm: SearchAlgorithm::BinaryIterative,
        sort_first: true,
    };
    let value: Value = serde_json::to_value(advice).unwrap();
    assert_eq!(value, json!({ "algorithm": "binary_iterative", "sort_first": true }));
}

#[test]
fn complexity_notation() {
    let notations: Vec<&str> = [
        Complexity::Constant,
        Complexity::Logarithmic,
        Complexity::Linear,
        Complexity::Linearithmic,
        Complexity::Quadratic,
    ]
    .iter()
    .map(|c| c.notation())
    .collect();

    assert_eq!(notations, vec!["O(1)", "O(log n)", "O(n)", "O(n log n)", "O(n^2)"]);
    assert_eq!(Complexity::Linearithmic.to_string(), "O(n log n)");
}
