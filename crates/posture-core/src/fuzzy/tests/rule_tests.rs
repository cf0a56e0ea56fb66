//! Fuzzy rule and rule set tests.

use crate::fuzzy::{FuzzyNumber, FuzzyRule, FuzzyRuleSet};

fn tfn(left: f64, center: f64, right: f64) -> FuzzyNumber {
    FuzzyNumber::triangular(left, center, right).unwrap()
}

#[test]
fn test_rule_degree_is_minimum() {
    let rule = FuzzyRule::new(vec![tfn(0.0, 1.0, 2.0), tfn(0.0, 2.0, 4.0)]);

    // Dimension 0 gives 0.5, dimension 1 gives 1.0.
    assert_eq!(rule.degree(&[0.5, 2.0]), 0.5);
    // Dimension 0 gives 1.0, dimension 1 gives 0.25.
    assert_eq!(rule.degree(&[1.0, 0.5]), 0.25);
    assert_eq!(rule.degree(&[5.0, 2.0]), 0.0);
}

#[test]
fn test_rule_degree_dimension_mismatch() {
    let rule = FuzzyRule::new(vec![tfn(0.0, 1.0, 2.0)]);

    assert_eq!(rule.degree(&[1.0, 1.0]), 0.0);
    assert_eq!(rule.degree(&[]), 0.0);
}

#[test]
fn test_rule_display() {
    let rule: FuzzyRule = vec![tfn(0.0, 1.0, 2.0), FuzzyNumber::gaussian(3.0, 0.5).unwrap()].into();

    assert_eq!(
        rule.to_string(),
        "[0] left: 0.0000, center: 1.0000, right: 2.0000; [1] mean: 3.0000, std dev: 0.5000"
    );
    assert_eq!(rule.dim_count(), 2);
    assert_eq!(rule.numbers()[1].peak(), 3.0);
}

#[test]
fn test_rule_set_ordered_by_label() {
    let mut rule_set = FuzzyRuleSet::new();
    rule_set.insert("walking", FuzzyRule::new(vec![tfn(0.0, 1.0, 2.0)]));
    rule_set.insert("lying", FuzzyRule::new(vec![tfn(2.0, 3.0, 4.0)]));
    rule_set.insert("sitting", FuzzyRule::new(vec![tfn(4.0, 5.0, 6.0)]));

    let activities: Vec<&str> = rule_set.activities().collect();
    assert_eq!(activities, vec!["lying", "sitting", "walking"]);
    assert_eq!(rule_set.len(), 3);
    assert!(!rule_set.is_empty());
}

#[test]
fn test_rule_set_insert_replaces() {
    let mut rule_set = FuzzyRuleSet::new();
    let first = FuzzyRule::new(vec![tfn(0.0, 1.0, 2.0)]);
    let second = FuzzyRule::new(vec![tfn(5.0, 6.0, 7.0)]);

    assert!(rule_set.insert("walking", first.clone()).is_none());
    assert_eq!(rule_set.insert("walking", second.clone()), Some(first));
    assert_eq!(rule_set.get("walking"), Some(&second));
    assert_eq!(rule_set.len(), 1);
}

#[test]
fn test_rule_set_serde() {
    let rule_set: FuzzyRuleSet = [
        ("sitting".to_string(), FuzzyRule::new(vec![tfn(4.0, 5.0, 6.0)])),
        (
            "walking".to_string(),
            FuzzyRule::new(vec![FuzzyNumber::gaussian(1.0, 0.5).unwrap()]),
        ),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&rule_set).unwrap();
    let back: FuzzyRuleSet = serde_json::from_str(&json).unwrap();

    assert_eq!(back, rule_set);
    assert!(json.contains("\"walking\":[{\"kind\":\"gaussian\""));

    println!("[VERIFIED] Rule sets serialize as label -> tagged fuzzy numbers");
}

#[test]
fn test_rule_set_display() {
    let mut rule_set = FuzzyRuleSet::new();
    rule_set.insert("sitting", FuzzyRule::new(vec![tfn(4.0, 5.0, 6.0)]));

    assert_eq!(
        rule_set.to_string(),
        "sitting: [0] left: 4.0000, center: 5.0000, right: 6.0000\n"
    );
}
