//! Tests for configuration module.

use std::env;
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use super::*;
use crate::fuzzy::FuzzyNumberKind;

// =========================================================================
// DEFAULT TESTS
// =========================================================================

#[test]
fn test_training_config_default() {
    let config = TrainingConfig::default();

    assert_eq!(config.clustering.cluster_count, 3);
    assert_eq!(config.clustering.restart_count, 10);
    assert_eq!(config.clustering.max_sampling_attempts, 10);
    assert_eq!(config.clustering.max_iterations, 300);
    assert_eq!(config.clustering.seed, None);
    assert_eq!(config.extraction.fuzzy_number, FuzzyNumberKind::Gaussian);
    assert!((config.extraction.min_membership_degree - 0.15).abs() < f64::EPSILON);
    assert!((config.extraction.bound_tolerance - 0.02).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn test_clustering_config_builders() {
    let config = ClusteringConfig::with_cluster_count(2)
        .with_restart_count(4)
        .with_seed(7);

    assert_eq!(config.cluster_count, 2);
    assert_eq!(config.restart_count, 4);
    assert_eq!(config.seed, Some(7));
    assert!(config.validate().is_ok());
}

#[test]
fn test_extraction_qualifies_uses_tolerance() {
    let config = ExtractionConfig::default(); // threshold 0.15, tolerance 0.02

    assert!(config.qualifies(0.5));
    assert!(config.qualifies(0.14)); // within tolerance
    assert!(!config.qualifies(0.12));
    assert!(!config.qualifies(0.0));
}

#[test]
fn test_extraction_qualifies_without_tolerance() {
    let config = ExtractionConfig {
        bound_tolerance: 0.0,
        ..ExtractionConfig::default()
    };

    assert!(config.qualifies(0.16));
    assert!(!config.qualifies(0.15));
    assert!(!config.qualifies(0.14));
}

// =========================================================================
// VALIDATION TESTS
// =========================================================================

#[test]
fn test_validate_rejects_zero_cluster_count() {
    let mut config = TrainingConfig::default();
    config.clustering.cluster_count = 0;

    let err = config.validate().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("clustering.cluster_count"), "got: {}", msg);

    println!("[VERIFIED] Zero cluster count rejected: {}", msg);
}

#[test]
fn test_validate_rejects_zero_restart_count() {
    let mut config = TrainingConfig::default();
    config.clustering.restart_count = 0;

    let msg = config.validate().unwrap_err().to_string();
    assert!(msg.contains("clustering.restart_count"), "got: {}", msg);
}

#[test]
fn test_validate_rejects_out_of_range_threshold() {
    let mut config = TrainingConfig::default();
    config.extraction.min_membership_degree = 1.5;

    let msg = config.validate().unwrap_err().to_string();
    assert!(msg.contains("extraction.min_membership_degree"), "got: {}", msg);

    config.extraction.min_membership_degree = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_negative_tolerance() {
    let mut config = TrainingConfig::default();
    config.extraction.bound_tolerance = -0.01;

    let msg = config.validate().unwrap_err().to_string();
    assert!(msg.contains("extraction.bound_tolerance"), "got: {}", msg);
}

// =========================================================================
// TOML TESTS
// =========================================================================

#[test]
fn test_from_toml_str_partial_sections() {
    let config = TrainingConfig::from_toml_str(
        r#"
        [clustering]
        cluster_count = 4
        seed = 42

        [extraction]
        fuzzy_number = "triangular"
        "#,
    )
    .unwrap();

    assert_eq!(config.clustering.cluster_count, 4);
    assert_eq!(config.clustering.seed, Some(42));
    assert_eq!(config.clustering.restart_count, 10);
    assert_eq!(config.extraction.fuzzy_number, FuzzyNumberKind::Triangular);
    assert!((config.extraction.min_membership_degree - 0.15).abs() < f64::EPSILON);
}

#[test]
fn test_from_toml_str_empty_uses_defaults() {
    let config = TrainingConfig::from_toml_str("").unwrap();
    assert_eq!(config, TrainingConfig::default());
}

#[test]
fn test_from_toml_str_unknown_fuzzy_number() {
    let result = TrainingConfig::from_toml_str(
        r#"
        [extraction]
        fuzzy_number = "trapezoidal"
        "#,
    );

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_toml_roundtrip() {
    let mut config = TrainingConfig::default();
    config.clustering.seed = Some(99);
    config.extraction.fuzzy_number = FuzzyNumberKind::Triangular;

    let toml = config.to_toml_string().unwrap();
    let parsed = TrainingConfig::from_toml_str(&toml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[clustering]\nrestart_count = 3\n\n[extraction]\nbound_tolerance = 0.05"
    )
    .unwrap();

    let config = TrainingConfig::from_file(file.path()).unwrap();
    assert_eq!(config.clustering.restart_count, 3);
    assert!((config.extraction.bound_tolerance - 0.05).abs() < f64::EPSILON);
}

#[test]
fn test_from_file_missing() {
    let result = TrainingConfig::from_file("/nonexistent/posture.toml");

    match result {
        Err(ConfigError::Io { path, .. }) => assert!(path.contains("posture.toml")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

// =========================================================================
// ENV OVERRIDE TESTS
// =========================================================================

#[test]
#[serial]
fn test_env_overrides() {
    env::set_var("POSTURE_CLUSTER_COUNT", "5");
    env::set_var("POSTURE_SEED", "1234");
    env::set_var("POSTURE_FUZZY_NUMBER", "triangular");
    env::set_var("POSTURE_MIN_MEMBERSHIP_DEGREE", "0.05");

    let config = TrainingConfig::default().with_env_overrides();

    env::remove_var("POSTURE_CLUSTER_COUNT");
    env::remove_var("POSTURE_SEED");
    env::remove_var("POSTURE_FUZZY_NUMBER");
    env::remove_var("POSTURE_MIN_MEMBERSHIP_DEGREE");

    assert_eq!(config.clustering.cluster_count, 5);
    assert_eq!(config.clustering.seed, Some(1234));
    assert_eq!(config.extraction.fuzzy_number, FuzzyNumberKind::Triangular);
    assert!((config.extraction.min_membership_degree - 0.05).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_env_overrides_ignore_garbage() {
    env::set_var("POSTURE_RESTART_COUNT", "many");
    env::set_var("POSTURE_FUZZY_NUMBER", "bell");

    let config = TrainingConfig::default().with_env_overrides();

    env::remove_var("POSTURE_RESTART_COUNT");
    env::remove_var("POSTURE_FUZZY_NUMBER");

    assert_eq!(config.clustering.restart_count, 10);
    assert_eq!(config.extraction.fuzzy_number, FuzzyNumberKind::Gaussian);
}
