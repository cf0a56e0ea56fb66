//! Tests for fuzzy numbers, bounds and rule-set construction.
//!
//! # Test Organization
//!
//! - `helpers` - Clustered fixtures
//! - `number_tests` - Gaussian and triangular fuzzy numbers
//! - `bounds_tests` - Cluster bound extraction and interval checks
//! - `rule_tests` - Rule aggregation and rule sets
//! - `builder_tests` - Rule-set construction from a super cluster

mod helpers;

mod rule_tests;
