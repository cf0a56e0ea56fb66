//! Tests for fuzzy k-means++ clustering.
//!
//! # Test Organization
//!
//! - `helpers` - Shared point sets and seeded random sources
//! - `seeding_tests` - k-means++ centroid seeding
//! - `adjust_tests` - Multi-restart `adjust` and the super cluster accessors
//! - `silhouette_tests` - Silhouette coefficient
//! - `edge_cases` - Boundary conditions and property tests

mod helpers;
