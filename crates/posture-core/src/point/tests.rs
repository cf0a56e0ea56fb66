//! Tests for the point model.

use super::*;

#[test]
fn test_new_point_is_unassigned() {
    let point = FuzzyPoint::labeled(vec![1.0, 2.0, 3.0], "sitting");

    assert_eq!(point.dim_count(), 3);
    assert_eq!(point.activity.as_deref(), Some("sitting"));
    assert!(!point.has_best_fit_cluster());
    assert!(point.membership_degrees().is_empty());
    assert_eq!(point.membership_degree(0), 0.0);

    println!("[VERIFIED] New point starts unassigned");
}

#[test]
fn test_euclidean_distance() {
    let point = FuzzyPoint::unlabeled(vec![0.0, 0.0]);

    assert!((point.dist(&[3.0, 4.0]) - 5.0).abs() < 1e-12);
    assert_eq!(point.dist(&[0.0, 0.0]), 0.0);

    println!("[VERIFIED] dist computes Euclidean distance");
}

#[test]
fn test_membership_degrees_sum_to_one() {
    let mut point = FuzzyPoint::unlabeled(vec![1.0]);
    let c0 = [0.0];
    let c1 = [3.0];
    let c2 = [5.0];

    point.set_membership_degrees(vec![(0, &c0[..]), (1, &c1[..]), (2, &c2[..])]);

    let sum: f64 = point.membership_degrees().values().sum();
    assert!((sum - 1.0).abs() < 1e-12);

    // 1/d²: 1, 1/4, 1/16 => nearest centroid dominates
    assert!(point.membership_degree(0) > point.membership_degree(1));
    assert!(point.membership_degree(1) > point.membership_degree(2));
    assert!((point.membership_degree(0) - 16.0 / 21.0).abs() < 1e-12);

    println!(
        "[VERIFIED] Membership degrees normalized: {:?}",
        point.membership_degrees()
    );
}

#[test]
fn test_membership_degree_zero_distance() {
    let mut point = FuzzyPoint::unlabeled(vec![2.0]);
    let on_point = [2.0];
    let far = [3.0];

    point.set_membership_degrees(vec![(0, &on_point[..]), (1, &far[..])]);

    // Raw weights 1 and 1/1 => split evenly
    assert!((point.membership_degree(0) - 0.5).abs() < 1e-12);
    assert!((point.membership_degree(1) - 0.5).abs() < 1e-12);
    assert!(point.membership_degrees().values().all(|d| d.is_finite()));

    println!("[VERIFIED] Zero distance uses unit weight, never divides by zero");
}

#[test]
fn test_nearest_neighbour_cluster_skips_best_fit() {
    let mut point = FuzzyPoint::unlabeled(vec![1.0]);
    let c0 = [0.0];
    let c1 = [4.0];
    let c2 = [2.0];
    point.set_membership_degrees(vec![(0, &c0[..]), (1, &c1[..]), (2, &c2[..])]);
    point.best_fit_cluster = Some(0);

    // Cluster 0 and 2 are equally close; 0 is the best fit, so 2 is the neighbour
    assert_eq!(point.nearest_neighbour_cluster(), Some(2));

    point.best_fit_cluster = Some(2);
    assert_eq!(point.nearest_neighbour_cluster(), Some(0));

    println!("[VERIFIED] nearest_neighbour_cluster ignores the best-fit cluster");
}

#[test]
fn test_nearest_neighbour_cluster_without_memberships() {
    let point = FuzzyPoint::unlabeled(vec![1.0]);
    assert_eq!(point.nearest_neighbour_cluster(), None);
}

#[test]
fn test_reset_assignment() {
    let mut point = FuzzyPoint::labeled(vec![1.0, 1.0], "lying");
    let c0 = [0.0, 0.0];
    point.set_membership_degrees(vec![(0, &c0[..])]);
    point.best_fit_cluster = Some(0);

    point.reset_assignment();

    assert!(!point.has_best_fit_cluster());
    assert!(point.membership_degrees().is_empty());
    assert_eq!(point.coords, vec![1.0, 1.0]);
    assert_eq!(point.activity.as_deref(), Some("lying"));

    println!("[VERIFIED] reset_assignment clears clustering state only");
}

#[test]
fn test_membership_degrees_extreme_distances() {
    let mut point = FuzzyPoint::unlabeled(vec![0.0]);
    let far_left = [-1e200];
    let far_right = [1e200];

    point.set_membership_degrees(vec![(0, &far_left[..]), (1, &far_right[..])]);

    assert!((point.dist(&far_right) - 1e200).abs() < 1e188);
    assert!((point.membership_degree(0) - 0.5).abs() < 1e-12);
    assert!((point.membership_degree(1) - 0.5).abs() < 1e-12);

    let near = [1e-200];
    let nearer_twice = [2e-200];
    point.set_membership_degrees(vec![(0, &near[..]), (1, &nearer_twice[..])]);

    // 1/d² ratio 4:1 holds even where 1/d² itself overflows.
    assert!((point.membership_degree(0) - 0.8).abs() < 1e-12);
    assert!((point.membership_degree(1) - 0.2).abs() < 1e-12);

    println!(
        "[VERIFIED] Memberships stay normalized at extreme distances: {:?}",
        point.membership_degrees()
    );
}

#[test]
fn test_coincident_centroid_with_far_neighbour() {
    let mut point = FuzzyPoint::unlabeled(vec![0.0]);
    let on_point = [0.0];
    let far = [1e200];

    point.set_membership_degrees(vec![(0, &on_point[..]), (1, &far[..])]);

    // Raw weights 1 and 1e-400: the coincident centroid takes everything.
    assert_eq!(point.membership_degree(0), 1.0);
    assert_eq!(point.membership_degree(1), 0.0);
}

#[test]
fn test_euclidean_distance_large_coordinates() {
    let d = euclidean_distance(&[3e200, 0.0], &[0.0, 4e200]);

    assert!(d.is_finite());
    assert!((d / 5e200 - 1.0).abs() < 1e-12);
}
