//! Cross-module scenarios drawn from the curve kernel's documented test cases.

use bezier_kernel::{
	compute_length, evaluate_multi, full_reduce, get_curvature, locate_point, subdivide_nodes, Nodes, LOCATE_INVALID, LOCATE_MISS,
};

const EPS: f64 = 1e-9;

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn linear_curve_scenario() {
	init_logging();
	let nodes = Nodes::from_flat(2, 2, &[0.0, 0.0, 1.0, 2.0]).unwrap();

	let out = evaluate_multi(&nodes, &[0.0, 0.25, 1.0]);
	assert!((out.get(0, 0) - 0.0).abs() < EPS && (out.get(0, 1) - 0.0).abs() < EPS);
	assert!((out.get(1, 0) - 0.25).abs() < EPS && (out.get(1, 1) - 0.5).abs() < EPS);
	assert!((out.get(2, 0) - 1.0).abs() < EPS && (out.get(2, 1) - 2.0).abs() < EPS);

	let (length, err_code) = compute_length(&nodes);
	assert_eq!(err_code, 0);
	assert!((length - 5.0_f64.sqrt()).abs() < EPS);

	let (kappa, _) = get_curvature(&nodes, 0.5);
	assert_eq!(kappa, 0.0);
}

#[test]
fn quadratic_curve_scenario() {
	let nodes = Nodes::from_flat(3, 2, &[0.0, 0.0, 0.5, 1.0, 1.0, 0.0]).unwrap();

	let mid = evaluate_multi(&nodes, &[0.5]);
	assert!((mid.get(0, 0) - 0.5).abs() < EPS);
	assert!((mid.get(0, 1) - 0.5).abs() < EPS);

	let (left, right) = subdivide_nodes(&nodes);
	let expected_left = [0.0, 0.0, 0.25, 0.5, 0.5, 0.5];
	let expected_right = [0.5, 0.5, 0.75, 0.5, 1.0, 0.0];
	assert!(left.to_flat().iter().zip(expected_left.iter()).all(|(a, b)| (a - b).abs() < EPS));
	assert!(right.to_flat().iter().zip(expected_right.iter()).all(|(a, b)| (a - b).abs() < EPS));
}

#[test]
fn cubic_locate_scenario() {
	init_logging();
	let nodes = Nodes::from_flat(4, 2, &[0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0]).unwrap();
	let s = locate_point(&nodes, &[1.5, 0.0]);
	assert!((s - 0.5).abs() < 1e-6);
}

#[test]
fn off_curve_point_scenario() {
	let nodes = Nodes::from_flat(2, 2, &[0.0, 0.0, 1.0, 0.0]).unwrap();
	assert_eq!(locate_point(&nodes, &[0.5, 1.0]), LOCATE_MISS);
}

#[test]
fn closed_loop_self_intersection_scenario() {
	let nodes = Nodes::from_flat(4, 2, &[0.0, 0.0, 2.0, 3.0, -2.0, 3.0, 0.0, 0.0]).unwrap();
	assert_eq!(locate_point(&nodes, &[0.0, 0.0]), LOCATE_INVALID);
}

#[test]
fn collinear_quadratic_reduction_scenario() {
	let nodes = Nodes::from_flat(3, 2, &[0.0, 0.0, 1.0, 0.0, 2.0, 0.0]).unwrap();
	let (num_reduced, reduced, not_implemented) = full_reduce(&nodes);
	assert!(!not_implemented);
	assert_eq!(num_reduced, 2);
	assert!((reduced.get(0, 0) - 0.0).abs() < 1e-6 && (reduced.get(0, 1) - 0.0).abs() < 1e-6);
	assert!((reduced.get(1, 0) - 2.0).abs() < 1e-6 && (reduced.get(1, 1) - 0.0).abs() < 1e-6);
}

#[test]
fn locate_then_specialize_round_trip() {
	// Locating a point, then specializing the curve to the region around it, should keep the
	// same point reachable near the new subinterval's midpoint.
	use bezier_kernel::specialize_curve;

	let nodes = Nodes::from_flat(4, 2, &[0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0]).unwrap();
	let target = evaluate_multi(&nodes, &[0.6]);
	let point = [target.get(0, 0), target.get(0, 1)];

	let s = locate_point(&nodes, &point);
	assert!((s - 0.6).abs() < 1e-5);

	let (sub, true_start, true_end) = specialize_curve(&nodes, s - 0.1, s + 0.1, 0.0, 1.0);
	assert!(true_start < s && s < true_end);

	let local_point = evaluate_multi(&sub, &[0.5]);
	let direct_point = evaluate_multi(&nodes, &[(true_start + true_end) / 2.0]);
	assert!((local_point.get(0, 0) - direct_point.get(0, 0)).abs() < 1e-8);
	assert!((local_point.get(0, 1) - direct_point.get(0, 1)).abs() < 1e-8);
}
