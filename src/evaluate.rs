//! Multi-point evaluation of Bernstein-form curves.

use nalgebra::DMatrix;

use crate::nodes::Nodes;

/// Evaluate `nodes` at `K` barycentric weight pairs simultaneously.
///
/// Each pair `(lambda1[k], lambda2[k])` need not sum to 1 (the caller controls that). Computes
/// `sum_{i=0..n} C(n,i) * lambda1^(n-i) * lambda2^i * nodes[i]` for every `k` at once.
///
/// The inner loop accumulates the running binomial coefficient and `lambda2` power
/// incrementally and folds them into the accumulator by multiplying by `lambda1` at each step,
/// rather than forming `lambda1` and `lambda2` powers independently. This is both `O(n)` per
/// point and numerically preferable. The specific accumulation order is part of this crate's
/// determinism contract (see the crate-level docs).
pub fn evaluate_curve_barycentric(nodes: &Nodes, lambda1: &[f64], lambda2: &[f64]) -> Nodes {
	assert_eq!(lambda1.len(), lambda2.len(), "lambda1 and lambda2 must have the same length");

	let k = lambda1.len();
	let n = nodes.degree();
	let d = nodes.d();
	let mut out = DMatrix::<f64>::zeros(k, d);

	for point_index in 0..k {
		let l1 = lambda1[point_index];
		let l2 = lambda2[point_index];

		let mut acc = nodes.row(0);
		let mut binom = 1.0_f64;
		let mut lambda2_pow = 1.0_f64;

		for i in 1..=n {
			binom *= (n - i + 1) as f64 / i as f64;
			lambda2_pow *= l2;
			acc = acc * l1 + nodes.row(i) * (binom * lambda2_pow);
		}

		out.set_row(point_index, &acc);
	}

	Nodes::from_matrix(out)
}

/// Evaluate `nodes` at single-parameter values `s[k]`; equivalent to
/// [`evaluate_curve_barycentric`] with `lambda1 = 1 - s`, `lambda2 = s`.
pub fn evaluate_multi(nodes: &Nodes, s: &[f64]) -> Nodes {
	let lambda1: Vec<f64> = s.iter().map(|v| 1.0 - v).collect();
	let lambda2: Vec<f64> = s.to_vec();
	evaluate_curve_barycentric(nodes, &lambda1, &lambda2)
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-12;

	#[test]
	fn endpoints_match_control_points() {
		let nodes = Nodes::from_flat(4, 2, &[0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0]).unwrap();
		let out = evaluate_multi(&nodes, &[0.0, 1.0]);
		assert!(out.row(0).iter().zip(nodes.row(0).iter()).all(|(a, b)| (a - b).abs() < EPS));
		assert!(out.row(1).iter().zip(nodes.row(3).iter()).all(|(a, b)| (a - b).abs() < EPS));
	}

	#[test]
	fn linear_curve_is_a_lerp() {
		let nodes = Nodes::from_flat(2, 2, &[0.0, 0.0, 1.0, 2.0]).unwrap();
		let out = evaluate_multi(&nodes, &[0.0, 0.25, 1.0]);
		assert!((out.get(0, 0) - 0.0).abs() < EPS && (out.get(0, 1) - 0.0).abs() < EPS);
		assert!((out.get(1, 0) - 0.25).abs() < EPS && (out.get(1, 1) - 0.5).abs() < EPS);
		assert!((out.get(2, 0) - 1.0).abs() < EPS && (out.get(2, 1) - 2.0).abs() < EPS);
	}

	#[test]
	fn quadratic_midpoint() {
		let nodes = Nodes::from_flat(3, 2, &[0.0, 0.0, 0.5, 1.0, 1.0, 0.0]).unwrap();
		let out = evaluate_multi(&nodes, &[0.5]);
		assert!((out.get(0, 0) - 0.5).abs() < EPS);
		assert!((out.get(0, 1) - 0.5).abs() < EPS);
	}

	#[test]
	fn affine_invariance() {
		// A(p) = 2p + (1, -1)
		let nodes = Nodes::from_flat(3, 2, &[0.0, 0.0, 1.0, 3.0, 2.0, 0.0]).unwrap();
		let transformed = Nodes::from_flat(
			3,
			2,
			&nodes.to_flat().chunks(2).flat_map(|p| [2.0 * p[0] + 1.0, 2.0 * p[1] - 1.0]).collect::<Vec<_>>(),
		)
		.unwrap();

		let s = [0.0, 0.3, 0.7, 1.0];
		let direct = evaluate_multi(&nodes, &s);
		let via_transform = evaluate_multi(&transformed, &s);

		for k in 0..s.len() {
			let expected_x = 2.0 * direct.get(k, 0) + 1.0;
			let expected_y = 2.0 * direct.get(k, 1) - 1.0;
			assert!((via_transform.get(k, 0) - expected_x).abs() < EPS);
			assert!((via_transform.get(k, 1) - expected_y).abs() < EPS);
		}
	}
}
