//! Degree elevation and pseudo-inverse degree reduction.

use nalgebra::DMatrix;

use crate::consts::REDUCE_THRESHOLD;
use crate::nodes::Nodes;

/// Smallest node count for which a closed-form reduction matrix exists.
const MIN_REDUCIBLE_N: usize = 2;
/// Largest node count for which a closed-form reduction matrix exists.
const MAX_REDUCIBLE_N: usize = 5;

/// Build the elevation operator from `m` nodes (degree `m - 1`) to `m + 1` nodes (degree `m`).
fn elevation_matrix(m: usize) -> DMatrix<f64> {
	let mut mat = DMatrix::<f64>::zeros(m + 1, m);
	mat[(0, 0)] = 1.0;
	mat[(m, m - 1)] = 1.0;
	for i in 1..m {
		mat[(i, i - 1)] = i as f64 / m as f64;
		mat[(i, i)] = (m - i) as f64 / m as f64;
	}
	mat
}

/// Elevate `nodes` from degree `n` to degree `n + 1`, exactly and unconditionally.
pub fn elevate_nodes(nodes: &Nodes) -> Nodes {
	let elevated = elevation_matrix(nodes.n()) * nodes.matrix();
	Nodes::from_matrix(elevated)
}

/// The least-squares pseudo-inverse of the elevation operator for curves with `n` nodes, or
/// `None` outside the closed-form range `[2, 5]` this crate supports (per the spec's
/// `not_implemented` contract; no general extension is invented for higher degrees).
fn reduction_matrix(n: usize) -> Option<DMatrix<f64>> {
	if !(MIN_REDUCIBLE_N..=MAX_REDUCIBLE_N).contains(&n) {
		return None;
	}
	let elevation = elevation_matrix(n - 1);
	elevation.pseudo_inverse(1e-12).ok()
}

/// Reduce `nodes` from degree `n` to degree `n - 1` via the pseudo-inverse of elevation.
///
/// Returns `(None, true)` when `nodes.n()` falls outside the closed-form range `[2, 5]` this
/// crate supports; the caller should treat that as "unsupported for this degree" and not retry.
pub fn reduce_pseudo_inverse(nodes: &Nodes) -> (Option<Nodes>, bool) {
	match reduction_matrix(nodes.n()) {
		None => {
			log::debug!("no closed-form reduction matrix for N = {}", nodes.n());
			(None, true)
		}
		Some(matrix) => (Some(Nodes::from_matrix(matrix * nodes.matrix())), false),
	}
}

/// Frobenius relative error between `nodes` and `projected`, `0` when the numerator vanishes.
pub fn projection_error(nodes: &Nodes, projected: &Nodes) -> f64 {
	let numerator = (nodes.matrix() - projected.matrix()).norm();
	if numerator == 0.0 { 0.0 } else { numerator / nodes.matrix().norm() }
}

/// Tri-state result of testing whether a curve can be losslessly reduced one degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanReduce {
	/// The curve's relative projection error is within [`REDUCE_THRESHOLD`].
	Reducible,
	/// The curve genuinely needs its current degree.
	NotReducible,
	/// No closed-form reduction matrix exists for this node count.
	NotImplemented,
}

/// Test whether `nodes` can be losslessly reduced one degree.
///
/// Computes the symmetric projection (reduce then elevate back) and compares its Frobenius
/// relative error against [`REDUCE_THRESHOLD`]. `N < 2` is always [`CanReduce::NotReducible`];
/// `N > 5` is always [`CanReduce::NotImplemented`].
pub fn can_reduce(nodes: &Nodes) -> CanReduce {
	if nodes.n() < MIN_REDUCIBLE_N {
		return CanReduce::NotReducible;
	}
	if nodes.n() > MAX_REDUCIBLE_N {
		return CanReduce::NotImplemented;
	}

	let (reduced, not_implemented) = reduce_pseudo_inverse(nodes);
	if not_implemented {
		return CanReduce::NotImplemented;
	}
	let reduced = reduced.expect("closed-form range implies a reduction matrix exists");
	let projected = elevate_nodes(&reduced);

	if projection_error(nodes, &projected) < REDUCE_THRESHOLD {
		CanReduce::Reducible
	} else {
		CanReduce::NotReducible
	}
}

/// Iterate [`can_reduce`] + [`reduce_pseudo_inverse`] until a step reports `NotReducible`, at
/// most `N - 1` times. Returns `(num_reduced, reduced_nodes, not_implemented)`, where
/// `num_reduced` is the node count of the fully reduced curve (`reduced_nodes.n()`), not the
/// number of reduction steps taken.
pub fn full_reduce(nodes: &Nodes) -> (usize, Nodes, bool) {
	let mut current = nodes.clone();
	let max_iters = nodes.n().saturating_sub(1);

	for _ in 0..max_iters {
		match can_reduce(&current) {
			CanReduce::Reducible => {
				let (reduced, _) = reduce_pseudo_inverse(&current);
				current = reduced.expect("Reducible implies a closed-form matrix exists");
			}
			CanReduce::NotReducible => break,
			CanReduce::NotImplemented => return (current.n(), current, true),
		}
	}

	(current.n(), current, false)
}
