//! Single-step Newton refinement of a curve parameter toward a target point.

use crate::differential::evaluate_hodograph;
use crate::evaluate::evaluate_multi;
use crate::nodes::Nodes;

/// Refine a parameter seed `s` toward the point on `nodes` closest to `point`.
///
/// Computes `delta = point - B(s)` and `deriv = B'(s)`, then returns
/// `s + dot(delta, deriv) / dot(deriv, deriv)`. A single Newton step; the result is not bounded
/// back into `[0, 1]`.
pub fn newton_refine(nodes: &Nodes, point: &[f64], s: f64) -> f64 {
	assert_eq!(point.len(), nodes.d());

	let b_s = evaluate_multi(nodes, &[s]);
	let deriv = evaluate_hodograph(s, nodes);

	let mut delta_dot_deriv = 0.0;
	let mut deriv_dot_deriv = 0.0;
	for k in 0..nodes.d() {
		let delta_k = point[k] - b_s.get(0, k);
		let deriv_k = deriv.get(0, k);
		delta_dot_deriv += delta_k * deriv_k;
		deriv_dot_deriv += deriv_k * deriv_k;
	}

	s + delta_dot_deriv / deriv_dot_deriv
}
