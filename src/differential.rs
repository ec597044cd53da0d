//! Hodograph (derivative) evaluation and curvature.

use crate::evaluate::evaluate_multi;
use crate::nodes::Nodes;

/// Control points of the hodograph (derivative curve) of `nodes`: degree `n - 1`, node `i` is
/// `n * (nodes[i+1] - nodes[i])`.
pub fn hodograph_nodes(nodes: &Nodes) -> Nodes {
	let n = nodes.degree() as f64;
	let d = nodes.d();
	let count = nodes.n() - 1;
	let mut flat = Vec::with_capacity(count * d);
	for i in 0..count {
		for k in 0..d {
			flat.push(n * (nodes.get(i + 1, k) - nodes.get(i, k)));
		}
	}
	Nodes::from_flat(count, d, &flat).expect("hodograph_nodes builds a well-shaped buffer")
}

/// Evaluate the derivative `B'(s)` of `nodes` at parameter `s`.
///
/// For a degree-0 curve (a single node) the derivative is identically zero.
pub fn evaluate_hodograph(s: f64, nodes: &Nodes) -> Nodes {
	if nodes.n() == 1 {
		return Nodes::from_flat(1, nodes.d(), &vec![0.0; nodes.d()]).unwrap();
	}
	let diff_nodes = hodograph_nodes(nodes);
	evaluate_multi(&diff_nodes, &[s])
}

/// Curvature of a 2D curve at parameter `s`, and the tangent vector used to compute it.
///
/// `kappa = cross(T, C) / |T|^3` where `T` is the tangent (first derivative) and `C` the second
/// derivative. Degree-1 curves (`N = 2`) have zero curvature unconditionally since a line has no
/// well-defined second derivative to speak of.
pub fn get_curvature(nodes: &Nodes, s: f64) -> (f64, Nodes) {
	assert_eq!(nodes.d(), 2, "curvature is only defined in 2D");

	let tangent = evaluate_hodograph(s, nodes);

	if nodes.n() == 2 {
		return (0.0, tangent);
	}

	let first_deriv_nodes = hodograph_nodes(nodes);
	let second_deriv = evaluate_hodograph(s, &first_deriv_nodes);

	let t = (tangent.get(0, 0), tangent.get(0, 1));
	let c = (second_deriv.get(0, 0), second_deriv.get(0, 1));

	let numerator = crate::numeric::cross_product(t, c);
	let denominator = (t.0 * t.0 + t.1 * t.1).powf(1.5);

	let kappa = if denominator == 0.0 { 0.0 } else { numerator / denominator };
	(kappa, tangent)
}
