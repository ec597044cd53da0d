//! Flat procedural entry points over plain double buffers.
//!
//! Every routine elsewhere in this crate takes and returns [`Nodes`] values for ergonomics. This
//! module is the thin facade that matches the crate's actual external contract: primitive
//! integers and flat row-major `f64` slices in, caller-sized `Vec<f64>` buffers out. No type in
//! this module escapes by reference; nothing here allocates beyond its own return value.

use crate::degree;
use crate::differential;
use crate::evaluate;
use crate::length;
use crate::locate;
use crate::newton;
use crate::nodes::Nodes;
use crate::numeric;
use crate::subdivide;

fn nodes(n: usize, d: usize, flat: &[f64]) -> Nodes {
	Nodes::from_flat(n, d, flat).expect("caller-provided N, D, and buffer length must agree")
}

/// `evaluate_curve_barycentric(N, D, nodes, K, lambda1, lambda2) -> out[K, D]`.
pub fn evaluate_curve_barycentric(n: usize, d: usize, flat_nodes: &[f64], lambda1: &[f64], lambda2: &[f64]) -> Vec<f64> {
	evaluate::evaluate_curve_barycentric(&nodes(n, d, flat_nodes), lambda1, lambda2).to_flat()
}

/// `evaluate_multi(N, D, nodes, K, s) -> out[K, D]`.
pub fn evaluate_multi(n: usize, d: usize, flat_nodes: &[f64], s: &[f64]) -> Vec<f64> {
	evaluate::evaluate_multi(&nodes(n, d, flat_nodes), s).to_flat()
}

/// `specialize_curve(N, D, nodes, s, e, curve_start, curve_end) -> (new_nodes[N,D], true_start, true_end)`.
pub fn specialize_curve(n: usize, d: usize, flat_nodes: &[f64], s: f64, e: f64, curve_start: f64, curve_end: f64) -> (Vec<f64>, f64, f64) {
	let (new_nodes, true_start, true_end) = crate::specialize::specialize_curve(&nodes(n, d, flat_nodes), s, e, curve_start, curve_end);
	(new_nodes.to_flat(), true_start, true_end)
}

/// `evaluate_hodograph(s, N, D, nodes) -> out[1, D]`.
pub fn evaluate_hodograph(s: f64, n: usize, d: usize, flat_nodes: &[f64]) -> Vec<f64> {
	differential::evaluate_hodograph(s, &nodes(n, d, flat_nodes)).to_flat()
}

/// `subdivide_nodes(N, D, nodes) -> (left[N,D], right[N,D])`.
pub fn subdivide_nodes(n: usize, d: usize, flat_nodes: &[f64]) -> (Vec<f64>, Vec<f64>) {
	let (left, right) = subdivide::subdivide_nodes(&nodes(n, d, flat_nodes));
	(left.to_flat(), right.to_flat())
}

/// `newton_refine(N, D, nodes, point, s) -> s'`.
pub fn newton_refine(n: usize, d: usize, flat_nodes: &[f64], point: &[f64], s: f64) -> f64 {
	newton::newton_refine(&nodes(n, d, flat_nodes), point, s)
}

/// `locate_point(N, D, nodes, point) -> s_approx` (with [`consts::LOCATE_MISS`] / [`consts::LOCATE_INVALID`] sentinels).
pub fn locate_point(n: usize, d: usize, flat_nodes: &[f64], point: &[f64]) -> f64 {
	locate::locate_point(&nodes(n, d, flat_nodes), point)
}

/// `elevate_nodes(N, D, nodes) -> elevated[N+1, D]`.
pub fn elevate_nodes(n: usize, d: usize, flat_nodes: &[f64]) -> Vec<f64> {
	degree::elevate_nodes(&nodes(n, d, flat_nodes)).to_flat()
}

/// `get_curvature(N, D, nodes, tangent[1, D], s) -> kappa`. `tangent` is a caller-provided output
/// buffer of length `D`, written with the tangent vector used to compute `kappa`.
pub fn get_curvature(n: usize, d: usize, flat_nodes: &[f64], tangent: &mut [f64], s: f64) -> f64 {
	let (kappa, tangent_nodes) = differential::get_curvature(&nodes(n, d, flat_nodes), s);
	tangent.copy_from_slice(&tangent_nodes.to_flat());
	kappa
}

/// `reduce_pseudo_inverse(N, D, nodes) -> (reduced[N-1, D], not_implemented)`.
pub fn reduce_pseudo_inverse(n: usize, d: usize, flat_nodes: &[f64]) -> (Option<Vec<f64>>, bool) {
	let (reduced, not_implemented) = degree::reduce_pseudo_inverse(&nodes(n, d, flat_nodes));
	(reduced.map(|r| r.to_flat()), not_implemented)
}

/// `full_reduce(N, D, nodes) -> (num_reduced, reduced[N,D], not_implemented)`.
pub fn full_reduce(n: usize, d: usize, flat_nodes: &[f64]) -> (usize, Vec<f64>, bool) {
	let (num_reduced, reduced, not_implemented) = degree::full_reduce(&nodes(n, d, flat_nodes));
	(num_reduced, reduced.to_flat(), not_implemented)
}

/// `compute_length(N, D, nodes) -> (length, err_code)`.
pub fn compute_length(n: usize, d: usize, flat_nodes: &[f64]) -> (f64, i32) {
	length::compute_length(&nodes(n, d, flat_nodes))
}

/// `cross_product(u, v) -> scalar`, exposed flat for parity with the rest of this module.
pub fn cross_product(u: [f64; 2], v: [f64; 2]) -> f64 {
	numeric::cross_product((u[0], u[1]), (v[0], v[1]))
}

/// `bbox(N, D, nodes) -> (xmin, xmax, ymin, ymax)`.
pub fn bbox(n: usize, d: usize, flat_nodes: &[f64]) -> (f64, f64, f64, f64) {
	numeric::bbox(&nodes(n, d, flat_nodes))
}
