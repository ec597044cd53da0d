//! Low-level numeric helpers shared by the evaluator, differential ops, and locator.

use crate::consts::WIGGLE_SLACK;
use crate::nodes::Nodes;

/// Scalar (z-component) cross product of two 2-vectors: `u.x*v.y - u.y*v.x`.
pub fn cross_product(u: (f64, f64), v: (f64, f64)) -> f64 {
	u.0 * v.1 - u.1 * v.0
}

/// Axis-aligned bounding box of a node set's first two coordinates: `(xmin, xmax, ymin, ymax)`.
pub fn bbox(nodes: &Nodes) -> (f64, f64, f64, f64) {
	assert!(nodes.d() >= 2, "bbox requires at least two spatial dimensions");

	let mut xmin = f64::INFINITY;
	let mut xmax = f64::NEG_INFINITY;
	let mut ymin = f64::INFINITY;
	let mut ymax = f64::NEG_INFINITY;

	for i in 0..nodes.n() {
		let x = nodes.get(i, 0);
		let y = nodes.get(i, 1);
		xmin = xmin.min(x);
		xmax = xmax.max(x);
		ymin = ymin.min(y);
		ymax = ymax.max(y);
	}

	(xmin, xmax, ymin, ymax)
}

/// Snap `x` into `[0, 1]`, tolerating values within [`WIGGLE_SLACK`] of either edge.
///
/// Returns the snapped value and whether the snap succeeded. Values further outside `[0, 1]`
/// than the slack are returned unchanged with `ok = false`.
pub fn wiggle_interval(x: f64) -> (f64, bool) {
	if x < 0.0 {
		if x > -WIGGLE_SLACK { (0.0, true) } else { (x, false) }
	} else if x > 1.0 {
		if x < 1.0 + WIGGLE_SLACK { (1.0, true) } else { (x, false) }
	} else {
		(x, true)
	}
}

/// Conservative hull test: does `point` lie inside the axis-aligned bounding box of `nodes`,
/// in every coordinate?
///
/// This is a cheap over-approximation of the convex hull, generalized over an arbitrary
/// dimension `D` (unlike [`bbox`], which is fixed to the first two coordinates). It never
/// produces a false negative: if `point` actually lies on the curve, its bounding box always
/// contains it.
pub fn contains_nd(nodes: &Nodes, point: &[f64]) -> bool {
	assert_eq!(point.len(), nodes.d(), "point dimension must match node dimension");

	for d in 0..nodes.d() {
		let mut min = f64::INFINITY;
		let mut max = f64::NEG_INFINITY;
		for i in 0..nodes.n() {
			let v = nodes.get(i, d);
			min = min.min(v);
			max = max.max(v);
		}
		if point[d] < min || point[d] > max {
			return false;
		}
	}
	true
}
