//! Restricting a curve to a parameter subinterval, re-expressed in the same Bernstein basis.

use nalgebra::RowDVector;

use crate::nodes::Nodes;

/// Restrict `nodes` to the local parameter range `[s, e]`, returning the new Bernstein-form
/// nodes together with that range mapped through the outer affine parameterization
/// `[curve_start, curve_end]`.
///
/// The affine bookkeeping is a side channel only: `true_start`/`true_end` never feed back into
/// the computation of `new_nodes`.
pub fn specialize_curve(nodes: &Nodes, s: f64, e: f64, curve_start: f64, curve_end: f64) -> (Nodes, f64, f64) {
	let new_nodes = match nodes.n() {
		1 => nodes.clone(),
		2 => specialize_linear(nodes, s, e),
		3 => specialize_quadratic(nodes, s, e),
		_ => specialize_general(nodes, s, e),
	};

	let true_start = curve_start + s * (curve_end - curve_start);
	let true_end = curve_start + e * (curve_end - curve_start);
	(new_nodes, true_start, true_end)
}

fn specialize_linear(nodes: &Nodes, s: f64, e: f64) -> Nodes {
	let p0 = nodes.row(0);
	let p1 = nodes.row(1);
	let new_p0 = &p0 * (1.0 - s) + &p1 * s;
	let new_p1 = &p0 * (1.0 - e) + &p1 * e;
	rows_to_nodes(&[new_p0, new_p1])
}

/// Closed-form quadratic blend: each output node is the symmetric bilinear blossom of the
/// original three control points evaluated at the relevant pair drawn from `{s, e}`.
fn specialize_quadratic(nodes: &Nodes, s: f64, e: f64) -> Nodes {
	let p0 = nodes.row(0);
	let p1 = nodes.row(1);
	let p2 = nodes.row(2);

	let new_p0 = &p0 * ((1.0 - s) * (1.0 - s)) + &p1 * (2.0 * (1.0 - s) * s) + &p2 * (s * s);
	let new_p1 = &p0 * ((1.0 - s) * (1.0 - e)) + &p1 * (s * (1.0 - e) + e * (1.0 - s)) + &p2 * (s * e);
	let new_p2 = &p0 * ((1.0 - e) * (1.0 - e)) + &p1 * (2.0 * (1.0 - e) * e) + &p2 * (e * e);

	rows_to_nodes(&[new_p0, new_p1, new_p2])
}

/// De Casteljau workspace path for degree >= 3.
///
/// First builds the full `s`-blend triangle of the original control polygon (one pairwise
/// average per row, `n` rows). Output node `i` is then obtained by taking the row of that
/// triangle with exactly `i + 1` points (i.e. after `n - i` rounds of `s`-blending) and reducing
/// it the rest of the way with `e`-blends; output node `0` falls straight out of the full
/// `s`-triangle (it's `B(s)`) and output node `n` needs no `s`-blending at all (it's `B(e)`).
fn specialize_general(nodes: &Nodes, s: f64, e: f64) -> Nodes {
	let n = nodes.degree();
	let d = nodes.d();

	// `s_triangle[k]` holds the polygon after `k` rounds of `s`-blending; it has `n + 1 - k` points.
	let mut s_triangle: Vec<Vec<RowDVector<f64>>> = Vec::with_capacity(n + 1);
	s_triangle.push((0..=n).map(|i| nodes.row(i)).collect());
	for k in 1..=n {
		let prev = &s_triangle[k - 1];
		let next: Vec<RowDVector<f64>> = (0..prev.len() - 1).map(|j| &prev[j] * (1.0 - s) + &prev[j + 1] * s).collect();
		s_triangle.push(next);
	}

	let mut outputs = Vec::with_capacity(n + 1);
	for i in 0..=n {
		let mut polygon = s_triangle[n - i].clone();
		for _ in 0..i {
			polygon = (0..polygon.len() - 1).map(|j| &polygon[j] * (1.0 - e) + &polygon[j + 1] * e).collect();
		}
		outputs.push(polygon.into_iter().next().unwrap_or_else(|| RowDVector::zeros(d)));
	}

	rows_to_nodes(&outputs)
}

fn rows_to_nodes(rows: &[RowDVector<f64>]) -> Nodes {
	let n = rows.len();
	let d = rows[0].len();
	let mut flat = Vec::with_capacity(n * d);
	for row in rows {
		flat.extend(row.iter().copied());
	}
	Nodes::from_flat(n, d, &flat).expect("rows_to_nodes builds a well-shaped buffer")
}
