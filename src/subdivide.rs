//! Splitting a curve into two Bernstein-form halves at `s = 1/2`.

use nalgebra::RowDVector;

use crate::nodes::Nodes;

/// Split `nodes` at the midpoint, returning `(left_nodes, right_nodes)`, each of length `N`.
///
/// `left_nodes[N-1] == right_nodes[0]` by construction (both equal the curve's midpoint).
/// Degrees 1 through 3 (`N` in `2..=4`) use closed-form blends; degree 4 and above fall back to
/// the general Pascal-triangle construction, which is the bisection specialization of
/// de Casteljau's algorithm: each row is formed by averaging adjacent entries of the row below,
/// and the leftmost/rightmost entries of each row are exactly the left/right output nodes.
pub fn subdivide_nodes(nodes: &Nodes) -> (Nodes, Nodes) {
	match nodes.n() {
		1 => (nodes.clone(), nodes.clone()),
		2 => subdivide_linear(nodes),
		3 => subdivide_quadratic(nodes),
		4 => subdivide_cubic(nodes),
		_ => subdivide_general(nodes),
	}
}

fn subdivide_linear(nodes: &Nodes) -> (Nodes, Nodes) {
	let p0 = nodes.row(0);
	let p1 = nodes.row(1);
	let mid = (&p0 + &p1) * 0.5;

	(rows_to_nodes(&[p0, mid.clone()]), rows_to_nodes(&[mid, p1]))
}

fn subdivide_quadratic(nodes: &Nodes) -> (Nodes, Nodes) {
	let p0 = nodes.row(0);
	let p1 = nodes.row(1);
	let p2 = nodes.row(2);

	let l1 = (&p0 + &p1) * 0.5;
	let mid = (&p0 + &p1 * 2.0 + &p2) * 0.25;
	let r1 = (&p1 + &p2) * 0.5;

	(rows_to_nodes(&[p0, l1, mid.clone()]), rows_to_nodes(&[mid, r1, p2]))
}

fn subdivide_cubic(nodes: &Nodes) -> (Nodes, Nodes) {
	let p0 = nodes.row(0);
	let p1 = nodes.row(1);
	let p2 = nodes.row(2);
	let p3 = nodes.row(3);

	let l1 = (&p0 + &p1) * 0.5;
	let l2 = (&p0 + &p1 * 2.0 + &p2) * 0.25;
	let mid = (&p0 + &p1 * 3.0 + &p2 * 3.0 + &p3) * 0.125;
	let r2 = (&p1 + &p2 * 2.0 + &p3) * 0.25;
	let r1 = (&p2 + &p3) * 0.5;

	(rows_to_nodes(&[p0, l1, l2, mid.clone()]), rows_to_nodes(&[mid, r2, r1, p3]))
}

fn subdivide_general(nodes: &Nodes) -> (Nodes, Nodes) {
	let n = nodes.n();
	let mut row: Vec<RowDVector<f64>> = (0..n).map(|i| nodes.row(i)).collect();

	let mut left = Vec::with_capacity(n);
	let mut right = vec![RowDVector::zeros(nodes.d()); n];

	left.push(row[0].clone());
	right[n - 1] = row[n - 1].clone();

	for k in 1..n {
		let len = row.len() - 1;
		let mut next_row = Vec::with_capacity(len);
		for j in 0..len {
			next_row.push((&row[j] + &row[j + 1]) * 0.5);
		}
		left.push(next_row[0].clone());
		right[n - 1 - k] = next_row[next_row.len() - 1].clone();
		row = next_row;
	}

	(rows_to_nodes(&left), rows_to_nodes(&right))
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

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-12;

	#[test]
	fn quadratic_split_matches_reference() {
		let nodes = Nodes::from_flat(3, 2, &[0.0, 0.0, 0.5, 1.0, 1.0, 0.0]).unwrap();
		let (left, right) = subdivide_nodes(&nodes);

		let expected_left = [0.0, 0.0, 0.25, 0.5, 0.5, 0.5];
		let expected_right = [0.5, 0.5, 0.75, 0.5, 1.0, 0.0];

		assert!(left.to_flat().iter().zip(expected_left.iter()).all(|(a, b)| (a - b).abs() < EPS));
		assert!(right.to_flat().iter().zip(expected_right.iter()).all(|(a, b)| (a - b).abs() < EPS));
	}

	#[test]
	fn halves_join_at_midpoint() {
		let nodes = Nodes::from_flat(4, 2, &[0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0]).unwrap();
		let (left, right) = subdivide_nodes(&nodes);
		assert!(left.row(left.n() - 1).iter().zip(right.row(0).iter()).all(|(a, b)| (a - b).abs() < EPS));
	}

	#[test]
	fn general_case_matches_closed_form_for_degree_four() {
		// Degree 4 exercises the Pascal-triangle fallback; check against direct evaluation.
		let nodes = Nodes::from_flat(5, 1, &[0.0, 1.0, 2.0, -1.0, 3.0]).unwrap();
		let (left, right) = subdivide_nodes(&nodes);

		let direct_left = crate::evaluate::evaluate_multi(&nodes, &[0.0, 0.25, 0.5]);
		let direct_right = crate::evaluate::evaluate_multi(&nodes, &[0.5, 0.75, 1.0]);

		let eval_left = crate::evaluate::evaluate_multi(&left, &[0.0, 0.5, 1.0]);
		let eval_right = crate::evaluate::evaluate_multi(&right, &[0.0, 0.5, 1.0]);

		for k in 0..3 {
			assert!((eval_left.get(k, 0) - direct_left.get(k, 0)).abs() < 1e-9);
			assert!((eval_right.get(k, 0) - direct_right.get(k, 0)).abs() < 1e-9);
		}
	}
}
