//! Point-on-curve parameter search via subdivision, a hull test, and Newton polish.

use crate::consts::{LOCATE_INVALID, LOCATE_MISS, LOCATE_STD_CAP, MAX_LOCATE_SUBDIVISIONS};
use crate::newton::newton_refine;
use crate::nodes::Nodes;
use crate::numeric::contains_nd;
use crate::subdivide::subdivide_nodes;

/// A surviving sub-curve during the locator's subdivision search: its local parameter range and
/// the Bernstein form of the curve restricted to that range.
struct Candidate {
	start: f64,
	end: f64,
	nodes: Nodes,
}

/// Locate a parameter `s*` in `[0, 1]` such that `B(s*) ≈ point`.
///
/// Returns [`crate::consts::LOCATE_MISS`] if no candidate region ever contains `point`, or
/// [`crate::consts::LOCATE_INVALID`] if the surviving candidates straddle disjoint parameter
/// regions (the point lies on more than one part of the curve, e.g. at a self-intersection) and
/// cannot be resolved to a single parameter. Otherwise returns a single Newton-polished
/// parameter in `[0, 1]`.
pub fn locate_point(nodes: &Nodes, point: &[f64]) -> f64 {
	assert_eq!(point.len(), nodes.d());

	let mut candidates = vec![Candidate { start: 0.0, end: 1.0, nodes: nodes.clone() }];

	for round in 0..MAX_LOCATE_SUBDIVISIONS {
		let mut next = Vec::with_capacity(candidates.len() * 2);
		for candidate in &candidates {
			if !contains_nd(&candidate.nodes, point) {
				continue;
			}
			let (left, right) = subdivide_nodes(&candidate.nodes);
			let mid = (candidate.start + candidate.end) / 2.0;
			next.push(Candidate { start: candidate.start, end: mid, nodes: left });
			next.push(Candidate { start: mid, end: candidate.end, nodes: right });
		}

		log::trace!("locate_point: round {round} kept {} of {} candidates", next.len(), candidates.len() * 2);

		if next.is_empty() {
			log::debug!("locate_point: no surviving candidates, returning LOCATE_MISS");
			return LOCATE_MISS;
		}
		candidates = next;
	}

	let samples: Vec<f64> = candidates.iter().flat_map(|c| [c.start, c.end]).collect();
	let s_approx = mean(&samples);
	let sigma = std_dev(&samples, s_approx);

	if sigma > LOCATE_STD_CAP {
		log::debug!("locate_point: candidate spread sigma={sigma} exceeds cap, returning LOCATE_INVALID");
		return LOCATE_INVALID;
	}

	newton_refine(nodes, point, s_approx)
}

fn mean(values: &[f64]) -> f64 {
	values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64], mean: f64) -> f64 {
	let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
	variance.sqrt()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::evaluate::evaluate_multi;

	#[test]
	fn finds_parameter_of_a_point_on_a_cubic() {
		let nodes = Nodes::from_flat(4, 2, &[0.0, 0.0, 1.0, 1.0, 2.0, -1.0, 3.0, 0.0]).unwrap();
		let s = locate_point(&nodes, &[1.5, 0.0]);
		assert!(s >= 0.0 && s <= 1.0);
		assert!((s - 0.5).abs() < 1e-6);
	}

	#[test]
	fn off_curve_point_misses() {
		let nodes = Nodes::from_flat(2, 2, &[0.0, 0.0, 1.0, 0.0]).unwrap();
		let s = locate_point(&nodes, &[0.5, 1.0]);
		assert_eq!(s, LOCATE_MISS);
	}

	#[test]
	fn endpoint_locates_to_zero_or_one() {
		let nodes = Nodes::from_flat(3, 2, &[0.0, 0.0, 0.5, 1.0, 1.0, 0.0]).unwrap();
		let start = evaluate_multi(&nodes, &[0.0]);
		let s = locate_point(&nodes, &[start.get(0, 0), start.get(0, 1)]);
		assert!(s.abs() < 1e-4);
	}

	#[test]
	fn closed_loop_is_invalid_at_the_shared_endpoint() {
		// Start and end coincide at the origin, so querying it finds two disjoint surviving
		// candidate clusters (one near s=0, one near s=1) rather than a single parameter.
		let nodes = Nodes::from_flat(4, 2, &[0.0, 0.0, 2.0, 3.0, -2.0, 3.0, 0.0, 0.0]).unwrap();
		let s = locate_point(&nodes, &[0.0, 0.0]);
		assert_eq!(s, LOCATE_INVALID);
	}
}
