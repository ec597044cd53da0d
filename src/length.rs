//! Arc length via closed form (lines) or adaptive quadrature (everything else).

use crate::consts::SQRT_PREC;
use crate::differential::evaluate_hodograph;
use crate::nodes::Nodes;

/// Arc length of `nodes` over its full domain `[0, 1]`.
///
/// For `N = 2` the curve is a straight segment and the length is exact: the norm of the single
/// hodograph node. For `N >= 3` the length is the integral of speed `|B'(s)|` over `[0, 1]`,
/// evaluated with adaptive quadrature to a relative tolerance of [`SQRT_PREC`].
///
/// Returns `(length, err_code)`. `err_code` is `0` on a converged integral and `1` when the
/// quadrature's reported error exceeds the tolerance it was asked to hit; `err_code` is always
/// `0` for the `N = 2` closed form.
pub fn compute_length(nodes: &Nodes) -> (f64, i32) {
	if nodes.n() == 2 {
		let tangent = evaluate_hodograph(0.0, nodes);
		let length = (0..nodes.d()).map(|k| tangent.get(0, k).powi(2)).sum::<f64>().sqrt();
		return (length, 0);
	}

	let speed = |s: f64| -> f64 {
		let deriv = evaluate_hodograph(s, nodes);
		(0..nodes.d()).map(|k| deriv.get(0, k).powi(2)).sum::<f64>().sqrt()
	};

	let result = quadrature::integrate(speed, 0.0, 1.0, SQRT_PREC);
	let err_code = if result.error_estimate > SQRT_PREC {
		log::warn!(
			"compute_length: quadrature error {} exceeded tolerance {SQRT_PREC}",
			result.error_estimate
		);
		1
	} else {
		0
	};

	log::debug!("compute_length: integral = {}, error = {}", result.integral, result.error_estimate);
	(result.integral, err_code)
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-6;

	#[test]
	fn straight_line_length_is_exact() {
		let nodes = Nodes::from_flat(2, 2, &[0.0, 0.0, 3.0, 4.0]).unwrap();
		let (length, err_code) = compute_length(&nodes);
		assert_eq!(err_code, 0);
		assert!((length - 5.0).abs() < EPS);
	}

	#[test]
	fn quadratic_length_matches_known_value() {
		// A quadratic that bows out from (0,0) to (2,0) through (1,1); length has no tidy closed
		// form, so we just check it's longer than the straight-line distance and converges.
		let nodes = Nodes::from_flat(3, 2, &[0.0, 0.0, 1.0, 1.0, 2.0, 0.0]).unwrap();
		let (length, err_code) = compute_length(&nodes);
		assert_eq!(err_code, 0);
		assert!(length > 2.0);
		assert!(length < 3.0);
	}

	#[test]
	fn degenerate_point_has_zero_length() {
		let nodes = Nodes::from_flat(3, 2, &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
		let (length, err_code) = compute_length(&nodes);
		assert_eq!(err_code, 0);
		assert!(length.abs() < EPS);
	}
}
