use nalgebra::{DMatrix, DVector};

use crate::error::NodesError;

/// A control-point buffer for a single Bezier curve in Bernstein form.
///
/// Logically an `N x D` array indexed `[i, d]`, where `i` is the node index (`0` is the curve's
/// start, `N - 1` its end) and `d` is the spatial coordinate. `N` and `D` are each at least 1.
/// `Nodes` is caller-owned and read-only from the perspective of every routine in this crate:
/// nothing here mutates a `Nodes` value in place, routines instead return new ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Nodes {
	data: DMatrix<f64>,
}

impl Nodes {
	/// Build a `Nodes` buffer from a row-major flat slice of length `n * d`.
	pub fn from_flat(n: usize, d: usize, flat: &[f64]) -> Result<Self, NodesError> {
		if n == 0 {
			return Err(NodesError::EmptyNodes(n));
		}
		if d == 0 {
			return Err(NodesError::EmptyDimension(d));
		}
		if flat.len() != n * d {
			return Err(NodesError::LengthMismatch { n, d, expected: n * d, actual: flat.len() });
		}
		Ok(Self { data: DMatrix::from_row_slice(n, d, flat) })
	}

	/// Build a `Nodes` buffer directly from an already-shaped `nalgebra` matrix.
	pub fn from_matrix(data: DMatrix<f64>) -> Self {
		debug_assert!(data.nrows() >= 1 && data.ncols() >= 1);
		Self { data }
	}

	/// Number of control points, `N`.
	pub fn n(&self) -> usize {
		self.data.nrows()
	}

	/// Spatial dimension, `D`.
	pub fn d(&self) -> usize {
		self.data.ncols()
	}

	/// Degree of the curve, `N - 1`.
	pub fn degree(&self) -> usize {
		self.n() - 1
	}

	/// Value of node `i` in coordinate `d`.
	pub fn get(&self, i: usize, d: usize) -> f64 {
		self.data[(i, d)]
	}

	/// Node `i` as a row vector over all `D` coordinates.
	pub fn row(&self, i: usize) -> nalgebra::RowDVector<f64> {
		self.data.row(i).into_owned()
	}

	/// Coordinate `d` across all nodes, as a column vector.
	pub fn column(&self, d: usize) -> DVector<f64> {
		self.data.column(d).into_owned()
	}

	/// Borrow the underlying dense matrix.
	pub fn matrix(&self) -> &DMatrix<f64> {
		&self.data
	}

	/// Flatten back to a row-major `Vec<f64>` of length `n() * d()`.
	pub fn to_flat(&self) -> Vec<f64> {
		let mut out = Vec::with_capacity(self.n() * self.d());
		for i in 0..self.n() {
			for d in 0..self.d() {
				out.push(self.data[(i, d)]);
			}
		}
		out
	}

	/// Elementwise absolute-difference comparison, mirroring the epsilon-equality helpers this
	/// crate's numeric routines rely on instead of bare `f64` equality.
	pub fn abs_diff_eq(&self, other: &Nodes, max_abs_diff: f64) -> bool {
		self.n() == other.n() && self.d() == other.d() && (&self.data - &other.data).iter().all(|v| v.abs() <= max_abs_diff)
	}
}
