use thiserror::Error;

/// Errors that can occur constructing a [`crate::Nodes`] buffer from a flat slice.
///
/// This is the only fallible boundary in the crate: once a `Nodes` value exists, every
/// routine in [`crate`] treats its shape as trusted and never returns an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodesError {
	#[error("node count must be at least 1, got {0}")]
	EmptyNodes(usize),
	#[error("dimension must be at least 1, got {0}")]
	EmptyDimension(usize),
	#[error("flat buffer has length {actual}, expected {expected} for {n} nodes of dimension {d}")]
	LengthMismatch { n: usize, d: usize, expected: usize, actual: usize },
}
