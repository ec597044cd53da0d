//! A numerical kernel for arbitrary-degree, arbitrary-dimension Bezier curves in Bernstein form.
//!
//! The crate has a single data type, [`Nodes`], a thin wrapper around a dense `N x D` control
//! point buffer. Every operation takes one or more `Nodes` values and returns new ones; nothing
//! mutates in place, and nothing here performs I/O or serialization. [`Nodes::from_flat`] is the
//! only fallible entry point. Once a `Nodes` value exists, its shape is trusted everywhere else.
//!
//! Modules are organized by operation rather than by type: evaluation, subdivision,
//! specialization, differentiation and curvature, degree elevation/reduction, Newton refinement,
//! point location, and arc length each live in their own file.

pub mod consts;
pub mod degree;
pub mod differential;
pub mod error;
pub mod evaluate;
pub mod ffi;
pub mod length;
pub mod locate;
pub mod newton;
pub mod nodes;
pub mod numeric;
pub mod specialize;
pub mod subdivide;

pub use consts::{LOCATE_INVALID, LOCATE_MISS};
pub use degree::{can_reduce, elevate_nodes, full_reduce, reduce_pseudo_inverse, projection_error, CanReduce};
pub use differential::{evaluate_hodograph, get_curvature, hodograph_nodes};
pub use error::NodesError;
pub use evaluate::{evaluate_curve_barycentric, evaluate_multi};
pub use length::compute_length;
pub use locate::locate_point;
pub use newton::newton_refine;
pub use nodes::Nodes;
pub use numeric::{bbox, contains_nd, cross_product, wiggle_interval};
pub use specialize::specialize_curve;
pub use subdivide::subdivide_nodes;
