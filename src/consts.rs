// Implementation constants

/// Maximum number of subdivision rounds the locator will run before giving up.
pub const MAX_LOCATE_SUBDIVISIONS: usize = 20;
/// Standard deviation cap on surviving candidate endpoints, above which a location is ambiguous.
pub const LOCATE_STD_CAP: f64 = 1.0 / 1_048_576.0; // 2^-20
/// Square root of double-precision epsilon; used as both quadrature tolerance and reduction threshold.
pub const SQRT_PREC: f64 = 1.0 / 67_108_864.0; // 2^-26
/// Relative-error threshold below which a degree reduction is accepted.
pub const REDUCE_THRESHOLD: f64 = SQRT_PREC;
/// Slack tolerated by `wiggle_interval` when snapping a parameter into `[0, 1]`.
pub const WIGGLE_SLACK: f64 = 1.0 / 17_592_186_044_416.0; // 2^-44

/// Sentinel returned by the locator when no candidate contains the query point.
pub const LOCATE_MISS: f64 = -1.0;
/// Sentinel returned by the locator when surviving candidates straddle disjoint parameter regions.
pub const LOCATE_INVALID: f64 = -2.0;

/// Subdivision limit passed to the adaptive arc-length quadrature.
pub const LENGTH_SUBDIVISION_LIMIT: usize = 50;
