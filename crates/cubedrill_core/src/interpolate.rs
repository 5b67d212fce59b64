//! Interpolation functions.

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
pub type InterpolateFn = fn(f32) -> f32;

/// Cubic ease-out: starts fast and decelerates to a stop.
pub const EASE_OUT_CUBIC: InterpolateFn = |x| 1.0 - (1.0 - x).powi(3);
