//! Bernstein basis polynomials for degree 1 to 3.
//!
//! Each function returns the blend weights `B(i, n)(t)` in control-point
//! order. The weights sum to one for any `t`; at `t = 0` only the first weight
//! is non-zero and at `t = 1` only the last one is.

/// Degree-1 weights: `[1 - t, t]`.
#[inline]
pub fn linear(t: f64) -> [f64; 2] {
    [1.0 - t, t]
}

/// Degree-2 weights: `[(1 - t)^2, 2(1 - t)t, t^2]`.
#[inline]
pub fn quadratic(t: f64) -> [f64; 3] {
    let s = 1.0 - t;
    [s * s, 2.0 * s * t, t * t]
}

/// Degree-3 weights: `[(1 - t)^3, 3(1 - t)^2 t, 3(1 - t)t^2, t^3]`.
#[inline]
pub fn cubic(t: f64) -> [f64; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * s * s * t, 3.0 * s * t * t, t * t * t]
}
