//! Bezier point and tangent evaluation in Bernstein form.
//!
//! None of these functions range-check `t`; callers keep it in `[0, 1]`.
//! Point evaluation reproduces the first control point exactly at `t = 0`
//! and the last one exactly at `t = 1`.

use bezanim_math::{bernstein, Point3, Vector3};

/// Point on the segment `p0 -> p1`: `p0(1 - t) + p1 t`.
#[inline]
pub fn linear_bezier(t: f64, p0: Point3, p1: Point3) -> Point3 {
    let [b0, b1] = bernstein::linear(t);
    p0 * b0 + p1 * b1
}

/// Point on a quadratic Bezier: `p0(1 - t)^2 + p1 2(1 - t)t + p2 t^2`.
#[inline]
pub fn quadratic_bezier(t: f64, p0: Point3, p1: Point3, p2: Point3) -> Point3 {
    let [b0, b1, b2] = bernstein::quadratic(t);
    p0 * b0 + p1 * b1 + p2 * b2
}

/// Point on a cubic Bezier:
/// `p0(1 - t)^3 + p1 3(1 - t)^2 t + p2 3(1 - t)t^2 + p3 t^3`.
#[inline]
pub fn cubic_bezier(t: f64, p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Point3 {
    let [b0, b1, b2, b3] = bernstein::cubic(t);
    p0 * b0 + p1 * b1 + p2 * b2 + p3 * b3
}

#[inline]
pub fn linear_bezier_tangent(_t: f64, p0: Point3, p1: Point3) -> Vector3 {
    p1 - p0
}

#[inline]
pub fn quadratic_bezier_tangent(t: f64, p0: Point3, p1: Point3, p2: Point3) -> Vector3 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// Derivative of [`cubic_bezier`]: a quadratic Bezier over the scaled
/// control-point differences.
#[inline]
pub fn cubic_bezier_tangent(t: f64, p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Vector3 {
    3.0 * quadratic_bezier(t, p1 - p0, p2 - p1, p3 - p2)
}
