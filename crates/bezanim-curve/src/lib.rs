//! bezanim curves: Bezier evaluation for degree 1 to 3.

pub mod curve;

pub use curve::{
    cubic_bezier, cubic_bezier_tangent, linear_bezier, linear_bezier_tangent, quadratic_bezier,
    quadratic_bezier_tangent, Bezier, Curve, CurvePositions,
};
