//! Curve traits and Bezier implementations.

mod bezier;
mod eval;
mod positions;

use bezanim_math::{Point3, Vector3};

pub use bezier::Bezier;
pub use eval::*;
pub use positions::CurvePositions;

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector (first derivative) at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
