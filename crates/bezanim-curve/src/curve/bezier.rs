//! Closed Bezier curve variant, degree fixed at construction.

use bezanim_core::traits::{BoundingBox, Validate};
use bezanim_core::{BezanimError, Result, Tolerance};
use bezanim_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::eval::{
    cubic_bezier, cubic_bezier_tangent, linear_bezier, linear_bezier_tangent, quadratic_bezier,
    quadratic_bezier_tangent,
};
use super::{Curve, CurvePositions};

/// A linear, quadratic or cubic Bezier curve parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Bezier {
    Linear {
        p0: Point3,
        p1: Point3,
    },
    Quadratic {
        p0: Point3,
        p1: Point3,
        p2: Point3,
    },
    Cubic {
        p0: Point3,
        p1: Point3,
        p2: Point3,
        p3: Point3,
    },
}

impl Bezier {
    /// Build a curve from 2, 3 or 4 control points.
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        let curve = match *points {
            [p0, p1] => Self::Linear { p0, p1 },
            [p0, p1, p2] => Self::Quadratic { p0, p1, p2 },
            [p0, p1, p2, p3] => Self::Cubic { p0, p1, p2, p3 },
            _ => {
                return Err(BezanimError::Geometry(format!(
                    "Bezier curves need 2 to 4 control points, got {}",
                    points.len()
                )))
            }
        };
        if let Some(p) = curve.control_points().iter().find(|p| !p.is_finite()) {
            return Err(BezanimError::InvalidArgument(format!(
                "control point is not finite: {:?}",
                p
            )));
        }
        Ok(curve)
    }

    /// Polynomial degree: 1, 2 or 3.
    pub fn degree(&self) -> usize {
        match self {
            Self::Linear { .. } => 1,
            Self::Quadratic { .. } => 2,
            Self::Cubic { .. } => 3,
        }
    }

    pub fn start(&self) -> Point3 {
        match *self {
            Self::Linear { p0, .. } | Self::Quadratic { p0, .. } | Self::Cubic { p0, .. } => p0,
        }
    }

    pub fn end(&self) -> Point3 {
        match *self {
            Self::Linear { p1, .. } => p1,
            Self::Quadratic { p2, .. } => p2,
            Self::Cubic { p3, .. } => p3,
        }
    }

    /// Control points in order, `degree() + 1` of them.
    pub fn control_points(&self) -> Vec<Point3> {
        match *self {
            Self::Linear { p0, p1 } => vec![p0, p1],
            Self::Quadratic { p0, p1, p2 } => vec![p0, p1, p2],
            Self::Cubic { p0, p1, p2, p3 } => vec![p0, p1, p2, p3],
        }
    }
}

impl TryFrom<CurvePositions> for Bezier {
    type Error = BezanimError;

    fn try_from(positions: CurvePositions) -> Result<Self> {
        positions.validate()?;
        let CurvePositions { p0, p1, p2, p3 } = positions;
        match (p2, p3) {
            (None, None) => Ok(Self::Linear { p0, p1 }),
            (Some(p2), None) => Ok(Self::Quadratic { p0, p1, p2 }),
            (Some(p2), Some(p3)) => Ok(Self::Cubic { p0, p1, p2, p3 }),
            (None, Some(_)) => Err(BezanimError::invalid_argument("p3 requires p2")),
        }
    }
}

impl From<Bezier> for CurvePositions {
    fn from(curve: Bezier) -> Self {
        match curve {
            Bezier::Linear { p0, p1 } => CurvePositions::new(p0, p1),
            Bezier::Quadratic { p0, p1, p2 } => CurvePositions::quadratic(p0, p1, p2),
            Bezier::Cubic { p0, p1, p2, p3 } => CurvePositions::cubic(p0, p1, p2, p3),
        }
    }
}

impl Curve for Bezier {
    fn point_at(&self, t: f64) -> Point3 {
        match *self {
            Self::Linear { p0, p1 } => linear_bezier(t, p0, p1),
            Self::Quadratic { p0, p1, p2 } => quadratic_bezier(t, p0, p1, p2),
            Self::Cubic { p0, p1, p2, p3 } => cubic_bezier(t, p0, p1, p2, p3),
        }
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        match *self {
            Self::Linear { p0, p1 } => linear_bezier_tangent(t, p0, p1),
            Self::Quadratic { p0, p1, p2 } => quadratic_bezier_tangent(t, p0, p1, p2),
            Self::Cubic { p0, p1, p2, p3 } => cubic_bezier_tangent(t, p0, p1, p2, p3),
        }
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        // A closed linear curve is a single point, not a loop
        self.degree() > 1 && Tolerance::default().is_zero(self.start().distance(self.end()))
    }
}

impl BoundingBox for Bezier {
    type Bounds = Aabb3;

    /// Box around the control polygon; by the convex hull property it
    /// encloses every point of the curve.
    fn bounding_box(&self) -> Aabb3 {
        let points = self.control_points();
        Aabb3::enclosing(points[0], &points[1..])
    }
}
