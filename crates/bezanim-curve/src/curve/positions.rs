//! Control-point description of a Bezier curve.

use bezanim_core::traits::Validate;
use bezanim_core::{BezanimError, Result};
use bezanim_math::Point3;
use serde::{Deserialize, Serialize};

/// End points and optional control points of a Bezier curve of degree 1 to 3.
///
/// `p2` alone makes a quadratic curve and `p2` with `p3` a cubic one. A `p3`
/// without `p2` does not describe any supported curve and fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePositions {
    pub p0: Point3,
    pub p1: Point3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p2: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p3: Option<Point3>,
}

impl CurvePositions {
    pub fn new(p0: Point3, p1: Point3) -> Self {
        Self {
            p0,
            p1,
            p2: None,
            p3: None,
        }
    }

    pub fn quadratic(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self::new(p0, p1).with_p2(p2)
    }

    pub fn cubic(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self::new(p0, p1).with_p2(p2).with_p3(p3)
    }

    pub fn with_p2(mut self, p2: Point3) -> Self {
        self.p2 = Some(p2);
        self
    }

    pub fn with_p3(mut self, p3: Point3) -> Self {
        self.p3 = Some(p3);
        self
    }
}

impl Validate for CurvePositions {
    fn validate(&self) -> Result<()> {
        if self.p3.is_some() && self.p2.is_none() {
            return Err(BezanimError::invalid_argument(
                "p3 is set but p2 is missing; a cubic curve needs both control points",
            ));
        }
        let named = [
            ("p0", Some(self.p0)),
            ("p1", Some(self.p1)),
            ("p2", self.p2),
            ("p3", self.p3),
        ];
        for (name, point) in named {
            if let Some(p) = point {
                if !p.is_finite() {
                    return Err(BezanimError::InvalidArgument(format!(
                        "{} is not finite: {:?}",
                        name, p
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezanim_math::{dvec3, DVec3};

    #[test]
    fn test_builders() {
        let pos = CurvePositions::cubic(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z);
        assert_eq!(pos.p2, Some(DVec3::Y));
        assert_eq!(pos.p3, Some(DVec3::Z));
        assert!(pos.validate().is_ok());

        let pos = CurvePositions::new(DVec3::ZERO, DVec3::X);
        assert!(pos.p2.is_none() && pos.p3.is_none());
        assert!(pos.validate().is_ok());
    }

    #[test]
    fn test_p3_without_p2_is_rejected() {
        let pos = CurvePositions::new(DVec3::ZERO, DVec3::X).with_p3(DVec3::Y);
        let err = pos.validate().unwrap_err();
        assert!(matches!(err, BezanimError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_finite_point_is_rejected() {
        let pos = CurvePositions::quadratic(DVec3::ZERO, dvec3(f64::NAN, 0.0, 0.0), DVec3::X);
        let err = pos.validate().unwrap_err();
        assert!(err.to_string().contains("p1"));
    }
}
