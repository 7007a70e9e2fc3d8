use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing `first` and every point in `rest`.
    pub fn enclosing(first: Point3, rest: &[Point3]) -> Self {
        rest.iter().fold(Self::new(first, first), |aabb, &p| Self {
            min: aabb.min.min(p),
            max: aabb.max.max(p),
        })
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Containment test with `epsilon` slack on every face.
    pub fn contains_point(&self, p: Point3, epsilon: f64) -> bool {
        p.cmpge(self.min - Vector3::splat(epsilon)).all()
            && p.cmple(self.max + Vector3::splat(epsilon)).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_enclosing() {
        let aabb = Aabb3::enclosing(
            dvec3(1.0, 2.0, 3.0),
            &[dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)],
        );
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_single_point_is_degenerate_box() {
        let p = dvec3(4.0, 4.0, 4.0);
        let aabb = Aabb3::enclosing(p, &[]);
        assert_eq!(aabb.extents(), Vector3::ZERO);
        assert_eq!(aabb.center(), p);
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0));
        assert!(aabb.contains_point(dvec3(0.5, 0.5, 0.5), 0.0));
        assert!(aabb.contains_point(dvec3(1.0, 1.0, 1.0), 0.0));
        assert!(!aabb.contains_point(dvec3(1.1, 0.5, 0.5), 0.0));
        assert!(aabb.contains_point(dvec3(1.0 + 1e-9, 0.5, 0.5), 1e-8));
    }
}
