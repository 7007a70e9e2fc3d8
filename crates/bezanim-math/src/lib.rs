pub mod aabb;
pub mod bernstein;

pub use glam::{DVec3, dvec3};
pub use aabb::Aabb3;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
