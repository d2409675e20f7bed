#![warn(missing_docs)]

//! Math types for the voxtrail projection kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types
//! for camera-to-voxel projection: points, vectors, directions,
//! rays, and axis-aligned boxes.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Magnitude below which a direction vector is considered degenerate.
///
/// Vectors this short cannot be normalized without amplifying rounding
/// noise; callers reject them instead of dividing by a near-zero norm.
pub const DIRECTION_EPSILON: f64 = 1e-6;

/// A ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a ray from an origin and an arbitrary direction vector.
    ///
    /// Returns `None` if the vector's magnitude is at or below
    /// [`DIRECTION_EPSILON`].
    pub fn try_new(origin: Point3, direction: Vec3) -> Option<Self> {
        if direction.norm() <= DIRECTION_EPSILON {
            return None;
        }
        Some(Self {
            origin,
            direction: Dir3::new_normalize(direction),
        })
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create a cube of edge length `size` centered at `center`.
    pub fn cube_at(center: Point3, size: f64) -> Self {
        let h = size / 2.0;
        Self {
            min: Point3::new(center.x - h, center.y - h, center.z - h),
            max: Point3::new(center.x + h, center.y + h, center.z + h),
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Test whether a point lies inside the box.
    ///
    /// The box is half-open: the min faces are inside, the max faces are not.
    pub fn contains(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }
}
