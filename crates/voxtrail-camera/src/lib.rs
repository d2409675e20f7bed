#![warn(missing_docs)]

//! Pinhole camera model for the voxtrail projection kernel.
//!
//! Maps a discrete 2D pixel coordinate to a normalized 3D ray direction.
//! The camera axes are assumed aligned with the world axes (no rotation
//! support), looking down the negative Z axis, so camera-space and
//! world-space directions coincide.
//!
//! # Example
//!
//! ```
//! use voxtrail_camera::PinholeCamera;
//! use voxtrail_math::Point3;
//!
//! let camera = PinholeCamera::new(Point3::new(0.0, 0.0, 800.0), 800, 600, 60.0).unwrap();
//! let ray = camera.pixel_ray(400, 300).unwrap();
//! // The center pixel looks straight down -Z.
//! assert!((ray.direction.z + 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use voxtrail_math::{Point3, Ray, Vec3};

/// Errors from camera configuration and ray construction.
#[derive(Debug, Clone, Error)]
pub enum CameraError {
    /// Field of view must lie strictly inside (0, 180) degrees, otherwise
    /// the focal length is undefined or singular.
    #[error("invalid field of view: {0} degrees")]
    InvalidFov(f64),

    /// Image dimensions must both be positive.
    #[error("invalid image size: {width}x{height}")]
    InvalidImageSize {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// The computed ray direction was too short to normalize.
    #[error("degenerate ray direction")]
    DegenerateDirection,
}

/// An axis-aligned pinhole camera.
///
/// Position is in world units; the field of view is the horizontal angular
/// span in degrees, from which the focal length is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinholeCamera {
    /// Camera position in world space.
    pub position: Point3,
    /// Image width in pixels.
    pub image_width: u32,
    /// Image height in pixels.
    pub image_height: u32,
    /// Horizontal field of view in degrees, in the open interval (0, 180).
    pub fov_degrees: f64,
}

impl PinholeCamera {
    /// Create a camera, validating image dimensions and field of view.
    pub fn new(
        position: Point3,
        image_width: u32,
        image_height: u32,
        fov_degrees: f64,
    ) -> Result<Self, CameraError> {
        let camera = Self {
            position,
            image_width,
            image_height,
            fov_degrees,
        };
        camera.validate()?;
        Ok(camera)
    }

    /// Check intrinsics.
    ///
    /// Fields are public (the type is plain configuration data), so
    /// consumers re-validate before using a camera they did not construct.
    pub fn validate(&self) -> Result<(), CameraError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(CameraError::InvalidImageSize {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if !(self.fov_degrees.is_finite() && self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(CameraError::InvalidFov(self.fov_degrees));
        }
        Ok(())
    }

    /// Focal length in pixels, derived from the horizontal field of view.
    pub fn focal_length(&self) -> f64 {
        let fov_rad = self.fov_degrees.to_radians();
        (self.image_width as f64 / 2.0) / (fov_rad / 2.0).tan()
    }

    /// Build the world-space ray through a pixel.
    ///
    /// Pixel coordinates may lie outside the image bounds; no clamping is
    /// performed. The camera-space ray is
    /// `(px - w/2, py - h/2, -focal_length)`, normalized. A near-zero
    /// magnitude (possible only for the center pixel at a field of view
    /// approaching 180 degrees) is rejected as
    /// [`CameraError::DegenerateDirection`] rather than normalized.
    pub fn pixel_ray(&self, pixel_x: i32, pixel_y: i32) -> Result<Ray, CameraError> {
        self.validate()?;
        let dir = Vec3::new(
            pixel_x as f64 - self.image_width as f64 / 2.0,
            pixel_y as f64 - self.image_height as f64 / 2.0,
            -self.focal_length(),
        );
        Ray::try_new(self.position, dir).ok_or(CameraError::DegenerateDirection)
    }
}

impl Default for PinholeCamera {
    /// A camera 800 world units up the Z axis looking back at the origin,
    /// with a 60 degree field of view over an 800x600 image.
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 800.0),
            image_width: 800,
            image_height: 600,
            fov_degrees: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_length_90_degrees() {
        // tan(45 deg) = 1, so the focal length equals half the image width.
        let camera = PinholeCamera::new(Point3::origin(), 100, 100, 90.0).unwrap();
        approx::assert_relative_eq!(camera.focal_length(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_focal_length_60_degrees() {
        let camera = PinholeCamera::new(Point3::origin(), 800, 600, 60.0).unwrap();
        approx::assert_relative_eq!(
            camera.focal_length(),
            400.0 * 3.0_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_center_pixel_looks_down_negative_z() {
        let camera = PinholeCamera::new(Point3::new(0.0, 0.0, 10.0), 100, 100, 90.0).unwrap();
        let ray = camera.pixel_ray(50, 50).unwrap();
        assert!(ray.direction.x.abs() < 1e-12);
        assert!(ray.direction.y.abs() < 1e-12);
        assert!((ray.direction.z + 1.0).abs() < 1e-12);
        assert!((ray.origin.z - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_off_center_pixel_direction() {
        // Pixel at the right edge of a 90 degree camera: dx equals the
        // focal length, so the ray leans 45 degrees off axis.
        let camera = PinholeCamera::new(Point3::origin(), 100, 100, 90.0).unwrap();
        let ray = camera.pixel_ray(100, 50).unwrap();
        assert!((ray.direction.x - ray.direction.z.abs()).abs() < 1e-12);
        assert!(ray.direction.y.abs() < 1e-12);
        assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pixel_outside_image_is_allowed() {
        let camera = PinholeCamera::new(Point3::origin(), 100, 100, 60.0).unwrap();
        assert!(camera.pixel_ray(-20, 500).is_ok());
    }

    #[test]
    fn test_invalid_fov_rejected() {
        for bad in [0.0, -10.0, 180.0, 200.0, f64::NAN] {
            let result = PinholeCamera::new(Point3::origin(), 100, 100, bad);
            assert!(
                matches!(result, Err(CameraError::InvalidFov(_))),
                "fov {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_image_size_rejected() {
        assert!(matches!(
            PinholeCamera::new(Point3::origin(), 0, 100, 60.0),
            Err(CameraError::InvalidImageSize { .. })
        ));
        assert!(matches!(
            PinholeCamera::new(Point3::origin(), 100, 0, 60.0),
            Err(CameraError::InvalidImageSize { .. })
        ));
    }

    #[test]
    fn test_degenerate_direction_rejected() {
        // At a field of view this close to 180 degrees the focal length
        // collapses below the normalization threshold, so the center pixel
        // has a near-zero ray vector.
        let camera = PinholeCamera::new(Point3::origin(), 100, 100, 180.0 - 1e-9).unwrap();
        assert!(camera.focal_length() <= 1e-6);
        assert!(matches!(
            camera.pixel_ray(50, 50),
            Err(CameraError::DegenerateDirection)
        ));
        // Off-center pixels still produce a usable direction.
        assert!(camera.pixel_ray(60, 50).is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let camera = PinholeCamera::default();
        let json = serde_json::to_string(&camera).unwrap();
        let back: PinholeCamera = serde_json::from_str(&json).unwrap();
        assert_eq!(back, camera);
    }
}
