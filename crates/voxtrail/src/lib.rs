#![warn(missing_docs)]

//! 2D-to-3D voxel projection kernel.
//!
//! Given a pixel observation from a 2D detector and a virtual pinhole
//! camera, this crate casts a ray into world space and accumulates a
//! brightness increment into every cell of a caller-owned voxel grid the
//! ray's sampled path passes through. Repeated over the observations of a
//! processing run (typically one call per detected object per frame), the
//! grid builds up a volumetric trail of object motion.
//!
//! Detection, video I/O, grid persistence, and visualization all live
//! outside this crate; it performs no I/O and holds no state of its own.
//!
//! # Architecture
//!
//! - [`voxtrail_camera`] - pinhole camera, pixel to ray
//! - [`voxtrail_grid`] - dense accumulator grid and index mapping
//! - [`voxtrail_march`] - stepping policy and uniform ray marcher
//! - [`project_ray`] / [`project_all`] - the operations composing them
//!
//! # Example
//!
//! ```
//! use voxtrail::{GridConfig, PinholeCamera, Point3, VoxelGrid};
//!
//! let mut grid = VoxelGrid::new(GridConfig {
//!     grid_size: 64,
//!     grid_world_size: 1000.0,
//! })
//! .unwrap();
//! let camera = PinholeCamera::new(Point3::new(0.0, 0.0, 800.0), 800, 600, 60.0).unwrap();
//!
//! // One detected object at the image center.
//! voxtrail::project_ray(&mut grid, &camera, 400, 300, 1.0).unwrap();
//! assert!(grid.as_slice().iter().any(|&v| v > 0.0));
//! ```

pub use voxtrail_camera;
pub use voxtrail_grid;
pub use voxtrail_march;
pub use voxtrail_math;

pub use voxtrail_camera::{CameraError, PinholeCamera};
pub use voxtrail_grid::{GridConfig, GridError, VoxelGrid};
pub use voxtrail_march::{Traversal, UniformMarcher, DEFAULT_SAMPLE_COUNT};
pub use voxtrail_math::{Aabb3, Dir3, Point3, Ray, Vec3};

use log::{debug, trace};
use thiserror::Error;

/// Errors from the projection entry points.
#[derive(Debug, Clone, Error)]
pub enum ProjectError {
    /// Camera intrinsics or ray construction failed.
    #[error(transparent)]
    Camera(#[from] CameraError),

    /// Grid configuration is unusable.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Project one pixel observation into the grid.
///
/// Validates the camera and grid configuration, builds the ray through
/// `(pixel_x, pixel_y)`, and marches it with the default fixed-count
/// sampler, adding `brightness` to every in-bounds cell visited. All
/// validation happens before any mutation: a rejected call leaves the
/// grid untouched, and invalid configuration can never smear NaN or
/// infinity into the cells.
///
/// Pixel coordinates may lie outside the image; brightness may be any
/// sign or magnitude.
pub fn project_ray(
    grid: &mut VoxelGrid,
    camera: &PinholeCamera,
    pixel_x: i32,
    pixel_y: i32,
    brightness: f32,
) -> Result<(), ProjectError> {
    camera.validate()?;
    grid.config().validate()?;
    let ray = camera.pixel_ray(pixel_x, pixel_y)?;
    trace!(
        "projecting pixel ({pixel_x}, {pixel_y}) from {:?}",
        camera.position
    );
    UniformMarcher::default().accumulate(&ray, grid, brightness);
    Ok(())
}

/// Project every pixel observation of one frame into the grid.
///
/// Equivalent to calling [`project_ray`] once per observation, except
/// that all rays are constructed and checked up front: if the camera,
/// the grid configuration, or any observation's ray is invalid, the
/// whole batch is rejected and the grid is left untouched.
///
/// Observations are projected sequentially against the same grid, which
/// is the serialization discipline concurrent multi-object pipelines
/// need anyway (per-cell accumulation is not atomic).
pub fn project_all(
    grid: &mut VoxelGrid,
    camera: &PinholeCamera,
    pixels: &[(i32, i32)],
    brightness: f32,
) -> Result<(), ProjectError> {
    camera.validate()?;
    grid.config().validate()?;
    let rays = pixels
        .iter()
        .map(|&(px, py)| camera.pixel_ray(px, py))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("projecting {} observations", rays.len());
    let marcher = UniformMarcher::default();
    for ray in &rays {
        marcher.accumulate(ray, grid, brightness);
    }
    Ok(())
}
