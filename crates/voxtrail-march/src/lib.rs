#![warn(missing_docs)]

//! Uniform ray marching and voxel accumulation for the voxtrail
//! projection kernel.
//!
//! The stepping policy sits behind the [`Traversal`] trait: given a ray
//! and a grid configuration, produce the cell indices the ray's sampled
//! path visits. [`UniformMarcher`] is the fixed-count, equally spaced
//! implementation; an exact voxel-walk (e.g. Amanatides-Woo) could
//! replace it without touching camera or grid-indexing code.

use voxtrail_grid::{GridConfig, VoxelGrid};
use voxtrail_math::Ray;

/// Default number of samples taken along a ray.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// A stepping policy: turns a ray into the grid cells its samples visit.
pub trait Traversal {
    /// Cell indices visited along `ray`, in visit order.
    ///
    /// Duplicates are preserved: a policy that samples the same cell twice
    /// reports it twice, and the accumulator adds to it twice. Samples
    /// falling outside the grid are omitted.
    fn cells(&self, ray: &Ray, config: &GridConfig) -> Vec<[usize; 3]>;

    /// March `ray` through `grid`, adding `brightness` to every visited cell.
    ///
    /// The grid is borrowed mutably for the whole call; cell values only
    /// ever move by `brightness` per visit (no clamp, no reset).
    fn accumulate(&self, ray: &Ray, grid: &mut VoxelGrid, brightness: f32) {
        let config = *grid.config();
        for index in self.cells(ray, &config) {
            grid.accumulate(index, brightness);
        }
    }
}

/// Fixed-count uniform sampler along a ray.
///
/// Takes `sample_count` equally spaced samples over a march distance of
/// twice the grid's world edge — a safe bound for a camera near or inside
/// the grid, not a true ray-box intersection. Marching always runs the
/// full sample count: samples outside the grid are skipped silently and
/// the walk continues, so a ray may leave and re-enter the volume.
///
/// Because the step size is fixed and independent of the voxel size, a
/// ray may sample the same cell several times in a row (step smaller than
/// a voxel) or skip thin cells entirely (step larger than a voxel). This
/// is an accepted approximation of exact voxel traversal.
#[derive(Debug, Clone, Copy)]
pub struct UniformMarcher {
    sample_count: usize,
}

impl UniformMarcher {
    /// Create a marcher taking `sample_count` samples per ray.
    pub fn new(sample_count: usize) -> Self {
        Self { sample_count }
    }

    /// Number of samples taken per ray.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Maximum march distance for a grid: twice its world edge length.
    pub fn max_distance(config: &GridConfig) -> f64 {
        config.grid_world_size * 2.0
    }
}

impl Default for UniformMarcher {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT)
    }
}

impl Traversal for UniformMarcher {
    fn cells(&self, ray: &Ray, config: &GridConfig) -> Vec<[usize; 3]> {
        let step = Self::max_distance(config) / self.sample_count as f64;
        let mut visited = Vec::new();
        for i in 0..self.sample_count {
            let t = i as f64 * step;
            if let Some(index) = config.index_of(&ray.at(t)) {
                visited.push(index);
            }
        }
        visited
    }
}
