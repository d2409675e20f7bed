#![warn(missing_docs)]

//! Dense voxel accumulator grid for the voxtrail projection kernel.
//!
//! The grid is a cube of `f32` accumulator cells covering a cubic world
//! volume centered at the origin. Cells are only ever added to — there is
//! no reset or clamp — so over a processing run the grid builds up a
//! persistent volumetric trail of everything projected into it.
//!
//! The grid is allocated and owned by the caller; projection operations
//! borrow it mutably for the duration of one call.
//!
//! # Example
//!
//! ```
//! use voxtrail_grid::{GridConfig, VoxelGrid};
//!
//! let mut grid = VoxelGrid::new(GridConfig {
//!     grid_size: 64,
//!     grid_world_size: 1000.0,
//! })
//! .unwrap();
//!
//! grid.accumulate([32, 32, 32], 1.0);
//! assert_eq!(grid.get([32, 32, 32]), Some(1.0));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use voxtrail_math::{Aabb3, Point3};

/// Errors from grid configuration and construction.
#[derive(Debug, Clone, Error)]
pub enum GridError {
    /// Grid resolution must be at least one cell per axis.
    #[error("invalid grid size: {0}")]
    InvalidGridSize(usize),

    /// World edge length must be a positive finite number.
    #[error("invalid grid world size: {0}")]
    InvalidWorldSize(f64),
}

/// Configuration of a voxel grid: resolution and physical extent.
///
/// The grid covers a cube of edge `grid_world_size` centered at the world
/// origin, divided into `grid_size` cells per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of cells per axis.
    pub grid_size: usize,
    /// Edge length of the covered world volume.
    pub grid_world_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 128,
            grid_world_size: 1000.0,
        }
    }
}

impl GridConfig {
    /// Check that the configuration describes a usable grid.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.grid_size == 0 {
            return Err(GridError::InvalidGridSize(self.grid_size));
        }
        if !(self.grid_world_size.is_finite() && self.grid_world_size > 0.0) {
            return Err(GridError::InvalidWorldSize(self.grid_world_size));
        }
        Ok(())
    }

    /// Edge length of a single cell.
    pub fn voxel_size(&self) -> f64 {
        self.grid_world_size / self.grid_size as f64
    }

    /// The world-space cube covered by the grid.
    pub fn world_aabb(&self) -> Aabb3 {
        Aabb3::cube_at(Point3::origin(), self.grid_world_size)
    }

    /// Map a world point to cell indices, if it falls inside the grid.
    ///
    /// Each axis maps `[-grid_world_size/2, +grid_world_size/2)` onto
    /// `[0, grid_size)` with a floor; indices are half-open, so a
    /// coordinate exactly on the max face is outside.
    pub fn index_of(&self, p: &Point3) -> Option<[usize; 3]> {
        let half = self.grid_world_size / 2.0;
        let size = self.grid_size as f64;
        let ix = ((p.x + half) / self.grid_world_size * size).floor();
        let iy = ((p.y + half) / self.grid_world_size * size).floor();
        let iz = ((p.z + half) / self.grid_world_size * size).floor();
        // Written so NaN coordinates fail the test and map to None.
        if ix >= 0.0 && ix < size && iy >= 0.0 && iy < size && iz >= 0.0 && iz < size {
            Some([ix as usize, iy as usize, iz as usize])
        } else {
            None
        }
    }
}

/// A dense cube of `f32` accumulator cells.
///
/// Storage is row-major in `(x, y, z)` order. Cell values only ever
/// increase (for positive increments) across the grid's lifetime; nothing
/// in this crate resets or clamps them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoxelGrid {
    config: GridConfig,
    cells: Vec<f32>,
}

impl VoxelGrid {
    /// Allocate a zeroed grid for the given configuration.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let n = config.grid_size;
        Ok(Self {
            config,
            cells: vec![0.0; n * n * n],
        })
    }

    /// The grid's configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of cells per axis.
    pub fn grid_size(&self) -> usize {
        self.config.grid_size
    }

    /// The world-space cube covered by the grid.
    pub fn world_aabb(&self) -> Aabb3 {
        self.config.world_aabb()
    }

    #[inline]
    fn linear(&self, [ix, iy, iz]: [usize; 3]) -> Option<usize> {
        let n = self.config.grid_size;
        if ix < n && iy < n && iz < n {
            Some((ix * n + iy) * n + iz)
        } else {
            None
        }
    }

    /// Read a cell, or `None` if the index is out of range.
    pub fn get(&self, index: [usize; 3]) -> Option<f32> {
        self.linear(index).map(|i| self.cells[i])
    }

    /// Add `amount` to a cell.
    ///
    /// Returns `false` (without touching anything) if the index is out of
    /// range — out-of-bounds writes are skipped, not errors.
    pub fn accumulate(&mut self, index: [usize; 3], amount: f32) -> bool {
        match self.linear(index) {
            Some(i) => {
                self.cells[i] += amount;
                true
            }
            None => false,
        }
    }

    /// The raw cell buffer in `(x, y, z)` row-major order.
    ///
    /// Exposed so an orchestration layer can persist or visualize the grid
    /// without this crate doing any I/O.
    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }
}
