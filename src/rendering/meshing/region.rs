//! Mesh regions and rebuild hysteresis.
//!
//! The world is meshed as a square window around the player. The window is
//! only rebuilt when the player crosses into a new grid bucket, or when a
//! block change forces it.

use log::debug;

use crate::voxels::world::VoxelWorld;

/// Default half-extent of the meshed window.
pub const RENDER_RADIUS: i32 = 90;

/// Default bucket size for rebuild hysteresis.
pub const RENDER_GRID: i32 = 20;

/// An inclusive, axis-aligned cell range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegionBounds {
    /// Lowest X
    pub min_x: i32,
    /// Highest X
    pub max_x: i32,
    /// Lowest Z
    pub min_z: i32,
    /// Highest Z
    pub max_z: i32,
    /// Lowest Y
    pub min_y: i32,
    /// Highest Y
    pub max_y: i32,
}

impl RegionBounds {
    /// A square window of `radius` around a column, spanning the full height.
    pub fn around(center_x: i32, center_z: i32, radius: i32, size_y: i32) -> Self {
        RegionBounds {
            min_x: center_x - radius,
            max_x: center_x + radius,
            min_z: center_z - radius,
            max_z: center_z + radius,
            min_y: 0,
            max_y: size_y - 1,
        }
    }

    /// Clamps the bounds to the grid, or `None` if nothing is left.
    pub fn clamped_to(&self, world: &VoxelWorld) -> Option<RegionBounds> {
        let clamped = RegionBounds {
            min_x: self.min_x.max(0),
            max_x: self.max_x.min(world.size_x() - 1),
            min_z: self.min_z.max(0),
            max_z: self.max_z.min(world.size_z() - 1),
            min_y: self.min_y.max(0),
            max_y: self.max_y.min(world.size_y() - 1),
        };
        let non_empty = clamped.min_x <= clamped.max_x
            && clamped.min_z <= clamped.max_z
            && clamped.min_y <= clamped.max_y;
        non_empty.then_some(clamped)
    }

    /// Returns true if the cell lies in the bounds.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x)
            && (self.min_y..=self.max_y).contains(&y)
            && (self.min_z..=self.max_z).contains(&z)
    }
}

/// Decides when the meshed window around the player needs rebuilding.
#[derive(Clone, Debug)]
pub struct RegionTracker {
    grid: i32,
    radius: i32,
    bucket: Option<(i32, i32)>,
}

impl Default for RegionTracker {
    fn default() -> Self {
        RegionTracker::new(RENDER_GRID, RENDER_RADIUS)
    }
}

impl RegionTracker {
    /// Creates a tracker. A grid below 1 is treated as 1.
    pub fn new(grid: i32, radius: i32) -> Self {
        RegionTracker {
            grid: grid.max(1),
            radius,
            bucket: None,
        }
    }

    /// The bucket a position falls in: `floor(p / grid) * grid` per axis.
    pub fn bucket_of(&self, px: f32, pz: f32) -> (i32, i32) {
        let g = self.grid as f32;
        (
            (px / g).floor() as i32 * self.grid,
            (pz / g).floor() as i32 * self.grid,
        )
    }

    /// Returns the region to rebuild, if any.
    ///
    /// The first call always rebuilds. Later calls rebuild when the bucket
    /// changes or `force` is set.
    pub fn update(&mut self, px: f32, pz: f32, size_y: i32, force: bool) -> Option<RegionBounds> {
        let bucket = self.bucket_of(px, pz);
        if !force && self.bucket == Some(bucket) {
            return None;
        }
        debug!("Rebuilding region around bucket {:?} (forced: {})", bucket, force);
        self.bucket = Some(bucket);
        Some(RegionBounds::around(
            px.floor() as i32,
            pz.floor() as i32,
            self.radius,
            size_y,
        ))
    }
}
