//! # World Module
//!
//! This module provides the `VoxelWorld` struct, the dense block grid the whole
//! engine works against.
//!
//! ## Architecture
//!
//! The world is a single contiguous buffer with one `BlockTypeSize` per cell.
//! Cells are addressed Y-major:
//!
//! ```text
//! index = x + z * size_x + y * size_x * size_z
//! ```
//!
//! The ordering is part of the save format, since world diffs are keyed by
//! linear index.
//!
//! ## Bounds
//!
//! Reads outside the grid return `AIR` and writes outside it are ignored.
//! Neighbour sampling at the world edge (meshing, ray marching, collision)
//! therefore never has to branch on the edge itself.

use cgmath::Point3;

use crate::rendering::meshing::{build_region_mesh, Mesh, RegionBounds};

use super::block::{BlockType, BlockTypeSize};
use super::generation::{GenerationConfig, TerrainGenerator};

/// A fixed-size voxel world.
///
/// The dimensions and seed are fixed at construction. The grid is allocated
/// once and never resized; generation overwrites it in place.
///
/// # Examples
///
/// ```
/// use voxel_sandbox::voxels::{block::BlockType, world::VoxelWorld};
///
/// let mut world = VoxelWorld::new(16, 16, 16, 7);
/// world.set(3, 4, 5, BlockType::STONE);
/// assert_eq!(world.get(3, 4, 5), BlockType::STONE);
/// assert_eq!(world.get(-1, 4, 5), BlockType::AIR);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelWorld {
    size_x: i32,
    size_y: i32,
    size_z: i32,
    seed: u32,
    blocks: Vec<BlockTypeSize>,
}

impl VoxelWorld {
    /// Creates an all-air world of the given dimensions.
    ///
    /// Non-positive dimensions are raised to 1 so the grid is never empty.
    pub fn new(size_x: i32, size_y: i32, size_z: i32, seed: u32) -> Self {
        let size_x = size_x.max(1);
        let size_y = size_y.max(1);
        let size_z = size_z.max(1);
        let volume = size_x as usize * size_y as usize * size_z as usize;

        VoxelWorld {
            size_x,
            size_y,
            size_z,
            seed,
            blocks: vec![BlockType::AIR.id(); volume],
        }
    }

    /// Width of the world along X.
    pub fn size_x(&self) -> i32 {
        self.size_x
    }

    /// Height of the world along Y.
    pub fn size_y(&self) -> i32 {
        self.size_y
    }

    /// Depth of the world along Z.
    pub fn size_z(&self) -> i32 {
        self.size_z
    }

    /// The seed the world generates from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.blocks.len()
    }

    /// The raw grid in index order.
    pub fn blocks(&self) -> &[BlockTypeSize] {
        &self.blocks
    }

    /// Returns true if the coordinate lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && y >= 0 && z >= 0 && x < self.size_x && y < self.size_y && z < self.size_z
    }

    /// The linear index of a cell, or `None` when the coordinate is outside
    /// the grid.
    pub fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        let (sx, sz) = (self.size_x as usize, self.size_z as usize);
        Some(x + z * sx + y * sx * sz)
    }

    /// The inverse of [`VoxelWorld::index`].
    pub fn coordinates_of(&self, index: usize) -> Option<Point3<i32>> {
        if index >= self.blocks.len() {
            return None;
        }
        let (sx, sz) = (self.size_x as usize, self.size_z as usize);
        let layer = sx * sz;
        let y = index / layer;
        let rest = index % layer;
        Some(Point3::new((rest % sx) as i32, y as i32, (rest / sx) as i32))
    }

    /// The block at a coordinate. Out-of-bounds reads return `AIR`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockType {
        match self.index(x, y, z) {
            Some(i) => BlockType::from_stored(self.blocks[i]),
            None => BlockType::AIR,
        }
    }

    /// The block at a linear index, or `None` past the end of the grid.
    pub fn get_index(&self, index: usize) -> Option<BlockType> {
        self.blocks.get(index).map(|&b| BlockType::from_stored(b))
    }

    /// Overwrites a cell. Out-of-bounds writes are ignored.
    ///
    /// No placement policy is applied here; callers decide what is legal.
    pub fn set(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        if let Some(i) = self.index(x, y, z) {
            self.blocks[i] = block.id();
        }
    }

    /// Returns true if the cell blocks movement. Water and air do not.
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.get(x, y, z).is_solid()
    }

    /// The Y of the topmost solid cell in a column, or 0 if there is none.
    pub fn highest_solid_y(&self, x: i32, z: i32) -> i32 {
        (0..self.size_y)
            .rev()
            .find(|&y| self.is_solid(x, y, z))
            .unwrap_or(0)
    }

    /// Resets every cell to `AIR`.
    pub fn clear(&mut self) {
        self.fill(BlockType::AIR);
    }

    /// Sets every cell to `block`.
    pub fn fill(&mut self, block: BlockType) {
        self.blocks.fill(block.id());
    }

    /// Regenerates the world from its seed with the default tunables.
    pub fn generate(&mut self) {
        self.generate_with(&GenerationConfig::default());
    }

    /// Regenerates the world from its seed with custom tunables.
    pub fn generate_with(&mut self, config: &GenerationConfig) {
        TerrainGenerator::new(self.seed, config.clone()).generate(self);
    }

    /// Builds the visible-surface mesh for an inclusive region.
    ///
    /// The Y range defaults to the full height of the world. Bounds are
    /// clamped to the grid.
    pub fn build_geometry_region(
        &self,
        min_x: i32,
        max_x: i32,
        min_z: i32,
        max_z: i32,
        min_y: Option<i32>,
        max_y: Option<i32>,
    ) -> Mesh {
        let bounds = RegionBounds {
            min_x,
            max_x,
            min_z,
            max_z,
            min_y: min_y.unwrap_or(0),
            max_y: max_y.unwrap_or(self.size_y - 1),
        };
        build_region_mesh(self, &bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_y_major() {
        let world = VoxelWorld::new(4, 3, 5, 0);
        assert_eq!(world.index(1, 0, 0), Some(1));
        assert_eq!(world.index(0, 0, 1), Some(4));
        assert_eq!(world.index(0, 1, 0), Some(20));
        assert_eq!(world.index(3, 2, 4), Some(3 + 4 * 4 + 2 * 20));
        assert_eq!(world.index(4, 0, 0), None);
    }

    #[test]
    fn coordinates_invert_index() {
        let world = VoxelWorld::new(7, 5, 3, 0);
        for i in 0..world.volume() {
            let p = world.coordinates_of(i).unwrap();
            assert_eq!(world.index(p.x, p.y, p.z), Some(i));
        }
        assert_eq!(world.coordinates_of(world.volume()), None);
    }

    #[test]
    fn highest_solid_skips_water() {
        let mut world = VoxelWorld::new(2, 10, 2, 0);
        world.set(0, 3, 0, BlockType::STONE);
        world.set(0, 4, 0, BlockType::WATER);
        assert_eq!(world.highest_solid_y(0, 0), 3);
        assert_eq!(world.highest_solid_y(1, 1), 0);
    }
}
