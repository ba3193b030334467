//! Texture atlas addressing.
//!
//! The atlas is an 8×8 grid of square tiles. Each block names a tile for its
//! top, its sides and its bottom.

use crate::voxels::block::{BlockType, FaceOrientation};

/// Tiles per atlas row and column.
pub const ATLAS_TILES_PER_SIDE: u32 = 8;

/// Maps each block type to its atlas tiles.
///
/// Indexed by `BlockType` as a `usize`. Each entry is `[top, side, bottom]`.
pub static BLOCK_TYPE_TO_ATLAS_TILES: [[u32; 3]; 18] = [
    [0, 0, 0],    // AIR (never meshed)
    [0, 1, 2],    // GRASS
    [2, 2, 2],    // DIRT
    [3, 3, 3],    // STONE
    [5, 4, 5],    // WOOD
    [6, 6, 6],    // LEAVES
    [7, 7, 7],    // BEDROCK
    [8, 8, 8],    // PLANKS
    [9, 9, 9],    // COBBLESTONE
    [10, 10, 10], // SAND
    [11, 11, 11], // BRICK
    [12, 12, 12], // GLASS
    [13, 13, 13], // SLIVER_ORE
    [14, 14, 14], // RUBY_ORE
    [15, 15, 15], // GOLD_ORE
    [16, 16, 16], // SAPPHIRE_ORE
    [17, 17, 17], // DIAMOND_ORE
    [18, 18, 18], // WATER
];

/// The atlas tile a block face samples.
pub fn atlas_tile(block: BlockType, orientation: FaceOrientation) -> u32 {
    let tiles = &BLOCK_TYPE_TO_ATLAS_TILES[block as usize];
    match orientation {
        FaceOrientation::Top => tiles[0],
        FaceOrientation::Side => tiles[1],
        FaceOrientation::Bottom => tiles[2],
    }
}

/// The UV rectangle of a tile as `[u_min, v_min, u_max, v_max]`.
///
/// Tiles are numbered row-major from the top-left.
pub fn tile_uv_rect(tile: u32) -> [f32; 4] {
    let size = 1.0 / ATLAS_TILES_PER_SIDE as f32;
    let column = (tile % ATLAS_TILES_PER_SIDE) as f32;
    let row = (tile / ATLAS_TILES_PER_SIDE) as f32;
    [column * size, row * size, (column + 1.0) * size, (row + 1.0) * size]
}

/// Per-corner UVs for a quad, in lower-left, lower-right, upper-left,
/// upper-right order.
pub fn tile_corner_uvs(tile: u32) -> [[f32; 2]; 4] {
    let [u0, v0, u1, v1] = tile_uv_rect(tile);
    [[u0, v1], [u1, v1], [u0, v0], [u1, v0]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_uses_distinct_top_side_and_bottom() {
        assert_eq!(atlas_tile(BlockType::GRASS, FaceOrientation::Top), 0);
        assert_eq!(atlas_tile(BlockType::GRASS, FaceOrientation::Side), 1);
        assert_eq!(atlas_tile(BlockType::GRASS, FaceOrientation::Bottom), 2);
        assert_eq!(atlas_tile(BlockType::WATER, FaceOrientation::Side), 18);
    }

    #[test]
    fn every_tile_fits_the_atlas() {
        for row in BLOCK_TYPE_TO_ATLAS_TILES.iter() {
            for &tile in row {
                assert!(tile < ATLAS_TILES_PER_SIDE * ATLAS_TILES_PER_SIDE);
            }
        }
    }

    #[test]
    fn uv_rect_for_second_row() {
        assert_eq!(tile_uv_rect(9), [0.125, 0.125, 0.25, 0.25]);
    }
}
