//! Visible-face extraction.
//!
//! Every non-air cell in the region emits one quad per face whose neighbour
//! does not hide it. There is no merging and no incremental update: a block
//! change means rebuilding the region that contains it.

use log::debug;
use web_time::Instant;

use crate::rendering::meshing::RegionBounds;
use crate::voxels::{
    block::{BlockSide, BlockType},
    world::VoxelWorld,
};

use super::{
    face::Face,
    mesh::Mesh,
    shading::{face_occlusion, material_tint},
};

/// Returns true if a face of `block` is hidden by the `neighbour` it looks at.
///
/// Solid neighbours hide everything. Water also hides water so the inside of
/// a lake is not meshed. A solid block facing water is still drawn.
pub fn is_face_hidden(block: BlockType, neighbour: BlockType) -> bool {
    neighbour.is_solid() || (block.is_liquid() && neighbour.is_liquid())
}

/// Builds the mesh for an inclusive region, clamped to the world.
pub fn build_region_mesh(world: &VoxelWorld, bounds: &RegionBounds) -> Mesh {
    let start = Instant::now();
    let mut mesh = Mesh::new();
    let Some(region) = bounds.clamped_to(world) else {
        return mesh;
    };

    for y in region.min_y..=region.max_y {
        for z in region.min_z..=region.max_z {
            for x in region.min_x..=region.max_x {
                let block = world.get(x, y, z);
                if block.is_air() {
                    continue;
                }

                for side in BlockSide::all() {
                    let d = side.offset();
                    if is_face_hidden(block, world.get(x + d.x, y + d.y, z + d.z)) {
                        continue;
                    }

                    let n = side.normal();
                    let base = material_tint(
                        block,
                        x as f32 + n.x * 0.5,
                        y as f32 + n.y * 0.5,
                        z as f32 + n.z * 0.5,
                        side,
                    );
                    let ao = face_occlusion(world, x, y, z, side);
                    let color = [base[0] * ao, base[1] * ao, base[2] * ao];

                    mesh.push_face(&Face::new(x, y, z, block, side), color);
                }
            }
        }
    }

    debug!(
        "Meshed region x {}..={} z {}..={} y {}..={}: {} quads in {:?}",
        region.min_x,
        region.max_x,
        region.min_z,
        region.max_z,
        region.min_y,
        region.max_y,
        mesh.quad_count(),
        start.elapsed()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn culling_rules() {
        assert!(is_face_hidden(BlockType::DIRT, BlockType::STONE));
        assert!(!is_face_hidden(BlockType::DIRT, BlockType::WATER));
        assert!(is_face_hidden(BlockType::WATER, BlockType::WATER));
        assert!(!is_face_hidden(BlockType::WATER, BlockType::AIR));
        assert!(is_face_hidden(BlockType::WATER, BlockType::SAND));
    }

    #[test]
    fn region_outside_the_world_is_empty() {
        let mut world = VoxelWorld::new(4, 4, 4, 0);
        world.fill(BlockType::STONE);
        let bounds = RegionBounds {
            min_x: 10,
            max_x: 20,
            min_z: 0,
            max_z: 3,
            min_y: 0,
            max_y: 3,
        };
        assert!(build_region_mesh(&world, &bounds).is_empty());
    }
}
