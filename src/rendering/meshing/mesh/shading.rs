//! Baked per-face color.
//!
//! Every face gets its material's base color, perturbed by a few layers of
//! cheap coordinate noise so flat surfaces read as grass, grain or speckled
//! rock, then darkened by directional shade and a local ambient-occlusion
//! factor.

use crate::voxels::{
    block::{BlockSide, BlockType},
    world::VoxelWorld,
};

/// The darkest an occluded face can get.
pub const MIN_AO_FACTOR: f32 = 0.66;

/// Darkening per solid neighbour.
pub const AO_STEP: f32 = 0.07;

/// Brightness multiplier for a face normal.
pub fn directional_shade(side: BlockSide) -> f32 {
    match side {
        BlockSide::TOP => 1.07,
        BlockSide::BOTTOM => 0.78,
        _ => 0.9,
    }
}

fn fract(v: f32) -> f32 {
    v - v.floor()
}

fn tex_jitter(x: f32, y: f32, z: f32) -> f32 {
    fract((x * 12.9898 + y * 78.233 + z * 37.719).sin() * 43758.547) * 0.22 - 0.11
}

fn layered_noise(x: f32, y: f32, z: f32) -> f32 {
    let a = (x * 0.27 + z * 0.19 + y * 0.11).sin();
    let b = (x * 0.51 - z * 0.43 + y * 0.09).cos();
    let c = (x * 1.31 + y * 0.71 + z * 1.09).sin() * 0.33;
    (a * 0.44 + b * 0.36 + c) * 0.5
}

fn micro_noise(x: f32, y: f32, z: f32) -> f32 {
    let n = (x * 8.9 + y * 11.3 + z * 9.7).sin() * 0.5 + (x * 13.1 - y * 7.4 + z * 12.8).cos() * 0.5;
    n * 0.04
}

/// Blocky "pixel" patches so faces look like low-resolution textures.
fn pixel_patch(x: f32, y: f32, z: f32) -> f32 {
    let px = ((x + 2048.0) * 8.0).floor();
    let py = ((y + 2048.0) * 8.0).floor();
    let pz = ((z + 2048.0) * 8.0).floor();
    let v = fract((px * 0.91 + py * 1.13 + pz * 0.77).sin() * 43758.547);
    ((v * 7.0).floor() - 3.0) * 0.024
}

fn pixel_patch_fine(x: f32, y: f32, z: f32) -> f32 {
    let px = ((x + 2048.0) * 13.0).floor();
    let py = ((y + 2048.0) * 13.0).floor();
    let pz = ((z + 2048.0) * 13.0).floor();
    let v = fract((px * 1.37 + py * 0.83 + pz * 1.19).sin() * 24634.635);
    ((v * 9.0).floor() - 4.0) * 0.012
}

fn channel(value: f32, factor: f32) -> f32 {
    (value * factor).clamp(0.0, 1.0)
}

/// The unshaded-by-AO color of a face.
///
/// `(x, y, z)` is the face center: the cell coordinate plus half the normal.
pub fn material_tint(block: BlockType, x: f32, y: f32, z: f32, side: BlockSide) -> [f32; 3] {
    let n = layered_noise(x, y, z);
    let micro = micro_noise(x, y, z);
    let patch = pixel_patch(x, y, z) + pixel_patch_fine(x, y, z);
    let jitter = tex_jitter(x, y, z);
    let shade = directional_shade(side);
    let c = block.base_color();

    match block {
        BlockType::GRASS => {
            let top_boost = if side == BlockSide::TOP { 0.16 } else { 0.0 };
            [
                channel(c[0] + n * 0.06 + micro * 0.7 + top_boost * 0.3, shade + jitter * 0.5),
                channel(c[1] + n * 0.1 + micro + patch + top_boost, shade + 0.02),
                channel(c[2] + n * 0.05 + micro * 0.65 + patch * 0.75, shade + jitter * 0.45),
            ]
        }
        BlockType::DIRT | BlockType::SAND => {
            let band = ((y + x * 0.06 + z * 0.06) * 1.1).sin() * 0.04;
            [
                channel(c[0] + n * 0.05 + micro * 0.55 + patch + band, shade + jitter * 0.35),
                channel(c[1] + n * 0.04 + micro * 0.42 + patch * 0.8 + band * 0.5, shade + jitter * 0.25),
                channel(c[2] + n * 0.03 + micro * 0.35 + patch * 0.7, shade + jitter * 0.2),
            ]
        }
        BlockType::STONE | BlockType::COBBLESTONE | BlockType::BEDROCK => {
            let speckle = (x * 3.1 + y * 2.7 + z * 3.9).sin() * 0.03 + micro * 0.75 + patch * 0.9;
            [
                channel(c[0] + n * 0.045 + speckle, shade + jitter * 0.22),
                channel(c[1] + n * 0.05 + speckle, shade + jitter * 0.24),
                channel(c[2] + n * 0.045 + speckle, shade + jitter * 0.22),
            ]
        }
        BlockType::WOOD | BlockType::PLANKS => {
            let grain = ((x + z) * 0.35 + y * 1.7).sin() * 0.08;
            [
                channel(c[0] + grain + n * 0.04 + micro * 0.3 + patch * 0.55, shade + jitter * 0.2),
                channel(c[1] + grain * 0.7 + n * 0.03 + micro * 0.2 + patch * 0.45, shade + jitter * 0.18),
                channel(c[2] + grain * 0.45 + n * 0.02 + micro * 0.14 + patch * 0.35, shade + jitter * 0.15),
            ]
        }
        BlockType::LEAVES => [
            channel(c[0] + n * 0.07 + micro * 0.3 + patch * 0.45, shade + jitter * 0.3),
            channel(c[1] + n * 0.12 + micro * 0.45 + patch * 0.6, shade + 0.03),
            channel(c[2] + n * 0.06 + micro * 0.2 + patch * 0.35, shade + jitter * 0.2),
        ],
        BlockType::WATER => {
            let ripple = (x * 0.8 + z * 0.6).sin() * 0.03 + (x * 0.35 - z * 0.9).cos() * 0.02;
            [
                channel(c[0] + ripple + micro * 0.2, shade),
                channel(c[1] + ripple + n * 0.03, shade),
                channel(c[2] + ripple * 1.5 + n * 0.04, shade),
            ]
        }
        ore if ore.is_ore() => {
            let ore_noise = (x * 11.7 + y * 9.3 + z * 10.1).sin() + (x * 7.4 - y * 8.8 + z * 6.6).cos();
            let fleck_mask = if ore_noise > 1.05 {
                1.0
            } else if ore_noise > 0.7 {
                0.55
            } else {
                0.15
            };
            let chip = if (x * 19.7 + y * 13.4 + z * 17.9).sin() > 0.92 { 1.0 } else { 0.0 };
            let fleck = fleck_mask * 0.12 + chip * 0.08;
            let tint = ore_fleck_tint(ore);
            let base = n * 0.04 + micro * 0.45 + patch * 0.75;
            [
                channel(c[0] + base + fleck * tint[0], shade + jitter * 0.18),
                channel(c[1] + base + fleck * tint[1], shade + jitter * 0.18),
                channel(c[2] + base + fleck * tint[2], shade + jitter * 0.18),
            ]
        }
        _ => {
            let base = n * 0.03 + micro * 0.35 + patch * 0.6;
            let factor = shade + jitter * 0.2;
            [
                channel(c[0] + base, factor),
                channel(c[1] + base, factor),
                channel(c[2] + base, factor),
            ]
        }
    }
}

/// Color pushed into ore flecks, per tier.
fn ore_fleck_tint(ore: BlockType) -> [f32; 3] {
    match ore {
        BlockType::SLIVER_ORE => [0.26, 0.26, 0.27],
        BlockType::RUBY_ORE => [0.3, -0.2, -0.18],
        BlockType::GOLD_ORE => [0.32, 0.22, -0.2],
        BlockType::SAPPHIRE_ORE => [-0.2, -0.05, 0.34],
        BlockType::DIAMOND_ORE => [-0.15, 0.3, 0.28],
        _ => [0.0, 0.0, 0.0],
    }
}

/// Ambient-occlusion factor for a face.
///
/// Counts solid cells among the four in-plane neighbours of the cell the
/// face looks into, darkening by [`AO_STEP`] each down to [`MIN_AO_FACTOR`].
pub fn face_occlusion(world: &VoxelWorld, x: i32, y: i32, z: i32, side: BlockSide) -> f32 {
    let front = side.offset();
    let (a, b) = side.tangents();
    let (sx, sy, sz) = (x + front.x, y + front.y, z + front.z);

    let occluded = [a, -a, b, -b]
        .iter()
        .filter(|t| world.is_solid(sx + t.x, sy + t.y, sz + t.z))
        .count();
    (1.0 - occluded as f32 * AO_STEP).max(MIN_AO_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_stay_in_range() {
        for block in BlockType::ALL {
            for side in BlockSide::all() {
                for i in 0..20 {
                    let f = i as f32 * 3.7;
                    for channel in material_tint(block, f, f * 0.5 + 0.5, -f, side) {
                        assert!((0.0..=1.0).contains(&channel));
                    }
                }
            }
        }
    }

    #[test]
    fn top_faces_are_brighter_than_bottoms() {
        assert!(directional_shade(BlockSide::TOP) > directional_shade(BlockSide::RIGHT));
        assert!(directional_shade(BlockSide::RIGHT) > directional_shade(BlockSide::BOTTOM));
    }

    #[test]
    fn occlusion_counts_in_plane_neighbours() {
        let mut world = VoxelWorld::new(8, 8, 8, 0);
        world.set(3, 3, 3, BlockType::STONE);
        assert_eq!(face_occlusion(&world, 3, 3, 3, BlockSide::TOP), 1.0);

        world.set(4, 4, 3, BlockType::STONE);
        world.set(2, 4, 3, BlockType::STONE);
        let ao = face_occlusion(&world, 3, 3, 3, BlockSide::TOP);
        assert!((ao - 0.86).abs() < 1e-6);

        world.set(3, 4, 4, BlockType::STONE);
        world.set(3, 4, 2, BlockType::STONE);
        world.set(3, 4, 3, BlockType::WATER);
        let ao = face_occlusion(&world, 3, 3, 3, BlockSide::TOP);
        assert!((ao - 0.72).abs() < 1e-6);
    }
}
