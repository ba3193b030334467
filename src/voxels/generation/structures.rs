//! Houses.
//!
//! A house is a 7×7 brick box with wooden corner posts, glass windows, a door
//! gap and an overhanging plank roof. It is only built on flat, dry ground.

use fastrand::Rng;

use crate::voxels::{block::BlockType, world::VoxelWorld};

use super::rand_span;

/// Distance from a house center to its walls.
pub const HOUSE_HALF_SIZE: i32 = 3;

/// Why a candidate site was turned down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SiteRejection {
    /// Too close to the floor or ceiling of the world.
    NoHeadroom,
    /// The ground sits below sea level.
    Underwater,
    /// The footprint or its margin leaves the grid.
    OutOfBounds,
    /// Some column in the footprint or margin differs by more than 1.
    Uneven,
}

/// Checks whether a house centered on `(cx, cz)` may be built.
///
/// Returns the floor height on success.
pub fn check_site(world: &VoxelWorld, cx: i32, cz: i32, sea_level: i32) -> Result<i32, SiteRejection> {
    let half = HOUSE_HALF_SIZE;
    let ground = world.highest_solid_y(cx, cz);
    let floor_y = ground + 1;

    if floor_y < 3 || floor_y + 6 >= world.size_y() - 1 {
        return Err(SiteRejection::NoHeadroom);
    }
    if ground < sea_level {
        return Err(SiteRejection::Underwater);
    }

    for x in cx - half - 1..=cx + half + 1 {
        for z in cz - half - 1..=cz + half + 1 {
            if !world.in_bounds(x, ground, z) {
                return Err(SiteRejection::OutOfBounds);
            }
            if (world.highest_solid_y(x, z) - ground).abs() > 1 {
                return Err(SiteRejection::Uneven);
            }
        }
    }
    Ok(floor_y)
}

/// Builds a house centered on `(cx, cz)` if the site passes [`check_site`].
///
/// A rejected site leaves the world untouched.
pub fn place_house(world: &mut VoxelWorld, cx: i32, cz: i32, sea_level: i32) -> Result<(), SiteRejection> {
    let floor_y = check_site(world, cx, cz, sea_level)?;
    let half = HOUSE_HALF_SIZE;

    for x in cx - half..=cx + half {
        for z in cz - half..=cz + half {
            world.set(x, floor_y - 1, z, BlockType::COBBLESTONE);
        }
    }

    for y in floor_y..=floor_y + 3 {
        for x in cx - half..=cx + half {
            for z in cz - half..=cz + half {
                let wall = x == cx - half || x == cx + half || z == cz - half || z == cz + half;
                if !wall {
                    world.set(x, y, z, BlockType::AIR);
                    continue;
                }
                let window = y == floor_y + 1
                    && ((x == cx && z == cz + half) || (z == cz && (x == cx - half || x == cx + half)));
                world.set(x, y, z, if window { BlockType::GLASS } else { BlockType::BRICK });
            }
        }
    }

    // door
    world.set(cx, floor_y, cz - half, BlockType::AIR);
    world.set(cx, floor_y + 1, cz - half, BlockType::AIR);

    for y in floor_y..=floor_y + 3 {
        for (px, pz) in [(cx - half, cz - half), (cx + half, cz - half), (cx - half, cz + half), (cx + half, cz + half)] {
            world.set(px, y, pz, BlockType::WOOD);
        }
    }

    for x in cx - half - 1..=cx + half + 1 {
        for z in cz - half - 1..=cz + half + 1 {
            world.set(x, floor_y + 4, z, BlockType::PLANKS);
        }
    }
    Ok(())
}

/// One house attempt at a random interior site.
pub fn try_place_house(world: &mut VoxelWorld, rng: &mut Rng, sea_level: i32) -> bool {
    let cx = rand_span(rng, 12, world.size_x() - 24);
    let cz = rand_span(rng, 12, world.size_z() - 24);
    place_house(world, cx, cz, sea_level).is_ok()
}
