//! # Entities
//!
//! Mobs that roam the generated world. Their positions are not saved; a
//! loaded world is repopulated.

use fastrand::Rng;
use log::info;

use crate::voxels::world::VoxelWorld;

pub mod mob;

pub use mob::{Mob, MobBehavior, MobKind, MobTemplate};

impl MobKind {
    /// How many of this kind a fresh world starts with.
    pub fn group_size(self) -> usize {
        match self {
            MobKind::Sheep => 14,
            MobKind::Chicken => 12,
            MobKind::Horse | MobKind::Zombie => 8,
            MobKind::Skeleton | MobKind::Spider => 6,
        }
    }
}

/// Spawns the starting groups of every kind around a center point.
pub fn populate(world: &VoxelWorld, rng: &mut Rng, center_x: f32, center_z: f32, radius: f32) -> Vec<Mob> {
    let mobs: Vec<Mob> = MobKind::ALL
        .iter()
        .flat_map(|&kind| std::iter::repeat(kind).take(kind.group_size()))
        .map(|kind| Mob::spawn_near(kind, world, rng, center_x, center_z, radius))
        .collect();

    let hostile = mobs.iter().filter(|m| m.is_hostile()).count();
    info!("Spawned {} passive and {} hostile mobs", mobs.len() - hostile, hostile);
    mobs
}
