//! Mining and block placement through the raycaster.

use cgmath::{Point3, Vector3};
use log::debug;

use crate::{
    persistence::WorldDiff,
    voxels::{block::BlockType, collision::collides_at, raycast::voxel_raycast, world::VoxelWorld},
};

use super::{
    player::{PlayerBody, PlayerPhysics},
    INTERACT_REACH,
};

/// Scales mining power into progress per second.
const MINING_RATE: f32 = 2.1;

/// What the player mines with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToolStats {
    /// Mining speed multiplier
    pub power: f32,
    /// Pickaxe tier, compared against [`BlockType::required_tool_tier`]
    pub tier: u8,
}

impl ToolStats {
    /// Mining with an empty hand.
    pub const BARE_HANDS: ToolStats = ToolStats { power: 0.8, tier: 0 };
    /// Wooden pickaxe
    pub const WOOD_PICKAXE: ToolStats = ToolStats { power: 1.05, tier: 1 };
    /// Stone pickaxe
    pub const STONE_PICKAXE: ToolStats = ToolStats { power: 1.55, tier: 2 };
    /// Sliver pickaxe
    pub const SLIVER_PICKAXE: ToolStats = ToolStats { power: 2.2, tier: 3 };
    /// Ruby pickaxe
    pub const RUBY_PICKAXE: ToolStats = ToolStats { power: 2.8, tier: 4 };
    /// Sapphire pickaxe
    pub const SAPPHIRE_PICKAXE: ToolStats = ToolStats { power: 3.3, tier: 5 };
    /// Gold pickaxe
    pub const GOLD_PICKAXE: ToolStats = ToolStats { power: 3.8, tier: 6 };
    /// Diamond pickaxe
    pub const DIAMOND_PICKAXE: ToolStats = ToolStats { power: 4.4, tier: 7 };

    /// Returns true if this tool can break `block` at all.
    pub fn can_mine(&self, block: BlockType) -> bool {
        block.is_breakable() && self.tier >= block.required_tool_tier()
    }
}

impl Default for ToolStats {
    fn default() -> Self {
        ToolStats::BARE_HANDS
    }
}

/// The result of one mining tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MiningEvent {
    /// Nothing breakable in reach.
    Idle,
    /// The target needs a better tool.
    Blocked {
        /// Cell being looked at
        target: Point3<i32>,
        /// Its block
        block: BlockType,
    },
    /// Still mining.
    Progress {
        /// Cell being mined
        target: Point3<i32>,
        /// Completed fraction in `[0, 1)`
        fraction: f32,
    },
    /// The block broke and was replaced with air.
    Broke {
        /// Cell that broke
        target: Point3<i32>,
        /// What it was
        block: BlockType,
    },
}

/// Progress on the block currently being mined.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MiningState {
    target: Option<Point3<i32>>,
    progress: f32,
}

impl MiningState {
    /// Creates an idle state.
    pub fn new() -> Self {
        MiningState::default()
    }

    /// The cell being mined, if any.
    pub fn target(&self) -> Option<Point3<i32>> {
        self.target
    }

    /// Stops mining.
    pub fn reset(&mut self) {
        self.target = None;
        self.progress = 0.0;
    }

    /// Mines for `dt` seconds along the view ray.
    ///
    /// Looking at a different cell restarts from zero. The broken block is
    /// written through `diff` so the edit is saved.
    pub fn tick(
        &mut self,
        world: &mut VoxelWorld,
        diff: &mut WorldDiff,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        tool: ToolStats,
        dt: f32,
    ) -> MiningEvent {
        let Some(hit) = voxel_raycast(world, origin, direction, INTERACT_REACH) else {
            self.reset();
            return MiningEvent::Idle;
        };
        let target = hit.hit;
        let block = world.get(target.x, target.y, target.z);

        if !block.is_breakable() {
            self.reset();
            return MiningEvent::Idle;
        }
        if !tool.can_mine(block) {
            self.reset();
            return MiningEvent::Blocked { target, block };
        }

        if self.target != Some(target) {
            self.target = Some(target);
            self.progress = 0.0;
        }

        self.progress += dt * tool.power * MINING_RATE;
        let hardness = block.hardness();
        if self.progress < hardness {
            return MiningEvent::Progress {
                target,
                fraction: self.progress / hardness,
            };
        }

        diff.set_block_tracked(world, target.x, target.y, target.z, BlockType::AIR);
        self.reset();
        debug!("Broke {:?} at {:?}", block, target);
        MiningEvent::Broke { target, block }
    }
}

/// Places `block` against the face the view ray hits.
///
/// Returns the cell written, or `None` when nothing is in reach, the target
/// cell is occupied, the block can't be placed, or it would overlap the
/// player.
pub fn try_place_block(
    world: &mut VoxelWorld,
    diff: &mut WorldDiff,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    block: BlockType,
    player: &PlayerBody,
    physics: &PlayerPhysics,
) -> Option<Point3<i32>> {
    if !block.is_placeable() {
        return None;
    }
    let hit = voxel_raycast(world, origin, direction, INTERACT_REACH)?;
    let cell = hit.previous;
    if !world.in_bounds(cell.x, cell.y, cell.z) || !world.get(cell.x, cell.y, cell.z).is_air() {
        return None;
    }

    diff.set_block_tracked(world, cell.x, cell.y, cell.z, block);
    if collides_at(world, player.position, physics.half_width, physics.height) {
        diff.set_block_tracked(world, cell.x, cell.y, cell.z, BlockType::AIR);
        return None;
    }
    Some(cell)
}
