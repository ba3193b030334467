//! # Gameplay
//!
//! The thin layer between input and the world: player movement against the
//! collision queries, and block mining and placement through the raycaster.

pub mod interaction;
pub mod player;

/// Player body height.
pub const PLAYER_HEIGHT: f32 = 1.8;
/// Half of the player's horizontal footprint.
pub const PLAYER_HALF_WIDTH: f32 = 0.3;
/// Camera height above the feet.
pub const EYE_HEIGHT: f32 = 1.62;
/// Downward acceleration.
pub const GRAVITY: f32 = 26.0;
/// Upward velocity of a jump.
pub const JUMP_VELOCITY: f32 = 8.2;
/// Normal walking speed.
pub const WALK_SPEED: f32 = 4.8;
/// Sprinting speed.
pub const SPRINT_SPEED: f32 = 12.8;
/// Crouching speed.
pub const CROUCH_SPEED: f32 = 2.1;
/// The player may not get closer than this to the world edge.
pub const WORLD_BORDER_PADDING: f32 = 1.2;
/// Default ray length for generic probes.
pub const RAY_REACH: f32 = 6.0;
/// Ray length for mining and placing.
pub const INTERACT_REACH: f32 = 7.0;

pub use interaction::{try_place_block, MiningEvent, MiningState, ToolStats};
pub use player::{MovementInput, MovementOutcome, PlayerBody, PlayerPhysics};
