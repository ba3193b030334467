//! Player movement.
//!
//! Movement is axis-separated: X, then Z, then Y, each advanced in small
//! steps that are undone as soon as they create an overlap. It is an arcade
//! approximation, not a physics engine.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::voxels::{
    collision::{collides_at, has_support_under},
    world::VoxelWorld,
};

use super::*;

/// Largest distance moved before re-checking collision.
const MOVE_STEP: f32 = 0.05;
/// Upward nudge used to escape a block the player ended up inside.
const DEPENETRATION_STEP: f32 = 0.2;
/// Maximum number of depenetration nudges per tick.
const DEPENETRATION_ATTEMPTS: usize = 5;
/// Extra footprint margin for crouch edge safety.
const CROUCH_EDGE_MARGIN: f32 = 0.12;
/// Landing faster than this hurts.
const SAFE_LANDING_SPEED: f32 = 14.0;
/// Below this height the player is in the void.
const VOID_Y: f32 = -4.0;

/// Movement tunables.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlayerPhysics {
    /// Body height
    pub height: f32,
    /// Half of the horizontal footprint
    pub half_width: f32,
    /// Downward acceleration
    pub gravity: f32,
    /// Jump launch velocity
    pub jump_velocity: f32,
    /// Walking speed
    pub walk_speed: f32,
    /// Sprinting speed
    pub sprint_speed: f32,
    /// Crouching speed
    pub crouch_speed: f32,
    /// Minimum distance from the world edge
    pub border_padding: f32,
}

impl Default for PlayerPhysics {
    fn default() -> Self {
        PlayerPhysics {
            height: PLAYER_HEIGHT,
            half_width: PLAYER_HALF_WIDTH,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            crouch_speed: CROUCH_SPEED,
            border_padding: WORLD_BORDER_PADDING,
        }
    }
}

/// One tick of player intent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovementInput {
    /// Where the camera looks. Only the horizontal part is used.
    pub facing: Vector3<f32>,
    /// Forward/backward axis in `[-1, 1]`.
    pub forward: f32,
    /// Right/left axis in `[-1, 1]`.
    pub strafe: f32,
    /// Jump held
    pub jump: bool,
    /// Crouch held
    pub crouch: bool,
    /// Sprint held. Only applies while moving forward and not crouching.
    pub sprint: bool,
}

impl Default for MovementInput {
    fn default() -> Self {
        MovementInput {
            facing: Vector3::new(0.0, 0.0, -1.0),
            forward: 0.0,
            strafe: 0.0,
            jump: false,
            crouch: false,
            sprint: false,
        }
    }
}

/// What happened during a tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MovementOutcome {
    /// Damage from a hard landing.
    pub fall_damage: u32,
    /// A jump started this tick.
    pub jumped: bool,
    /// The player is below the world.
    pub in_void: bool,
    /// Horizontal distance actually travelled.
    pub horizontal_distance: f32,
    /// The player moved while sprinting.
    pub sprinted: bool,
}

/// The player's physical state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlayerBody {
    /// Feet position, horizontally centered.
    pub position: Point3<f32>,
    /// Current velocity
    pub velocity: Vector3<f32>,
    /// Standing on something
    pub on_ground: bool,
}

impl PlayerBody {
    /// A motionless body at `position`.
    pub fn new(position: Point3<f32>) -> Self {
        PlayerBody {
            position,
            velocity: Vector3::new(0.0, 0.0, 0.0),
            on_ground: false,
        }
    }

    /// The camera position.
    pub fn eye_position(&self) -> Point3<f32> {
        Point3::new(self.position.x, self.position.y + EYE_HEIGHT, self.position.z)
    }

    /// Moves along one axis in small steps, stopping at the first overlap.
    fn step_axis(&mut self, world: &VoxelWorld, physics: &PlayerPhysics, axis: usize, amount: f32) {
        let step_size = MOVE_STEP * amount.signum();
        let mut remaining = amount;

        while remaining.abs() > 1e-6 {
            let step = if remaining.abs() > step_size.abs() { step_size } else { remaining };
            self.position[axis] += step;
            if collides_at(world, self.position, physics.half_width, physics.height) {
                self.position[axis] -= step;
                if axis == 1 {
                    if step < 0.0 {
                        self.on_ground = true;
                    }
                    self.velocity.y = 0.0;
                }
                break;
            }
            remaining -= step;
        }
    }

    fn move_direction(input: &MovementInput) -> Vector3<f32> {
        let mut forward = Vector3::new(input.facing.x, 0.0, input.facing.z);
        if forward.magnitude2() < 1e-6 {
            forward = Vector3::new(0.0, 0.0, -1.0);
        }
        let forward = forward.normalize();
        let right = forward.cross(Vector3::unit_y()).normalize();

        let dir = forward * input.forward + right * input.strafe;
        if dir.magnitude2() > 0.0 {
            dir.normalize()
        } else {
            dir
        }
    }

    /// Advances the body by `dt` seconds.
    pub fn tick(&mut self, world: &VoxelWorld, input: &MovementInput, physics: &PlayerPhysics, dt: f32) -> MovementOutcome {
        let mut outcome = MovementOutcome::default();

        let sprinting = input.sprint && input.forward > 0.0 && !input.crouch;
        let speed = if input.crouch {
            physics.crouch_speed
        } else if sprinting {
            physics.sprint_speed
        } else {
            physics.walk_speed
        };
        let dir = Self::move_direction(input);
        self.velocity.x = dir.x * speed;
        self.velocity.z = dir.z * speed;

        let was_grounded = self.on_ground;
        self.velocity.y -= physics.gravity * dt;
        if input.jump && self.on_ground && !input.crouch {
            self.velocity.y = physics.jump_velocity;
            self.on_ground = false;
            outcome.jumped = true;
        }

        let vy_before_move = self.velocity.y;
        let start = self.position;

        self.on_ground = false;
        self.step_axis(world, physics, 0, self.velocity.x * dt);
        self.step_axis(world, physics, 2, self.velocity.z * dt);
        self.step_axis(world, physics, 1, self.velocity.y * dt);

        if collides_at(world, self.position, physics.half_width, physics.height) {
            for _ in 0..DEPENETRATION_ATTEMPTS {
                self.position.y += DEPENETRATION_STEP;
                if !collides_at(world, self.position, physics.half_width, physics.height) {
                    break;
                }
            }
        }

        if input.crouch
            && (self.on_ground || was_grounded)
            && !has_support_under(world, self.position, physics.half_width + CROUCH_EDGE_MARGIN)
        {
            self.position.x = start.x;
            self.position.z = start.z;
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
        }

        let pad = physics.border_padding;
        self.position.x = self.position.x.max(pad).min(world.size_x() as f32 - pad);
        self.position.z = self.position.z.max(pad).min(world.size_z() as f32 - pad);

        if !was_grounded && self.on_ground && vy_before_move < -SAFE_LANDING_SPEED {
            outcome.fall_damage = ((-vy_before_move - 13.0) * 1.15).floor().min(18.0) as u32;
        }

        outcome.in_void = self.position.y < VOID_Y;
        outcome.horizontal_distance =
            ((self.position.x - start.x).powi(2) + (self.position.z - start.z).powi(2)).sqrt();
        outcome.sprinted = sprinting && outcome.horizontal_distance > 1e-4;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    fn floor_world() -> VoxelWorld {
        let mut world = VoxelWorld::new(16, 16, 16, 0);
        for x in 0..16 {
            for z in 0..16 {
                world.set(x, 2, z, BlockType::STONE);
            }
        }
        world
    }

    #[test]
    fn jumping_needs_ground() {
        let world = floor_world();
        let physics = PlayerPhysics::default();
        let mut body = PlayerBody::new(Point3::new(8.5, 3.0, 8.5));
        let input = MovementInput {
            jump: true,
            ..MovementInput::default()
        };

        assert!(!body.tick(&world, &input, &physics, 1.0 / 60.0).jumped);
        assert!(body.on_ground);
        assert!(body.tick(&world, &input, &physics, 1.0 / 60.0).jumped);
        assert!(body.position.y > 3.0);
    }

    #[test]
    fn walls_stop_horizontal_motion() {
        let mut world = floor_world();
        for y in 3..6 {
            for z in 0..16 {
                world.set(10, y, z, BlockType::BRICK);
            }
        }
        let physics = PlayerPhysics::default();
        let mut body = PlayerBody::new(Point3::new(8.5, 3.0, 8.5));
        let input = MovementInput {
            facing: Vector3::new(1.0, 0.0, 0.0),
            forward: 1.0,
            ..MovementInput::default()
        };
        for _ in 0..120 {
            body.tick(&world, &input, &physics, 1.0 / 60.0);
        }
        assert!(body.position.x < 10.0 - physics.half_width + 0.01);
        assert!(body.position.x > 9.5);
    }

    #[test]
    fn crouching_does_not_walk_off_ledges() {
        let mut world = VoxelWorld::new(16, 16, 16, 0);
        for x in 0..=8 {
            for z in 0..16 {
                world.set(x, 2, z, BlockType::STONE);
            }
        }
        let physics = PlayerPhysics::default();
        let mut body = PlayerBody::new(Point3::new(7.5, 3.0, 8.5));
        body.tick(&world, &MovementInput::default(), &physics, 1.0 / 60.0);
        assert!(body.on_ground);

        let input = MovementInput {
            facing: Vector3::new(1.0, 0.0, 0.0),
            forward: 1.0,
            crouch: true,
            ..MovementInput::default()
        };
        for _ in 0..240 {
            body.tick(&world, &input, &physics, 1.0 / 60.0);
        }
        assert!(body.position.y >= 3.0 - 0.06);
        assert!(body.position.x < 9.0 + physics.half_width + CROUCH_EDGE_MARGIN);
    }
}
