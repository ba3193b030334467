//! Mob steering.
//!
//! Mobs glide over the surface rather than colliding with it: every tick the
//! horizontal position is integrated and the height snapped to the column
//! top. Only the steering state machine lives here.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Point3, Vector3};
use fastrand::Rng;

use crate::voxels::{
    spawn::{random_land_point_near, surface_y_at},
    world::VoxelWorld,
};

/// Passive mobs run from a player closer than this.
const FLEE_RANGE: f32 = 4.2;
/// Hostile mobs strike a player closer than this.
const ATTACK_RANGE: f32 = 4.0;
/// Speed multiplier while chasing or fleeing.
const URGENT_SPEED: f32 = 1.15;
/// Fraction of the way the heading turns toward its goal each tick.
const STEERING: f32 = 0.2;
/// Mobs turn around this close to the world edge.
const BORDER_MARGIN: f32 = 2.0;

/// Every kind of mob.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MobKind {
    /// Passive
    Sheep,
    /// Passive
    Chicken,
    /// Passive
    Horse,
    /// Hostile
    Zombie,
    /// Hostile
    Skeleton,
    /// Hostile
    Spider,
}

/// Fixed stats shared by all mobs of a kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MobTemplate {
    /// Wander speed in cells per second
    pub speed: f32,
    /// Starting health
    pub hp: u32,
    /// Hostile mobs chase within this distance
    pub detect_range: f32,
    /// Damage per hit
    pub attack_damage: u32,
    /// Seconds between hits
    pub attack_cooldown: f32,
    /// Distance from the ground to the body center
    pub half_height: f32,
}

impl MobKind {
    /// All kinds, passive first.
    pub const ALL: [MobKind; 6] = [
        MobKind::Sheep,
        MobKind::Chicken,
        MobKind::Horse,
        MobKind::Zombie,
        MobKind::Skeleton,
        MobKind::Spider,
    ];

    /// Returns true for mobs that chase and attack the player.
    pub fn is_hostile(self) -> bool {
        matches!(self, MobKind::Zombie | MobKind::Skeleton | MobKind::Spider)
    }

    /// The stats of this kind.
    pub fn template(self) -> MobTemplate {
        let (speed, hp, detect_range, attack_damage, attack_cooldown, half_height) = match self {
            MobKind::Sheep => (0.9, 10, 0.0, 0, 0.0, 0.575),
            MobKind::Chicken => (1.2, 7, 0.0, 0, 0.0, 0.42),
            MobKind::Horse => (1.4, 14, 0.0, 0, 0.0, 0.75),
            MobKind::Zombie => (1.05, 10, 11.0, 1, 1.35, 0.75),
            MobKind::Skeleton => (1.08, 9, 12.0, 1, 1.4, 0.74),
            MobKind::Spider => (1.2, 8, 10.0, 1, 1.1, 0.46),
        };
        MobTemplate {
            speed,
            hp,
            detect_range,
            attack_damage,
            attack_cooldown,
            half_height,
        }
    }
}

/// What a mob is doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MobBehavior {
    /// Drifting in a random direction
    Wander,
    /// Heading for the player
    Chase,
    /// Running from the player
    Flee,
}

/// A single mob.
#[derive(Clone, Debug, PartialEq)]
pub struct Mob {
    /// What it is
    pub kind: MobKind,
    /// Body center
    pub position: Point3<f32>,
    /// Horizontal heading, unit length
    pub direction: Vector3<f32>,
    /// Remaining health
    pub hp: u32,
    /// Current steering state
    pub behavior: MobBehavior,
    turn_timer: f32,
    attack_timer: f32,
}

fn heading(angle: f32) -> Vector3<f32> {
    Vector3::new(angle.cos(), 0.0, angle.sin())
}

impl Mob {
    /// A mob standing at `position` facing +X.
    pub fn new(kind: MobKind, position: Point3<f32>) -> Self {
        Mob {
            kind,
            position,
            direction: Vector3::unit_x(),
            hp: kind.template().hp,
            behavior: MobBehavior::Wander,
            turn_timer: 1.5,
            attack_timer: 0.0,
        }
    }

    /// A mob on land near `(center_x, center_z)` with a random heading.
    pub fn spawn_near(
        kind: MobKind,
        world: &VoxelWorld,
        rng: &mut Rng,
        center_x: f32,
        center_z: f32,
        radius: f32,
    ) -> Self {
        let ground = random_land_point_near(world, rng, center_x, center_z, radius);
        let position = Point3::new(ground.x, ground.y + kind.template().half_height, ground.z);
        let mut mob = Mob::new(kind, position);
        mob.direction = heading(rng.f32() * 2.0 * PI);
        mob.turn_timer = 1.5 + rng.f32() * 4.0;
        mob
    }

    /// Returns true for mobs that chase and attack the player.
    pub fn is_hostile(&self) -> bool {
        self.kind.is_hostile()
    }

    /// Applies damage and returns true if the mob died.
    pub fn hurt(&mut self, damage: u32) -> bool {
        self.hp = self.hp.saturating_sub(damage);
        self.hp == 0
    }

    /// Steers and moves the mob for `dt` seconds.
    ///
    /// Returns the damage dealt to the player, if the mob attacked.
    pub fn tick(&mut self, player: Point3<f32>, world: &VoxelWorld, rng: &mut Rng, dt: f32) -> Option<u32> {
        let template = self.kind.template();
        let hostile = self.is_hostile();

        let to_player = Vector3::new(player.x - self.position.x, 0.0, player.z - self.position.z);
        let distance = to_player.magnitude();
        let toward = if distance > 1e-6 { to_player / distance } else { self.direction };

        self.attack_timer = (self.attack_timer - dt).max(0.0);
        self.turn_timer -= dt;

        let goal = if hostile && distance < template.detect_range {
            self.behavior = MobBehavior::Chase;
            Some(toward)
        } else if !hostile && distance < FLEE_RANGE {
            self.behavior = MobBehavior::Flee;
            Some(-toward)
        } else {
            self.behavior = MobBehavior::Wander;
            if self.turn_timer <= 0.0 {
                let angle = self.direction.z.atan2(self.direction.x) + (rng.f32() - 0.5) * PI;
                self.direction = heading(angle);
                self.turn_timer = 1.5 + rng.f32() * 4.0;
            }
            None
        };

        if let Some(goal) = goal {
            // A goal straight behind would never turn the heading, so veer left.
            let goal = if self.direction.dot(goal) < -0.99 {
                goal + Vector3::new(-goal.z, 0.0, goal.x) * 0.5
            } else {
                goal
            };
            let steered = self.direction + (goal - self.direction) * STEERING;
            if steered.magnitude2() > 1e-8 {
                self.direction = steered.normalize();
            }
        }
        let speed_scale = if goal.is_some() { URGENT_SPEED } else { 1.0 };

        let step = template.speed * speed_scale * dt;
        self.position.x += self.direction.x * step;
        self.position.z += self.direction.z * step;

        let max_x = world.size_x() as f32 - BORDER_MARGIN;
        let max_z = world.size_z() as f32 - BORDER_MARGIN;
        if self.position.x < BORDER_MARGIN || self.position.x > max_x {
            self.direction.x = -self.direction.x;
            self.position.x = self.position.x.max(BORDER_MARGIN).min(max_x);
            self.turn_timer = 1.0;
        }
        if self.position.z < BORDER_MARGIN || self.position.z > max_z {
            self.direction.z = -self.direction.z;
            self.position.z = self.position.z.max(BORDER_MARGIN).min(max_z);
            self.turn_timer = 1.0;
        }

        self.position.y = surface_y_at(world, self.position.x, self.position.z) + template.half_height;

        if hostile && distance < ATTACK_RANGE && self.attack_timer <= 0.0 {
            self.attack_timer = template.attack_cooldown;
            return Some(template.attack_damage);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::BlockType;

    fn flat_world() -> VoxelWorld {
        let mut world = VoxelWorld::new(48, 16, 48, 0);
        for x in 0..48 {
            for z in 0..48 {
                for y in 0..=3 {
                    world.set(x, y, z, BlockType::STONE);
                }
            }
        }
        world
    }

    fn flat_distance(a: Point3<f32>, b: Point3<f32>) -> f32 {
        ((a.x - b.x).powi(2) + (a.z - b.z).powi(2)).sqrt()
    }

    #[test]
    fn hostile_mobs_close_in() {
        let world = flat_world();
        let mut rng = Rng::with_seed(1);
        let player = Point3::new(30.5, 4.0, 20.5);
        let mut zombie = Mob::new(MobKind::Zombie, Point3::new(22.5, 4.75, 20.5));
        let before = flat_distance(zombie.position, player);

        for _ in 0..20 {
            zombie.tick(player, &world, &mut rng, 0.1);
        }
        assert_eq!(zombie.behavior, MobBehavior::Chase);
        assert!(flat_distance(zombie.position, player) < before);
        assert!((zombie.position.y - (4.0 + 0.75)).abs() < 1e-5);
    }

    #[test]
    fn passive_mobs_run_away() {
        let world = flat_world();
        let mut rng = Rng::with_seed(2);
        let player = Point3::new(24.5, 4.0, 20.5);
        // Facing the player, so it has to turn around first.
        let mut sheep = Mob::new(MobKind::Sheep, Point3::new(22.5, 4.575, 20.5));
        sheep.turn_timer = 100.0;
        let before = flat_distance(sheep.position, player);

        sheep.tick(player, &world, &mut rng, 0.1);
        assert_eq!(sheep.behavior, MobBehavior::Flee);
        for _ in 0..40 {
            sheep.tick(player, &world, &mut rng, 0.1);
        }
        assert!(flat_distance(sheep.position, player) > before);
    }

    #[test]
    fn attacks_respect_the_cooldown() {
        let world = flat_world();
        let mut rng = Rng::with_seed(3);
        let player = Point3::new(24.5, 4.0, 20.5);
        let mut spider = Mob::new(MobKind::Spider, Point3::new(22.5, 4.46, 20.5));

        assert_eq!(spider.tick(player, &world, &mut rng, 0.1), Some(1));
        assert_eq!(spider.tick(player, &world, &mut rng, 0.1), None);
    }

    #[test]
    fn wandering_stays_inside_the_world() {
        let world = flat_world();
        let mut rng = Rng::with_seed(4);
        let far_away = Point3::new(-500.0, 0.0, -500.0);
        let mut horse = Mob::new(MobKind::Horse, Point3::new(3.0, 4.75, 3.0));
        horse.direction = Vector3::new(-1.0, 0.0, 0.0);

        for _ in 0..2000 {
            horse.tick(far_away, &world, &mut rng, 0.1);
            assert!(horse.position.x >= BORDER_MARGIN && horse.position.x <= 46.0);
            assert!(horse.position.z >= BORDER_MARGIN && horse.position.z <= 46.0);
        }
        assert_eq!(horse.behavior, MobBehavior::Wander);
    }

    #[test]
    fn wander_turns_apply_in_full() {
        let world = flat_world();
        let far_away = Point3::new(-500.0, 0.0, -500.0);
        for seed in 0..20 {
            let mut rng = Rng::with_seed(seed);
            let mut sheep = Mob::new(MobKind::Sheep, Point3::new(24.0, 4.575, 24.0));
            sheep.direction = Vector3::new(1.0, 0.0, 0.0);
            sheep.turn_timer = 0.0;

            let expected = (rng.clone().f32() - 0.5) * PI;
            sheep.tick(far_away, &world, &mut rng, 0.05);

            let actual = sheep.direction.z.atan2(sheep.direction.x);
            assert!((actual - expected).abs() < 1e-4, "seed {}: {} vs {}", seed, actual, expected);
            assert!(sheep.turn_timer >= 1.5);
        }
    }

    #[test]
    fn hurt_saturates_at_zero() {
        let mut chicken = Mob::new(MobKind::Chicken, Point3::new(0.0, 0.0, 0.0));
        assert!(!chicken.hurt(3));
        assert!(chicken.hurt(100));
        assert_eq!(chicken.hp, 0);
    }
}
