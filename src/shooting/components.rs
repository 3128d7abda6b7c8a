//! Shooting domain: shooter components and aim math.

use bevy::prelude::*;
use rand::Rng;

use crate::movement::Facing;

/// Cooldown gate for firing. The timestamp advances only on a successful
/// fire, so failed attempts inside the window never extend it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FireControl {
    last_fired: Option<f32>,
}

impl FireControl {
    /// Attempt a fire at time `now`. Refused while less than `fire_rate`
    /// seconds have elapsed since the last successful fire.
    pub fn try_fire(&mut self, now: f32, fire_rate: f32) -> bool {
        if let Some(last) = self.last_fired {
            if now - last < fire_rate {
                return false;
            }
        }
        self.last_fired = Some(now);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AimMode {
    /// Aim from the cursor, or 50/50 between cursor and target when a
    /// target reference exists
    FreeAim,
    /// Fire along the owner's facing axis
    Mounted,
}

#[derive(Component, Debug)]
pub struct Shooter {
    pub mode: AimMode,
    /// Minimum seconds between successful fires
    pub fire_rate: f32,
    pub projectile_speed: f32,
    pub spread_degrees: f32,
    pub damage: i32,
    /// Fires from input when true, continuously otherwise
    pub player_controlled: bool,
    pub target: Option<Entity>,
    pub control: FireControl,
}

/// A launched projectile; despawns on expiry or on hitting terrain.
#[derive(Component, Debug)]
pub struct Projectile {
    pub lifetime: f32,
}

/// Rotate `direction` by a uniformly random angle within
/// ±`spread_degrees`.
pub fn with_spread(direction: Vec2, spread_degrees: f32, rng: &mut impl Rng) -> Vec2 {
    let jitter = rng
        .random_range(-spread_degrees..=spread_degrees)
        .to_radians();
    Vec2::from_angle(jitter).rotate(direction)
}

/// Firing axis for a mounted shooter: the owner's facing in world space.
pub fn mounted_direction(facing: Facing, gravity_sign: f32) -> Vec2 {
    Vec2::new(facing.world_sign(gravity_sign), 0.0)
}
