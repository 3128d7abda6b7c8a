//! Shooting domain: tuning, cursor tracking, and the aim fallback region.

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShooterTuning {
    pub fire_rate: f32,
    pub projectile_speed: f32,
    pub spread_degrees: f32,
    pub projectile_damage: i32,
    pub projectile_lifetime: f32,
}

impl Default for ShooterTuning {
    fn default() -> Self {
        Self {
            fire_rate: 0.25,
            projectile_speed: 500.0,
            spread_degrees: 2.0,
            projectile_damage: 1,
            projectile_lifetime: 3.0,
        }
    }
}

/// Cursor position in world coordinates, refreshed every frame.
#[derive(Resource, Debug, Default)]
pub struct CursorWorld(pub Option<Vec2>);

/// Bounded region used when target-aim has no explicit target to aim at.
#[derive(Resource, Debug, Clone, Copy)]
pub struct AimRegion {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for AimRegion {
    fn default() -> Self {
        Self {
            min: Vec2::new(-600.0, -340.0),
            max: Vec2::new(600.0, 340.0),
        }
    }
}

impl AimRegion {
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        )
    }
}
