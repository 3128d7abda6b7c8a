//! Shooting domain: projectile spawning, aiming, and cooldowns.

mod components;
mod resources;
mod systems;

pub use components::{AimMode, FireControl, Projectile, Shooter, mounted_direction, with_spread};
pub use resources::{AimRegion, CursorWorld, ShooterTuning};

use bevy::prelude::*;

pub struct ShootingPlugin;

impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShooterTuning>()
            .init_resource::<CursorWorld>()
            .init_resource::<AimRegion>()
            .add_systems(
                Update,
                (
                    systems::track_cursor,
                    systems::fire_shooters,
                    systems::expire_projectiles,
                    systems::despawn_projectiles_on_terrain,
                )
                    .chain(),
            );
    }
}
