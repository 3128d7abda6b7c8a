//! Shooting domain: cursor tracking, firing, and projectile lifecycle.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

use crate::combat::{ContactDamage, Health, Team};
use crate::gravity::GravityField;
use crate::movement::{GameLayer, Ground, MovementInput, MovementState, PassThroughPlatform};
use crate::shooting::components::{
    AimMode, Projectile, Shooter, mounted_direction, with_spread,
};
use crate::shooting::resources::{AimRegion, CursorWorld, ShooterTuning};

const PROJECTILE_SIZE: Vec2 = Vec2::new(10.0, 4.0);
const PROJECTILE_RADIUS: f32 = 4.0;

pub(crate) fn track_cursor(
    mut cursor: ResMut<CursorWorld>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
) {
    cursor.0 = None;

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };

    cursor.0 = camera.viewport_to_world_2d(camera_transform, screen_pos).ok();
}

pub(crate) fn fire_shooters(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<ShooterTuning>,
    gravity: Res<GravityField>,
    cursor: Res<CursorWorld>,
    region: Res<AimRegion>,
    mut shooters: Query<(
        &mut Shooter,
        &Team,
        &Transform,
        Option<&MovementState>,
        Option<&Health>,
    )>,
    target_transforms: Query<&Transform, Without<Shooter>>,
) {
    let now = time.elapsed_secs();
    let mut rng = rand::rng();

    for (mut shooter, team, transform, movement, health) in &mut shooters {
        if shooter.player_controlled && !input.shot_held {
            continue;
        }
        if let Some(health) = health {
            if !health.is_alive() {
                continue;
            }
        }

        let origin = transform.translation.truncate();

        let direction = match shooter.mode {
            AimMode::Mounted => {
                let Some(movement) = movement else {
                    continue;
                };
                mounted_direction(movement.facing, gravity.sign())
            }
            AimMode::FreeAim => {
                let aim_point = if shooter.target.is_some() && rng.random_bool(0.5) {
                    aim_target_position(shooter.target, &target_transforms, &region, &mut rng)
                } else if let Some(cursor_pos) = cursor.0 {
                    cursor_pos
                } else {
                    // No cursor available: same fallback as a missing target
                    region.random_point(&mut rng)
                };
                let dir = (aim_point - origin).normalize_or_zero();
                if dir == Vec2::ZERO { Vec2::X } else { dir }
            }
        };

        // Cooldown check last, so a refused attempt costs nothing and the
        // timestamp only moves on success
        let fire_rate = shooter.fire_rate;
        if !shooter.control.try_fire(now, fire_rate) {
            continue;
        }

        let direction = with_spread(direction, shooter.spread_degrees, &mut rng);
        let angle = direction.y.atan2(direction.x);

        commands.spawn((
            Projectile {
                lifetime: tuning.projectile_lifetime,
            },
            *team,
            ContactDamage {
                amount: shooter.damage,
                despawn_after_hit: true,
            },
            Sprite {
                color: Color::srgb(1.0, 0.9, 0.4),
                custom_size: Some(PROJECTILE_SIZE),
                ..default()
            },
            Transform::from_translation(origin.extend(0.5))
                .with_rotation(Quat::from_rotation_z(angle)),
            RigidBody::Kinematic,
            Collider::circle(PROJECTILE_RADIUS),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Projectile,
                [
                    GameLayer::Ground,
                    GameLayer::PassThrough,
                    GameLayer::Player,
                    GameLayer::Enemy,
                ],
            ),
            LinearVelocity(direction * shooter.projectile_speed),
            GravityScale(0.0),
        ));

        debug!("Fired projectile: team={:?}, direction={:?}", team, direction);
    }
}

fn aim_target_position(
    target: Option<Entity>,
    target_transforms: &Query<&Transform, Without<Shooter>>,
    region: &AimRegion,
    rng: &mut impl Rng,
) -> Vec2 {
    if let Some(entity) = target {
        if let Ok(transform) = target_transforms.get(entity) {
            return transform.translation.truncate();
        }
    }
    region.random_point(rng)
}

pub(crate) fn expire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Projectile)>,
) {
    let dt = time.delta_secs();
    for (entity, mut projectile) in &mut query {
        projectile.lifetime -= dt;
        if projectile.lifetime <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Projectiles stop at terrain; hits on actors are consumed by the
/// contact-damage path.
pub(crate) fn despawn_projectiles_on_terrain(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    projectile_query: Query<(), With<Projectile>>,
    terrain_query: Query<(), Or<(With<Ground>, With<PassThroughPlatform>)>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, terrain_entity) in pairs {
            if projectile_query.get(projectile_entity).is_err() {
                continue;
            }
            if terrain_query.get(terrain_entity).is_err() {
                continue;
            }
            commands.entity(projectile_entity).despawn();
        }
    }
}
