//! Core domain: level construction.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{CombatTuning, Health, Team, WalkerBundle, spawn_melee_hitbox};
use crate::gravity::{GravityAffected, GravityZone};
use crate::movement::{
    BouncePad, GameLayer, Ground, MovementState, PassThroughPlatform, Player, PlayerState,
    player_collision_layers,
};
use crate::shooting::{AimMode, FireControl, Shooter, ShooterTuning};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

pub(crate) fn spawn_level(
    mut commands: Commands,
    combat_tuning: Res<CombatTuning>,
    shooter_tuning: Res<ShooterTuning>,
) {
    // Floor and ceiling; the ceiling is the floor under inverted gravity
    spawn_ground(&mut commands, Vec2::new(0.0, -320.0), Vec2::new(1400.0, 40.0));
    spawn_ground(&mut commands, Vec2::new(0.0, 340.0), Vec2::new(1400.0, 40.0));
    spawn_ground(&mut commands, Vec2::new(-500.0, -180.0), Vec2::new(200.0, 24.0));
    spawn_ground(&mut commands, Vec2::new(480.0, -120.0), Vec2::new(240.0, 24.0));

    // Platforms the player can jump up through
    spawn_pass_through(&mut commands, Vec2::new(-120.0, -160.0), Vec2::new(180.0, 12.0));
    spawn_pass_through(&mut commands, Vec2::new(160.0, -40.0), Vec2::new(180.0, 12.0));

    // Bounce pad on the floor
    commands.spawn((
        BouncePad,
        Ground,
        Sprite {
            color: Color::srgb(0.3, 0.9, 0.6),
            custom_size: Some(Vec2::new(48.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(300.0, -294.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(48.0, 12.0),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
    ));

    // Gravity inversion zones at both ends of the arena
    spawn_gravity_zone(&mut commands, Vec2::new(-620.0, 0.0));
    spawn_gravity_zone(&mut commands, Vec2::new(620.0, 0.0));

    // Player
    let player = commands
        .spawn((
            Player,
            Team::Player,
            Health::new(combat_tuning.player_health),
            MovementState::default(),
            PlayerState::default(),
            GravityAffected,
            Shooter {
                mode: AimMode::Mounted,
                fire_rate: shooter_tuning.fire_rate,
                projectile_speed: shooter_tuning.projectile_speed,
                spread_degrees: shooter_tuning.spread_degrees,
                damage: shooter_tuning.projectile_damage,
                player_controlled: true,
                target: None,
                control: FireControl::default(),
            },
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(-400.0, -240.0, 0.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                CollisionEventsEnabled,
                player_collision_layers(false),
                LinearVelocity::default(),
                LockedAxes::ROTATION_LOCKED,
                GravityScale(1.0),
            ),
        ))
        .id();
    spawn_melee_hitbox(&mut commands, player, &combat_tuning);

    // Patrol walkers
    commands.spawn(WalkerBundle::new(
        Vec2::new(100.0, -280.0),
        140.0,
        &combat_tuning,
    ));
    commands.spawn(WalkerBundle::new(
        Vec2::new(480.0, -80.0),
        90.0,
        &combat_tuning,
    ));

    // Turret aiming at the player (or, half the time, wherever the cursor
    // happens to be)
    commands.spawn((
        Team::Enemy,
        Health::new(combat_tuning.enemy_health),
        Shooter {
            mode: AimMode::FreeAim,
            fire_rate: shooter_tuning.fire_rate * 4.0,
            projectile_speed: shooter_tuning.projectile_speed * 0.6,
            spread_degrees: shooter_tuning.spread_degrees * 3.0,
            damage: shooter_tuning.projectile_damage,
            player_controlled: false,
            target: Some(player),
            control: FireControl::default(),
        },
        Sprite {
            color: Color::srgb(0.6, 0.3, 0.7),
            custom_size: Some(Vec2::new(28.0, 28.0)),
            ..default()
        },
        Transform::from_xyz(560.0, -94.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(28.0, 28.0),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player, GameLayer::Projectile]),
    ));

    info!("Level spawned");
}

fn spawn_ground(commands: &mut Commands, position: Vec2, size: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color: Color::srgb(0.35, 0.3, 0.3),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
    ));
}

fn spawn_pass_through(commands: &mut Commands, position: Vec2, size: Vec2) {
    commands.spawn((
        PassThroughPlatform,
        Sprite {
            color: Color::srgb(0.5, 0.45, 0.35),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::PassThrough, LayerMask::ALL),
    ));
}

fn spawn_gravity_zone(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        GravityZone,
        Sprite {
            color: Color::srgba(0.4, 0.5, 1.0, 0.3),
            custom_size: Some(Vec2::new(40.0, 600.0)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, -0.2),
        RigidBody::Static,
        Collider::rectangle(40.0, 600.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Zone, [GameLayer::Player]),
    ));
}
