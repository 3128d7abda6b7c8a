//! Combat domain: enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{ContactDamage, Health, MeleeHitbox, Team, WalkDirection, WalkingEnemy};
use crate::combat::resources::CombatTuning;
use crate::gravity::GravityAffected;
use crate::movement::GameLayer;

pub const WALKER_SIZE: Vec2 = Vec2::new(28.0, 28.0);

/// Bundle for patrol-walking enemies.
#[derive(Bundle)]
pub struct WalkerBundle {
    pub walker: WalkingEnemy,
    pub team: Team,
    pub health: Health,
    pub touch_damage: ContactDamage,
    pub gravity_affected: GravityAffected,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
}

impl WalkerBundle {
    pub fn new(position: Vec2, patrol_range: f32, tuning: &CombatTuning) -> Self {
        Self {
            walker: WalkingEnemy {
                direction: WalkDirection::Right,
                speed: 60.0,
                patrol_origin: position.x,
                patrol_range,
            },
            team: Team::Enemy,
            health: Health::new(tuning.enemy_health),
            touch_damage: ContactDamage {
                amount: tuning.touch_damage,
                despawn_after_hit: false,
            },
            gravity_affected: GravityAffected,
            sprite: Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(WALKER_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(WALKER_SIZE.x, WALKER_SIZE.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [
                    GameLayer::Default,
                    GameLayer::Ground,
                    GameLayer::PassThrough,
                    GameLayer::Player,
                    GameLayer::Projectile,
                    GameLayer::Hazard,
                ],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(1.0),
        }
    }
}

/// Attach a disarmed melee hitbox as a child of `owner`. The hitbox has no
/// collider of its own; overlap is checked with spatial queries while armed.
pub fn spawn_melee_hitbox(commands: &mut Commands, owner: Entity, tuning: &CombatTuning) {
    let hitbox = commands
        .spawn((
            MeleeHitbox {
                owner,
                amount: tuning.melee_damage,
                armed: false,
                half_extents: Vec2::new(
                    tuning.melee_hitbox_width / 2.0,
                    tuning.melee_hitbox_height / 2.0,
                ),
                offset: tuning.melee_hitbox_offset,
            },
            Transform::from_xyz(tuning.melee_hitbox_offset, 0.0, 0.0),
        ))
        .id();
    commands.entity(owner).add_child(hitbox);
}
