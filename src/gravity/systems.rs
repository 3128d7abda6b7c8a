//! Gravity domain: zone triggers and inversion propagation.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::WalkingEnemy;
use crate::gravity::{GravityAffected, GravityField, GravityToggledEvent, GravityZone, rotation_for};
use crate::movement::Player;

pub(crate) fn trigger_gravity_zones(
    mut collisions: MessageReader<CollisionStart>,
    mut field: ResMut<GravityField>,
    mut toggles: MessageWriter<GravityToggledEvent>,
    player_query: Query<(), With<Player>>,
    zone_query: Query<(), With<GravityZone>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, zone_entity) in pairs {
            if player_query.get(player_entity).is_err() {
                continue;
            }
            if zone_query.get(zone_entity).is_err() {
                continue;
            }

            field.toggle();
            info!("Gravity toggled: {}", field.label());
            toggles.write(GravityToggledEvent {
                inverted: field.is_inverted(),
            });
        }
    }
}

/// Propagate a flip to every gravity-affected actor in one pass: gravity
/// scale, zeroed velocity, 180-degree rotation, and reversed patrol
/// direction all change before the next physics tick.
pub(crate) fn propagate_inversion(
    field: Res<GravityField>,
    mut toggles: MessageReader<GravityToggledEvent>,
    mut query: Query<
        (
            &mut GravityScale,
            &mut LinearVelocity,
            &mut Transform,
            Option<&mut WalkingEnemy>,
        ),
        With<GravityAffected>,
    >,
) {
    for toggle in toggles.read() {
        let rotation = rotation_for(toggle.inverted);

        for (mut gravity_scale, mut velocity, mut transform, walker) in &mut query {
            gravity_scale.0 = field.sign();
            velocity.0 = Vec2::ZERO;
            transform.rotation = rotation;
            if let Some(mut walker) = walker {
                walker.direction = walker.direction.flipped();
            }
        }
    }
}
