//! Movement domain: ground detection and bounce pad contacts.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::gravity::GravityField;
use crate::movement::events::BounceEvent;
use crate::movement::{BouncePad, GameLayer, MovementState, Player};

const GROUND_RAY_DISTANCE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    gravity: Res<GravityField>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Standable surfaces: solid ground and pass-through platforms
    let ground_filter =
        SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::PassThrough]);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        // "Down" is toward gravity, which flips when inverted
        let (foot_offset, ray_direction) = if gravity.is_inverted() {
            (Vec2::new(0.0, player_half_height), Dir2::Y)
        } else {
            (Vec2::new(0.0, -player_half_height), Dir2::NEG_Y)
        };

        let ray_origin = transform.translation.truncate() + foot_offset;
        let hit = spatial_query.cast_ray(
            ray_origin,
            ray_direction,
            GROUND_RAY_DISTANCE,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground != was_on_ground {
            debug!(
                "Ground contact changed: on_ground={}, jumps_used={}",
                state.on_ground, state.jumps_used
            );
        }
    }
}

pub(crate) fn detect_bounce_pads(
    mut collisions: MessageReader<CollisionStart>,
    mut bounces: MessageWriter<BounceEvent>,
    player_query: Query<Entity, With<Player>>,
    pad_query: Query<(), With<BouncePad>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, pad_entity) in pairs {
            if player_query.get(player_entity).is_err() {
                continue;
            }
            if pad_query.get(pad_entity).is_err() {
                continue;
            }
            bounces.write(BounceEvent {
                entity: player_entity,
            });
        }
    }
}
