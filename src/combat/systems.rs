//! Combat domain: contact resolution, damage application, and deaths.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    ContactDamage, Health, MeleeHitbox, Team, armed_hitbox_damage, resolve_contact,
};
use crate::combat::events::{DamageEvent, DeathEvent};
use crate::movement::{GameLayer, MovementState, Player};

/// Instant-contact delivery: one damage application per overlap-begin event.
/// Contacts with same-team or health-less targets are no-ops; the attacking
/// entity is consumed only after a successful hit.
pub(crate) fn detect_contact_damage(
    mut commands: Commands,
    mut collisions: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    attacker_query: Query<(&ContactDamage, &Team)>,
    target_query: Query<&Team, With<Health>>,
) {
    for event in collisions.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (attacker_entity, target_entity) in pairs {
            let Ok((contact, attacker_team)) = attacker_query.get(attacker_entity) else {
                continue;
            };
            let Ok(target_team) = target_query.get(target_entity) else {
                continue;
            };
            let Some(event) = resolve_contact(
                attacker_entity,
                *attacker_team,
                target_entity,
                *target_team,
                contact.amount,
            ) else {
                continue;
            };

            damage_events.write(event);

            if contact.despawn_after_hit {
                commands.entity(attacker_entity).despawn();
            }
        }
    }
}

/// The melee hitbox is armed for exactly the owner's attack window.
pub(crate) fn arm_melee_hitboxes(
    mut hitboxes: Query<&mut MeleeHitbox>,
    owners: Query<(&MovementState, &Health)>,
) {
    for mut hitbox in &mut hitboxes {
        let Ok((movement, health)) = owners.get(hitbox.owner) else {
            hitbox.armed = false;
            continue;
        };
        hitbox.armed = movement.attack_timer > 0.0 && health.is_alive();
    }
}

/// Keep the melee hitbox in front of its owner, flipping with facing.
/// The offset is local space; the owner's rotation supplies the gravity
/// mirroring.
pub(crate) fn position_melee_hitboxes(
    mut hitboxes: Query<(&MeleeHitbox, &mut Transform)>,
    owners: Query<&MovementState>,
) {
    for (hitbox, mut transform) in &mut hitboxes {
        let Ok(movement) = owners.get(hitbox.owner) else {
            continue;
        };
        transform.translation.x = hitbox.local_offset(movement.facing);
    }
}

/// Active-window delivery: while armed, every legal target overlapping the
/// hitbox takes one damage application per tick. No per-target memo and no
/// ordering between simultaneous targets.
pub(crate) fn apply_melee_damage(
    spatial_query: SpatialQuery,
    mut damage_events: MessageWriter<DamageEvent>,
    hitboxes: Query<(&MeleeHitbox, &GlobalTransform)>,
    owner_teams: Query<&Team>,
    target_query: Query<&Team, With<Health>>,
) {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

    for (hitbox, global_transform) in &hitboxes {
        if !hitbox.armed {
            continue;
        }
        let Ok(attacker_team) = owner_teams.get(hitbox.owner) else {
            continue;
        };

        let shape = Collider::rectangle(hitbox.half_extents.x * 2.0, hitbox.half_extents.y * 2.0);
        let position = global_transform.translation().truncate();
        let overlapping = spatial_query.shape_intersections(&shape, position, 0.0, &filter);

        let overlaps: Vec<(Entity, Team)> = overlapping
            .into_iter()
            .filter_map(|entity| target_query.get(entity).ok().map(|team| (entity, *team)))
            .collect();

        for event in armed_hitbox_damage(hitbox.owner, *attacker_team, hitbox.amount, &overlaps) {
            damage_events.write(event);
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<&mut Health>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = query.get_mut(event.target) else {
            continue;
        };
        let died = health.take_damage(event.amount);
        debug!(
            "Damage: {:?} -> {:?} amount={} remaining={}",
            event.attacker, event.target, event.amount, health.current
        );
        if died {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Dead enemies leave the simulation; the player stays and reports Dead
/// through the state machine.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    enemy_query: Query<&Team, Without<Player>>,
) {
    for event in death_events.read() {
        if let Ok(team) = enemy_query.get(event.entity) {
            info!("Entity {:?} ({:?}) defeated", event.entity, team);
            commands.entity(event.entity).despawn();
        }
    }
}
