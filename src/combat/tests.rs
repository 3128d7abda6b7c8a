//! Combat domain: unit tests for the health ledger and contact legality.

use bevy::prelude::{Entity, Vec2, Vec3, World};

use super::{
    Health, MeleeHitbox, Team, WalkDirection, armed_hitbox_damage, damage_is_legal,
    resolve_contact,
};
use crate::gravity::rotation_for;
use crate::movement::{Facing, facing_for_axis};

// -----------------------------------------------------------------------------
// Health ledger
// -----------------------------------------------------------------------------

#[test]
fn test_damage_sequence_with_single_death() {
    let mut health = Health::new(3);
    assert_eq!(health.current, 3);

    assert!(!health.take_damage(1));
    assert_eq!(health.current, 2);

    assert!(!health.take_damage(1));
    assert_eq!(health.current, 1);

    // Third hit kills, and the death transition fires exactly once
    assert!(health.take_damage(1));
    assert_eq!(health.current, 0);
    assert!(!health.is_alive());

    // Fourth hit: no change, no duplicate death
    assert!(!health.take_damage(1));
    assert_eq!(health.current, 0);
}

#[test]
fn test_health_clamps_at_zero() {
    let mut health = Health::new(2);
    assert!(health.take_damage(100));
    assert_eq!(health.current, 0);
}

#[test]
fn test_health_never_increases_from_damage() {
    let mut health = Health::new(5);
    let mut previous = health.current;
    for amount in [0, 2, 1, 3, 1] {
        health.take_damage(amount);
        assert!(health.current <= previous);
        assert!(health.current >= 0);
        previous = health.current;
    }
}

#[test]
fn test_negative_damage_is_ignored() {
    let mut health = Health::new(3);
    assert!(!health.take_damage(-5));
    assert_eq!(health.current, 3);
}

#[test]
fn test_overkill_dies_once() {
    let mut health = Health::new(1);
    assert!(health.take_damage(3));
    assert!(!health.take_damage(3));
    assert!(!health.is_alive());
}

// -----------------------------------------------------------------------------
// Contact legality
// -----------------------------------------------------------------------------

#[test]
fn test_same_team_damage_is_illegal() {
    assert!(!damage_is_legal(Team::Player, Team::Player));
    assert!(!damage_is_legal(Team::Enemy, Team::Enemy));
}

#[test]
fn test_cross_team_damage_is_legal() {
    assert!(damage_is_legal(Team::Player, Team::Enemy));
    assert!(damage_is_legal(Team::Enemy, Team::Player));
}

#[test]
fn test_resolve_contact_rejects_same_team() {
    let a = Entity::PLACEHOLDER;
    let b = Entity::PLACEHOLDER;

    assert!(resolve_contact(a, Team::Enemy, b, Team::Enemy, 1).is_none());

    let event = resolve_contact(a, Team::Enemy, b, Team::Player, 2).unwrap();
    assert_eq!(event.amount, 2);
    assert_eq!(event.attacker_team, Team::Enemy);
}

// -----------------------------------------------------------------------------
// Melee hitbox
// -----------------------------------------------------------------------------

fn test_hitbox(owner: Entity) -> MeleeHitbox {
    MeleeHitbox {
        owner,
        amount: 1,
        armed: true,
        half_extents: Vec2::new(18.0, 14.0),
        offset: 26.0,
    }
}

#[test]
fn test_hitbox_leads_the_player_under_both_gravities() {
    let hitbox = test_hitbox(Entity::PLACEHOLDER);

    for gravity_sign in [1.0_f32, -1.0] {
        // Pressing right: facing mirrors under inverted gravity but world
        // travel stays +x
        let facing = facing_for_axis(1.0, gravity_sign, Facing::Right);
        let travel = facing.world_sign(gravity_sign);
        assert_eq!(travel, 1.0);

        // The hitbox offset is local to the owner, whose rotation flips
        // with gravity; in world space it must lead the travel direction
        let local = Vec3::new(hitbox.local_offset(facing), 0.0, 0.0);
        let world = rotation_for(gravity_sign < 0.0) * local;
        assert!((world.x.signum() - travel.signum()).abs() < 1e-5);
    }
}

#[test]
fn test_armed_hitbox_hits_every_legal_target_every_tick() {
    let mut world = World::new();
    let owner = world.spawn_empty().id();
    let first = world.spawn_empty().id();
    let second = world.spawn_empty().id();

    let overlaps = [
        (first, Team::Enemy),
        (second, Team::Enemy),
        (owner, Team::Enemy),
    ];

    // Both targets take exactly one application; the owner is skipped
    let events = armed_hitbox_damage(owner, Team::Player, 1, &overlaps);
    assert_eq!(events.len(), 2);
    assert!(events.iter().any(|e| e.target == first));
    assert!(events.iter().any(|e| e.target == second));

    // No per-target memo: the same overlap set re-applies next tick
    let next_tick = armed_hitbox_damage(owner, Team::Player, 1, &overlaps);
    assert_eq!(next_tick.len(), 2);
}

#[test]
fn test_armed_hitbox_skips_same_team_overlaps() {
    let mut world = World::new();
    let owner = world.spawn_empty().id();
    let ally = world.spawn_empty().id();
    let enemy = world.spawn_empty().id();

    let overlaps = [(ally, Team::Player), (enemy, Team::Enemy)];
    let events = armed_hitbox_damage(owner, Team::Player, 2, &overlaps);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target, enemy);
    assert_eq!(events[0].amount, 2);
}

// -----------------------------------------------------------------------------
// Walk direction
// -----------------------------------------------------------------------------

#[test]
fn test_walk_direction_flip_is_involutive() {
    assert_eq!(WalkDirection::Left.flipped(), WalkDirection::Right);
    assert_eq!(WalkDirection::Right.flipped().flipped(), WalkDirection::Right);
    assert_eq!(WalkDirection::Left.sign(), -1.0);
    assert_eq!(WalkDirection::Right.sign(), 1.0);
}
