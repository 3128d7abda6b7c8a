//! Combat domain: damage and death events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::components::Team;

/// A resolved, legal damage application against a target that has health.
#[derive(Debug)]
pub struct DamageEvent {
    pub attacker: Entity,
    pub attacker_team: Team,
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}

/// Emitted exactly once per entity, on the tick its health reaches zero.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
