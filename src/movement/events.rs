//! Movement domain: locomotion events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when the player lands on a bounce pad. Refunds jump charges and
/// re-launches with extra power when the jump button is held.
#[derive(Debug)]
pub struct BounceEvent {
    pub entity: Entity,
}

impl Message for BounceEvent {}
