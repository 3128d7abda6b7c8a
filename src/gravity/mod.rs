//! Gravity domain: the world-wide gravity sign and its inversion zones.

mod systems;
#[cfg(test)]
mod tests;

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Simulation-scoped gravity state. Exactly one sign exists at a time;
/// toggling it and propagating the dependent actor changes happen in the
/// same system pass, so no tick observes a partially inverted world.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GravityField {
    inverted: bool,
}

impl GravityField {
    pub fn toggle(&mut self) {
        self.inverted = !self.inverted;
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn sign(&self) -> f32 {
        if self.inverted { -1.0 } else { 1.0 }
    }

    pub fn label(&self) -> &'static str {
        if self.inverted { "Inverse" } else { "Normal" }
    }
}

/// Rotation applied to gravity-affected actors: upside down while inverted.
pub fn rotation_for(inverted: bool) -> Quat {
    if inverted {
        Quat::from_rotation_z(std::f32::consts::PI)
    } else {
        Quat::IDENTITY
    }
}

/// Marker for actors the gravity toggle touches. Everything else is left
/// alone.
#[derive(Component, Debug)]
pub struct GravityAffected;

/// Sensor region that flips the gravity field when the player enters it.
#[derive(Component, Debug)]
pub struct GravityZone;

/// Emitted after the field flips, in the same pass that propagates the
/// inversion to all affected actors.
#[derive(Debug)]
pub struct GravityToggledEvent {
    pub inverted: bool,
}

impl Message for GravityToggledEvent {}

pub struct GravityPlugin;

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GravityField>()
            .add_message::<GravityToggledEvent>()
            .add_systems(
                Update,
                (systems::trigger_gravity_zones, systems::propagate_inversion).chain(),
            );
    }
}
