//! Movement domain: the player state machine and locomotion.

mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    AXIS_DEADZONE, BouncePad, Facing, GameLayer, Ground, MovementState, PassThroughPlatform,
    Player, PlayerState, WALK_SPEED_EPSILON, facing_for_axis, player_collision_layers,
};
pub use events::BounceEvent;
pub use resources::{MovementInput, MovementTuning};
pub use systems::state::{StateInputs, classify_state};

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<BounceEvent>()
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::update_timers,
                    systems::detect_ground,
                    systems::detect_bounce_pads,
                    systems::apply_horizontal_movement,
                    systems::apply_jump,
                    systems::apply_bounce,
                    systems::apply_dash,
                    systems::apply_action_windows,
                    systems::update_facing,
                    systems::update_pass_through,
                    systems::determine_state,
                )
                    .chain(),
            );
    }
}
