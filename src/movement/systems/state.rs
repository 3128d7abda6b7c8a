//! Movement domain: discrete state classification.
//!
//! The state machine is a pure function of health, grounded-ness, velocity,
//! and the active action windows. `determine_state` is the only writer of
//! `PlayerState`, so the reported state can never be set from two places in
//! the same tick.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::Health;
use crate::movement::{MovementState, Player, PlayerState, WALK_SPEED_EPSILON};

/// Inputs to the state classification for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateInputs {
    pub dead: bool,
    pub dashing: bool,
    pub shooting: bool,
    pub attacking: bool,
    pub grounded: bool,
    pub jumping: bool,
    pub horizontal_speed: f32,
}

/// Priority order when several conditions hold at once:
/// Dead > Dash > Shot > Attack > grounded (Walk/Idle) > airborne (Jump/Fall).
pub fn classify_state(inputs: &StateInputs) -> PlayerState {
    if inputs.dead {
        PlayerState::Dead
    } else if inputs.dashing {
        PlayerState::Dash
    } else if inputs.shooting {
        PlayerState::Shot
    } else if inputs.attacking {
        PlayerState::Attack
    } else if inputs.grounded {
        if inputs.horizontal_speed.abs() > WALK_SPEED_EPSILON {
            PlayerState::Walk
        } else {
            PlayerState::Idle
        }
    } else if inputs.jumping {
        PlayerState::Jump
    } else {
        PlayerState::Fall
    }
}

pub(crate) fn determine_state(
    mut query: Query<
        (&MovementState, &Health, &LinearVelocity, &mut PlayerState),
        With<Player>,
    >,
) {
    for (movement, health, velocity, mut state) in &mut query {
        let next = classify_state(&StateInputs {
            dead: !health.is_alive(),
            dashing: movement.is_dashing,
            shooting: movement.shot_timer > 0.0,
            attacking: movement.attack_timer > 0.0,
            grounded: movement.on_ground,
            jumping: movement.is_jumping,
            horizontal_speed: velocity.x,
        });

        if *state != next {
            debug!("Player state: {:?} -> {:?}", *state, next);
            *state = next;
        }
    }
}
