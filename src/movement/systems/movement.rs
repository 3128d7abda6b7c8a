//! Movement domain: locomotion systems for timers, impulses, and facing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::Health;
use crate::gravity::GravityField;
use crate::movement::events::BounceEvent;
use crate::movement::{
    MovementInput, MovementState, MovementTuning, Player, facing_for_axis, player_collision_layers,
};

/// Extra jump power applied when a bounce pad launch happens with the jump
/// button held down.
const HELD_BOUNCE_MULTIPLIER: f32 = 1.5;

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();
    for mut state in &mut query {
        state.tick(dt);
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &Health, &mut LinearVelocity), With<Player>>,
) {
    for (state, health, mut velocity) in &mut query {
        // Dash velocity is a direct override, not an additive force
        if state.is_dashing {
            continue;
        }

        velocity.x = if health.is_alive() {
            input.axis.x * tuning.movement_speed
        } else {
            0.0
        };

        // Standing on the ground outside a jump window pins vertical velocity
        if state.on_ground && !state.is_jumping {
            velocity.y = 0.0;
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    gravity: Res<GravityField>,
    mut query: Query<(&mut MovementState, &Health, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (mut state, health, mut velocity) in &mut query {
        if !health.is_alive() {
            continue;
        }
        // Out of charges: attempt is dropped with no state change
        if !state.try_start_jump(tuning.allowed_jumps, tuning.jump_duration) {
            continue;
        }

        velocity.y = tuning.jump_power * gravity.sign();
        debug!(
            "Jump: jumps_used={}, allowed={}",
            state.jumps_used, tuning.allowed_jumps
        );
    }
}

pub(crate) fn apply_bounce(
    mut bounces: MessageReader<BounceEvent>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    gravity: Res<GravityField>,
    mut query: Query<(&mut MovementState, &Health, &mut LinearVelocity), With<Player>>,
) {
    for bounce in bounces.read() {
        let Ok((mut state, health, mut velocity)) = query.get_mut(bounce.entity) else {
            continue;
        };
        if !health.is_alive() {
            continue;
        }

        // Bounce refunds all charges before re-triggering the jump
        state.jumps_used = 0;
        let multiplier = if input.jump_held {
            HELD_BOUNCE_MULTIPLIER
        } else {
            1.0
        };
        if state.try_start_jump(tuning.allowed_jumps, tuning.jump_duration) {
            velocity.y = tuning.jump_power * multiplier * gravity.sign();
            debug!("Bounce launch with multiplier {}", multiplier);
        }
    }
}

pub(crate) fn apply_dash(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    gravity: Res<GravityField>,
    mut query: Query<(&mut MovementState, &Health, &mut LinearVelocity), With<Player>>,
) {
    if !input.dash_just_pressed {
        return;
    }

    for (mut state, health, mut velocity) in &mut query {
        if !health.is_alive() {
            continue;
        }
        if !state.try_start_dash(tuning.dash_duration) {
            continue;
        }

        let direction = state.facing.world_sign(gravity.sign());
        velocity.0 = Vec2::new(direction * tuning.dash_boost, 0.0);
        debug!("Dash: direction={}", direction);
    }
}

pub(crate) fn apply_action_windows(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &Health), With<Player>>,
) {
    for (mut state, health) in &mut query {
        if !health.is_alive() {
            continue;
        }
        if input.attack_just_pressed && state.attack_timer <= 0.0 {
            state.attack_timer = tuning.attack_duration;
        }
        if input.shot_just_pressed && state.shot_timer <= 0.0 {
            state.shot_timer = tuning.shot_duration;
        }
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    gravity: Res<GravityField>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        state.facing = facing_for_axis(input.axis.x, gravity.sign(), state.facing);
    }
}

/// Re-evaluated every tick: pass-through platforms stop colliding with the
/// player while ascending and are restored otherwise.
pub(crate) fn update_pass_through(
    mut query: Query<(&LinearVelocity, &mut CollisionLayers), With<Player>>,
) {
    for (velocity, mut layers) in &mut query {
        *layers = player_collision_layers(velocity.y > 0.0);
    }
}
