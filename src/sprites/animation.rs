//! Player sprite updates driven by the reported state.
//!
//! Reads the state machine output and nothing else; the state itself is
//! owned by the movement domain.

use bevy::prelude::*;

use crate::movement::{Facing, MovementState, Player, PlayerState};

fn state_color(state: PlayerState) -> Color {
    match state {
        PlayerState::Idle => Color::srgb(0.9, 0.9, 0.9),
        PlayerState::Walk => Color::srgb(0.85, 0.9, 1.0),
        PlayerState::Jump => Color::srgb(0.7, 0.9, 1.0),
        PlayerState::Fall => Color::srgb(0.6, 0.7, 0.9),
        PlayerState::Dash => Color::srgb(0.4, 0.9, 1.0),
        PlayerState::Shot => Color::srgb(1.0, 0.9, 0.4),
        PlayerState::Attack => Color::srgb(1.0, 0.6, 0.4),
        PlayerState::Dead => Color::srgb(0.4, 0.4, 0.4),
    }
}

pub(crate) fn animate_player(
    mut query: Query<(&PlayerState, &MovementState, &mut Sprite), With<Player>>,
) {
    for (state, movement, mut sprite) in &mut query {
        sprite.flip_x = movement.facing == Facing::Left;
        sprite.color = state_color(*state);
    }
}
