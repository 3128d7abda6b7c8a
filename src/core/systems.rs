//! Core domain: camera, state transitions, and the death flow.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::DeathEvent;
use crate::core::state::GameState;
use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Boot exists so config loading finishes before the level spawns.
pub(crate) fn begin_playing(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::Playing);
}

pub(crate) fn detect_player_death(
    mut deaths: MessageReader<DeathEvent>,
    player_query: Query<(), With<Player>>,
    mut next: ResMut<NextState<GameState>>,
) {
    for event in deaths.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player defeated");
            next.set(GameState::GameOver);
        }
    }
}
