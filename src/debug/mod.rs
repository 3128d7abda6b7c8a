//! Debug tools for fast iteration, behind the `dev-tools` feature.
//!
//! Hotkeys:
//! - F1: toggle invincibility (refills the player's health)
//! - G: force a gravity flip without entering a zone
//! - F2: dump player state to the log

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::Health;
use crate::gravity::{GravityField, GravityToggledEvent};
use crate::movement::{MovementState, Player, PlayerState};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub invincible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                apply_invincibility,
                log_state_changes,
            )
                .chain(),
        );
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut field: ResMut<GravityField>,
    mut toggles: MessageWriter<GravityToggledEvent>,
    player_query: Query<(&Transform, &Health, &MovementState, &PlayerState), With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.invincible = !debug_state.invincible;
        info!(
            "[DEBUG] Invincibility {}",
            if debug_state.invincible { "ON" } else { "OFF" }
        );
    }

    // Manual gravity flip goes through the same event as zone triggers so
    // every affected entity updates
    if keyboard.just_pressed(KeyCode::KeyG) {
        field.toggle();
        toggles.write(GravityToggledEvent {
            inverted: field.is_inverted(),
        });
        info!("[DEBUG] Gravity forced to {}", field.label());
    }

    if keyboard.just_pressed(KeyCode::F2) {
        if let Ok((transform, health, movement, state)) = player_query.single() {
            info!(
                "[DEBUG] Pos: ({:.0}, {:.0}) HP: {}/{} State: {:?} Grounded: {} Jumps: {}",
                transform.translation.x,
                transform.translation.y,
                health.current,
                health.max,
                state,
                movement.on_ground,
                movement.jumps_used
            );
        }
    }
}

fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<&mut Health, With<Player>>,
) {
    if !debug_state.invincible {
        return;
    }

    for mut health in &mut player_query {
        if health.current < health.max {
            health.restore();
        }
    }
}

fn log_state_changes(player_query: Query<&PlayerState, (With<Player>, Changed<PlayerState>)>) {
    for state in &player_query {
        debug!("Player state: {:?}", state);
    }
}
