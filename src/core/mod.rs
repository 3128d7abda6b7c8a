//! Core domain: game states, camera, and level setup.

mod spawn;
mod state;
mod systems;

pub use state::GameState;

use avian2d::prelude::*;
use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(Gravity(Vec2::NEG_Y * 900.0))
            .add_systems(Startup, systems::setup_camera)
            .add_systems(
                Update,
                systems::begin_playing.run_if(in_state(GameState::Boot)),
            )
            .add_systems(OnEnter(GameState::Playing), spawn::spawn_level)
            .add_systems(Update, systems::detect_player_death);
    }
}
