//! Sprites domain: state-driven player presentation.

mod animation;

use bevy::prelude::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, animation::animate_player);
    }
}
