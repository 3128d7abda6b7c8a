//! UI domain: in-run HUD and the game-over screen.

mod hud;

use bevy::prelude::*;

use crate::core::GameState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, hud::spawn_hud)
            .add_systems(Update, (hud::update_healthbar, hud::update_gravity_label))
            .add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen);
    }
}

fn spawn_game_over_screen(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("You fell"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.3, 0.2)),
            ));
        });
}
