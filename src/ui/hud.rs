//! UI domain: player health bar and gravity label.

use bevy::prelude::*;

use crate::combat::Health;
use crate::gravity::GravityField;
use crate::movement::Player;

pub(crate) const HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

/// Marker for the gravity state label
#[derive(Component)]
pub struct GravityLabel;

pub(crate) fn spawn_hud(mut commands: Commands) {
    // Health bar at top-left
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });

    // Gravity label below the health bar
    commands.spawn((
        GravityLabel,
        Text::new("Normal"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING + HEALTHBAR_HEIGHT + 8.0),
            ..default()
        },
    ));
}

pub(crate) fn update_healthbar(
    player_query: Query<&Health, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = health.percent();
        node.width = Val::Percent(percent * 100.0);

        let color = if percent > 0.5 {
            Color::srgb(0.2, 0.8, 0.3)
        } else if percent > 0.25 {
            Color::srgb(0.9, 0.8, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        bg_color.0 = color;
    }
}

pub(crate) fn update_gravity_label(
    field: Res<GravityField>,
    mut query: Query<&mut Text, With<GravityLabel>>,
) {
    if !field.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = field.label().to_string();
    }
}
