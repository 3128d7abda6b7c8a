//! World domain: lava flood spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{ContactDamage, CombatTuning, Team};
use crate::movement::GameLayer;
use crate::world::{LavaFlood, LavaTile, WorldTuning};

pub(crate) fn advance_lava_flood(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<WorldTuning>,
    combat_tuning: Res<CombatTuning>,
    mut flood: ResMut<LavaFlood>,
) {
    let Some(column) = flood.tick(time.delta_secs(), tuning.lava_columns, tuning.lava_fill_delay)
    else {
        return;
    };

    let tile = tuning.lava_tile_size;
    let x = tuning.lava_origin_x + column as f32 * tile + tile / 2.0;

    for row in 0..tuning.lava_rows {
        let y = tuning.lava_origin_y + row as f32 * tile + tile / 2.0;
        commands.spawn((
            LavaTile,
            Team::Enemy,
            ContactDamage {
                amount: combat_tuning.lava_damage,
                despawn_after_hit: false,
            },
            Sprite {
                color: Color::srgb(0.95, 0.4, 0.1),
                custom_size: Some(Vec2::splat(tile)),
                ..default()
            },
            Transform::from_xyz(x, y, -0.5),
            Collider::rectangle(tile, tile),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player, GameLayer::Enemy]),
        ));
    }

    if column + 1 == tuning.lava_columns {
        info!("Lava flood complete: {} columns", tuning.lava_columns);
    }
}
