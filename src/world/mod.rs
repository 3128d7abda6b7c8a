//! World domain: the rising lava flood.

mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Bottom-left corner of the lava region
    pub lava_origin_x: f32,
    pub lava_origin_y: f32,
    /// Region size in tiles
    pub lava_columns: u32,
    pub lava_rows: u32,
    pub lava_tile_size: f32,
    /// Seconds between column fills
    pub lava_fill_delay: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            lava_origin_x: -640.0,
            lava_origin_y: -360.0,
            lava_columns: 100,
            lava_rows: 4,
            lava_tile_size: 16.0,
            lava_fill_delay: 0.2,
        }
    }
}

/// Column-by-column fill progress. One column of tiles is released per
/// delay, driven by an explicit countdown.
#[derive(Resource, Debug, Default)]
pub struct LavaFlood {
    pub next_column: u32,
    pub timer: f32,
}

impl LavaFlood {
    /// Advance the fill clock by `dt`. Returns the index of the column to
    /// spawn this tick, if the delay has elapsed and columns remain.
    pub fn tick(&mut self, dt: f32, columns: u32, delay: f32) -> Option<u32> {
        if self.next_column >= columns {
            return None;
        }
        self.timer -= dt;
        if self.timer > 0.0 {
            return None;
        }
        self.timer += delay;
        let column = self.next_column;
        self.next_column += 1;
        Some(column)
    }
}

/// Marker for spawned lava tiles.
#[derive(Component, Debug)]
pub struct LavaTile;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldTuning>()
            .init_resource::<LavaFlood>()
            .add_systems(Update, systems::advance_lava_flood);
    }
}
