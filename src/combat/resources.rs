//! Combat domain: combat tuning.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub player_health: i32,
    pub enemy_health: i32,
    /// Damage from walking into an enemy body
    pub touch_damage: i32,
    pub melee_damage: i32,
    pub melee_hitbox_width: f32,
    pub melee_hitbox_height: f32,
    pub melee_hitbox_offset: f32,
    pub lava_damage: i32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            player_health: 5,
            enemy_health: 3,
            touch_damage: 1,
            melee_damage: 1,
            melee_hitbox_width: 36.0,
            melee_hitbox_height: 28.0,
            melee_hitbox_offset: 26.0,
            lava_damage: 1,
        }
    }
}
