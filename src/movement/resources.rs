//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub movement_speed: f32,
    pub jump_power: f32,
    /// Jump charges available between groundings (1 = single jump)
    pub allowed_jumps: u8,
    /// Duration of the reported Jump state after takeoff
    pub jump_duration: f32,
    pub dash_boost: f32,
    pub dash_duration: f32,
    pub attack_duration: f32,
    pub shot_duration: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            movement_speed: 240.0,
            jump_power: 620.0,
            allowed_jumps: 2,
            jump_duration: 0.1,
            dash_boost: 700.0,
            dash_duration: 0.25,
            attack_duration: 0.25,
            shot_duration: 0.25,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
    pub attack_just_pressed: bool,
    pub shot_just_pressed: bool,
    pub shot_held: bool,
}
