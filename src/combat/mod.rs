//! Combat domain: health, teams, and damage delivery.

mod ai;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    ContactDamage, Health, MeleeHitbox, Team, WalkDirection, WalkingEnemy, armed_hitbox_damage,
    damage_is_legal, resolve_contact,
};
pub use events::{DamageEvent, DeathEvent};
pub use resources::CombatTuning;
pub use spawn::{WalkerBundle, spawn_melee_hitbox};

use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    ai::update_walking_enemies,
                    systems::detect_contact_damage,
                    systems::arm_melee_hitboxes,
                    systems::position_melee_hitboxes,
                    systems::apply_melee_damage,
                    systems::apply_damage,
                    systems::process_deaths,
                )
                    .chain(),
            );
    }
}
