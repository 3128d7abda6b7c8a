//! Schema for the tuning config file.

use serde::Deserialize;

use crate::combat::CombatTuning;
use crate::movement::MovementTuning;
use crate::shooting::ShooterTuning;
use crate::world::WorldTuning;

/// Root of `assets/config/tuning.ron`. Every section and field is optional;
/// omitted values take the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub movement: MovementTuning,
    pub combat: CombatTuning,
    pub shooter: ShooterTuning,
    pub world: WorldTuning,
}
