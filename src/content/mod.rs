//! Content domain: tuning data loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::TuningFile;
pub use loader::{ConfigLoadError, load_tuning_file};

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, loader::apply_tuning);
    }
}
