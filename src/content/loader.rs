//! Loader for the RON tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::content::data::TuningFile;

pub(crate) const TUNING_PATH: &str = "assets/config/tuning.ron";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_tuning_file(path: &Path) -> Result<TuningFile, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Replace the default tuning resources with the loaded values. A missing
/// or broken file keeps the defaults.
pub(crate) fn apply_tuning(mut commands: Commands) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning.movement);
            commands.insert_resource(tuning.combat);
            commands.insert_resource(tuning.shooter);
            commands.insert_resource(tuning.world);
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
        }
    }
}
