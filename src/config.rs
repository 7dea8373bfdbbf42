use crate::physics::gravity::DEFAULT_MIN_INTERACTION_DISTANCE;
use crate::physics::math::Scalar;
use crate::physics::presets::Preset;
use crate::physics::trail::DEFAULT_MAX_TRAIL_LENGTH;
use bevy::log::{info, warn};
use bevy::prelude::Resource;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override file settings,
/// e.g. `ORRERY__PHYSICS__GRAVITATIONAL_CONSTANT=2.5`
pub const ENV_PREFIX: &str = "ORRERY";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    /// Preset loaded when the plugin starts; `None` starts empty
    pub initial_preset: Option<Preset>,
    /// Start the run immediately after loading the initial preset
    pub autostart: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            initial_preset: None,
            autostart: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: Scalar,
    pub time_scale: Scalar,
    pub max_trail_length: usize,
    pub min_interaction_distance: Scalar,
    pub initial_seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1.0,
            time_scale: 1.0,
            max_trail_length: DEFAULT_MAX_TRAIL_LENGTH,
            min_interaction_distance: DEFAULT_MIN_INTERACTION_DISTANCE,
            initial_seed: None,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file layered under `ORRERY__*`
    /// environment variables, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found. Using defaults.", path.display());
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load configuration, reporting parse and type errors
    ///
    /// A missing file is not an error; absent keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orrery").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the per-user configuration file, or defaults when there is none
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(path),
            None => {
                warn!("No configuration directory available. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn save_to_user_config(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Self::user_config_path().ok_or("No configuration directory available")?;
        self.save(&path)?;
        Ok(path)
    }
}
