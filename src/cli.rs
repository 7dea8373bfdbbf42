//! Command line interface for the headless runner

use clap::Parser;
use std::fmt;
use std::path::PathBuf;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::physics::engine::SimulationCore;
use crate::physics::presets::Preset;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration values, after overrides, were rejected by the core
    InvalidSetting(SimulationError),
    /// Configuration could not be written
    ConfigSave(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidSetting(err) => write!(f, "Invalid setting: {err}"),
            CliError::ConfigSave(msg) => write!(f, "Failed to save configuration: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SimulationError> for CliError {
    fn from(err: SimulationError) -> Self {
        CliError::InvalidSetting(err)
    }
}

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Orrery - gravitational N-body simulation
#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Gravitational constant (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Time scale; each tick advances 1/60 s times this factor
    #[arg(short = 't', long, value_name = "FACTOR")]
    pub time_scale: Option<f64>,

    /// Maximum number of positions kept per trail
    #[arg(long, value_name = "POINTS")]
    pub trail_length: Option<usize>,

    /// Initial body configuration
    #[arg(long, value_enum, value_name = "PRESET")]
    pub preset: Option<Preset>,

    /// Random seed for the random preset and placed body colors
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of frames to run before printing the summary
    #[arg(
        short = 'f',
        long,
        value_name = "COUNT",
        default_value_t = 600,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub frames: u64,

    /// Load the preset but do not start the run
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Write the effective configuration to FILE (or the user config file
    /// when FILE is omitted) and continue
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub write_config: Option<Option<PathBuf>>,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {}", config_path.display());
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(gravity) = args.gravity {
        println!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = gravity;
    }

    if let Some(time_scale) = args.time_scale {
        println!("Overriding time scale to: {time_scale}");
        config.physics.time_scale = time_scale;
    }

    if let Some(trail_length) = args.trail_length {
        println!("Overriding trail length to: {trail_length}");
        config.physics.max_trail_length = trail_length;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    if let Some(preset) = args.preset {
        config.initial_preset = Some(preset);
    }

    // A headless run needs something to simulate
    let preset = *config.initial_preset.get_or_insert(Preset::Triangle);
    println!("Using preset: {preset}");

    config.autostart = !args.paused;

    // Reject values the core would refuse before anything runs
    SimulationCore::from_config(&config.physics)?;

    Ok(config)
}

/// Writes the configuration when `--write-config` was given
pub fn write_config_if_requested(args: &Args, config: &SimulationConfig) -> Result<(), CliError> {
    let path = match &args.write_config {
        None => return Ok(()),
        Some(Some(path)) => {
            config
                .save(path)
                .map_err(|err| CliError::ConfigSave(err.to_string()))?;
            path.clone()
        }
        Some(None) => config
            .save_to_user_config()
            .map_err(|err| CliError::ConfigSave(err.to_string()))?,
    };

    println!("Configuration written to: {}", path.display());
    Ok(())
}
