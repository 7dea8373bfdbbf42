//! Headless driver for the simulation core
//!
//! Owns a [`SimulationCore`] as a resource, applies [`SimulationCommand`]s,
//! and steps the core once per frame while its run flag is set. Rendering
//! and input live elsewhere and talk to this plugin only through commands
//! and read access to the core.

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::events::SimulationCommand;
use crate::physics::engine::SimulationCore;
use crate::resources::{SelectedBody, SharedRng};
use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Commands,
    Step,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = match app.world().get_resource::<SimulationConfig>() {
            Some(config) => config.clone(),
            None => SimulationConfig::load_from_user_config(),
        };

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                info!("=== Current Configuration (TOML) ===\n{}", toml_string);
                info!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let core = SimulationCore::from_config(&config.physics).unwrap_or_else(|e| {
            warn!("Invalid physics configuration: {}. Using defaults.", e);
            SimulationCore::default()
        });

        app.insert_resource(config.clone());
        app.insert_resource(SharedRng::from_optional_seed(config.physics.initial_seed));
        app.insert_resource(core);
        app.init_resource::<SelectedBody>();

        app.add_event::<SimulationCommand>();

        app.configure_sets(Update, (SimulationSet::Commands, SimulationSet::Step).chain());

        app.add_systems(Startup, load_initial_preset);
        app.add_systems(
            Update,
            (
                handle_simulation_commands.in_set(SimulationSet::Commands),
                step_simulation
                    .in_set(SimulationSet::Step)
                    .run_if(simulation_running),
            ),
        );
    }
}

/// Run condition: the core's run flag is set
pub fn simulation_running(simulation: Res<SimulationCore>) -> bool {
    simulation.is_running()
}

pub fn load_initial_preset(
    config: Res<SimulationConfig>,
    mut simulation: ResMut<SimulationCore>,
    mut rng: ResMut<SharedRng>,
) {
    let Some(preset) = config.initial_preset else {
        return;
    };

    simulation.load_preset(preset, &mut rng);
    info!("Loaded initial preset {}", preset);

    if config.autostart {
        if let Err(e) = simulation.start() {
            warn!("Could not start simulation: {}", e);
        }
    }
}

pub fn step_simulation(mut simulation: ResMut<SimulationCore>) {
    simulation.step();
}

pub fn handle_simulation_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut simulation: ResMut<SimulationCore>,
    mut selected: ResMut<SelectedBody>,
    mut rng: ResMut<SharedRng>,
) {
    for command in commands_reader.read() {
        if let Err(e) = apply_command(*command, &mut simulation, &mut selected, &mut rng) {
            warn!("Ignoring {:?}: {}", command, e);
        }
    }
}

fn apply_command(
    command: SimulationCommand,
    simulation: &mut SimulationCore,
    selected: &mut SelectedBody,
    rng: &mut SharedRng,
) -> Result<(), SimulationError> {
    match command {
        SimulationCommand::Start => simulation.start()?,
        SimulationCommand::Pause => simulation.pause(),
        SimulationCommand::TogglePause => {
            if simulation.is_running() {
                simulation.pause();
            } else {
                simulation.start()?;
            }
        }
        SimulationCommand::Reset => simulation.reset(),
        // The scheduled step already advances a running core this frame
        SimulationCommand::Step => {
            if !simulation.is_running() {
                simulation.step();
            }
        }
        SimulationCommand::LoadPreset(preset) => {
            simulation.load_preset(preset, rng);
            **selected = None;
        }
        SimulationCommand::SetGravitationalConstant(g) => simulation.set_gravitational_constant(g)?,
        SimulationCommand::SetTimeScale(scale) => simulation.set_time_scale(scale)?,
        SimulationCommand::SetMaxTrailLength(max_points) => {
            simulation.set_max_trail_length(max_points)
        }
        SimulationCommand::PlaceBody(position) => {
            let id = simulation.spawn_body_at(position, rng)?;
            **selected = Some(id);
        }
        SimulationCommand::EditBody(id, edit) => simulation.update_body(id, edit)?,
        SimulationCommand::RemoveBody(id) => {
            simulation.remove_body(id)?;
            if **selected == Some(id) {
                **selected = None;
            }
        }
        SimulationCommand::Select(None) => **selected = None,
        SimulationCommand::Select(Some(id)) => {
            if simulation.body(id).is_none() {
                return Err(SimulationError::NotFound(id));
            }
            **selected = Some(id);
        }
    }
    Ok(())
}
