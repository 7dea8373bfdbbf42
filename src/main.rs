use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use orrery::cli::{Args, load_and_apply_config, write_config_if_requested};
use orrery::physics::diagnostics::{ConservationBaseline, barycenter};
use orrery::physics::engine::SimulationCore;
use orrery::physics::integrators::Integrator;
use orrery::plugins::simulation::{SimulationPlugin, load_initial_preset};
use std::process::ExitCode;

/// Energy and momentum right after the initial preset loads
#[derive(Resource)]
struct Baseline(ConservationBaseline);

fn capture_baseline(mut commands: Commands, simulation: Res<SimulationCore>) {
    commands.insert_resource(Baseline(ConservationBaseline::capture(
        simulation.bodies(),
        simulation.gravity(),
    )));
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_config_if_requested(&args, &config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        LogPlugin {
            level: if args.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            },
            ..default()
        },
    ));
    app.insert_resource(config);
    app.add_plugins(SimulationPlugin);
    app.add_systems(Startup, capture_baseline.after(load_initial_preset));
    app.finish();
    app.cleanup();

    // The first update also runs Startup, before any step
    for _ in 0..args.frames {
        app.update();
    }

    let Some(Baseline(baseline)) = app.world().get_resource::<Baseline>() else {
        eprintln!("Error: simulation never started up");
        return ExitCode::FAILURE;
    };
    log_summary(app.world().resource::<SimulationCore>(), baseline, args.frames);
    ExitCode::SUCCESS
}

fn log_summary(simulation: &SimulationCore, baseline: &ConservationBaseline, frames: u64) {
    info!(
        "After {} frames ({} running, {} order {}, dt = {:.5}, G = {}):",
        frames,
        if simulation.is_running() { "still" } else { "not" },
        simulation.integrator().name(),
        simulation.integrator().order(),
        simulation.time_step(),
        simulation.gravitational_constant(),
    );

    for body in simulation.bodies() {
        info!(
            "  body {}: mass {:.3}, position {:.4}, velocity {:.4}, trail {} points",
            body.id(),
            body.mass(),
            body.position(),
            body.velocity(),
            body.trail().len(),
        );
    }

    if let Some(center) = barycenter(simulation.bodies()) {
        info!("  barycenter {:.4}", center);
    }

    let report = baseline.compare(simulation.bodies(), simulation.gravity());
    info!(
        "  relative energy drift {:.3e}, momentum drift {:.3e}",
        report.energy_error, report.momentum_error
    );
}
