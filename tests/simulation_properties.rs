//! Behavioural properties of the simulation core
//!
//! These exercise the core only through its public API, the same way a host
//! would.

use bevy::color::Color;
use orrery::physics::body::Body;
use orrery::physics::diagnostics::total_momentum;
use orrery::physics::engine::{BASE_TIME_STEP, SimulationCore};
use orrery::physics::math::{Scalar, Vector};
use orrery::physics::presets::{Preset, figure8};
use orrery::resources::SharedRng;

fn body(position: Vector, velocity: Vector, mass: Scalar) -> Body {
    Body::new(position, velocity, mass, Color::WHITE).unwrap()
}

fn core_with(bodies: Vec<Body>) -> SimulationCore {
    let mut core = SimulationCore::new();
    core.set_bodies(bodies).unwrap();
    core
}

#[test]
fn test_momentum_conserved_over_single_step() {
    for seed in 0..20 {
        let mut rng = SharedRng::from_seed(seed);
        let mut core = SimulationCore::new();
        core.load_preset(Preset::Random, &mut rng);

        let before = total_momentum(core.bodies());
        core.step();
        let after = total_momentum(core.bodies());

        assert!(
            (after - before).length() < 1e-9,
            "seed {seed}: momentum changed by {:e}",
            (after - before).length()
        );
    }
}

#[test]
fn test_momentum_conserved_for_many_bodies() {
    let bodies = (0..8)
        .map(|i| {
            let angle = i as Scalar * 0.785;
            body(
                Vector::new(angle.cos() * 3.0, angle.sin() * 3.0, 0.1 * i as Scalar),
                Vector::new(-angle.sin(), angle.cos(), 0.0) * 0.4,
                0.5 + 0.25 * i as Scalar,
            )
        })
        .collect();
    let mut core = core_with(bodies);
    let before = total_momentum(core.bodies());

    for _ in 0..100 {
        core.step();
    }

    assert!((total_momentum(core.bodies()) - before).length() < 1e-9);
}

#[test]
fn test_step_is_noop_below_two_bodies() {
    let mut empty = SimulationCore::new();
    empty.step();
    assert!(empty.is_empty());

    let mut single = core_with(vec![body(Vector::ONE, Vector::X, 3.0)]);
    single.step();
    let only = &single.bodies()[0];
    assert_eq!(only.position(), Vector::ONE);
    assert_eq!(only.velocity(), Vector::X);
}

#[test]
fn test_trail_length_is_min_of_steps_and_bound() {
    let mut core = SimulationCore::new();
    core.load_preset(Preset::Figure8, &mut SharedRng::from_seed(0));
    core.set_max_trail_length(5);

    for k in 1..=12 {
        core.step();
        for body in core.bodies() {
            assert_eq!(body.trail().len(), k.min(5));
        }
    }
}

#[test]
fn test_default_trail_bound_is_500() {
    let mut core = SimulationCore::new();
    core.load_preset(Preset::Triangle, &mut SharedRng::from_seed(0));

    for _ in 0..520 {
        core.step();
    }

    for body in core.bodies() {
        assert_eq!(body.trail().len(), 500);
        assert_eq!(body.trail().newest(), Some(body.position()));
    }
}

#[test]
fn test_close_pair_exerts_no_force() {
    let mut core = core_with(vec![
        body(Vector::ZERO, Vector::new(0.0, 1.0, 0.0), 1.0),
        body(Vector::new(0.05, 0.0, 0.0), Vector::new(0.0, -1.0, 0.0), 5.0),
    ]);

    core.step();

    let dt = core.time_step();
    let bodies = core.bodies();
    assert_eq!(bodies[0].velocity(), Vector::new(0.0, 1.0, 0.0));
    assert_eq!(bodies[1].velocity(), Vector::new(0.0, -1.0, 0.0));
    assert!((bodies[0].position() - Vector::new(0.0, dt, 0.0)).length() < 1e-15);
}

#[test]
fn test_zero_gravity_gives_linear_motion() {
    let mut core = SimulationCore::new();
    core.load_preset(Preset::Triangle, &mut SharedRng::from_seed(0));
    core.set_gravitational_constant(0.0).unwrap();
    let initial = core.snapshot();
    let dt = core.time_step();

    let steps = 30;
    for _ in 0..steps {
        core.step();
    }

    for (body, start) in core.bodies().iter().zip(&initial) {
        assert_eq!(body.velocity(), start.velocity());
        let expected = start.position() + start.velocity() * dt * steps as Scalar;
        assert!((body.position() - expected).length() < 1e-12);
    }
}

#[test]
fn test_triangle_preset_positions() {
    let mut core = SimulationCore::new();
    for seed in 0..3 {
        core.load_preset(Preset::Triangle, &mut SharedRng::from_seed(seed));

        let positions: Vec<Vector> = core.bodies().iter().map(Body::position).collect();
        assert_eq!(
            positions,
            vec![
                Vector::new(2.0, 0.0, 0.0),
                Vector::new(-1.0, 1.732, 0.0),
                Vector::new(-1.0, -1.732, 0.0),
            ]
        );
    }
}

#[test]
fn test_reset_clears_trails_only() {
    let mut core = SimulationCore::new();
    core.load_preset(Preset::Figure8, &mut SharedRng::from_seed(0));
    for _ in 0..25 {
        core.step();
    }
    let before = core.snapshot();

    core.reset();

    for (body, old) in core.bodies().iter().zip(&before) {
        assert!(body.trail().is_empty());
        assert_eq!(body.id(), old.id());
        assert_eq!(body.position(), old.position());
        assert_eq!(body.velocity(), old.velocity());
        assert_eq!(body.mass(), old.mass());
    }
}

#[test]
fn test_figure8_returns_after_one_period() {
    // Period of the figure-eight orbit with unit masses and G = 1
    const PERIOD: Scalar = 6.3245;

    let mut core = core_with(figure8());
    core.set_time_scale(0.1).unwrap();
    let start: Vec<Vector> = core.bodies().iter().map(Body::position).collect();
    let dt = core.time_step();

    let window_start = (0.9 * PERIOD / dt) as usize;
    let window_end = (1.1 * PERIOD / dt) as usize;
    let mut closest = Scalar::INFINITY;
    let mut halfway_distance = 0.0;

    for step in 1..=window_end {
        core.step();

        let deviation = core
            .bodies()
            .iter()
            .zip(&start)
            .map(|(body, p0)| body.position().distance(*p0))
            .fold(0.0, Scalar::max);

        if step == (0.5 * PERIOD / dt) as usize {
            halfway_distance = deviation;
        }
        if step >= window_start {
            closest = closest.min(deviation);
        }
    }

    assert!(halfway_distance > 0.5, "bodies never left their start");
    assert!(closest < 0.15, "closest return was {closest}");
}

#[test]
fn test_seeded_random_presets_evolve_identically() {
    let mut a = SimulationCore::new();
    let mut b = SimulationCore::new();
    a.load_preset(Preset::Random, &mut SharedRng::from_seed(2024));
    b.load_preset(Preset::Random, &mut SharedRng::from_seed(2024));

    for _ in 0..200 {
        a.step();
        b.step();
    }

    for (x, y) in a.bodies().iter().zip(b.bodies()) {
        assert_eq!(x.position(), y.position());
        assert_eq!(x.velocity(), y.velocity());
    }
}

#[test]
fn test_time_scale_maps_to_time_step() {
    let mut core = SimulationCore::new();
    core.set_time_scale(4.0).unwrap();
    assert!((core.time_step() - 4.0 * BASE_TIME_STEP).abs() < 1e-15);

    assert!(core.set_time_scale(0.0).is_err());
    assert!((core.time_scale() - 4.0).abs() < 1e-15);
}
