//! The simulation core: body collection, physical constants, and the tick

use crate::config::PhysicsConfig;
use crate::error::{SimulationError, ensure_finite, ensure_non_negative, ensure_positive};
use crate::physics::body::{Body, BodyEdit, BodyId};
use crate::physics::gravity::{DEFAULT_MIN_INTERACTION_DISTANCE, NewtonianGravity};
use crate::physics::integrators::{Integrator, SymplecticEuler};
use crate::physics::math::{Scalar, Vector};
use crate::physics::presets::Preset;
use crate::physics::trail::DEFAULT_MAX_TRAIL_LENGTH;
use crate::resources::SharedRng;
use bevy::log::{debug, trace};
use bevy::prelude::Resource;
use std::collections::HashSet;

/// Length of one tick at a time scale of 1, in seconds
pub const BASE_TIME_STEP: Scalar = 1.0 / 60.0;

/// Owns every body and advances them one fixed step at a time
///
/// The core never schedules itself: a driver calls [`SimulationCore::step`]
/// once per frame while [`SimulationCore::is_running`] holds. All mutation
/// goes through the methods below; readers get `&[Body]` or a cloned
/// snapshot.
#[derive(Resource, Debug, Clone)]
pub struct SimulationCore {
    bodies: Vec<Body>,
    gravity: NewtonianGravity,
    integrator: SymplecticEuler,
    time_step: Scalar,
    time_scale: Scalar,
    max_trail_length: usize,
    running: bool,
    forces: Vec<Vector>,
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: NewtonianGravity {
                g: 1.0,
                min_distance: DEFAULT_MIN_INTERACTION_DISTANCE,
            },
            integrator: SymplecticEuler,
            time_step: BASE_TIME_STEP,
            time_scale: 1.0,
            max_trail_length: DEFAULT_MAX_TRAIL_LENGTH,
            running: false,
            forces: Vec::new(),
        }
    }
}

impl SimulationCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an empty core from validated configuration values
    pub fn from_config(config: &PhysicsConfig) -> Result<Self, SimulationError> {
        let mut core = Self::default();
        core.gravity.min_distance =
            ensure_positive("min_interaction_distance", config.min_interaction_distance)?;
        core.set_gravitational_constant(config.gravitational_constant)?;
        core.set_time_scale(config.time_scale)?;
        core.set_max_trail_length(config.max_trail_length);
        Ok(core)
    }

    // Accessors

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Owned copy of the current bodies, detached from the core
    pub fn snapshot(&self) -> Vec<Body> {
        self.bodies.clone()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id() == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn gravitational_constant(&self) -> Scalar {
        self.gravity.g
    }

    pub fn time_step(&self) -> Scalar {
        self.time_step
    }

    pub fn time_scale(&self) -> Scalar {
        self.time_scale
    }

    pub fn max_trail_length(&self) -> usize {
        self.max_trail_length
    }

    pub fn min_interaction_distance(&self) -> Scalar {
        self.gravity.min_distance
    }

    /// Force law currently applied by [`SimulationCore::step`]
    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    pub fn integrator(&self) -> &impl Integrator {
        &self.integrator
    }

    // Parameters

    /// Set G; zero switches gravity off, negative or non-finite is rejected
    pub fn set_gravitational_constant(&mut self, g: Scalar) -> Result<(), SimulationError> {
        self.gravity.g = ensure_non_negative("gravitational_constant", g)?;
        debug!("Gravitational constant set to {}", g);
        Ok(())
    }

    /// Set the time step directly; the time scale follows as `dt / BASE_TIME_STEP`
    pub fn set_time_step(&mut self, dt: Scalar) -> Result<(), SimulationError> {
        let dt = ensure_positive("time_step", dt)?;
        let scale = ensure_positive("time_scale", dt / BASE_TIME_STEP)?;
        self.time_step = dt;
        self.time_scale = scale;
        debug!("Time step set to {} (scale {})", self.time_step, self.time_scale);
        Ok(())
    }

    /// Set the time step to `BASE_TIME_STEP * scale`
    pub fn set_time_scale(&mut self, scale: Scalar) -> Result<(), SimulationError> {
        let scale = ensure_positive("time_scale", scale)?;
        self.time_step = ensure_positive("time_step", BASE_TIME_STEP * scale)?;
        self.time_scale = scale;
        debug!("Time scale set to {} (step {})", self.time_scale, self.time_step);
        Ok(())
    }

    /// Change the trail bound, evicting the oldest points of longer trails
    pub fn set_max_trail_length(&mut self, max_points: usize) {
        self.max_trail_length = max_points;
        for body in &mut self.bodies {
            body.trail_mut().truncate_front(max_points);
        }
        debug!("Maximum trail length set to {}", max_points);
    }

    // Body collection

    /// Replace the whole collection
    ///
    /// Rejected without changes if two bodies share an id. A running core is
    /// paused when fewer than two bodies remain.
    pub fn set_bodies(&mut self, mut bodies: Vec<Body>) -> Result<(), SimulationError> {
        let mut seen = HashSet::with_capacity(bodies.len());
        if let Some(duplicate) = bodies.iter().map(Body::id).find(|id| !seen.insert(*id)) {
            return Err(SimulationError::DuplicateId(duplicate));
        }

        for body in &mut bodies {
            body.trail_mut().truncate_front(self.max_trail_length);
        }
        debug!("Replaced bodies: {} -> {}", self.bodies.len(), bodies.len());
        self.replace_bodies(bodies);
        Ok(())
    }

    /// Replace the collection with a freshly generated preset
    pub fn load_preset(&mut self, preset: Preset, rng: &mut SharedRng) {
        debug!("Loading preset {}", preset);
        self.replace_bodies(preset.bodies(rng));
    }

    fn replace_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies = bodies;
        if self.running && self.bodies.len() < 2 {
            self.pause();
        }
    }

    /// Append `body`, refusing while running or when its id is taken
    pub fn add_body(&mut self, mut body: Body) -> Result<BodyId, SimulationError> {
        self.ensure_editable()?;
        if self.body(body.id()).is_some() {
            return Err(SimulationError::DuplicateId(body.id()));
        }

        let id = body.id();
        body.trail_mut().truncate_front(self.max_trail_length);
        self.bodies.push(body);
        debug!("Added body {}", id);
        Ok(id)
    }

    /// Place a default body (unit mass, at rest, random color) at `position`
    pub fn spawn_body_at(
        &mut self,
        position: Vector,
        rng: &mut SharedRng,
    ) -> Result<BodyId, SimulationError> {
        self.ensure_editable()?;
        let position = ensure_finite("position", position)?;
        self.add_body(Body::placed_at(position, rng)?)
    }

    /// Apply one validated edit to the body with `id`
    pub fn update_body(&mut self, id: BodyId, edit: BodyEdit) -> Result<(), SimulationError> {
        self.ensure_editable()?;
        let body = self
            .bodies
            .iter_mut()
            .find(|body| body.id() == id)
            .ok_or(SimulationError::NotFound(id))?;
        body.apply(edit)?;
        debug!("Edited body {}: {:?}", id, edit);
        Ok(())
    }

    pub fn remove_body(&mut self, id: BodyId) -> Result<Body, SimulationError> {
        self.ensure_editable()?;
        let index = self
            .bodies
            .iter()
            .position(|body| body.id() == id)
            .ok_or(SimulationError::NotFound(id))?;
        debug!("Removed body {}", id);
        Ok(self.bodies.remove(index))
    }

    fn ensure_editable(&self) -> Result<(), SimulationError> {
        if self.running {
            Err(SimulationError::RunInProgress)
        } else {
            Ok(())
        }
    }

    // Run control

    /// Set the run flag; at least two bodies are needed
    pub fn start(&mut self) -> Result<(), SimulationError> {
        if self.bodies.len() < 2 {
            return Err(SimulationError::InsufficientBodies {
                count: self.bodies.len(),
            });
        }
        self.running = true;
        debug!("Simulation started with {} bodies", self.bodies.len());
        Ok(())
    }

    pub fn pause(&mut self) {
        self.running = false;
        debug!("Simulation paused");
    }

    /// Pause and clear every trail
    ///
    /// Positions, velocities, and masses stay as last computed; this does not
    /// rewind to the initial configuration.
    pub fn reset(&mut self) {
        self.running = false;
        for body in &mut self.bodies {
            body.trail_mut().clear();
        }
        debug!("Simulation reset");
    }

    // Tick

    /// Advance every body by one time step
    ///
    /// Does nothing with fewer than two bodies. Forces for all pairs are
    /// accumulated before any body moves.
    pub fn step(&mut self) {
        let n = self.bodies.len();
        if n < 2 {
            return;
        }

        self.forces.resize(n, Vector::ZERO);
        self.gravity.accumulate_forces(&self.bodies, &mut self.forces);

        let dt = self.time_step;
        let max_trail_length = self.max_trail_length;
        for (body, force) in self.bodies.iter_mut().zip(&self.forces) {
            let acceleration = *force / body.mass();
            let (position, velocity) = body.kinematics_mut();
            self.integrator
                .integrate_single(position, velocity, acceleration, dt);

            let position = *position;
            body.trail_mut().push(position, max_trail_length);
        }

        trace!("Stepped {} bodies by {}", n, dt);
    }
}
