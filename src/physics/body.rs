use crate::error::{SimulationError, ensure_finite, ensure_positive};
use crate::physics::math::{Scalar, Vector};
use crate::physics::trail::Trail;
use crate::resources::SharedRng;
use bevy::color::Color;
use rand::Rng;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Multiplier applied to `cbrt(mass)` to obtain the display radius
pub const RADIUS_SCALE: Scalar = 0.5;

static NEXT_BODY_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a body, unique for the lifetime of the process
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

impl BodyId {
    /// Allocate an id that has never been handed out before
    pub fn fresh() -> Self {
        Self(NEXT_BODY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display radius for a body of the given mass
pub fn radius_for_mass(mass: Scalar) -> Scalar {
    libm::cbrt(mass) * RADIUS_SCALE
}

/// Random display color, `hsl(h, 70%, 60%)` with a uniform hue
pub fn random_color(rng: &mut SharedRng) -> Color {
    Color::hsl(rng.random_range(0.0..360.0), 0.7, 0.6)
}

/// A single explicit change to a body
///
/// Each variant is validated on its own when applied through
/// [`SimulationCore::update_body`](crate::physics::engine::SimulationCore::update_body).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyEdit {
    SetMass(Scalar),
    SetPosition(Vector),
    SetVelocity(Vector),
    SetColor(Color),
}

/// A simulated point mass
///
/// Fields are private: a body owned by a core can only change through the
/// core's mutators, so readers holding `&Body` cannot bypass validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    id: BodyId,
    position: Vector,
    velocity: Vector,
    mass: Scalar,
    radius: Scalar,
    color: Color,
    trail: Trail,
}

impl Body {
    /// Create a body with a fresh id and an empty trail
    ///
    /// Fails if `mass` is not finite and positive, or if either vector has a
    /// non-finite component.
    pub fn new(
        position: Vector,
        velocity: Vector,
        mass: Scalar,
        color: Color,
    ) -> Result<Self, SimulationError> {
        let position = ensure_finite("position", position)?;
        let velocity = ensure_finite("velocity", velocity)?;
        let mass = ensure_positive("mass", mass)?;
        Ok(Self::from_valid_parts(position, velocity, mass, color))
    }

    /// Unit mass at rest with a random color, as placed by a pointer click
    pub fn placed_at(position: Vector, rng: &mut SharedRng) -> Result<Self, SimulationError> {
        let color = random_color(rng);
        Self::new(position, Vector::ZERO, 1.0, color)
    }

    /// Caller guarantees finite vectors and a finite positive mass
    pub(crate) fn from_valid_parts(
        position: Vector,
        velocity: Vector,
        mass: Scalar,
        color: Color,
    ) -> Self {
        Self {
            id: BodyId::fresh(),
            position,
            velocity,
            mass,
            radius: radius_for_mass(mass),
            color,
            trail: Trail::new(),
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn position(&self) -> Vector {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn mass(&self) -> Scalar {
        self.mass
    }

    pub fn radius(&self) -> Scalar {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    /// Validate and apply `edit`; the body is unchanged on error
    pub(crate) fn apply(&mut self, edit: BodyEdit) -> Result<(), SimulationError> {
        match edit {
            BodyEdit::SetMass(mass) => {
                self.mass = ensure_positive("mass", mass)?;
                self.radius = radius_for_mass(self.mass);
            }
            BodyEdit::SetPosition(position) => {
                self.position = ensure_finite("position", position)?;
            }
            BodyEdit::SetVelocity(velocity) => {
                self.velocity = ensure_finite("velocity", velocity)?;
            }
            BodyEdit::SetColor(color) => self.color = color,
        }
        Ok(())
    }

    pub(crate) fn kinematics_mut(&mut self) -> (&mut Vector, &mut Vector) {
        (&mut self.position, &mut self.velocity)
    }

    pub(crate) fn trail_mut(&mut self) -> &mut Trail {
        &mut self.trail
    }
}
