//! Conservation quantities for monitoring numerical drift

use crate::physics::body::Body;
use crate::physics::gravity::NewtonianGravity;
use crate::physics::math::{Scalar, Vector};

/// Total linear momentum, `Σ mᵢ vᵢ`
pub fn total_momentum(bodies: &[Body]) -> Vector {
    bodies.iter().map(Body::momentum).sum()
}

/// Total kinetic energy, `Σ ½ mᵢ |vᵢ|²`
pub fn kinetic_energy(bodies: &[Body]) -> Scalar {
    bodies
        .iter()
        .map(|body| 0.5 * body.mass() * body.velocity().length_squared())
        .sum()
}

/// Kinetic plus gravitational potential energy
pub fn total_energy(bodies: &[Body], gravity: &NewtonianGravity) -> Scalar {
    kinetic_energy(bodies) + gravity.potential_energy(bodies)
}

/// Mass-weighted mean position, or `None` for an empty system
pub fn barycenter(bodies: &[Body]) -> Option<Vector> {
    let (weighted_positions, total_mass): (Vector, Scalar) = bodies
        .iter()
        .fold((Vector::ZERO, 0.0), |(pos_acc, mass_acc), body| {
            (pos_acc + body.position() * body.mass(), mass_acc + body.mass())
        });

    if total_mass <= Scalar::EPSILON {
        return None;
    }

    Some(weighted_positions / total_mass)
}

/// Drift of the conserved quantities relative to a baseline snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationReport {
    /// Relative energy error `|E - E₀| / |E₀|` (absolute when `E₀ ≈ 0`)
    pub energy_error: Scalar,
    /// Absolute momentum error `|p - p₀|`
    pub momentum_error: Scalar,
}

/// Baseline energy and momentum captured at some instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationBaseline {
    pub energy: Scalar,
    pub momentum: Vector,
}

impl ConservationBaseline {
    pub fn capture(bodies: &[Body], gravity: &NewtonianGravity) -> Self {
        Self {
            energy: total_energy(bodies, gravity),
            momentum: total_momentum(bodies),
        }
    }

    pub fn compare(&self, bodies: &[Body], gravity: &NewtonianGravity) -> ConservationReport {
        let energy = total_energy(bodies, gravity);
        let energy_error = if self.energy.abs() > 1e-12 {
            (energy - self.energy).abs() / self.energy.abs()
        } else {
            (energy - self.energy).abs()
        };

        ConservationReport {
            energy_error,
            momentum_error: (total_momentum(bodies) - self.momentum).length(),
        }
    }
}
