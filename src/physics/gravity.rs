//! Pairwise Newtonian gravity
//!
//! Direct O(n²) summation over unordered pairs. Each pair is visited once and
//! contributes equal and opposite forces, so the net force over the whole
//! system is zero up to rounding.

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

/// Default separation below which a pair is ignored
pub const DEFAULT_MIN_INTERACTION_DISTANCE: Scalar = 0.1;

/// Inverse-square attraction with a close-encounter cutoff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    /// Gravitational constant
    pub g: Scalar,
    /// Pairs closer than this contribute nothing
    pub min_distance: Scalar,
}

impl NewtonianGravity {
    /// Force exerted on a body at `from` with mass `m_from` by a body at `to`
    /// with mass `m_to`, or `None` when the pair is inside the cutoff
    pub fn pair_force(
        &self,
        from: Vector,
        m_from: Scalar,
        to: Vector,
        m_to: Scalar,
    ) -> Option<Vector> {
        // r points from `from` toward `to`
        let r = to - from;
        let distance = r.length();
        if distance < self.min_distance {
            return None;
        }

        let magnitude = self.g * m_from * m_to / (distance * distance);
        Some(r / distance * magnitude)
    }

    /// Overwrite `out[i]` with the net force on `bodies[i]`
    ///
    /// Pairs are visited with `i` ascending, then `j > i` ascending, so the
    /// summation order is deterministic. `out` must have one slot per body.
    pub fn accumulate_forces(&self, bodies: &[Body], out: &mut [Vector]) {
        debug_assert_eq!(bodies.len(), out.len());

        for force in out.iter_mut() {
            *force = Vector::ZERO;
        }

        let n = bodies.len();
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];
                let Some(force) = self.pair_force(bi.position(), bi.mass(), bj.position(), bj.mass())
                else {
                    continue;
                };

                // Newton's third law
                out[i] += force;
                out[j] -= force;
            }
        }
    }

    /// Potential energy of the system, `-Σ G mᵢ mⱼ / d` over interacting pairs
    pub fn potential_energy(&self, bodies: &[Body]) -> Scalar {
        let mut energy = 0.0;
        for (i, bi) in bodies.iter().enumerate() {
            for bj in &bodies[i + 1..] {
                let distance = bi.position().distance(bj.position());
                if distance < self.min_distance {
                    continue;
                }
                energy -= self.g * bi.mass() * bj.mass() / distance;
            }
        }
        energy
    }
}
