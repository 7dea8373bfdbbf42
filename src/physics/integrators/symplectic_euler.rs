//! Symplectic Euler integration method

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Symplectic Euler integrator (also known as semi-implicit Euler)
///
/// First-order method that updates velocity before position:
///
/// ```text
/// v(t+dt) = v(t) + a(t) * dt
/// x(t+dt) = x(t) + v(t+dt) * dt
/// ```
///
/// The position update uses the already-updated velocity. Swapping the two
/// lines gives explicit Euler, which drifts in energy and produces different
/// trajectories.
#[derive(Debug, Copy, Clone, Default)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn integrate_single(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        acceleration: Vector,
        dt: Scalar,
    ) {
        *velocity += acceleration * dt;
        *position += *velocity * dt;
    }

    fn name(&self) -> &str {
        "Symplectic Euler"
    }

    fn order(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symplectic_euler_integrate_single() {
        let integrator = SymplecticEuler;

        let mut position = Vector::new(1.0, 0.0, 0.0);
        let mut velocity = Vector::new(0.0, 1.0, 0.0);
        let acceleration = Vector::new(0.0, 0.0, -9.81);
        let dt = 0.01;

        integrator.integrate_single(&mut position, &mut velocity, acceleration, dt);

        // Velocity should be updated first
        assert!((velocity - Vector::new(0.0, 1.0, -0.0981)).length() < 1e-12);

        // Position should use the new velocity
        let expected_position = Vector::new(1.0, 0.01, -0.000981);
        assert!((position - expected_position).length() < 1e-12);
    }

    #[test]
    fn test_zero_acceleration_is_linear_motion() {
        let integrator = SymplecticEuler;
        let mut position = Vector::ZERO;
        let mut velocity = Vector::new(2.0, -1.0, 0.5);

        integrator.integrate_single(&mut position, &mut velocity, Vector::ZERO, 0.5);

        assert_eq!(velocity, Vector::new(2.0, -1.0, 0.5));
        assert_eq!(position, Vector::new(1.0, -0.5, 0.25));
    }

    #[test]
    fn test_properties() {
        let integrator = SymplecticEuler;
        assert_eq!(integrator.name(), "Symplectic Euler");
        assert_eq!(integrator.order(), 1);
    }
}
