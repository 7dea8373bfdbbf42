//! Fixed-step integration methods

use crate::physics::math::{Scalar, Vector};

pub mod symplectic_euler;

pub use symplectic_euler::SymplecticEuler;

/// Advances one body's kinematic state given its acceleration
pub trait Integrator: Send + Sync {
    /// Advance `position` and `velocity` by one step of length `dt`
    ///
    /// `acceleration` is evaluated once, at the start of the step.
    fn integrate_single(
        &self,
        position: &mut Vector,
        velocity: &mut Vector,
        acceleration: Vector,
        dt: Scalar,
    );

    fn name(&self) -> &str;

    fn order(&self) -> usize;
}
