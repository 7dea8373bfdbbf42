//! Errors reported by the simulation core

use crate::physics::body::BodyId;
use crate::physics::math::{Scalar, Vector};
use std::fmt;

/// Reasons a core operation was refused
///
/// Every variant is returned before any state is touched, so a rejected call
/// leaves the core exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A scalar or vector argument was non-finite or out of range
    InvalidParameter { name: &'static str, value: Scalar },
    /// A body with this id is already managed by the core
    DuplicateId(BodyId),
    /// No body with this id is managed by the core
    NotFound(BodyId),
    /// Body edits are refused while the run flag is set
    RunInProgress,
    /// Starting a run requires at least two bodies
    InsufficientBodies { count: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "Invalid value for {name}: {value}")
            }
            SimulationError::DuplicateId(id) => write!(f, "Duplicate body id: {id}"),
            SimulationError::NotFound(id) => write!(f, "No body with id {id}"),
            SimulationError::RunInProgress => {
                write!(f, "Bodies cannot be edited while the simulation is running")
            }
            SimulationError::InsufficientBodies { count } => {
                write!(f, "At least two bodies are required to start, found {count}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Check that `value` is finite and strictly positive
pub(crate) fn ensure_positive(name: &'static str, value: Scalar) -> Result<Scalar, SimulationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}

/// Check that `value` is finite and not negative
pub(crate) fn ensure_non_negative(
    name: &'static str,
    value: Scalar,
) -> Result<Scalar, SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SimulationError::InvalidParameter { name, value })
    }
}

/// Check that every component of `vector` is finite
///
/// The reported value is the first offending component.
pub(crate) fn ensure_finite(name: &'static str, vector: Vector) -> Result<Vector, SimulationError> {
    match vector.to_array().into_iter().find(|component| !component.is_finite()) {
        None => Ok(vector),
        Some(value) => Err(SimulationError::InvalidParameter { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        let vector = Vector::new(1.0, -2.0, 3.0);
        assert_eq!(ensure_finite("position", vector), Ok(vector));

        let error = ensure_finite("velocity", Vector::new(0.0, Scalar::INFINITY, 0.0));
        assert_eq!(
            error,
            Err(SimulationError::InvalidParameter {
                name: "velocity",
                value: Scalar::INFINITY
            })
        );
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("mass", 2.0), Ok(2.0));
        assert!(ensure_positive("mass", 0.0).is_err());
        assert!(ensure_positive("mass", -1.0).is_err());
        assert!(ensure_positive("mass", Scalar::NAN).is_err());
        assert!(ensure_positive("mass", Scalar::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("G", 0.0), Ok(0.0));
        assert!(ensure_non_negative("G", -0.5).is_err());
        assert!(ensure_non_negative("G", Scalar::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_display_messages() {
        let error = SimulationError::InvalidParameter {
            name: "time_step",
            value: -1.0,
        };
        assert_eq!(error.to_string(), "Invalid value for time_step: -1");

        let error = SimulationError::InsufficientBodies { count: 1 };
        assert!(error.to_string().contains("found 1"));
    }
}
