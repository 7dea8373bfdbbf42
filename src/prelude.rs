//! Orrery prelude module
//!
//! Re-exports the types a host needs to drive the simulation.

pub use crate::config::{PhysicsConfig, SimulationConfig};
pub use crate::error::SimulationError;
pub use crate::events::SimulationCommand;
pub use crate::physics::body::{Body, BodyEdit, BodyId};
pub use crate::physics::engine::{BASE_TIME_STEP, SimulationCore};
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::presets::Preset;
pub use crate::plugins::simulation::{SimulationPlugin, SimulationSet};
pub use crate::resources::{SelectedBody, SharedRng};
