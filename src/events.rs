//! Commands sent by a host (UI, input handling, scripts) to the simulation
//!
//! Every core mutation available to the host is expressed as a
//! [`SimulationCommand`]; the plugin applies them in arrival order before
//! the frame's step.

use crate::physics::body::{BodyEdit, BodyId};
use crate::physics::math::{Scalar, Vector};
use crate::physics::presets::Preset;
use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimulationCommand {
    Start,
    Pause,
    TogglePause,
    /// Pause and clear trails
    Reset,
    /// Advance exactly one tick while paused; ignored while running
    Step,
    LoadPreset(Preset),
    SetGravitationalConstant(Scalar),
    SetTimeScale(Scalar),
    SetMaxTrailLength(usize),
    /// Place a default body at a point picked by the host, then select it
    PlaceBody(Vector),
    EditBody(BodyId, BodyEdit),
    RemoveBody(BodyId),
    Select(Option<BodyId>),
}
