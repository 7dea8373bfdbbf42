//! Orrery library
//!
//! Gravitational N-body engine with bounded motion trails, plus a headless
//! Bevy plugin that drives it one step per frame.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;

// Test utilities are public for integration tests
pub mod test_utils;
