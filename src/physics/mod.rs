pub mod body;
pub mod diagnostics;
pub mod engine;
pub mod gravity;
pub mod integrators;
pub mod math;
pub mod presets;
pub mod trail;
