//! Test utilities for plugin testing

use bevy::prelude::*;

use crate::events::SimulationCommand;

/// Creates a minimal headless app suitable for driving the simulation plugin
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Queue a command for the next `app.update()`
pub fn send_command(app: &mut App, command: SimulationCommand) {
    app.world_mut().send_event(command);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(app.world().contains_resource::<Time>());
    }
}
