//! Headless Bevy app driven by a fixed frame duration.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use roller::{RollerConfig, RollerPlugin};

/// Frame length used by [`headless_app`].
pub const FRAME: Duration = Duration::from_millis(16);

/// Builds an app with `MinimalPlugins`, a manual clock advancing by
/// [`FRAME`] per update, and [`RollerPlugin`] configured with `config`.
pub fn headless_app(config: RollerConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(config)
        .add_plugins(RollerPlugin);
    app
}

/// Calls `update` `frames` times.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
