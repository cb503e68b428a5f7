//! Utility helpers for tests.
//!
//! Builders for small levels and configs, plus a headless Bevy app with a
//! manually stepped clock.

pub mod app;
pub mod physics;

pub use app::{headless_app, run_frames, FRAME};
pub use physics::{flat_config, flat_terrain, pickup, FLOOR_TOP};
