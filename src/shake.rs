//! One-shot camera shake fired by growth events.
//!
//! The offset is a deterministic oscillation on the camera's X/Y axes whose
//! amplitude falls linearly to zero. Triggering again overwrites the record.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{SHAKE_DURATION, SHAKE_FREQUENCY};

/// Shake tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeSettings {
    /// Seconds a shake lasts.
    pub duration: f32,
    /// Oscillation frequency in hertz.
    pub frequency: f32,
}

impl Default for ShakeSettings {
    fn default() -> Self {
        Self {
            duration: SHAKE_DURATION,
            frequency: SHAKE_FREQUENCY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveShake {
    intensity: f32,
    elapsed: f32,
}

/// Camera shake record.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenShake {
    settings: ShakeSettings,
    active: Option<ActiveShake>,
    offset: Vec2,
}

impl ScreenShake {
    /// Creates an idle shake.
    #[must_use]
    pub const fn new(settings: ShakeSettings) -> Self {
        Self {
            settings,
            active: None,
            offset: Vec2::ZERO,
        }
    }

    /// Starts a shake, replacing any running one.
    pub fn trigger(&mut self, intensity: f32) {
        if intensity <= 0.0 || !intensity.is_finite() {
            return;
        }
        self.active = Some(ActiveShake {
            intensity,
            elapsed: 0.0,
        });
    }

    /// Whether a shake is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Offset computed by the latest [`advance`](Self::advance).
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Advances one presentation tick and returns the camera offset.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        let Some(shake) = self.active.as_mut() else {
            self.offset = Vec2::ZERO;
            return self.offset;
        };
        shake.elapsed += dt.max(0.0);
        let duration = self.settings.duration;
        if shake.elapsed >= duration {
            self.active = None;
            self.offset = Vec2::ZERO;
            return self.offset;
        }
        let amplitude = shake.intensity * (1.0 - shake.elapsed / duration);
        let phase = std::f32::consts::TAU * self.settings.frequency * shake.elapsed;
        self.offset = Vec2::new(phase.sin(), (phase * 1.3).cos()) * amplitude;
        self.offset
    }
}
