//! Ground-gated jump impulse.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::input::InputSample;
use crate::physics::jump_launch_velocity;
use crate::JUMP_HEIGHT;

/// Jump tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpSettings {
    /// Apex height above the launch point.
    pub height: f32,
}

impl Default for JumpSettings {
    fn default() -> Self {
        Self {
            height: JUMP_HEIGHT,
        }
    }
}

/// What the jump controller did this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpOutcome {
    /// Nothing was requested.
    Idle,
    /// A request arrived while airborne and was dropped.
    Airborne,
    /// The body launched with this vertical speed.
    Launched(f32),
}

/// Turns jump requests into vertical launches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpController {
    settings: JumpSettings,
    gravity: f32,
}

impl JumpController {
    /// Creates a controller for the given gravity.
    #[must_use]
    pub const fn new(settings: JumpSettings, gravity: f32) -> Self {
        Self { settings, gravity }
    }

    /// Vertical speed a launch sets.
    #[must_use]
    pub fn launch_velocity(&self) -> f32 {
        jump_launch_velocity(self.gravity, self.settings.height)
    }

    /// Consumes the pending request and launches if grounded.
    ///
    /// The vertical velocity is overwritten, never added to, so stacked
    /// requests cannot compound.
    pub fn step(&self, body: &mut Body, input: &mut InputSample, grounded: bool) -> JumpOutcome {
        if !input.take_jump() {
            return JumpOutcome::Idle;
        }
        if !grounded {
            debug!("jump request dropped while airborne");
            return JumpOutcome::Airborne;
        }
        let velocity = self.launch_velocity();
        body.linear_velocity.y = velocity;
        JumpOutcome::Launched(velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;
    use rstest::rstest;

    fn requested() -> InputSample {
        let mut input = InputSample::default();
        input.request_jump();
        input
    }

    #[rstest]
    fn launch_overwrites_vertical_velocity() {
        let controller = JumpController::new(JumpSettings { height: 2.0 }, -9.81);
        let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
        body.linear_velocity = Vec3::new(1.0, 30.0, 0.0);
        let mut input = requested();
        let outcome = controller.step(&mut body, &mut input, true);
        let expected = (2.0_f32 * 9.81 * 2.0).sqrt();
        assert_eq!(outcome, JumpOutcome::Launched(expected));
        assert_relative_eq!(body.linear_velocity.y, expected);
        assert_relative_eq!(body.linear_velocity.x, 1.0);
        assert!(!input.jump_requested);
    }

    #[rstest]
    fn airborne_request_is_consumed() {
        let controller = JumpController::new(JumpSettings::default(), -9.81);
        let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
        let mut input = requested();
        assert_eq!(
            controller.step(&mut body, &mut input, false),
            JumpOutcome::Airborne
        );
        assert_eq!(controller.step(&mut body, &mut input, true), JumpOutcome::Idle);
        assert_eq!(body.linear_velocity.y, 0.0);
    }
}
