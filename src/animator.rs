//! Display-size animation.
//!
//! The gating size changes instantly when points arrive; the size shown (and
//! used for the collider and rolling radius) eases toward it over a fixed
//! duration. Retargeting mid-flight restarts from whatever is displayed at
//! that moment.

use crate::easing::{Ease, Tween};

/// Animator state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorState {
    /// Displayed size equals the target.
    Idle,
    /// Displayed size is moving toward the target.
    Animating(Tween),
}

/// Eases the displayed size toward the growth target.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthAnimator {
    displayed: f32,
    target: f32,
    duration: f32,
    ease: Ease,
    state: AnimatorState,
}

impl GrowthAnimator {
    /// Creates an idle animator showing `size`.
    #[must_use]
    pub const fn new(size: f32, duration: f32, ease: Ease) -> Self {
        Self {
            displayed: size,
            target: size,
            duration,
            ease,
            state: AnimatorState::Idle,
        }
    }

    /// Size currently shown.
    #[must_use]
    pub const fn displayed(&self) -> f32 {
        self.displayed
    }

    /// Size being animated toward.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> AnimatorState {
        self.state
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.state, AnimatorState::Animating(_))
    }

    /// Starts animating toward `target` from the displayed size.
    ///
    /// Any in-flight animation is replaced. Returns `false` when `target`
    /// equals the current target, in which case nothing changes.
    pub fn retarget(&mut self, target: f32) -> bool {
        if target.to_bits() == self.target.to_bits() {
            return false;
        }
        self.target = target;
        let tween = Tween::new(self.displayed, target, self.duration, self.ease);
        if tween.is_finished() {
            self.displayed = target;
            self.state = AnimatorState::Idle;
        } else {
            self.state = AnimatorState::Animating(tween);
        }
        true
    }

    /// Advances one presentation tick and returns the displayed size.
    ///
    /// On completion the value snaps exactly to the target.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if let AnimatorState::Animating(tween) = &mut self.state {
            self.displayed = tween.advance(dt);
            if tween.is_finished() {
                self.displayed = self.target;
                self.state = AnimatorState::Idle;
            }
        }
        self.displayed
    }

    /// Jumps straight to `size` with no animation.
    pub const fn snap(&mut self, size: f32) {
        self.displayed = size;
        self.target = size;
        self.state = AnimatorState::Idle;
    }
}
