//! Easing curves and the tween record used by timed animations.
//!
//! Timed effects are plain records advanced once per presentation tick.
//! Replacing a record is how an in-flight animation is cancelled; there is no
//! separate cancellation channel.

use serde::{Deserialize, Serialize};

/// Residual time below which a tween counts as finished.
///
/// Summing frame deltas rarely lands exactly on the duration, so the last
/// step is allowed to fall short by this much and still snap to the end.
pub const COMPLETION_EPSILON: f32 = 1e-5;

/// Monotone easing curves on `[0, 1]`. None of them overshoot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant rate.
    Linear,
    /// Slow start and finish.
    #[default]
    SmoothStep,
    /// Fast start, quadratic settle.
    EaseOutQuad,
    /// Fast start, cubic settle.
    EaseOutCubic,
    /// Cubic in and out.
    EaseInOutCubic,
}

impl Ease {
    /// Samples the curve. `t` is clamped to `[0, 1]`; NaN samples as `0`.
    ///
    /// # Examples
    /// ```
    /// use roller::Ease;
    /// assert_eq!(Ease::SmoothStep.sample(0.0), 0.0);
    /// assert_eq!(Ease::SmoothStep.sample(1.0), 1.0);
    /// assert_eq!(Ease::Linear.sample(2.0), 1.0);
    /// ```
    #[must_use]
    pub fn sample(self, t: f32) -> f32 {
        let x = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => x,
            Self::SmoothStep => x * x * (3.0 - 2.0 * x),
            Self::EaseOutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Self::EaseOutCubic => 1.0 - (1.0 - x).powi(3),
            Self::EaseInOutCubic => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolates a scalar from `start` to `end` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    /// Creates a tween at its start value.
    #[must_use]
    pub const fn new(start: f32, end: f32, duration: f32, ease: Ease) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    /// Advances by `dt` seconds and returns the new value.
    ///
    /// Once finished the value is exactly `end`.
    ///
    /// # Examples
    /// ```
    /// use roller::{Ease, Tween};
    /// let mut tween = Tween::new(1.0, 3.0, 0.5, Ease::SmoothStep);
    /// for _ in 0..5 {
    ///     tween.advance(0.1);
    /// }
    /// assert!(tween.is_finished());
    /// assert_eq!(tween.value(), 3.0);
    /// ```
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed + COMPLETION_EPSILON >= self.duration
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.end;
        }
        let progress = self.ease.sample(self.elapsed / self.duration);
        self.start + (self.end - self.start) * progress
    }

    /// Value the tween started from.
    #[must_use]
    pub const fn start(&self) -> f32 {
        self.start
    }

    /// Value the tween ends on.
    #[must_use]
    pub const fn end(&self) -> f32 {
        self.end
    }

    /// Seconds advanced so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ease::Linear)]
    #[case(Ease::SmoothStep)]
    #[case(Ease::EaseOutQuad)]
    #[case(Ease::EaseOutCubic)]
    #[case(Ease::EaseInOutCubic)]
    fn curves_are_monotone_and_bounded(#[case] ease: Ease) {
        let mut previous = ease.sample(0.0);
        assert!(previous.abs() < 1e-6);
        for step in 1..=100_u8 {
            let value = ease.sample(f32::from(step) / 100.0);
            assert!(value >= previous - 1e-6, "{ease:?} decreased at {step}");
            assert!(value <= 1.0 + 1e-6, "{ease:?} overshot at {step}");
            previous = value;
        }
        assert!((previous - 1.0).abs() < 1e-6);
    }

    #[rstest]
    fn zero_duration_finishes_immediately() {
        let tween = Tween::new(2.0, 0.0, 0.0, Ease::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
    }

    #[rstest]
    fn negative_steps_do_not_rewind() {
        let mut tween = Tween::new(0.0, 1.0, 1.0, Ease::Linear);
        tween.advance(0.25);
        tween.advance(-1.0);
        assert!((tween.elapsed() - 0.25).abs() < 1e-6);
    }
}
