//! Round countdown and win condition.

use serde::{Deserialize, Serialize};

use crate::{ROUND_DURATION, ROUND_TARGET_SIZE};

/// Round tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSettings {
    /// Seconds before the round is lost.
    pub duration: f32,
    /// Gating size that wins the round.
    pub target_size: f32,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            duration: ROUND_DURATION,
            target_size: ROUND_TARGET_SIZE,
        }
    }
}

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Still playing.
    Running,
    /// The target size was reached in time.
    Won,
    /// Time ran out.
    Lost,
}

/// Countdown advanced on the presentation clock.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundClock {
    settings: RoundSettings,
    remaining: f32,
    outcome: RoundOutcome,
}

impl RoundClock {
    /// Starts a fresh round.
    #[must_use]
    pub const fn new(settings: RoundSettings) -> Self {
        Self {
            remaining: settings.duration,
            settings,
            outcome: RoundOutcome::Running,
        }
    }

    /// Seconds left.
    #[must_use]
    pub const fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Current outcome.
    #[must_use]
    pub const fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Whether the round has ended.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        !matches!(self.outcome, RoundOutcome::Running)
    }

    /// Tuning in use.
    #[must_use]
    pub const fn settings(&self) -> &RoundSettings {
        &self.settings
    }

    /// Ticks the countdown with the player's gating `size`.
    ///
    /// Returns the outcome on the tick the round is decided and `None`
    /// otherwise. Reaching the target wins even on the tick time runs out.
    pub fn advance(&mut self, dt: f32, size: f32) -> Option<RoundOutcome> {
        if self.is_decided() {
            return None;
        }
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        if size >= self.settings.target_size {
            self.outcome = RoundOutcome::Won;
        } else if self.remaining <= 0.0 {
            self.outcome = RoundOutcome::Lost;
        } else {
            return None;
        }
        Some(self.outcome)
    }

    /// Restarts the countdown.
    pub const fn restart(&mut self) {
        self.remaining = self.settings.duration;
        self.outcome = RoundOutcome::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn clock() -> RoundClock {
        RoundClock::new(RoundSettings {
            duration: 1.0,
            target_size: 3.0,
        })
    }

    #[rstest]
    #[case::grown(3.0, 0.1, Some(RoundOutcome::Won))]
    #[case::timed_out(2.0, 1.5, Some(RoundOutcome::Lost))]
    #[case::won_at_the_buzzer(3.0, 1.5, Some(RoundOutcome::Won))]
    #[case::still_playing(2.0, 0.5, None)]
    fn decides_once(#[case] size: f32, #[case] dt: f32, #[case] expected: Option<RoundOutcome>) {
        let mut round = clock();
        assert_eq!(round.advance(dt, size), expected);
        if expected.is_some() {
            assert!(round.is_decided());
            assert_eq!(round.advance(dt, size), None);
        }
    }

    #[rstest]
    fn restart_reopens_the_round() {
        let mut round = clock();
        round.advance(2.0, 0.0);
        round.restart();
        assert_eq!(round.outcome(), RoundOutcome::Running);
        assert_eq!(round.remaining(), 1.0);
    }
}
