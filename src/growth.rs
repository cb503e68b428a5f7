//! Size and mass growth driven by accumulated pickup points.
//!
//! The gating size is a pure function of the point total:
//! `clamp(base + points · rate, base, max)`. Mass grows linearly with points
//! and is deliberately left unclamped, so the ball keeps getting heavier after
//! its size tops out.

use serde::{Deserialize, Serialize};

use crate::easing::Ease;
use crate::{
    BASE_SIZE, DEFAULT_SHAKE_INTENSITY, GROWTH_DURATION, GROWTH_RATE, MASS_GROWTH_RATE, MAX_SIZE,
    RADIUS_PER_SIZE,
};

/// Growth laws and animation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthSettings {
    /// Size with zero points.
    pub base_size: f32,
    /// Cap on the gating size.
    pub max_size: f32,
    /// Size per point.
    pub growth_rate: f32,
    /// Mass per point.
    pub mass_growth_rate: f32,
    /// Seconds the display size takes to reach a new target.
    pub duration: f32,
    /// Curve used by the display-size animation.
    pub ease: Ease,
    /// Shake intensity when a growth carries no override.
    pub default_shake: f32,
    /// Body radius per unit of size.
    pub radius_per_size: f32,
}

impl Default for GrowthSettings {
    fn default() -> Self {
        Self {
            base_size: BASE_SIZE,
            max_size: MAX_SIZE,
            growth_rate: GROWTH_RATE,
            mass_growth_rate: MASS_GROWTH_RATE,
            duration: GROWTH_DURATION,
            ease: Ease::default(),
            default_shake: DEFAULT_SHAKE_INTENSITY,
            radius_per_size: RADIUS_PER_SIZE,
        }
    }
}

/// Outcome of a single [`GrowthModel::add_points`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthChange {
    /// Target size before the call.
    pub previous_size: f32,
    /// Target size after the call.
    pub size: f32,
    /// Mass after the call.
    pub mass: f32,
    /// Shake intensity to play; `Some` only when the size strictly increased.
    pub shake: Option<f32>,
}

impl GrowthChange {
    /// Whether the clamped target strictly increased.
    #[must_use]
    pub const fn grew(&self) -> bool {
        self.shake.is_some()
    }
}

/// Point accumulator and growth laws.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthModel {
    settings: GrowthSettings,
    total_points: f32,
}

impl GrowthModel {
    /// Creates a model with zero points.
    #[must_use]
    pub const fn new(settings: GrowthSettings) -> Self {
        Self {
            settings,
            total_points: 0.0,
        }
    }

    /// Points accumulated so far.
    #[must_use]
    pub const fn total_points(&self) -> f32 {
        self.total_points
    }

    /// Tuning in use.
    #[must_use]
    pub const fn settings(&self) -> &GrowthSettings {
        &self.settings
    }

    /// Gating size for `points`.
    ///
    /// A cap below the base collapses to the base rather than panicking.
    ///
    /// # Examples
    /// ```
    /// use roller::{GrowthModel, GrowthSettings};
    /// let model = GrowthModel::new(GrowthSettings::default());
    /// assert_eq!(model.size_for(0.0), 1.0);
    /// assert!((model.size_for(10.0) - 2.0).abs() < 1e-6);
    /// assert_eq!(model.size_for(1.0e6), 10.0);
    /// ```
    #[must_use]
    pub fn size_for(&self, points: f32) -> f32 {
        let GrowthSettings {
            base_size,
            max_size,
            growth_rate,
            ..
        } = self.settings;
        let raw = base_size + points * growth_rate;
        raw.max(base_size).min(max_size.max(base_size))
    }

    /// Current gating size.
    #[must_use]
    pub fn target_size(&self) -> f32 {
        self.size_for(self.total_points)
    }

    /// Current mass, `1 + points · mass_rate`, with no upper bound.
    #[must_use]
    pub fn mass(&self) -> f32 {
        1.0 + self.total_points * self.settings.mass_growth_rate
    }

    /// Adds `points` and reports whether the size strictly increased.
    ///
    /// Every call adds unconditionally. The shake intensity is
    /// `shake_override` if given, else the configured default.
    ///
    /// # Examples
    /// ```
    /// use roller::{GrowthModel, GrowthSettings};
    /// let mut model = GrowthModel::new(GrowthSettings::default());
    /// assert!(!model.add_points(0.0, None).grew());
    /// assert_eq!(model.add_points(5.0, Some(0.7)).shake, Some(0.7));
    /// ```
    pub fn add_points(&mut self, points: f32, shake_override: Option<f32>) -> GrowthChange {
        let previous_size = self.target_size();
        self.total_points += points;
        let size = self.target_size();
        let shake =
            (size > previous_size).then(|| shake_override.unwrap_or(self.settings.default_shake));
        GrowthChange {
            previous_size,
            size,
            mass: self.mass(),
            shake,
        }
    }

    /// Drops all points.
    pub const fn reset(&mut self) {
        self.total_points = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn model() -> GrowthModel {
        GrowthModel::new(GrowthSettings {
            max_size: 3.0,
            ..GrowthSettings::default()
        })
    }

    #[rstest]
    fn mass_keeps_growing_after_size_caps() {
        let mut growth = model();
        growth.add_points(100.0, None);
        let capped = growth.add_points(100.0, None);
        assert_relative_eq!(capped.size, 3.0);
        assert_relative_eq!(capped.mass, 21.0);
        assert!(!capped.grew());
    }

    #[rstest]
    fn negative_points_never_shake() {
        let mut growth = model();
        growth.add_points(10.0, None);
        let shrink = growth.add_points(-5.0, None);
        assert!(shrink.size < shrink.previous_size);
        assert!(shrink.shake.is_none());
    }

    #[rstest]
    fn inverted_bounds_collapse_to_base() {
        let growth = GrowthModel::new(GrowthSettings {
            base_size: 2.0,
            max_size: 1.0,
            ..GrowthSettings::default()
        });
        assert_relative_eq!(growth.size_for(50.0), 2.0);
    }
}
