//! Tunable settings loaded from TOML.
//!
//! Every section falls back to the defaults in [`crate::constants`], so a
//! config file only needs the values it changes:
//!
//! ```
//! use roller::RollerConfig;
//! let config = RollerConfig::from_toml_str("[jump]\nheight = 3.5\n").unwrap();
//! assert_eq!(config.jump.height, 3.5);
//! assert_eq!(config.growth, roller::GrowthSettings::default());
//! ```

use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ground::GroundSettings;
use crate::growth::GrowthSettings;
use crate::jump::JumpSettings;
use crate::level::LevelLayout;
use crate::locomotion::LocomotionSettings;
use crate::pickup::DespawnSettings;
use crate::round::RoundSettings;
use crate::shake::ShakeSettings;
use crate::{
    ANGULAR_DAMPING, FIXED_TIMESTEP, GRAVITY, KILL_PLANE, ROLLING_GRIP, TERMINAL_VELOCITY,
};

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The text is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// A value is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending value.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// World-level physics tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Vertical acceleration; negative is down.
    pub gravity: f32,
    /// Seconds per physics tick.
    pub fixed_timestep: f32,
    /// Largest falling speed.
    pub terminal_velocity: f32,
    /// Fraction of spin lost per second.
    pub angular_damping: f32,
    /// How quickly ground contact matches spin to translation, per second.
    pub rolling_grip: f32,
    /// Height below which the player respawns.
    pub kill_plane: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            fixed_timestep: FIXED_TIMESTEP,
            terminal_velocity: TERMINAL_VELOCITY,
            angular_damping: ANGULAR_DAMPING,
            rolling_grip: ROLLING_GRIP,
            kill_plane: KILL_PLANE,
        }
    }
}

/// Complete game configuration.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollerConfig {
    /// World physics.
    pub physics: PhysicsSettings,
    /// Rolling movement.
    pub locomotion: LocomotionSettings,
    /// Jumping.
    pub jump: JumpSettings,
    /// Ground detection.
    pub ground: GroundSettings,
    /// Growth laws and animation.
    pub growth: GrowthSettings,
    /// Camera shake.
    pub shake: ShakeSettings,
    /// Held pickup despawn.
    pub despawn: DespawnSettings,
    /// Round clock.
    pub round: RoundSettings,
    /// Level layout.
    pub level: LevelLayout,
}

fn require(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

impl RollerConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed input and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = std::fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that every value is usable by the simulation.
    ///
    /// # Errors
    /// Returns the first [`ConfigError::Invalid`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Self {
            physics,
            locomotion,
            jump,
            growth,
            shake,
            despawn,
            round,
            ..
        } = self;
        require(
            physics.gravity.is_finite() && physics.gravity < 0.0,
            "physics.gravity",
            "must be negative",
        )?;
        require(positive(physics.fixed_timestep), "physics.fixed_timestep", "must be positive")?;
        require(
            positive(physics.terminal_velocity),
            "physics.terminal_velocity",
            "must be positive",
        )?;
        require(
            non_negative(physics.angular_damping),
            "physics.angular_damping",
            "must not be negative",
        )?;
        require(
            non_negative(physics.rolling_grip),
            "physics.rolling_grip",
            "must not be negative",
        )?;
        require(physics.kill_plane.is_finite(), "physics.kill_plane", "must be finite")?;
        require(non_negative(locomotion.move_speed), "locomotion.move_speed", "must not be negative")?;
        require(
            non_negative(locomotion.acceleration),
            "locomotion.acceleration",
            "must not be negative",
        )?;
        require(
            non_negative(locomotion.deceleration),
            "locomotion.deceleration",
            "must not be negative",
        )?;
        require(positive(locomotion.max_speed), "locomotion.max_speed", "must be positive")?;
        require(
            positive(locomotion.max_angular_speed),
            "locomotion.max_angular_speed",
            "must be positive",
        )?;
        require(non_negative(jump.height), "jump.height", "must not be negative")?;
        require(positive(growth.base_size), "growth.base_size", "must be positive")?;
        require(
            growth.max_size.is_finite() && growth.max_size >= growth.base_size,
            "growth.max_size",
            "must be at least growth.base_size",
        )?;
        require(non_negative(growth.duration), "growth.duration", "must not be negative")?;
        require(
            positive(growth.radius_per_size),
            "growth.radius_per_size",
            "must be positive",
        )?;
        require(positive(shake.duration), "shake.duration", "must be positive")?;
        require(
            non_negative(despawn.delay),
            "despawn.delay",
            "must not be negative",
        )?;
        require(non_negative(despawn.duration), "despawn.duration", "must not be negative")?;
        require(positive(round.duration), "round.duration", "must be positive")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert!(RollerConfig::default().validate().is_ok());
    }

    #[rstest]
    #[case::upward_gravity("[physics]\ngravity = 9.81\n", "physics.gravity")]
    #[case::zero_timestep("[physics]\nfixed_timestep = 0.0\n", "physics.fixed_timestep")]
    #[case::cap_below_base("[growth]\nbase_size = 2.0\nmax_size = 1.0\n", "growth.max_size")]
    #[case::negative_delay("[despawn]\ndelay = -1.0\n", "despawn.delay")]
    fn out_of_range_values_are_rejected(#[case] text: &str, #[case] expected: &str) {
        match RollerConfig::from_toml_str(text) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected invalid {expected}, got {other:?}"),
        }
    }

    #[rstest]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            RollerConfig::from_toml_str("[jump\nheight = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[rstest]
    fn missing_file_reports_its_path() {
        let err = RollerConfig::load("does/not/exist.toml").expect_err("file is missing");
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
