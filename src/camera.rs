//! Camera-relative movement basis.
//!
//! The presentation layer hands over its forward and right vectors; the
//! movement code only needs them flattened onto the ground plane. A camera
//! looking straight down has no usable forward direction, so the rig keeps
//! the last valid basis and reuses it until the camera tilts back. With no
//! camera at all, input maps straight onto the world axes.

use glam::Vec3;
use log::debug;

use crate::vector_math::ground_direction;

/// Ground-plane movement basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Unit vector pushed along by a positive `y` input.
    pub forward: Vec3,
    /// Unit vector pushed along by a positive `x` input.
    pub right: Vec3,
}

impl CameraBasis {
    /// World-aligned basis used when no camera is available.
    pub const WORLD: Self = Self {
        forward: Vec3::NEG_Z,
        right: Vec3::X,
    };

    /// Flattens camera vectors onto the ground plane.
    ///
    /// Returns `None` when either vector is degenerate after projection.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use roller::CameraBasis;
    /// let tilted = CameraBasis::from_camera(Vec3::new(0.0, -0.5, -1.0), Vec3::X);
    /// assert!(tilted.is_some());
    /// assert!(CameraBasis::from_camera(Vec3::NEG_Y, Vec3::X).is_none());
    /// ```
    #[must_use]
    pub fn from_camera(forward: Vec3, right: Vec3) -> Option<Self> {
        Some(Self {
            forward: ground_direction(forward)?,
            right: ground_direction(right)?,
        })
    }
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Remembers the last usable camera basis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraRig {
    last_valid: Option<CameraBasis>,
}

impl CameraRig {
    /// Resolves the basis for this tick.
    ///
    /// `camera` is `None` when no camera exists; the world basis is used and
    /// the remembered basis is kept for when a camera returns. A degenerate
    /// camera falls back to the last valid basis, or the world basis if there
    /// never was one.
    pub fn resolve(&mut self, camera: Option<(Vec3, Vec3)>) -> CameraBasis {
        let Some((forward, right)) = camera else {
            return CameraBasis::WORLD;
        };
        if let Some(basis) = CameraBasis::from_camera(forward, right) {
            self.last_valid = Some(basis);
            return basis;
        }
        debug!("degenerate camera basis; reusing last valid basis");
        self.last_valid.unwrap_or(CameraBasis::WORLD)
    }

    /// The most recent valid basis, if any.
    #[must_use]
    pub const fn last_valid(&self) -> Option<CameraBasis> {
        self.last_valid
    }
}
