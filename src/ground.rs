//! Ground detection.
//!
//! The sensor casts a single ray straight down from the body centre. Its
//! length follows the current body radius, so the grounded threshold grows
//! with the ball. The ray query itself goes through [`GroundProbe`], the seam
//! to whatever physics backend owns the level geometry; [`Terrain`] is the
//! in-crate backend built from axis-aligned platforms.

use std::ops::BitOr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{GROUND_CHECK_BUFFER, GROUND_LAYERS};

/// Bit set of collision layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);
    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask containing the single layer `index` (0..32).
    ///
    /// Out-of-range indices produce an empty mask.
    ///
    /// # Examples
    /// ```
    /// use roller::LayerMask;
    /// assert_eq!(LayerMask::layer(0), LayerMask(1));
    /// assert_eq!(LayerMask::layer(40), LayerMask::NONE);
    /// ```
    #[must_use]
    pub const fn layer(index: u32) -> Self {
        if index < u32::BITS {
            Self(1 << index)
        } else {
            Self::NONE
        }
    }

    /// Whether the two masks share a layer.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether no layer is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Result of a successful downward ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the surface.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Layer of the surface that was hit.
    pub layer: LayerMask,
}

/// Downward ray queries against level geometry.
pub trait GroundProbe {
    /// Casts a ray from `origin` straight down for at most `max_distance`,
    /// considering only surfaces on layers in `mask`. Returns the nearest hit.
    fn cast_down(&self, origin: Vec3, max_distance: f32, mask: LayerMask) -> Option<RayHit>;
}

/// Ground sensor tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundSettings {
    /// Ray length beyond the body radius.
    pub buffer: f32,
    /// Layers counted as ground.
    pub layers: LayerMask,
}

impl Default for GroundSettings {
    fn default() -> Self {
        Self {
            buffer: GROUND_CHECK_BUFFER,
            layers: LayerMask(GROUND_LAYERS),
        }
    }
}

/// Samples grounded state once per physics tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundSensor {
    settings: GroundSettings,
    grounded: bool,
    last_hit: Option<RayHit>,
}

impl GroundSensor {
    /// Creates an ungrounded sensor.
    #[must_use]
    pub const fn new(settings: GroundSettings) -> Self {
        Self {
            settings,
            grounded: false,
            last_hit: None,
        }
    }

    /// Ray length for a body of `radius`.
    #[must_use]
    pub fn ray_length(&self, radius: f32) -> f32 {
        radius.max(0.0) + self.settings.buffer
    }

    /// Probes below `center` and stores the result.
    pub fn sample<P: GroundProbe + ?Sized>(&mut self, probe: &P, center: Vec3, radius: f32) -> bool {
        self.last_hit = probe.cast_down(center, self.ray_length(radius), self.settings.layers);
        self.grounded = self.last_hit.is_some();
        self.grounded
    }

    /// Grounded state from the latest sample.
    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Hit from the latest sample, for debug views.
    #[must_use]
    pub const fn last_hit(&self) -> Option<RayHit> {
        self.last_hit
    }
}

/// Axis-aligned solid box; its top face is walkable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner; `max.y` is the walkable height.
    pub max: Vec3,
    /// Collision layer of the platform.
    #[serde(default = "default_platform_layer")]
    pub layer: LayerMask,
}

const fn default_platform_layer() -> LayerMask {
    LayerMask(GROUND_LAYERS)
}

impl Platform {
    /// Creates a platform on the default ground layer.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
            layer: default_platform_layer(),
        }
    }

    /// Returns a copy on `layer`.
    #[must_use]
    pub const fn on_layer(mut self, layer: LayerMask) -> Self {
        self.layer = layer;
        self
    }

    fn covers(&self, point: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.z..=self.max.z).contains(&point.z)
    }
}

/// Static level geometry made of [`Platform`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Terrain {
    platforms: Vec<Platform>,
}

/// Tolerance for rays starting exactly on a surface.
const SURFACE_EPSILON: f32 = 1e-4;

impl Terrain {
    /// Builds terrain from platforms.
    #[must_use]
    pub const fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    /// Platforms in insertion order.
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }
}

impl GroundProbe for Terrain {
    fn cast_down(&self, origin: Vec3, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        if !origin.is_finite() || max_distance < 0.0 {
            return None;
        }
        self.platforms
            .iter()
            .filter(|platform| platform.layer.intersects(mask) && platform.covers(origin))
            .filter_map(|platform| {
                let top = platform.max.y;
                let distance = origin.y - top;
                (distance >= -SURFACE_EPSILON && distance <= max_distance).then(|| RayHit {
                    distance: distance.max(0.0),
                    point: Vec3::new(origin.x, top, origin.z),
                    layer: platform.layer,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
