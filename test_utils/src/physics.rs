//! Convenience constructors for levels and pickups used in tests.

use glam::Vec3;
use roller::{LevelLayout, PickupSpawn, Platform, RollerConfig, Terrain};

/// Height of the floor surface built by [`flat_terrain`].
pub const FLOOR_TOP: f32 = 0.0;

/// A single wide floor whose top is at [`FLOOR_TOP`].
///
/// # Examples
/// ```
/// use roller::{GroundProbe, LayerMask};
/// use glam::Vec3;
/// let terrain = test_utils::flat_terrain();
/// assert!(terrain.cast_down(Vec3::new(0.0, 0.5, 0.0), 1.0, LayerMask::ALL).is_some());
/// ```
pub fn flat_terrain() -> Terrain {
    Terrain::new(vec![floor()])
}

fn floor() -> Platform {
    Platform::new(
        Vec3::new(-50.0, FLOOR_TOP - 1.0, -50.0),
        Vec3::new(50.0, FLOOR_TOP, 50.0),
    )
}

/// A pickup resting on the floor at `(x, z)`.
pub fn pickup(x: f32, z: f32, size_requirement: f32, point_value: f32) -> PickupSpawn {
    PickupSpawn {
        position: Vec3::new(x, FLOOR_TOP + 0.3, z),
        size_requirement,
        point_value,
        shake_intensity: 0.25,
        radius: 0.3,
    }
}

/// Default tuning on a flat floor with the given pickups and the ball
/// resting at the origin.
pub fn flat_config(pickups: Vec<PickupSpawn>) -> RollerConfig {
    RollerConfig {
        level: LevelLayout {
            spawn: Vec3::new(0.0, FLOOR_TOP + 0.5, 0.0),
            platforms: vec![floor()],
            pickups,
        },
        ..RollerConfig::default()
    }
}
