//! Basic vector math helper functions.
//! Small helpers for splitting vectors into the ground plane and clamping
//! magnitudes. The world is Y-up.
use glam::{Vec2, Vec3};

/// Returns the ground-plane part of a vector (its `y` set to zero).
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use roller::vector_math::horizontal;
/// assert_eq!(horizontal(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 0.0, 3.0));
/// ```
#[must_use]
pub const fn horizontal(vector: Vec3) -> Vec3 {
    Vec3::new(vector.x, 0.0, vector.z)
}

/// Replaces the ground-plane part of `vector`, keeping its vertical component.
#[must_use]
pub const fn with_horizontal(vector: Vec3, planar: Vec3) -> Vec3 {
    Vec3::new(planar.x, vector.y, planar.z)
}

/// Scales `vector` down so its length is at most `max_length`.
///
/// Negative or non-finite limits yield the zero vector.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use roller::vector_math::clamp_magnitude;
/// let clamped = clamp_magnitude(Vec3::new(3.0, 0.0, 4.0), 1.0);
/// assert!((clamped.length() - 1.0).abs() < 1e-6);
/// assert_eq!(clamp_magnitude(Vec3::X, 2.0), Vec3::X);
/// ```
#[must_use]
pub fn clamp_magnitude(vector: Vec3, max_length: f32) -> Vec3 {
    if !max_length.is_finite() || max_length <= 0.0 {
        return Vec3::ZERO;
    }
    vector.clamp_length_max(max_length)
}

/// Projects `direction` onto the ground plane and normalises it.
///
/// Returns `None` for non-finite input or when the projection is too short
/// to carry a direction, such as a camera looking straight down.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use roller::vector_math::ground_direction;
/// let dir = ground_direction(Vec3::new(0.0, -1.0, -1.0)).unwrap();
/// assert!((dir - Vec3::NEG_Z).length() < 1e-6);
/// assert!(ground_direction(Vec3::NEG_Y).is_none());
/// ```
#[must_use]
pub fn ground_direction(direction: Vec3) -> Option<Vec3> {
    if !direction.is_finite() {
        return None;
    }
    let planar = horizontal(direction);
    if planar.length_squared() < 1e-6 {
        return None;
    }
    planar.try_normalize()
}

/// Returns the input axis when usable, or zero for non-finite input.
#[must_use]
pub fn sanitize_axis(axis: Vec2) -> Vec2 {
    if axis.is_finite() {
        axis
    } else {
        Vec2::ZERO
    }
}
