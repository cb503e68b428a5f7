//! Level layout: spawn point, solid platforms and pickup placements.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ground::Platform;
use crate::pickup::PickupSpawn;

/// Everything needed to build a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelLayout {
    /// Where the player starts and respawns.
    pub spawn: Vec3,
    /// Solid geometry.
    pub platforms: Vec<Platform>,
    /// Pickups placed at load.
    pub pickups: Vec<PickupSpawn>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::demo()
    }
}

/// Rings of pickups around the spawn: (radius, count, size requirement, points).
const DEMO_RINGS: [(u16, u16, f32, f32); 4] = [
    (4, 8, 1.0, 2.0),
    (9, 12, 1.8, 3.0),
    (15, 16, 2.8, 4.0),
    (22, 20, 4.0, 6.0),
];

impl LevelLayout {
    /// A flat arena with a raised step and concentric pickup rings whose
    /// size requirement grows outward.
    #[must_use]
    pub fn demo() -> Self {
        let platforms = vec![
            Platform::new(Vec3::new(-30.0, -1.0, -30.0), Vec3::new(30.0, 0.0, 30.0)),
            Platform::new(Vec3::new(18.0, 0.0, 18.0), Vec3::new(26.0, 1.5, 26.0)),
        ];
        let pickups = DEMO_RINGS
            .iter()
            .flat_map(|&(radius, count, size_requirement, point_value)| {
                (0..count).map(move |slot| {
                    let angle = TAU * f32::from(slot) / f32::from(count);
                    let reach = f32::from(radius);
                    PickupSpawn {
                        position: Vec3::new(angle.cos() * reach, 0.3, angle.sin() * reach),
                        size_requirement,
                        point_value,
                        shake_intensity: 0.1 + size_requirement * 0.05,
                        radius: 0.3,
                    }
                })
            })
            .collect();
        Self {
            spawn: Vec3::new(0.0, 0.5, 0.0),
            platforms,
            pickups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn demo_requirements_grow_outward() {
        let layout = LevelLayout::demo();
        assert_eq!(layout.pickups.len(), 56);
        let nearest = layout
            .pickups
            .iter()
            .min_by(|a, b| a.position.length().total_cmp(&b.position.length()))
            .map(|spawn| spawn.size_requirement);
        assert_eq!(nearest, Some(1.0));
    }

    #[rstest]
    fn layout_reads_from_toml() {
        let layout: LevelLayout = toml::from_str(
            r"
            spawn = [1.0, 2.0, 3.0]

            [[platforms]]
            min = [-1.0, -1.0, -1.0]
            max = [1.0, 0.0, 1.0]

            [[pickups]]
            position = [0.0, 0.3, 2.0]
            size_requirement = 1.5
            point_value = 2.0
            shake_intensity = 0.2
            ",
        )
        .expect("layout should parse");
        assert_eq!(layout.spawn, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(layout.platforms.len(), 1);
        assert_eq!(layout.pickups.first().map(|p| p.radius), Some(0.3));
    }
}
