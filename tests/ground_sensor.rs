//! Ground sensor against a mocked probe and the built-in terrain.

use approx::assert_relative_eq;
use glam::Vec3;
use mockall::mock;
use mockall::predicate::{always, eq, function};
use roller::{
    GroundProbe, GroundSensor, GroundSettings, LayerMask, Player, RayHit, RollerConfig,
};
use rstest::rstest;
use test_utils::flat_terrain;

mock! {
    pub Probe {}
    impl GroundProbe for Probe {
        fn cast_down(&self, origin: Vec3, max_distance: f32, mask: LayerMask) -> Option<RayHit>;
    }
}

fn floor_hit(distance: f32) -> RayHit {
    RayHit {
        distance,
        point: Vec3::ZERO,
        layer: LayerMask::layer(0),
    }
}

#[rstest]
#[case::base(0.5, 0.6)]
#[case::grown(2.0, 2.1)]
fn ray_length_tracks_radius(#[case] radius: f32, #[case] expected: f32) {
    let mut probe = MockProbe::new();
    probe
        .expect_cast_down()
        .with(
            eq(Vec3::new(0.0, radius, 0.0)),
            function(move |length: &f32| (length - expected).abs() < 1e-6),
            eq(LayerMask(0b1)),
        )
        .times(1)
        .returning(move |_, _, _| Some(floor_hit(radius)));
    let mut sensor = GroundSensor::new(GroundSettings::default());
    assert!(sensor.sample(&probe, Vec3::new(0.0, radius, 0.0), radius));
    assert_relative_eq!(
        sensor.last_hit().map_or(0.0, |hit| hit.distance),
        radius
    );
}

#[rstest]
fn configured_layers_reach_the_probe() {
    let layers = LayerMask::layer(2) | LayerMask::layer(5);
    let mut probe = MockProbe::new();
    probe
        .expect_cast_down()
        .with(always(), always(), eq(layers))
        .times(1)
        .returning(|_, _, _| None);
    let mut sensor = GroundSensor::new(GroundSettings {
        buffer: 0.1,
        layers,
    });
    assert!(!sensor.sample(&probe, Vec3::ZERO, 1.0));
    assert!(!sensor.is_grounded());
}

#[rstest]
fn player_samples_ground_before_jumping() {
    let mut player = Player::new(Vec3::new(0.0, 3.0, 0.0), &RollerConfig::default());
    player.input_mut().request_jump();
    let tick = player.fixed_step(&flat_terrain(), roller::CameraBasis::WORLD, 0.02);
    assert!(!tick.grounded);
    assert_eq!(tick.jump, roller::JumpOutcome::Airborne);
    assert!(!player.input_mut().jump_requested);
}
