//! Camera-relative locomotion: speed caps, basis fallback, radius-aware spin.

use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use roller::{Body, CameraBasis, CameraRig, Locomotion, LocomotionSettings, Session};
use rstest::{fixture, rstest};
use test_utils::flat_config;

#[fixture]
fn locomotion() -> Locomotion {
    Locomotion::new(LocomotionSettings {
        move_speed: 30.0,
        max_speed: 12.0,
        ..LocomotionSettings::default()
    })
}

#[rstest]
#[case::forward(Vec2::Y)]
#[case::diagonal(Vec2::new(1.0, 1.0))]
#[case::oversized(Vec2::new(40.0, -25.0))]
fn speed_never_exceeds_cap(locomotion: Locomotion, #[case] axis: Vec2) {
    let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
    body.linear_velocity.y = 3.0;
    for _ in 0..200 {
        locomotion.step(&mut body, axis, CameraBasis::WORLD, 0.5, 0.02);
        assert!(body.horizontal_velocity().length() <= 12.0 + 1e-4);
    }
    assert_relative_eq!(body.horizontal_velocity().length(), 12.0, epsilon = 1e-3);
    assert_relative_eq!(body.linear_velocity.y, 3.0);
}

#[rstest]
fn movement_follows_camera_heading(locomotion: Locomotion) {
    let mut rig = CameraRig::default();
    let basis = rig.resolve(Some((Vec3::new(1.0, -0.7, 0.0), Vec3::new(0.0, 0.0, 1.0))));
    let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
    for _ in 0..50 {
        locomotion.step(&mut body, Vec2::Y, basis, 0.5, 0.02);
    }
    let heading = body.horizontal_velocity().normalize();
    assert_relative_eq!(heading.x, 1.0, epsilon = 1e-5);
}

#[rstest]
fn looking_straight_down_keeps_last_heading(locomotion: Locomotion) {
    let mut rig = CameraRig::default();
    rig.resolve(Some((Vec3::X, Vec3::Z)));
    let basis = rig.resolve(Some((Vec3::NEG_Y, Vec3::Z)));
    let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
    locomotion.step(&mut body, Vec2::Y, basis, 0.5, 0.02);
    assert!(body.linear_velocity.x > 0.0);
    assert!(body.linear_velocity.is_finite());
}

#[rstest]
fn bigger_ball_spins_slower(locomotion: Locomotion) {
    let spin_after = |radius: f32| {
        let mut body = Body::new(Vec3::ZERO, 1.0, radius);
        body.linear_velocity = Vec3::new(0.0, 0.0, -6.0);
        locomotion.step(&mut body, Vec2::Y, CameraBasis::WORLD, radius, 0.02);
        body.angular_velocity.length()
    };
    let small = spin_after(0.5);
    let large = spin_after(2.0);
    assert!(large < small);
    assert_relative_eq!(small / large, 4.0, max_relative = 0.05);
}

#[rstest]
fn coasting_decays_to_rest() {
    let locomotion = Locomotion::default();
    let mut body = Body::new(Vec3::ZERO, 1.0, 0.5);
    body.linear_velocity = Vec3::new(6.0, 0.0, -2.0);
    for _ in 0..500 {
        locomotion.step(&mut body, Vec2::ZERO, CameraBasis::WORLD, 0.5, 0.02);
    }
    assert!(body.horizontal_velocity().length() < 1e-3);
}

#[rstest]
#[case::slow(1.0, 250)]
#[case::fast(10.0, 150)]
fn session_spin_tracks_rolling_contact(#[case] move_speed: f32, #[case] ticks: usize) {
    let mut config = flat_config(Vec::new());
    config.locomotion.move_speed = move_speed;
    let mut session = Session::new(&config);
    session.set_move_axis(Vec2::Y);
    for _ in 0..ticks {
        session.fixed_step(None, 0.02);
    }
    let player = session.player();
    let speed = player.body().horizontal_velocity().length();
    assert_relative_eq!(speed, move_speed, max_relative = 1e-3);
    let expected = speed / player.radius() * config.locomotion.spin_multiplier;
    assert_relative_eq!(
        player.body().angular_velocity.length(),
        expected,
        max_relative = 1e-2
    );
}

#[rstest]
fn session_spin_winds_down_with_the_ball() {
    let mut session = Session::new(&flat_config(Vec::new()));
    session.set_move_axis(Vec2::Y);
    for _ in 0..50 {
        session.fixed_step(None, 0.02);
    }
    session.set_move_axis(Vec2::ZERO);
    for _ in 0..200 {
        session.fixed_step(None, 0.02);
    }
    assert!(session.player().body().horizontal_velocity().length() < 1e-3);
    assert!(session.player().body().angular_velocity.length() < 1e-2);
}
