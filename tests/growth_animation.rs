//! Display-size animation lands exactly and restarts from what is shown.

use approx::assert_relative_eq;
use roller::{Ease, GrowthAnimator};
use rstest::rstest;

#[rstest]
#[case::sixty_hz(1.0 / 60.0)]
#[case::uneven(0.033)]
#[case::tenths(0.1)]
fn lands_exactly_on_target(#[case] dt: f32) {
    let mut animator = GrowthAnimator::new(1.0, 0.5, Ease::SmoothStep);
    animator.retarget(3.0);
    let mut elapsed = 0.0;
    while elapsed < 0.5 {
        animator.advance(dt);
        elapsed += dt;
    }
    assert_eq!(animator.displayed(), 3.0);
    assert!(!animator.is_animating());
}

#[rstest]
fn display_never_overshoots() {
    let mut animator = GrowthAnimator::new(1.0, 0.5, Ease::EaseInOutCubic);
    animator.retarget(3.0);
    for _ in 0..40 {
        let shown = animator.advance(0.016);
        assert!((1.0..=3.0).contains(&shown));
    }
}

#[rstest]
fn retarget_restarts_from_displayed_size() {
    let mut animator = GrowthAnimator::new(1.0, 0.5, Ease::Linear);
    animator.retarget(3.0);
    // Linear: 0.1 s of 0.5 s covers a fifth of the way, so 1.4.
    animator.advance(0.1);
    assert_relative_eq!(animator.displayed(), 1.4, epsilon = 1e-5);

    animator.retarget(4.0);
    assert_relative_eq!(animator.displayed(), 1.4, epsilon = 1e-5);
    animator.advance(0.25);
    assert_relative_eq!(animator.displayed(), 2.7, epsilon = 1e-4);
    animator.advance(0.25);
    assert_eq!(animator.displayed(), 4.0);
}
