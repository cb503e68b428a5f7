//! Growth laws: bounded monotone size, unbounded mass, strict-increase shake.

use approx::assert_relative_eq;
use roller::{GrowthModel, GrowthSettings};
use rstest::{fixture, rstest};

#[fixture]
fn settings() -> GrowthSettings {
    GrowthSettings {
        base_size: 1.0,
        max_size: 4.0,
        growth_rate: 0.25,
        mass_growth_rate: 0.5,
        ..GrowthSettings::default()
    }
}

#[rstest]
fn size_is_monotone_and_bounded(settings: GrowthSettings) {
    let model = GrowthModel::new(settings);
    let mut previous = model.size_for(0.0);
    for step in 0..=400_u16 {
        let size = model.size_for(f32::from(step) * 0.1);
        assert!(size >= previous, "size fell at {step}");
        assert!((settings.base_size..=settings.max_size).contains(&size));
        previous = size;
    }
    assert_relative_eq!(previous, settings.max_size);
}

#[rstest]
#[case::first_growth(4.0, true)]
#[case::zero_points(0.0, false)]
#[case::negative_points(-1.0, false)]
fn shake_needs_strict_increase(
    settings: GrowthSettings,
    #[case] points: f32,
    #[case] shakes: bool,
) {
    let mut model = GrowthModel::new(settings);
    let change = model.add_points(points, None);
    assert_eq!(change.grew(), shakes);
    assert_eq!(change.shake.is_some(), shakes);
}

#[rstest]
fn capped_growth_never_shakes_but_adds_mass(settings: GrowthSettings) {
    let mut model = GrowthModel::new(settings);
    model.add_points(12.0, None);
    assert_relative_eq!(model.target_size(), 4.0);
    let change = model.add_points(10.0, Some(1.0));
    assert!(!change.grew());
    assert_relative_eq!(model.total_points(), 22.0);
    assert_relative_eq!(change.mass, 12.0);
}

#[rstest]
fn override_replaces_default_shake(settings: GrowthSettings) {
    let mut model = GrowthModel::new(settings);
    assert_eq!(
        model.add_points(1.0, None).shake,
        Some(settings.default_shake)
    );
    assert_eq!(model.add_points(1.0, Some(0.9)).shake, Some(0.9));
}
