//! Loading configuration files.

use std::fs;
use std::path::PathBuf;

use roller::{ConfigError, Ease, RollerConfig};
use rstest::rstest;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("roller-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write scratch config");
    path
}

#[rstest]
fn partial_file_overrides_only_named_values() {
    let path = scratch_file(
        "partial.toml",
        r#"
        [growth]
        max_size = 6.0
        ease = "ease_out_cubic"

        [despawn]
        delay = 3.0
        "#,
    );
    let config = RollerConfig::load(&path).expect("config should load");
    fs::remove_file(&path).ok();

    assert_eq!(config.growth.max_size, 6.0);
    assert_eq!(config.growth.ease, Ease::EaseOutCubic);
    assert_eq!(config.despawn.delay, 3.0);
    assert!(config.despawn.enabled);
    assert_eq!(config.jump, RollerConfig::default().jump);
    assert_eq!(config.level, RollerConfig::default().level);
}

#[rstest]
fn invalid_values_fail_validation() {
    let path = scratch_file("invalid.toml", "[round]\nduration = 0.0\n");
    let result = RollerConfig::load(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(
        result,
        Err(ConfigError::Invalid {
            field: "round.duration",
            ..
        })
    ));
}

#[rstest]
fn unknown_ease_is_a_parse_error() {
    let result = RollerConfig::from_toml_str("[growth]\nease = \"bounce\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[rstest]
fn despawn_can_be_switched_off_from_toml() {
    let config = RollerConfig::from_toml_str("[despawn]\nenabled = false\n")
        .expect("config should parse");
    assert!(!config.despawn.enabled);
    assert_eq!(config.despawn.delay, RollerConfig::default().despawn.delay);
}
