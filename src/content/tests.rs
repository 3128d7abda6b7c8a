//! Content domain: unit tests for tuning deserialization and file loading.

use std::path::Path;

use super::loader::load_tuning_file;
use super::data::TuningFile;

// ----- parsing -----

#[test]
fn empty_file_takes_defaults() {
    let tuning: TuningFile = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str("()")
        .unwrap();
    assert_eq!(tuning.movement.allowed_jumps, 2);
    assert_eq!(tuning.combat.player_health, 5);
    assert_eq!(tuning.shooter.fire_rate, 0.25);
    assert_eq!(tuning.world.lava_columns, 100);
}

#[test]
fn partial_section_overrides_only_named_fields() {
    let source = r#"(
        movement: (
            movement_speed: 300.0,
            allowed_jumps: 3,
        ),
        shooter: (
            fire_rate: 0.5,
        ),
    )"#;
    let tuning: TuningFile = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(source)
        .unwrap();
    assert_eq!(tuning.movement.movement_speed, 300.0);
    assert_eq!(tuning.movement.allowed_jumps, 3);
    // untouched fields keep their defaults
    assert_eq!(tuning.movement.jump_power, 620.0);
    assert_eq!(tuning.shooter.fire_rate, 0.5);
    assert_eq!(tuning.shooter.projectile_damage, 1);
    assert_eq!(tuning.combat.touch_damage, 1);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let result: Result<TuningFile, _> = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str("( movement: ( movement_speed: \"fast\" ) )");
    assert!(result.is_err());
}

// ----- file loading -----

#[test]
fn missing_file_reports_io_error() {
    let err = load_tuning_file(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.contains("IO error"));
    assert!(err.to_string().contains("does/not/exist.ron"));
}

#[test]
fn shipped_tuning_file_parses() {
    let tuning = load_tuning_file(Path::new("assets/config/tuning.ron")).unwrap();
    assert!(tuning.movement.movement_speed > 0.0);
    assert!(tuning.shooter.fire_rate > 0.0);
    assert!(tuning.world.lava_fill_delay > 0.0);
}
