//! Gravity domain: unit tests for the field sign and inversion math.

use super::{GravityField, rotation_for};
use crate::combat::WalkDirection;

#[test]
fn test_default_gravity_is_normal() {
    let field = GravityField::default();
    assert!(!field.is_inverted());
    assert_eq!(field.sign(), 1.0);
    assert_eq!(field.label(), "Normal");
}

#[test]
fn test_toggle_flips_sign() {
    let mut field = GravityField::default();
    field.toggle();
    assert!(field.is_inverted());
    assert_eq!(field.sign(), -1.0);
    assert_eq!(field.label(), "Inverse");
}

#[test]
fn test_double_toggle_restores_everything() {
    let mut field = GravityField::default();
    let before = field;
    let direction = WalkDirection::Left;
    let rotation = rotation_for(field.is_inverted());

    field.toggle();
    let flipped_direction = direction.flipped();
    field.toggle();

    assert_eq!(field, before);
    assert_eq!(flipped_direction.flipped(), direction);
    assert_eq!(rotation_for(field.is_inverted()), rotation);
}

#[test]
fn test_rotation_for_inversion() {
    assert_eq!(rotation_for(false), bevy::math::Quat::IDENTITY);
    // 180 degrees around Z
    let flipped = rotation_for(true);
    let up = flipped * bevy::math::Vec3::Y;
    assert!((up.y + 1.0).abs() < 1e-5);
}
