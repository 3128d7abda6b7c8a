//! Movement domain: unit tests for state classification and jump charges.

use super::systems::state::{StateInputs, classify_state};
use super::{Facing, MovementState, PlayerState, facing_for_axis};

fn grounded_idle() -> StateInputs {
    StateInputs {
        grounded: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// State classification
// -----------------------------------------------------------------------------

#[test]
fn test_dead_preempts_everything() {
    let inputs = StateInputs {
        dead: true,
        dashing: true,
        shooting: true,
        attacking: true,
        grounded: true,
        jumping: true,
        horizontal_speed: 5.0,
    };
    assert_eq!(classify_state(&inputs), PlayerState::Dead);
}

#[test]
fn test_action_priority_order() {
    // Dash > Shot > Attack
    let inputs = StateInputs {
        dashing: true,
        shooting: true,
        attacking: true,
        ..grounded_idle()
    };
    assert_eq!(classify_state(&inputs), PlayerState::Dash);

    let inputs = StateInputs {
        shooting: true,
        attacking: true,
        ..grounded_idle()
    };
    assert_eq!(classify_state(&inputs), PlayerState::Shot);

    let inputs = StateInputs {
        attacking: true,
        ..grounded_idle()
    };
    assert_eq!(classify_state(&inputs), PlayerState::Attack);
}

#[test]
fn test_walk_idle_threshold() {
    let mut inputs = grounded_idle();
    inputs.horizontal_speed = 0.05;
    assert_eq!(classify_state(&inputs), PlayerState::Idle);

    inputs.horizontal_speed = 0.2;
    assert_eq!(classify_state(&inputs), PlayerState::Walk);

    // Threshold applies to speed magnitude, not direction
    inputs.horizontal_speed = -0.2;
    assert_eq!(classify_state(&inputs), PlayerState::Walk);
}

#[test]
fn test_airborne_jump_vs_fall() {
    let inputs = StateInputs {
        jumping: true,
        ..Default::default()
    };
    assert_eq!(classify_state(&inputs), PlayerState::Jump);

    let inputs = StateInputs::default();
    assert_eq!(classify_state(&inputs), PlayerState::Fall);
}

#[test]
fn test_busy_windows_preempt_airborne_classification() {
    let inputs = StateInputs {
        attacking: true,
        jumping: true,
        ..Default::default()
    };
    assert_eq!(classify_state(&inputs), PlayerState::Attack);
}

// -----------------------------------------------------------------------------
// Jump charges
// -----------------------------------------------------------------------------

#[test]
fn test_jump_charges_exhaust() {
    let mut state = MovementState::default();

    assert!(state.try_start_jump(1, 0.1));
    assert_eq!(state.jumps_used, 1);
    assert!(state.is_jumping);

    // Second attempt before landing is dropped with no state change
    assert!(!state.try_start_jump(1, 0.1));
    assert_eq!(state.jumps_used, 1);
}

#[test]
fn test_double_jump_allowance() {
    let mut state = MovementState::default();
    assert!(state.try_start_jump(2, 0.1));
    assert!(state.try_start_jump(2, 0.1));
    assert!(!state.try_start_jump(2, 0.1));
    assert_eq!(state.jumps_used, 2);
}

#[test]
fn test_charges_reset_only_when_grounded_outside_jump_window() {
    let mut state = MovementState::default();
    state.try_start_jump(1, 0.1);

    // Still airborne: no reset
    state.on_ground = false;
    state.tick(0.2);
    assert_eq!(state.jumps_used, 1);

    // Grounded but still inside the jump window: no reset
    state.try_start_jump(2, 0.5);
    state.on_ground = true;
    state.tick(0.1);
    assert!(state.is_jumping);
    assert_ne!(state.jumps_used, 0);

    // Window elapsed while grounded: reset
    state.tick(0.5);
    assert!(!state.is_jumping);
    assert_eq!(state.jumps_used, 0);
}

#[test]
fn test_dash_refused_on_ground() {
    let mut state = MovementState {
        on_ground: true,
        ..Default::default()
    };
    assert!(!state.try_start_dash(0.25));
    assert!(!state.is_dashing);

    state.on_ground = false;
    assert!(state.try_start_dash(0.25));
    assert!(state.is_dashing);

    // No restart while a dash window is open
    assert!(!state.try_start_dash(0.25));
}

#[test]
fn test_countdown_windows_expire() {
    let mut state = MovementState {
        is_dashing: true,
        dash_timer: 0.25,
        attack_timer: 0.25,
        shot_timer: 0.25,
        ..Default::default()
    };

    state.tick(0.1);
    assert!(state.is_dashing);
    assert!(state.attack_timer > 0.0);

    state.tick(0.2);
    assert!(!state.is_dashing);
    assert!(state.attack_timer <= 0.0);
    assert!(state.shot_timer <= 0.0);
}

// -----------------------------------------------------------------------------
// Facing
// -----------------------------------------------------------------------------

#[test]
fn test_facing_follows_input() {
    assert_eq!(facing_for_axis(1.0, 1.0, Facing::Left), Facing::Right);
    assert_eq!(facing_for_axis(-1.0, 1.0, Facing::Right), Facing::Left);
}

#[test]
fn test_facing_sticky_on_zero_input() {
    assert_eq!(facing_for_axis(0.0, 1.0, Facing::Left), Facing::Left);
    assert_eq!(facing_for_axis(0.05, 1.0, Facing::Right), Facing::Right);
}

#[test]
fn test_facing_mirrored_under_inverted_gravity() {
    assert_eq!(facing_for_axis(1.0, -1.0, Facing::Right), Facing::Left);
    assert_eq!(facing_for_axis(-1.0, -1.0, Facing::Left), Facing::Right);
}

#[test]
fn test_world_sign_accounts_for_gravity() {
    assert_eq!(Facing::Right.world_sign(1.0), 1.0);
    assert_eq!(Facing::Right.world_sign(-1.0), -1.0);
    assert_eq!(Facing::Left.world_sign(-1.0), 1.0);
}
