//! Movement domain: player components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Horizontal input below this magnitude is treated as "no input".
pub const AXIS_DEADZONE: f32 = 0.1;

/// Horizontal speed below this magnitude still counts as standing still.
pub const WALK_SPEED_EPSILON: f32 = 0.1;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, solid platforms)
    Ground,
    /// Platforms the player passes through while ascending
    PassThrough,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Sensors (gravity zones, triggers) - should not block movement
    Zone,
    /// Projectiles in flight
    Projectile,
    /// Damaging terrain (lava)
    Hazard,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for platforms that stop colliding with an ascending player
#[derive(Component, Debug)]
pub struct PassThroughPlatform;

/// Refunds jump charges and re-launches the player on contact
#[derive(Component, Debug)]
pub struct BouncePad;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// World-space horizontal sign for this facing. Inverted gravity rotates
    /// the actor 180 degrees, which mirrors its local right axis.
    pub fn world_sign(&self, gravity_sign: f32) -> f32 {
        self.sign() * gravity_sign
    }
}

/// Facing from the horizontal axis, mirrored under inverted gravity.
/// Zero input retains the previous facing (sticky).
pub fn facing_for_axis(axis_x: f32, gravity_sign: f32, current: Facing) -> Facing {
    if axis_x > AXIS_DEADZONE {
        if gravity_sign > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    } else if axis_x < -AXIS_DEADZONE {
        if gravity_sign > 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    } else {
        current
    }
}

/// Discrete action state reported by the player state machine.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    Dead,
    Dash,
    Shot,
    Attack,
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    /// Time remaining in the jump hold window
    pub jump_timer: f32,
    pub is_jumping: bool,
    /// Jumps spent since last grounded
    pub jumps_used: u8,
    pub dash_timer: f32,
    pub is_dashing: bool,
    /// Time remaining in the attack busy window
    pub attack_timer: f32,
    /// Time remaining in the shot busy window
    pub shot_timer: f32,
}

impl MovementState {
    /// Spend a jump charge and open the jump hold window.
    /// Returns false (and changes nothing) when no charges remain.
    pub fn try_start_jump(&mut self, allowed_jumps: u8, duration: f32) -> bool {
        if self.jumps_used >= allowed_jumps {
            return false;
        }
        self.jumps_used += 1;
        self.is_jumping = true;
        self.jump_timer = duration;
        true
    }

    /// Open the dash window. Dash is an air move: refused while grounded
    /// or already dashing, with no state change.
    pub fn try_start_dash(&mut self, duration: f32) -> bool {
        if self.on_ground || self.is_dashing {
            return false;
        }
        self.is_dashing = true;
        self.dash_timer = duration;
        true
    }

    /// Advance all countdown windows by `dt` and reset jump charges when
    /// grounded outside a jump window.
    pub fn tick(&mut self, dt: f32) {
        if self.is_jumping {
            self.jump_timer -= dt;
            if self.jump_timer <= 0.0 {
                self.is_jumping = false;
            }
        }
        if self.is_dashing {
            self.dash_timer -= dt;
            if self.dash_timer <= 0.0 {
                self.is_dashing = false;
            }
        }
        if self.attack_timer > 0.0 {
            self.attack_timer -= dt;
        }
        if self.shot_timer > 0.0 {
            self.shot_timer -= dt;
        }
        if self.on_ground && !self.is_jumping {
            self.jumps_used = 0;
        }
    }
}

/// Collision layers for the player body. While ascending, the pass-through
/// layer drops out of the filter so the player can move up through platforms.
pub fn player_collision_layers(ascending: bool) -> CollisionLayers {
    let mut filters = LayerMask::from([
        GameLayer::Default,
        GameLayer::Ground,
        GameLayer::Enemy,
        GameLayer::Zone,
        GameLayer::Projectile,
        GameLayer::Hazard,
    ]);
    if !ascending {
        filters.add(GameLayer::PassThrough);
    }
    CollisionLayers::new(GameLayer::Player, filters)
}
