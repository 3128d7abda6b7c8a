//! Combat domain: health ledger, teams, and damage-dealing components.

use bevy::prelude::*;

/// Team affiliation; damage between members of the same team is illegal.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Damage is legal only across team lines.
pub fn damage_is_legal(attacker: Team, defender: Team) -> bool {
    attacker != defender
}

/// Resolve one contact into a damage application, or nothing when the
/// contact is illegal.
pub fn resolve_contact(
    attacker: Entity,
    attacker_team: Team,
    target: Entity,
    target_team: Team,
    amount: i32,
) -> Option<crate::combat::events::DamageEvent> {
    if !damage_is_legal(attacker_team, target_team) {
        return None;
    }
    Some(crate::combat::events::DamageEvent {
        attacker,
        attacker_team,
        target,
        amount,
    })
}

/// Hit point ledger. Health never drops below zero and the death transition
/// fires exactly once; damage after death is a no-op.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    dead: bool,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    /// Apply damage, clamped at zero. Returns true only on the tick the
    /// entity dies.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.dead {
            return false;
        }
        self.current = (self.current - amount.max(0)).max(0);
        if self.current == 0 {
            self.dead = true;
            true
        } else {
            false
        }
    }

    /// Refill to full and clear the death flag.
    pub fn restore(&mut self) {
        self.current = self.max;
        self.dead = false;
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// One-shot contact damage: applied once per overlap-begin, optionally
/// consuming the attacking entity after a successful hit.
#[derive(Component, Debug, Clone, Copy)]
pub struct ContactDamage {
    pub amount: i32,
    pub despawn_after_hit: bool,
}

/// Persistent melee hitbox that can be armed and disarmed. While armed it
/// damages every legal overlapping target every tick.
#[derive(Component, Debug)]
pub struct MeleeHitbox {
    pub owner: Entity,
    pub amount: i32,
    pub armed: bool,
    pub half_extents: Vec2,
    /// Horizontal offset from the owner, flipped with facing
    pub offset: f32,
}

impl MeleeHitbox {
    /// Local-space x offset for the given facing. The hitbox is a child of
    /// its owner, whose 180-degree rotation under inverted gravity already
    /// mirrors local x into world space, so only the local facing sign
    /// applies here.
    pub fn local_offset(&self, facing: crate::movement::Facing) -> f32 {
        self.offset * facing.sign()
    }
}

/// One tick of armed-hitbox delivery: every legal overlapping target gets
/// one damage application. The owner is skipped; there is no per-target
/// memo, so the same overlap set yields the same applications next tick.
pub fn armed_hitbox_damage(
    owner: Entity,
    attacker_team: Team,
    amount: i32,
    overlaps: &[(Entity, Team)],
) -> Vec<crate::combat::events::DamageEvent> {
    overlaps
        .iter()
        .filter(|(entity, _)| *entity != owner)
        .filter_map(|(entity, team)| resolve_contact(owner, attacker_team, *entity, *team, amount))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDirection {
    Left,
    Right,
}

impl WalkDirection {
    pub fn sign(&self) -> f32 {
        match self {
            WalkDirection::Left => -1.0,
            WalkDirection::Right => 1.0,
        }
    }

    pub fn flipped(&self) -> WalkDirection {
        match self {
            WalkDirection::Left => WalkDirection::Right,
            WalkDirection::Right => WalkDirection::Left,
        }
    }
}

/// Patrol enemy that walks back and forth between its patrol bounds.
/// Its direction preference reverses when gravity inverts.
#[derive(Component, Debug)]
pub struct WalkingEnemy {
    pub direction: WalkDirection,
    pub speed: f32,
    pub patrol_origin: f32,
    pub patrol_range: f32,
}
