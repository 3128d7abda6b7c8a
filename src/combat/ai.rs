//! Combat domain: patrol movement for walking enemies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::WalkingEnemy;

pub(crate) fn update_walking_enemies(
    mut query: Query<(&Transform, &mut WalkingEnemy, &mut LinearVelocity)>,
) {
    for (transform, mut walker, mut velocity) in &mut query {
        let offset = transform.translation.x - walker.patrol_origin;

        // Turn around at the patrol bounds
        if offset > walker.patrol_range && walker.direction.sign() > 0.0 {
            walker.direction = walker.direction.flipped();
        } else if offset < -walker.patrol_range && walker.direction.sign() < 0.0 {
            walker.direction = walker.direction.flipped();
        }

        velocity.x = walker.direction.sign() * walker.speed;
    }
}
