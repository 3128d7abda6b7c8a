//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod state;

pub(crate) use collisions::{detect_bounce_pads, detect_ground};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_action_windows, apply_bounce, apply_dash, apply_horizontal_movement, apply_jump,
    update_facing, update_pass_through, update_timers,
};
pub(crate) use state::determine_state;
