//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::sense_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_air_physics, apply_ground_movement, apply_jump_upgrades, monitor_fall_damage,
    update_jump,
};
