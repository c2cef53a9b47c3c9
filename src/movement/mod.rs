//! Movement domain: ground locomotion, the jump state machine and fall damage.

mod bootstrap;
mod components;
mod events;
mod fall_damage;
mod ground;
mod jumping;
mod resources;
mod running;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ControllerState, Facing, GameLayer, Ground, JumpPhase, Player, PlayerControl, PlayerLight,
};
pub use events::JumpAbilityGranted;
pub use fall_damage::FallDamageMonitor;
pub use resources::{ControllerConfig, MovementInput, SensorConfig};

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_air_physics, apply_ground_movement, apply_jump_upgrades, monitor_fall_damage,
    read_input, sense_ground, update_jump,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<JumpAbilityGranted>()
            .add_systems(Startup, spawn_player)
            .add_systems(FixedUpdate, sense_ground.in_set(ControllerSet::Sense))
            .add_systems(FixedUpdate, apply_ground_movement.in_set(ControllerSet::Move))
            .add_systems(FixedUpdate, apply_air_physics.in_set(ControllerSet::Jump))
            .add_systems(Update, read_input.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                (apply_jump_upgrades, update_jump)
                    .chain()
                    .in_set(ControllerSet::Jump),
            )
            .add_systems(Update, monitor_fall_damage.in_set(ControllerSet::FallDamage));
    }
}
