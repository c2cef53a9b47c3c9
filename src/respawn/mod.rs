//! Respawn domain: the game manager and the death/respawn sequence.

mod manager;
mod sequencer;
mod systems;


pub use manager::{GameManager, LightDebuff};
pub use sequencer::{RespawnPhase, RespawnSequencer, RespawnTiming, SequenceCommand, StepResult};

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::respawn::systems::{
    advance_respawn_sequence, apply_light_debuff, apply_sequence_commands,
};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameManager>()
            .add_message::<SequenceCommand>()
            .add_systems(
                Update,
                (advance_respawn_sequence, apply_sequence_commands)
                    .chain()
                    .in_set(ControllerSet::Sequence),
            )
            .add_systems(Update, apply_light_debuff.in_set(ControllerSet::Presentation));
    }
}
