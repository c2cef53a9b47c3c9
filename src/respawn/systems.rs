//! Respawn domain: driving the sequence and applying its commands.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::SfxCue;
use crate::movement::{
    ControllerState, FallDamageMonitor, MovementInput, Player, PlayerControl, PlayerLight,
};
use crate::respawn::manager::GameManager;
use crate::respawn::sequencer::{SequenceCommand, StepResult};
use crate::sprites::{AnimationCue, AnimationCueEvent, AnimationFlags};

pub(crate) fn advance_respawn_sequence(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut manager: ResMut<GameManager>,
    mut commands_out: MessageWriter<SequenceCommand>,
) {
    let sequencer = manager.sequencer_mut();
    let result = sequencer.tick(time.delta_secs(), input.confirm_just_pressed);

    for command in sequencer.drain_commands() {
        debug!("Respawn sequence: {:?}", command);
        commands_out.write(command);
    }

    if result == StepResult::Finished {
        info!("Respawn complete");
    }
}

pub(crate) fn apply_sequence_commands(
    mut commands: Commands,
    mut reader: MessageReader<SequenceCommand>,
    mut sfx: MessageWriter<SfxCue>,
    mut cues: MessageWriter<AnimationCueEvent>,
    mut player_query: Query<
        (
            Entity,
            &mut PlayerControl,
            &mut ControllerState,
            &mut FallDamageMonitor,
            &mut LinearVelocity,
            &mut Position,
            &mut Transform,
            Option<&mut AnimationFlags>,
        ),
        With<Player>,
    >,
) {
    let Ok((
        entity,
        mut control,
        mut state,
        mut monitor,
        mut velocity,
        mut position,
        mut transform,
        mut flags,
    )) = player_query.single_mut()
    else {
        // Nothing to drive; drop the commands
        for _ in reader.read() {}
        return;
    };

    for command in reader.read() {
        match *command {
            SequenceCommand::DisableControl => {
                control.enabled = false;
                velocity.0 = Vec2::ZERO;
                commands.entity(entity).insert(RigidBodyDisabled);
                if let Some(flags) = flags.as_mut() {
                    flags.clear();
                }
                sfx.write(SfxCue::JumpLoopStop);
                cues.write(AnimationCueEvent {
                    entity,
                    cue: AnimationCue::Death,
                });
            }
            SequenceCommand::Teleport(target) => {
                position.0 = target;
                transform.translation.x = target.x;
                transform.translation.y = target.y;
                monitor.reset(target.y);
            }
            SequenceCommand::PlayRespawn => {
                cues.write(AnimationCueEvent {
                    entity,
                    cue: AnimationCue::Respawn,
                });
            }
            SequenceCommand::RestoreControl => {
                commands.entity(entity).remove::<RigidBodyDisabled>();
                velocity.0 = Vec2::ZERO;
                state.reset();
                monitor.reset(position.y);
                control.enabled = true;
                cues.write(AnimationCueEvent {
                    entity,
                    cue: AnimationCue::Idle,
                });
            }
            // Prompt and hint visibility belong to the UI
            SequenceCommand::ShowPrompt { .. } | SequenceCommand::HidePrompt { .. } => {}
        }
    }
}

pub(crate) fn apply_light_debuff(
    time: Res<Time>,
    mut manager: ResMut<GameManager>,
    mut lights: Query<(&PlayerLight, &mut Transform)>,
) {
    manager.tick_light_debuff(time.delta_secs());
    let scale = manager.light_scale();

    for (light, mut transform) in &mut lights {
        transform.scale = Vec3::splat(light.base_scale * scale);
    }
}
