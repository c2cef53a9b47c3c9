//! Movement domain: locomotion systems for both clocks.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::SfxCue;
use crate::movement::ground::probe_corner_obstruction;
use crate::movement::running::ground_step;
use crate::movement::{
    ControllerConfig, ControllerState, FallDamageMonitor, GameLayer, JumpAbilityGranted,
    MovementInput, Player, PlayerControl,
};
use crate::respawn::GameManager;
use crate::sprites::{AnimationCue, AnimationCueEvent, AnimationFlags};

pub(crate) fn apply_ground_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<
        (
            &ControllerConfig,
            &PlayerControl,
            &mut ControllerState,
            &mut LinearVelocity,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (config, control, mut state, mut velocity, mut transform) in &mut query {
        if !control.enabled {
            continue;
        }

        // Facing follows input whether or not we're on the ground
        if let Some(facing) = state.face(input.axis) {
            transform.scale.x = transform.scale.x.abs() * facing.sign();
        }

        if let Some(vx) = ground_step(config, input.axis, velocity.x, velocity.y, dt) {
            velocity.x = vx;
        }
    }
}

pub(crate) fn apply_air_physics(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &ControllerConfig,
            &PlayerControl,
            &mut ControllerState,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Position,
            Option<&Collider>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, config, control, mut state, mut velocity, mut gravity, mut position, collider) in
        &mut query
    {
        if !control.enabled {
            continue;
        }

        // Only look for snagged corners while ascending through the air
        let corner = if velocity.y > 0.0 && !state.is_grounded {
            probe_corner_obstruction(
                &spatial_query,
                entity,
                position.0,
                collider,
                config.corner_correction_distance,
                GameLayer::Ground,
            )
        } else {
            default()
        };

        let report = state.fixed_tick(config, input.axis, &mut velocity.0, corner, dt);
        gravity.0 = report.gravity_scale;

        if report.nudge_x != 0.0 {
            position.0.x += report.nudge_x;
            debug!("Corner correction: nudged {:.2}", report.nudge_x);
        }
    }
}

pub(crate) fn update_jump(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut sfx: MessageWriter<SfxCue>,
    mut cues: MessageWriter<AnimationCueEvent>,
    mut query: Query<
        (
            Entity,
            &ControllerConfig,
            &PlayerControl,
            &mut ControllerState,
            &mut LinearVelocity,
            Option<&mut AnimationFlags>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    for (entity, config, control, mut state, mut velocity, flags) in &mut query {
        if !control.enabled {
            continue;
        }

        let report = state.frame_tick(config, &input, &mut velocity.0, now, dt);

        if report.windup_started {
            debug!("Jump windup started");
        }
        if report.windup_aborted {
            debug!("Jump windup aborted: left the ground");
            cues.write(AnimationCueEvent {
                entity,
                cue: AnimationCue::Down,
            });
        }
        if let Some(launch) = report.launched {
            debug!("Jump launched: {:?}, vy={:.1}", launch, velocity.y);
            sfx.write(SfxCue::JumpLoopStart);
        }
        if report.fall_started {
            sfx.write(SfxCue::FallStart);
        }
        if report.landed {
            sfx.write(SfxCue::JumpLoopStop);
        }
        if report.play_land_sound {
            sfx.write(SfxCue::Land);
        }

        if let Some(mut flags) = flags {
            flags.is_moving = input.axis != 0.0;
            flags.is_preparing = report.flags.is_preparing;
            flags.is_rising = report.flags.is_rising;
            flags.is_falling = report.flags.is_falling;
        }
    }
}

pub(crate) fn monitor_fall_damage(
    mut manager: ResMut<GameManager>,
    mut query: Query<
        (
            &Position,
            &LinearVelocity,
            &ControllerConfig,
            &ControllerState,
            &PlayerControl,
            &mut FallDamageMonitor,
        ),
        With<Player>,
    >,
) {
    for (position, velocity, config, state, control, mut monitor) in &mut query {
        if !control.enabled {
            continue;
        }

        let Some(landing) = monitor.observe(
            position.y,
            velocity.y,
            state.is_grounded,
            config.lethal_fall_height,
        ) else {
            continue;
        };

        debug!(
            "Landed: apex={:.1}, ground={:.1}, fall={:.1}",
            landing.apex_y, landing.landing_y, landing.fall_distance
        );

        if landing.lethal {
            info!(
                "Lethal fall of {:.1} (limit {:.1})",
                landing.fall_distance, config.lethal_fall_height
            );
            manager.trigger_death();
        }
    }
}

pub(crate) fn apply_jump_upgrades(
    mut events: MessageReader<JumpAbilityGranted>,
    gravity: Res<Gravity>,
    mut query: Query<(&mut ControllerConfig, &mut ControllerState), With<Player>>,
) {
    for event in events.read() {
        let Ok((mut config, mut state)) = query.single_mut() else {
            warn!("Jump upgrade granted but no player exists");
            continue;
        };

        config.add_jump_ability(event.height_delta, event.speed_delta);
        state.recompute_rise_gravity(&config, gravity.0.y);

        info!(
            "Jump upgraded: height={:.1}, rise_speed={:.1}, rise_gravity={:.3}",
            config.max_jump_height, config.max_rise_speed, state.rise_gravity_scale
        );
    }
}
