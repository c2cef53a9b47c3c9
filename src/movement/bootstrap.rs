//! Movement domain: player bootstrap from loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::Tuning;
use crate::level::PLAYER_SPAWN;
use crate::movement::{
    ControllerState, FallDamageMonitor, GameLayer, Player, PlayerControl, PlayerLight,
};
use crate::respawn::GameManager;
use crate::sprites::{AnimationController, AnimationFlags};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(16.0, 24.0);

const PLAYER_LIGHT_SIZE: f32 = 160.0;

/// Spawn the player with its tuning and make its start position the first
/// respawn point.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<Tuning>,
    gravity: Res<Gravity>,
    mut manager: ResMut<GameManager>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let config = tuning.controller.clone();
    let state = ControllerState::new(&config, gravity.0.y);

    info!(
        "Spawning player at {:?}: rise_speed={:.1}, jump_height={:.1}, rise_gravity={:.3}",
        PLAYER_SPAWN, config.max_rise_speed, config.max_jump_height, state.rise_gravity_scale
    );

    manager.update_respawn_point(PLAYER_SPAWN);

    commands
        .spawn((
            // Identity & control
            (
                Player,
                PlayerControl::default(),
                FallDamageMonitor::new(PLAYER_SPAWN.y),
                AnimationFlags::default(),
                AnimationController::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.95, 0.9, 0.8),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(PLAYER_SPAWN.extend(1.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(config.fall_gravity_scale),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Hazard, GameLayer::Sensor],
                ),
            ),
            config,
            state,
        ))
        .with_child((
            PlayerLight { base_scale: 1.0 },
            Sprite {
                color: Color::srgba(1.0, 0.85, 0.5, 0.18),
                custom_size: Some(Vec2::splat(PLAYER_LIGHT_SIZE)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, -0.5),
        ));
}
