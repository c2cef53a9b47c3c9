//! Triggers domain: contact handling for sensor volumes and hazard patrols.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::SfxCue;
use crate::core::GameState;
use crate::movement::{JumpAbilityGranted, Player};
use crate::respawn::GameManager;
use crate::triggers::components::{
    Checkpoint, DeathHintZone, KillZone, PowerUp, WaterMonster, WinZone,
};

const LIT_CHECKPOINT_COLOR: Color = Color::srgb(1.0, 0.8, 0.35);

/// The entity the player touched in a collision pair, if the player is in it.
pub(crate) fn touched_by_player(
    player: Entity,
    collider1: Entity,
    collider2: Entity,
) -> Option<Entity> {
    if collider1 == player {
        Some(collider2)
    } else if collider2 == player {
        Some(collider1)
    } else {
        None
    }
}

pub(crate) fn light_checkpoints(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut manager: ResMut<GameManager>,
    mut sfx: MessageWriter<SfxCue>,
    player_query: Query<Entity, With<Player>>,
    mut checkpoints: Query<(&mut Checkpoint, &Transform, Option<&mut Sprite>)>,
) {
    let Ok(player) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = touched_by_player(player, event.collider1, event.collider2) else {
            continue;
        };
        let Ok((mut checkpoint, transform, sprite)) = checkpoints.get_mut(other) else {
            continue;
        };
        if !checkpoint.light() {
            continue;
        }

        manager.update_respawn_point(transform.translation.truncate());
        sfx.write(SfxCue::Checkpoint);
        if let Some(mut sprite) = sprite {
            sprite.color = LIT_CHECKPOINT_COLOR;
        }
        info!("Checkpoint lit at {:?}", transform.translation.truncate());
    }
}

pub(crate) fn track_death_hint_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut manager: ResMut<GameManager>,
    player_query: Query<Entity, With<Player>>,
    mut zones: Query<&mut DeathHintZone>,
) {
    let Ok(player) = player_query.single() else {
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = touched_by_player(player, event.collider1, event.collider2) else {
            continue;
        };
        if let Ok(mut zone) = zones.get_mut(other) {
            zone.enter();
            manager.set_death_hint(zone.hint);
            debug!("Death hint armed: {:?}", zone.hint);
        }
    }

    for event in collision_end_events.read() {
        let Some(other) = touched_by_player(player, event.collider1, event.collider2) else {
            continue;
        };
        if let Ok(mut zone) = zones.get_mut(other) {
            zone.exit();
            debug!("Left hint zone; clearing in {:.1}s", zone.clear_delay);
        }
    }
}

pub(crate) fn expire_death_hints(
    time: Res<Time>,
    mut manager: ResMut<GameManager>,
    mut zones: Query<&mut DeathHintZone>,
) {
    let dt = time.delta_secs();
    for mut zone in &mut zones {
        if zone.tick(dt) {
            manager.clear_death_hint(zone.hint);
            debug!("Death hint cleared: {:?}", zone.hint);
        }
    }
}

pub(crate) fn collect_power_ups(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut grants: MessageWriter<JumpAbilityGranted>,
    mut sfx: MessageWriter<SfxCue>,
    player_query: Query<Entity, With<Player>>,
    power_ups: Query<&PowerUp>,
) {
    let Ok(player) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = touched_by_player(player, event.collider1, event.collider2) else {
            continue;
        };
        let Ok(power_up) = power_ups.get(other) else {
            continue;
        };

        grants.write(JumpAbilityGranted {
            height_delta: power_up.height_amount,
            speed_delta: power_up.speed_amount,
        });
        sfx.write(SfxCue::Pickup);
        commands.entity(other).despawn();
    }
}

pub(crate) fn enter_win_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut manager: ResMut<GameManager>,
    mut next_state: ResMut<NextState<GameState>>,
    player_query: Query<Entity, With<Player>>,
    mut zones: Query<&mut WinZone>,
) {
    let Ok(player) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = touched_by_player(player, event.collider1, event.collider2) else {
            continue;
        };
        let Ok(mut zone) = zones.get_mut(other) else {
            continue;
        };
        if zone.triggered {
            continue;
        }
        if manager.trigger_win() {
            zone.triggered = true;
            next_state.set(GameState::Won);
        }
    }
}

pub(crate) fn enter_kill_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut manager: ResMut<GameManager>,
    player_query: Query<Entity, With<Player>>,
    kill_zones: Query<(), With<KillZone>>,
) {
    let Ok(player) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = touched_by_player(player, event.collider1, event.collider2) else {
            continue;
        };
        if kill_zones.contains(other) {
            manager.trigger_death();
        }
    }
}

pub(crate) fn patrol_water_monsters(
    time: Res<Time>,
    mut monsters: Query<(&mut WaterMonster, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut monster, mut transform) in &mut monsters {
        transform.translation.x = monster.patrol.step(transform.translation.x, dt);
        transform.scale.x = transform.scale.x.abs() * monster.patrol.direction;
    }
}

pub(crate) fn touch_water_monsters(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut manager: ResMut<GameManager>,
    mut sfx: MessageWriter<SfxCue>,
    player_query: Query<Entity, With<Player>>,
    monsters: Query<&WaterMonster>,
) {
    let Ok(player) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = touched_by_player(player, event.collider1, event.collider2) else {
            continue;
        };
        let Ok(monster) = monsters.get(other) else {
            continue;
        };

        sfx.write(SfxCue::Hit);
        manager.trigger_light_debuff(monster.debuff_duration, monster.shrink_ratio);
        commands.entity(other).despawn();
    }
}
