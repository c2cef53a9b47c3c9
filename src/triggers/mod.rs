//! Triggers domain: checkpoints, hint zones, pickups, hazards and the goal.

mod components;
mod systems;


pub use components::{Checkpoint, DeathHintZone, KillZone, Patrol, PowerUp, WaterMonster, WinZone};

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::triggers::systems::{
    collect_power_ups, enter_kill_zones, enter_win_zones, expire_death_hints, light_checkpoints,
    patrol_water_monsters, touch_water_monsters, track_death_hint_zones,
};

pub struct TriggersPlugin;

impl Plugin for TriggersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                light_checkpoints,
                (track_death_hint_zones, expire_death_hints).chain(),
                collect_power_ups,
                enter_win_zones,
                enter_kill_zones,
                patrol_water_monsters,
                touch_water_monsters,
            )
                .in_set(ControllerSet::Triggers),
        );
    }
}
