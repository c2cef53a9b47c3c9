//! Movement domain: ground detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ground::probe_ground;
use crate::movement::{ControllerState, GameLayer, Player, SensorConfig};

pub(crate) fn sense_ground(
    spatial_query: SpatialQuery,
    sensor: Res<SensorConfig>,
    mut query: Query<(Entity, &Position, Option<&Collider>, &mut ControllerState), With<Player>>,
) {
    for (entity, position, collider, mut state) in &mut query {
        let was_grounded = state.is_grounded;

        state.is_grounded = probe_ground(
            &spatial_query,
            entity,
            position.0,
            collider,
            sensor.foot_width,
            sensor.ground_check_distance,
            GameLayer::Ground,
        );

        if state.is_grounded != was_grounded {
            debug!(
                "Ground contact changed: grounded={}, phase={:?}",
                state.is_grounded, state.phase
            );
        }
    }
}
