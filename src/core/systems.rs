//! Core domain: startup systems.

use bevy::prelude::*;

use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn enter_playing(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}
