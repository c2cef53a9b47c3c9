//! Core domain: game state, schedule ordering and world setup.

mod state;
mod systems;

pub use state::{ControllerSet, GameState};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::systems::{enter_playing, setup_camera};

/// World units per meter. Tuning values in `assets/data/tuning.ron` are in pixels.
pub const PIXELS_PER_METER: f32 = 32.0;

/// Standard gravity in pixels per second squared.
pub const BASE_GRAVITY: f32 = 9.81 * PIXELS_PER_METER;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(Gravity(Vec2::NEG_Y * BASE_GRAVITY))
            .insert_resource(Time::<Fixed>::from_hz(50.0))
            .configure_sets(
                FixedUpdate,
                (
                    ControllerSet::Sense,
                    ControllerSet::Move,
                    ControllerSet::Jump,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Jump,
                    ControllerSet::FallDamage,
                    ControllerSet::Triggers,
                    ControllerSet::Sequence,
                    ControllerSet::Presentation,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Jump,
                    ControllerSet::FallDamage,
                    ControllerSet::Triggers,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, (setup_camera, enter_playing));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(crate::dev_tools::plugin);
    }
}
