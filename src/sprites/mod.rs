//! Sprites module: animation state resolution and sprite tinting.

pub mod animation;


use bevy::prelude::*;

pub use animation::*;

use crate::core::ControllerSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationCueEvent>().add_systems(
            Update,
            (animation_state_machine, tint_animated_sprites)
                .chain()
                .in_set(ControllerSet::Presentation),
        );
    }
}
