//! UI domain: respawn overlay, prompt and the victory banner.

mod respawn;
mod victory;


pub use respawn::{FadeOverlay, RespawnPrompt};
pub use victory::VictoryBanner;

use bevy::prelude::*;

use crate::core::{ControllerSet, GameState};
use crate::ui::respawn::{spawn_respawn_ui, toggle_respawn_prompt, update_fade_overlay};
use crate::ui::victory::spawn_victory_banner;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_respawn_ui)
            .add_systems(OnEnter(GameState::Won), spawn_victory_banner)
            .add_systems(
                Update,
                (update_fade_overlay, toggle_respawn_prompt).in_set(ControllerSet::Presentation),
            );
    }
}
