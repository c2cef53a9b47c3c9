mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod dev_tools;
mod level;
mod movement;
mod respawn;
mod sprites;
mod triggers;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::PIXELS_PER_METER;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Candlelight".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_METER))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            respawn::RespawnPlugin,
            triggers::TriggersPlugin,
            level::LevelPlugin,
            sprites::SpritesPlugin,
            audio::SfxPlugin,
            ui::UiPlugin,
        ))
        .run();
}
