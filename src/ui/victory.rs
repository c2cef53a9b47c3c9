//! UI domain: level complete banner.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::SfxCue;
use crate::movement::{Player, PlayerControl};
use crate::sprites::AnimationFlags;

#[derive(Component, Debug)]
pub struct VictoryBanner;

/// Show the banner and take control away from the player. The player may
/// win mid-air, so the jump loop is silenced too.
pub(crate) fn spawn_victory_banner(
    mut commands: Commands,
    mut sfx: MessageWriter<SfxCue>,
    mut players: Query<(&mut PlayerControl, Option<&mut AnimationFlags>), With<Player>>,
) {
    for (mut control, flags) in &mut players {
        control.enabled = false;
        if let Some(mut flags) = flags {
            flags.clear();
        }
    }
    sfx.write(SfxCue::JumpLoopStop);

    commands
        .spawn((
            VictoryBanner,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.75)),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("THE FLAME ENDURES"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.8, 0.4)),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("You reached the end of the dark."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
        });
}
