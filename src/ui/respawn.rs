//! UI domain: respawn fade overlay and the "press to continue" prompt.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::respawn::{GameManager, SequenceCommand};

/// Full-screen black overlay whose opacity follows the respawn sequence.
#[derive(Component, Debug)]
pub struct FadeOverlay;

/// Prompt shown while the sequence waits for a confirm press.
#[derive(Component, Debug)]
pub struct RespawnPrompt;

pub(crate) fn spawn_respawn_ui(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        ZIndex(100),
    ));

    commands
        .spawn((
            RespawnPrompt,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(80.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            ZIndex(110),
        ))
        .with_child((
            Text::new("Press [Enter] to rekindle"),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.85, 0.6)),
        ));
}

pub(crate) fn update_fade_overlay(
    manager: Res<GameManager>,
    mut overlay: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    let alpha = manager.sequencer().overlay_alpha();
    for mut background in &mut overlay {
        if background.0.alpha() != alpha {
            background.0.set_alpha(alpha);
        }
    }
}

/// Show or hide the prompt and the death hint captured with it.
pub(crate) fn toggle_respawn_prompt(
    mut reader: MessageReader<SequenceCommand>,
    mut prompt: Query<&mut Visibility, With<RespawnPrompt>>,
    mut hints: Query<&mut Visibility, Without<RespawnPrompt>>,
) {
    for command in reader.read() {
        let (hint, visibility) = match *command {
            SequenceCommand::ShowPrompt { hint } => (hint, Visibility::Visible),
            SequenceCommand::HidePrompt { hint } => (hint, Visibility::Hidden),
            _ => continue,
        };

        for mut prompt_visibility in &mut prompt {
            *prompt_visibility = visibility;
        }

        if let Some(hint) = hint {
            match hints.get_mut(hint) {
                Ok(mut hint_visibility) => *hint_visibility = visibility,
                Err(_) => warn!("Death hint {:?} no longer exists", hint),
            }
        }
    }
}
