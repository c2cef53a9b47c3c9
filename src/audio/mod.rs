//! Audio domain: sound cues from gameplay and their playback.
//!
//! Gameplay systems write [`SfxCue`] messages; this module turns them into
//! audio entities. Sound files are optional and a missing file only mutes
//! its cue.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::content::asset_root;
use crate::core::ControllerSet;

const AUDIO_DIR: &str = "audio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxCue {
    /// Start the looping in-air sound.
    JumpLoopStart,
    JumpLoopStop,
    FallStart,
    Land,
    Pickup,
    Hit,
    Checkpoint,
}

impl Message for SfxCue {}

impl SfxCue {
    /// File name under `assets/audio/`, or `None` for control cues.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            SfxCue::JumpLoopStart => Some("jump_loop.ogg"),
            SfxCue::JumpLoopStop => None,
            SfxCue::FallStart => Some("fall.ogg"),
            SfxCue::Land => Some("land.ogg"),
            SfxCue::Pickup => Some("pickup.ogg"),
            SfxCue::Hit => Some("hit.ogg"),
            SfxCue::Checkpoint => Some("checkpoint.ogg"),
        }
    }
}

/// Loaded sound handles. A slot stays empty if its file is missing.
#[derive(Resource, Debug, Default)]
pub struct SfxLibrary {
    pub jump_loop: Option<Handle<AudioSource>>,
    pub fall: Option<Handle<AudioSource>>,
    pub land: Option<Handle<AudioSource>>,
    pub pickup: Option<Handle<AudioSource>>,
    pub hit: Option<Handle<AudioSource>>,
    pub checkpoint: Option<Handle<AudioSource>>,
}

impl SfxLibrary {
    pub fn handle(&self, cue: SfxCue) -> Option<&Handle<AudioSource>> {
        let slot = match cue {
            SfxCue::JumpLoopStart => &self.jump_loop,
            SfxCue::JumpLoopStop => return None,
            SfxCue::FallStart => &self.fall,
            SfxCue::Land => &self.land,
            SfxCue::Pickup => &self.pickup,
            SfxCue::Hit => &self.hit,
            SfxCue::Checkpoint => &self.checkpoint,
        };
        slot.as_ref()
    }
}

/// Marker for the single looping in-air sound entity.
#[derive(Component, Debug)]
pub struct JumpLoop;

pub(crate) fn load_sfx(mut commands: Commands, asset_server: Res<AssetServer>) {
    let audio_dir = asset_root().join(AUDIO_DIR);
    let load = |cue: SfxCue| -> Option<Handle<AudioSource>> {
        let file = cue.file_name()?;
        if audio_dir.join(file).exists() {
            Some(asset_server.load(format!("{AUDIO_DIR}/{file}")))
        } else {
            debug!("No sound for {:?} ({} missing)", cue, file);
            None
        }
    };

    let library = SfxLibrary {
        jump_loop: load(SfxCue::JumpLoopStart),
        fall: load(SfxCue::FallStart),
        land: load(SfxCue::Land),
        pickup: load(SfxCue::Pickup),
        hit: load(SfxCue::Hit),
        checkpoint: load(SfxCue::Checkpoint),
    };
    commands.insert_resource(library);
}

pub(crate) fn play_sfx_cues(
    mut commands: Commands,
    mut cues: MessageReader<SfxCue>,
    library: Option<Res<SfxLibrary>>,
    loops: Query<Entity, With<JumpLoop>>,
) {
    for cue in cues.read() {
        match cue {
            SfxCue::JumpLoopStop => {
                for entity in &loops {
                    commands.entity(entity).despawn();
                }
            }
            SfxCue::JumpLoopStart => {
                // Restarting replaces any loop still playing
                for entity in &loops {
                    commands.entity(entity).despawn();
                }
                if let Some(handle) = library.as_ref().and_then(|lib| lib.handle(*cue)) {
                    commands.spawn((
                        JumpLoop,
                        AudioPlayer::new(handle.clone()),
                        PlaybackSettings::LOOP,
                    ));
                }
            }
            _ => {
                if let Some(handle) = library.as_ref().and_then(|lib| lib.handle(*cue)) {
                    commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
                }
            }
        }
    }
}

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SfxCue>()
            .add_systems(Startup, load_sfx)
            .add_systems(Update, play_sfx_cues.in_set(ControllerSet::Presentation));
    }
}
