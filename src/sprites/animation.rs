//! Animation state machine for the player sprite.
//!
//! Gameplay code writes boolean [`AnimationFlags`] every frame and fires
//! one-shot [`AnimationCueEvent`]s. This module resolves both into a single
//! [`AnimationState`] and tints the sprite to match.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

/// Continuous animation inputs, written by the movement and jump controllers.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFlags {
    pub is_moving: bool,
    pub is_preparing: bool,
    pub is_rising: bool,
    pub is_falling: bool,
}

impl AnimationFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Named one-shot animation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCue {
    Death,
    Respawn,
    Idle,
    /// Jump windup aborted; snap straight to the falling pose.
    Down,
}

#[derive(Debug)]
pub struct AnimationCueEvent {
    pub entity: Entity,
    pub cue: AnimationCue,
}

impl Message for AnimationCueEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Prepare,
    Rise,
    Fall,
    Death,
    Respawn,
}

impl AnimationState {
    /// States entered by cue that flags must not override.
    pub fn is_scripted(self) -> bool {
        matches!(self, AnimationState::Death | AnimationState::Respawn)
    }

    /// State implied by the controller flags. Preparing wins over airborne
    /// flags, airborne flags win over walking.
    pub fn from_flags(flags: &AnimationFlags) -> Self {
        if flags.is_preparing {
            AnimationState::Prepare
        } else if flags.is_falling {
            AnimationState::Fall
        } else if flags.is_rising {
            AnimationState::Rise
        } else if flags.is_moving {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }

    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.95, 0.9, 0.8),
            AnimationState::Walk => Color::srgb(1.0, 0.92, 0.75),
            AnimationState::Prepare => Color::srgb(1.0, 0.75, 0.45),
            AnimationState::Rise => Color::srgb(1.0, 0.95, 0.6),
            AnimationState::Fall => Color::srgb(0.75, 0.8, 0.95),
            AnimationState::Death => Color::srgb(0.35, 0.1, 0.1),
            AnimationState::Respawn => Color::srgb(1.0, 1.0, 1.0),
        }
    }
}

/// Current animation of an entity.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    pub previous_state: AnimationState,
}

impl AnimationController {
    /// Set the animation state, remembering the previous one on change.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.previous_state = self.state;
            self.state = state;
        }
    }

    pub fn apply_cue(&mut self, cue: AnimationCue) {
        let state = match cue {
            AnimationCue::Death => AnimationState::Death,
            AnimationCue::Respawn => AnimationState::Respawn,
            AnimationCue::Idle => AnimationState::Idle,
            AnimationCue::Down => AnimationState::Fall,
        };
        self.set_state(state);
    }

    /// State the flags ask for, if it differs from the current one. Scripted
    /// states ignore the flags.
    pub fn flag_transition(&self, flags: &AnimationFlags) -> Option<AnimationState> {
        if self.state.is_scripted() {
            return None;
        }
        let next = AnimationState::from_flags(flags);
        (next != self.state).then_some(next)
    }
}

/// Resolve cues and flags into the animation state.
pub fn animation_state_machine(
    mut cues: MessageReader<AnimationCueEvent>,
    mut query: Query<(&AnimationFlags, &mut AnimationController)>,
) {
    for event in cues.read() {
        if let Ok((_, mut controller)) = query.get_mut(event.entity) {
            controller.apply_cue(event.cue);
        }
    }

    for (flags, mut controller) in &mut query {
        if let Some(next) = controller.flag_transition(flags) {
            controller.set_state(next);
        }
    }
}

/// Tint sprites to show the current state in place of frame art.
pub fn tint_animated_sprites(
    mut query: Query<(&AnimationController, &mut Sprite), Changed<AnimationController>>,
) {
    for (controller, mut sprite) in &mut query {
        debug!(
            "Animation {:?} -> {:?}",
            controller.previous_state, controller.state
        );
        sprite.color = controller.state.tint();
    }
}
