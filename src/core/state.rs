//! Core domain: game state and per-tick system ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
    Won,
}

/// Ordering of the controller pipeline within a tick.
///
/// `FixedUpdate` runs `Sense -> Move -> Jump` (physics-affecting state).
/// `Update` runs `Input -> Jump -> FallDamage -> Triggers -> Sequence ->
/// Presentation` (input edges, timers, windup, animation flags, trigger
/// volumes, the respawn sequence).
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum ControllerSet {
    Input,
    Sense,
    Move,
    Jump,
    FallDamage,
    Triggers,
    Sequence,
    Presentation,
}
