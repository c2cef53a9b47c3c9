//! Respawn domain: the death-to-respawn sequence as an explicit state machine.
//!
//! The sequence advances only through [`RespawnSequencer::tick`]. Each waiting
//! step keeps its own elapsed time, and time left over when a step completes
//! carries into the next one, so the timeline does not depend on frame rate.
//! The timeline starts at the trigger: the tick in the same step as the
//! trigger adds no time, since that step's `dt` elapsed before the death.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Durations of the timed steps, in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RespawnTiming {
    pub death_anim_duration: f32,
    pub fade_duration: f32,
    /// Time the screen stays black after the teleport.
    pub dark_time: f32,
    pub respawn_anim_duration: f32,
    /// Upward offset applied to the respawn point so the body isn't embedded in the floor.
    pub respawn_lift: f32,
}

impl Default for RespawnTiming {
    fn default() -> Self {
        Self {
            death_anim_duration: 1.0,
            fade_duration: 1.0,
            dark_time: 0.7,
            respawn_anim_duration: 1.0,
            respawn_lift: 16.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RespawnPhase {
    #[default]
    Alive,
    Dying { elapsed: f32 },
    FadingOut { elapsed: f32 },
    Teleporting { elapsed: f32 },
    FadingIn { elapsed: f32 },
    AwaitingInput,
    Respawning { elapsed: f32 },
}

/// Side effects requested by the sequence, applied by the player and UI glue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceCommand {
    /// Stop the controllers, zero velocity, stop simulating the body, clear
    /// animation flags and play the death animation.
    DisableControl,
    Teleport(Vec2),
    ShowPrompt { hint: Option<Entity> },
    HidePrompt { hint: Option<Entity> },
    PlayRespawn,
    /// Resume simulation, reset the controller and hand control back.
    RestoreControl,
}

impl Message for SequenceCommand {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// No sequence is running.
    Idle,
    Running,
    /// Suspended until a confirm input arrives.
    AwaitingInput,
    /// The sequence completed during this tick.
    Finished,
}

#[derive(Debug, Clone)]
pub struct RespawnSequencer {
    timing: RespawnTiming,
    phase: RespawnPhase,
    target: Vec2,
    hint: Option<Entity>,
    pending: Vec<SequenceCommand>,
    /// Set by `trigger`, consumed by the next tick.
    just_triggered: bool,
}

impl RespawnSequencer {
    pub fn new(timing: RespawnTiming) -> Self {
        Self {
            timing,
            phase: RespawnPhase::Alive,
            target: Vec2::ZERO,
            hint: None,
            pending: Vec::new(),
            just_triggered: false,
        }
    }

    pub fn phase(&self) -> RespawnPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != RespawnPhase::Alive
    }

    /// Start a sequence that ends at `respawn_point`. `hint` is captured now
    /// and shown with the respawn prompt.
    ///
    /// Returns `false`, and changes nothing, if a sequence is already running.
    pub fn trigger(&mut self, respawn_point: Vec2, hint: Option<Entity>) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = RespawnPhase::Dying { elapsed: 0.0 };
        self.target = respawn_point;
        self.hint = hint;
        self.just_triggered = true;
        self.pending.push(SequenceCommand::DisableControl);
        true
    }

    /// Commands produced since the last drain, in order.
    pub fn drain_commands(&mut self) -> Vec<SequenceCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Full-screen overlay opacity for the current phase.
    pub fn overlay_alpha(&self) -> f32 {
        let fade = self.timing.fade_duration;
        let progress = |elapsed: f32| {
            if fade <= 0.0 {
                1.0
            } else {
                (elapsed / fade).clamp(0.0, 1.0)
            }
        };
        match self.phase {
            RespawnPhase::FadingOut { elapsed } => progress(elapsed),
            RespawnPhase::Teleporting { .. } => 1.0,
            RespawnPhase::FadingIn { elapsed } => 1.0 - progress(elapsed),
            RespawnPhase::Alive
            | RespawnPhase::Dying { .. }
            | RespawnPhase::AwaitingInput
            | RespawnPhase::Respawning { .. } => 0.0,
        }
    }

    /// Advance by `dt` seconds. `confirm` only counts if the sequence was
    /// already waiting for it when this tick began.
    ///
    /// Call once per step, after anything that may trigger a death that step.
    pub fn tick(&mut self, dt: f32, confirm: bool) -> StepResult {
        let confirm = confirm && self.phase == RespawnPhase::AwaitingInput;
        let mut remaining = if std::mem::take(&mut self.just_triggered) {
            0.0
        } else {
            dt.max(0.0)
        };

        loop {
            match self.phase {
                RespawnPhase::Alive => return StepResult::Idle,
                RespawnPhase::Dying { elapsed } => {
                    let elapsed = elapsed + remaining;
                    let limit = self.timing.death_anim_duration;
                    if elapsed < limit {
                        self.phase = RespawnPhase::Dying { elapsed };
                        return StepResult::Running;
                    }
                    remaining = elapsed - limit;
                    self.phase = RespawnPhase::FadingOut { elapsed: 0.0 };
                }
                RespawnPhase::FadingOut { elapsed } => {
                    let elapsed = elapsed + remaining;
                    let limit = self.timing.fade_duration;
                    if elapsed < limit {
                        self.phase = RespawnPhase::FadingOut { elapsed };
                        return StepResult::Running;
                    }
                    remaining = elapsed - limit;
                    self.phase = RespawnPhase::Teleporting { elapsed: 0.0 };
                    let lift = Vec2::new(0.0, self.timing.respawn_lift);
                    self.pending.push(SequenceCommand::Teleport(self.target + lift));
                }
                RespawnPhase::Teleporting { elapsed } => {
                    let elapsed = elapsed + remaining;
                    let limit = self.timing.dark_time;
                    if elapsed < limit {
                        self.phase = RespawnPhase::Teleporting { elapsed };
                        return StepResult::Running;
                    }
                    remaining = elapsed - limit;
                    self.phase = RespawnPhase::FadingIn { elapsed: 0.0 };
                }
                RespawnPhase::FadingIn { elapsed } => {
                    let elapsed = elapsed + remaining;
                    let limit = self.timing.fade_duration;
                    if elapsed < limit {
                        self.phase = RespawnPhase::FadingIn { elapsed };
                        return StepResult::Running;
                    }
                    self.phase = RespawnPhase::AwaitingInput;
                    self.pending
                        .push(SequenceCommand::ShowPrompt { hint: self.hint });
                }
                RespawnPhase::AwaitingInput => {
                    if !confirm {
                        return StepResult::AwaitingInput;
                    }
                    // Time spent waiting for input doesn't count toward the animation.
                    remaining = 0.0;
                    self.phase = RespawnPhase::Respawning { elapsed: 0.0 };
                    self.pending
                        .push(SequenceCommand::HidePrompt { hint: self.hint });
                    self.pending.push(SequenceCommand::PlayRespawn);
                }
                RespawnPhase::Respawning { elapsed } => {
                    let elapsed = elapsed + remaining;
                    let limit = self.timing.respawn_anim_duration;
                    if elapsed < limit {
                        self.phase = RespawnPhase::Respawning { elapsed };
                        return StepResult::Running;
                    }
                    self.phase = RespawnPhase::Alive;
                    self.hint = None;
                    self.pending.push(SequenceCommand::RestoreControl);
                    return StepResult::Finished;
                }
            }
        }
    }
}
