//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::resources::{ControllerConfig, NEUTRAL_GRAVITY_SCALE};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and walls the player can stand on
    Ground,
    /// Player character
    Player,
    /// Hazards that touch the player (monsters, kill volumes)
    Hazard,
    /// Trigger volumes (checkpoints, hint zones, pickups) - never block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for colliders the ground sensor treats as ground
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for the light attached to the player (scaled by light debuffs)
#[derive(Component, Debug)]
pub struct PlayerLight {
    pub base_scale: f32,
}

/// Enables the movement and jump controllers for this body.
///
/// Cleared by the respawn sequence and on winning.
#[derive(Component, Debug)]
pub struct PlayerControl {
    pub enabled: bool,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing implied by a horizontal input, if any.
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    /// Windup before the impulse; no velocity is applied yet.
    Preparing { elapsed: f32 },
    Rising,
    Falling,
}

#[derive(Component, Debug, Clone)]
pub struct ControllerState {
    /// Written by the ground sensor every fixed tick.
    pub is_grounded: bool,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub phase: JumpPhase,
    /// Blocks a new jump shortly after launch while the body clears the floor.
    pub launch_lockout: f32,
    pub was_falling: bool,
    pub was_airborne: bool,
    /// Time of the last landing sound, in seconds since startup.
    pub last_land_time: Option<f32>,
    pub rise_gravity_scale: f32,
    pub facing: Facing,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            is_grounded: false,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            phase: JumpPhase::Idle,
            launch_lockout: 0.0,
            was_falling: false,
            was_airborne: false,
            last_land_time: None,
            rise_gravity_scale: NEUTRAL_GRAVITY_SCALE,
            facing: Facing::Right,
        }
    }
}

impl ControllerState {
    pub fn new(config: &ControllerConfig, base_gravity: f32) -> Self {
        let mut state = Self::default();
        state.recompute_rise_gravity(config, base_gravity);
        state
    }

    /// Turn toward the input direction. Returns the new facing only when it
    /// changed.
    pub fn face(&mut self, axis: f32) -> Option<Facing> {
        let facing = Facing::from_axis(axis)?;
        if facing == self.facing {
            return None;
        }
        self.facing = facing;
        Some(facing)
    }

    pub fn is_preparing_jump(&self) -> bool {
        matches!(self.phase, JumpPhase::Preparing { .. })
    }

    /// Refresh the cached rise gravity after the config changed.
    pub fn recompute_rise_gravity(&mut self, config: &ControllerConfig, base_gravity: f32) {
        self.rise_gravity_scale = config.rise_gravity_scale(base_gravity);
    }

    /// Clear timers and airborne bookkeeping after a respawn. Tuning-derived
    /// values and facing are kept.
    pub fn reset(&mut self) {
        self.is_grounded = false;
        self.coyote_timer = 0.0;
        self.jump_buffer_timer = 0.0;
        self.phase = JumpPhase::Idle;
        self.launch_lockout = 0.0;
        self.was_falling = false;
        self.was_airborne = false;
    }
}
