//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Rise gravity used when the jump tuning cannot produce a meaningful value.
pub const NEUTRAL_GRAVITY_SCALE: f32 = 1.0;

/// Below this, jump height and rise speed are treated as unset.
const MIN_JUMP_TUNING: f32 = 0.1;

/// Below this, the world gravity is treated as absent.
const MIN_BASE_GRAVITY: f32 = 0.001;

/// Per-character feel tuning. All distances are in world units (pixels).
///
/// Lives on the player entity rather than as a global resource because
/// power-ups permanently modify it.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    // Ground movement
    pub max_move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Rate used while input opposes the current horizontal velocity.
    pub turn_speed: f32,

    // Jump shape
    pub max_rise_speed: f32,
    pub max_jump_height: f32,
    /// Gravity multiplier while falling or at rest.
    pub fall_gravity_scale: f32,
    /// Fraction of rise speed removed when the jump key is released (0-1).
    pub jump_cutoff: f32,
    pub variable_height: bool,
    /// Windup before the jump impulse, in seconds.
    pub pre_jump_duration: f32,

    // Assists
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub max_fall_speed: f32,
    pub corner_correction_distance: f32,
    pub corner_correction_nudge: f32,

    // Air control
    pub air_acceleration: f32,
    /// Scales `air_acceleration` (0 = no steering, 1 = full).
    pub air_control: f32,
    pub air_drag: f32,
    pub max_air_speed: f32,

    pub lethal_fall_height: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_move_speed: 256.0,
            acceleration: 640.0,
            deceleration: 640.0,
            turn_speed: 960.0,
            max_rise_speed: 160.0,
            max_jump_height: 288.0,
            fall_gravity_scale: 25.0,
            jump_cutoff: 0.684,
            variable_height: true,
            pre_jump_duration: 1.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            max_fall_speed: 640.0,
            corner_correction_distance: 3.2,
            corner_correction_nudge: 3.2,
            air_acceleration: 4800.0,
            air_control: 0.037,
            air_drag: 32.0,
            max_air_speed: 256.0,
            lethal_fall_height: 480.0,
        }
    }
}

impl ControllerConfig {
    /// Gravity multiplier that makes a launch at `max_rise_speed` peak at
    /// exactly `max_jump_height`: `v² / (2·h·|g|)`.
    ///
    /// Falls back to [`NEUTRAL_GRAVITY_SCALE`] for unset tuning or zero gravity.
    pub fn rise_gravity_scale(&self, base_gravity: f32) -> f32 {
        if self.max_jump_height <= MIN_JUMP_TUNING || self.max_rise_speed <= MIN_JUMP_TUNING {
            return NEUTRAL_GRAVITY_SCALE;
        }
        let base = base_gravity.abs();
        if base <= MIN_BASE_GRAVITY {
            return NEUTRAL_GRAVITY_SCALE;
        }
        let required = self.max_rise_speed * self.max_rise_speed / (2.0 * self.max_jump_height);
        required / base
    }

    /// Launch speed of a jump whose key was released before the windup ended.
    pub fn short_hop_speed(&self) -> f32 {
        self.max_rise_speed * (1.0 - self.jump_cutoff)
    }

    /// Permanent, stacking jump upgrade. Callers must refresh the cached rise
    /// gravity afterwards (see `ControllerState::recompute_rise_gravity`).
    pub fn add_jump_ability(&mut self, height_delta: f32, speed_delta: f32) {
        self.max_jump_height += height_delta;
        self.max_rise_speed += speed_delta;
    }
}

/// Ground and corner probe tuning.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Width of the foot probe; narrower than the body so walls don't count as ground.
    pub foot_width: f32,
    pub ground_check_distance: f32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            foot_width: 12.8,
            ground_check_distance: 3.2,
        }
    }
}

/// Input sampled once per frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Horizontal axis in {-1, 0, 1}.
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub jump_held: bool,
    pub confirm_just_pressed: bool,
}
