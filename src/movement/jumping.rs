//! Movement domain: the jump state machine.
//!
//! Split across the two clocks:
//! - [`ControllerState::frame_tick`] runs every frame. It owns input edges,
//!   coyote/buffer timers, the pre-jump windup, the impulse and the
//!   animation/audio bookkeeping.
//! - [`ControllerState::fixed_tick`] runs every physics step. It picks the
//!   gravity scale, clamps vertical speed, steers in the air and computes the
//!   corner-correction nudge.

use bevy::prelude::*;

use crate::core::PIXELS_PER_METER;
use crate::movement::components::{ControllerState, JumpPhase};
use crate::movement::ground::CornerProbe;
use crate::movement::resources::{ControllerConfig, MovementInput};
use crate::movement::running::{AIRBORNE_SPEED_EPSILON, move_towards};

/// After launching, new jumps are ignored for this long.
pub const LAUNCH_LOCKOUT: f32 = 0.1;

/// Vertical speed under which the body counts as settled (not rising/falling).
pub const SETTLED_SPEED: f32 = 0.1 * PIXELS_PER_METER;

/// Vertical speed that marks the body as having been in the air.
const AIRBORNE_LATCH_SPEED: f32 = 0.5 * PIXELS_PER_METER;

/// Minimum spacing between landing sounds.
const LAND_SOUND_COOLDOWN: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Jump key still held when the windup ended.
    Full,
    /// Jump key released before the windup ended.
    ShortHop,
}

/// Animation flags owned by the jump controller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JumpFlags {
    pub is_preparing: bool,
    pub is_rising: bool,
    pub is_falling: bool,
}

/// What happened during one frame tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub windup_started: bool,
    /// The body left the ground during the windup; the caller must force
    /// the falling presentation.
    pub windup_aborted: bool,
    pub launched: Option<Launch>,
    /// Rise speed was cut by releasing the jump key.
    pub cut: bool,
    pub fall_started: bool,
    pub landed: bool,
    pub play_land_sound: bool,
    pub flags: JumpFlags,
}

/// What the physics step should apply.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FixedReport {
    pub gravity_scale: f32,
    /// Horizontal position correction away from a snagged corner.
    pub nudge_x: f32,
}

impl ControllerState {
    /// Coyote and buffer windows overlap.
    pub fn jump_permitted(&self) -> bool {
        self.jump_buffer_timer > 0.0 && self.coyote_timer > 0.0
    }

    fn accepting_jump(&self) -> bool {
        !self.is_preparing_jump() && self.launch_lockout <= 0.0
    }

    fn launch(&mut self, config: &ControllerConfig, held: bool, velocity: &mut Vec2) -> Launch {
        let launch = if held { Launch::Full } else { Launch::ShortHop };
        velocity.y = match launch {
            Launch::Full => config.max_rise_speed,
            Launch::ShortHop => config.short_hop_speed(),
        };
        self.phase = JumpPhase::Rising;
        self.launch_lockout = LAUNCH_LOCKOUT;
        launch
    }

    /// Advance the jump controller by one frame.
    ///
    /// `now` is the elapsed time in seconds and is only used to space out
    /// landing sounds.
    pub fn frame_tick(
        &mut self,
        config: &ControllerConfig,
        input: &MovementInput,
        velocity: &mut Vec2,
        now: f32,
        dt: f32,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        if self.jump_buffer_timer > 0.0 {
            self.jump_buffer_timer -= dt;
        }
        if self.is_grounded && self.phase != JumpPhase::Rising {
            self.coyote_timer = config.coyote_time;
        } else if self.coyote_timer > 0.0 {
            self.coyote_timer -= dt;
        }
        if self.launch_lockout > 0.0 {
            self.launch_lockout -= dt;
        }

        if input.jump_just_pressed && self.accepting_jump() {
            self.jump_buffer_timer = config.jump_buffer_time;
        }

        if config.variable_height && input.jump_just_released && velocity.y > 0.0 {
            velocity.y *= 1.0 - config.jump_cutoff;
            report.cut = true;
        }

        if self.accepting_jump() && self.jump_permitted() {
            self.jump_buffer_timer = 0.0;
            self.coyote_timer = 0.0;
            if self.is_grounded && config.pre_jump_duration > 0.0 {
                self.phase = JumpPhase::Preparing { elapsed: 0.0 };
                report.windup_started = true;
            } else {
                // Coyote jumps have nothing to push off, so they skip the windup.
                report.launched = Some(self.launch(config, input.jump_held, velocity));
            }
        } else if let JumpPhase::Preparing { elapsed } = self.phase {
            if !self.is_grounded {
                self.phase = JumpPhase::Falling;
                report.windup_aborted = true;
            } else {
                let elapsed = elapsed + dt;
                if elapsed >= config.pre_jump_duration {
                    report.launched = Some(self.launch(config, input.jump_held, velocity));
                } else {
                    self.phase = JumpPhase::Preparing { elapsed };
                }
            }
        }

        let vy = velocity.y;
        if !self.is_preparing_jump() {
            if vy > SETTLED_SPEED {
                self.phase = JumpPhase::Rising;
            } else if vy < -SETTLED_SPEED {
                self.phase = JumpPhase::Falling;
            } else if self.is_grounded {
                self.phase = JumpPhase::Idle;
            }
        }

        let preparing = self.is_preparing_jump();
        let is_falling = report.windup_aborted || (vy < -SETTLED_SPEED && !preparing);
        report.flags = JumpFlags {
            is_preparing: preparing,
            is_rising: !report.windup_aborted && vy > SETTLED_SPEED && !preparing,
            is_falling,
        };

        report.fall_started = is_falling && !self.was_falling;
        self.was_falling = is_falling;

        if vy.abs() > AIRBORNE_LATCH_SPEED {
            self.was_airborne = true;
        }
        if self.was_airborne && self.is_grounded && vy.abs() <= SETTLED_SPEED {
            report.landed = true;
            let cooled_down = self
                .last_land_time
                .is_none_or(|last| now > last + LAND_SOUND_COOLDOWN);
            if cooled_down {
                report.play_land_sound = true;
                self.last_land_time = Some(now);
            }
            self.was_airborne = false;
        }

        report
    }

    /// Gravity multiplier for the given vertical speed: floaty going up,
    /// heavy coming down.
    pub fn gravity_scale_for(&self, config: &ControllerConfig, vy: f32) -> f32 {
        if vy > 0.0 {
            self.rise_gravity_scale
        } else {
            config.fall_gravity_scale
        }
    }

    /// Advance the physics-side jump behaviour by one fixed step.
    pub fn fixed_tick(
        &mut self,
        config: &ControllerConfig,
        axis: f32,
        velocity: &mut Vec2,
        corner: CornerProbe,
        dt: f32,
    ) -> FixedReport {
        let gravity_scale = self.gravity_scale_for(config, velocity.y);
        if velocity.y > config.max_rise_speed {
            velocity.y = config.max_rise_speed;
        }
        if velocity.y < -config.max_fall_speed {
            velocity.y = -config.max_fall_speed;
        }

        if velocity.y.abs() > AIRBORNE_SPEED_EPSILON {
            velocity.x = air_step(config, axis, velocity.x, dt);
        }

        let nudge_x = if velocity.y > 0.0 && !self.is_grounded {
            corner.nudge(config.corner_correction_nudge)
        } else {
            0.0
        };

        FixedReport {
            gravity_scale,
            nudge_x,
        }
    }
}

/// Horizontal velocity after one step of air control.
///
/// Input steers toward `max_air_speed` unless the body is already faster than
/// that in the input's direction (momentum is kept, never amplified). Without
/// input, drag bleeds speed toward zero.
pub fn air_step(config: &ControllerConfig, axis: f32, vx: f32, dt: f32) -> f32 {
    if axis != 0.0 {
        let same_direction = axis.signum() == vx.signum();
        let over_speed = vx.abs() > config.max_air_speed;
        if over_speed && same_direction {
            vx
        } else {
            let rate = config.air_acceleration * config.air_control;
            move_towards(vx, axis * config.max_air_speed, rate * dt)
        }
    } else {
        move_towards(vx, 0.0, config.air_drag * dt)
    }
}
