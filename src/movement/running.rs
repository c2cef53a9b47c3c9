//! Movement domain: ground locomotion.

use crate::core::PIXELS_PER_METER;
use crate::movement::resources::ControllerConfig;

/// Vertical speed above which the body counts as airborne for horizontal
/// authority. Above it, air control belongs to the jump controller.
pub const AIRBORNE_SPEED_EPSILON: f32 = 0.01 * PIXELS_PER_METER;

/// Below this, horizontal input and velocity are treated as zero.
const AXIS_EPSILON: f32 = 0.01;

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Rate used to steer horizontal velocity toward the input target.
pub fn ground_acceleration_rate(config: &ControllerConfig, axis: f32, vx: f32) -> f32 {
    let target = axis * config.max_move_speed;
    if target.abs() > AXIS_EPSILON {
        let turning = target.signum() != vx.signum() && vx.abs() > AXIS_EPSILON;
        if turning {
            config.turn_speed
        } else {
            config.acceleration
        }
    } else {
        config.deceleration
    }
}

/// Next horizontal velocity for a body on the ground.
///
/// Returns `None` when the body has noticeable vertical speed; the caller
/// should leave horizontal velocity alone.
pub fn ground_step(config: &ControllerConfig, axis: f32, vx: f32, vy: f32, dt: f32) -> Option<f32> {
    if vy.abs() > AIRBORNE_SPEED_EPSILON {
        return None;
    }
    let rate = ground_acceleration_rate(config, axis, vx);
    Some(move_towards(vx, axis * config.max_move_speed, rate * dt))
}
