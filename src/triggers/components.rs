//! Triggers domain: sensor volumes the player can touch.

use bevy::prelude::*;

/// Candle that becomes the respawn point once lit.
#[derive(Component, Debug, Default)]
pub struct Checkpoint {
    pub lit: bool,
}

impl Checkpoint {
    /// Light the checkpoint. Returns `false` if it was already lit.
    pub fn light(&mut self) -> bool {
        if self.lit {
            return false;
        }
        self.lit = true;
        true
    }
}

/// Arms a death hint while the player is inside, and disarms it some time
/// after they leave.
#[derive(Component, Debug)]
pub struct DeathHintZone {
    /// UI entity shown alongside the respawn prompt.
    pub hint: Entity,
    pub clear_delay: f32,
    pub clear_timer: Option<f32>,
}

impl DeathHintZone {
    pub fn new(hint: Entity, clear_delay: f32) -> Self {
        Self {
            hint,
            clear_delay,
            clear_timer: None,
        }
    }

    /// Player entered: cancel any pending clear.
    pub fn enter(&mut self) {
        self.clear_timer = None;
    }

    /// Player left: start the clear countdown.
    pub fn exit(&mut self) {
        self.clear_timer = Some(self.clear_delay);
    }

    /// Count down a pending clear. Returns `true` on the tick it expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.clear_timer.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.clear_timer = None;
            return true;
        }
        false
    }
}

/// One-shot pickup that raises jump height and rise speed.
#[derive(Component, Debug, Clone, Copy)]
pub struct PowerUp {
    pub height_amount: f32,
    pub speed_amount: f32,
}

impl Default for PowerUp {
    fn default() -> Self {
        Self {
            height_amount: 96.0,
            speed_amount: 32.0,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct WinZone {
    pub triggered: bool,
}

/// Contact kills the player (pits, spikes).
#[derive(Component, Debug)]
pub struct KillZone;

/// Back-and-forth horizontal movement around a start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub origin_x: f32,
    pub move_distance: f32,
    pub move_speed: f32,
    /// +1 moving right, -1 moving left.
    pub direction: f32,
}

impl Patrol {
    pub fn new(origin_x: f32, move_distance: f32, move_speed: f32) -> Self {
        Self {
            origin_x,
            move_distance,
            move_speed,
            direction: 1.0,
        }
    }

    /// Move from `x` for `dt` seconds and return the new x. The direction
    /// flips when an end of the range is reached.
    pub fn step(&mut self, x: f32, dt: f32) -> f32 {
        let x = x + self.direction * self.move_speed * dt;
        if self.direction > 0.0 && x >= self.origin_x + self.move_distance {
            self.direction = -1.0;
        } else if self.direction < 0.0 && x <= self.origin_x - self.move_distance {
            self.direction = 1.0;
        }
        x
    }
}

/// Patrolling hazard that shrinks the player's light on contact.
#[derive(Component, Debug)]
pub struct WaterMonster {
    pub patrol: Patrol,
    pub debuff_duration: f32,
    pub shrink_ratio: f32,
}

impl WaterMonster {
    pub fn new(origin_x: f32) -> Self {
        Self {
            patrol: Patrol::new(origin_x, 96.0, 64.0),
            debuff_duration: 3.0,
            shrink_ratio: 0.5,
        }
    }
}
