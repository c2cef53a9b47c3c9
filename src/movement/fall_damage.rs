//! Movement domain: apex tracking and lethal-fall detection.

use bevy::prelude::*;

use crate::movement::jumping::SETTLED_SPEED;

/// Result of a landing, reported once per airborne episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub apex_y: f32,
    pub landing_y: f32,
    pub fall_distance: f32,
    pub lethal: bool,
}

/// Observes vertical motion and measures each fall from its apex.
///
/// A body is airborne when the ground sensor says so or while it still moves
/// vertically faster than [`SETTLED_SPEED`]; the landing is the first frame
/// on which it is both grounded and settled.
#[derive(Component, Debug, Clone, Default)]
pub struct FallDamageMonitor {
    pub highest_y: f32,
    pub is_airborne: bool,
}

impl FallDamageMonitor {
    pub fn new(y: f32) -> Self {
        Self {
            highest_y: y,
            is_airborne: false,
        }
    }

    pub fn observe(&mut self, y: f32, vy: f32, grounded: bool, lethal_height: f32) -> Option<Landing> {
        let airborne = !grounded || vy.abs() > SETTLED_SPEED;

        if airborne {
            if !self.is_airborne {
                self.is_airborne = true;
                self.highest_y = y;
            }
            self.highest_y = self.highest_y.max(y);
            return None;
        }

        if !self.is_airborne {
            // Walking along the ground: a walk-off is measured from here.
            self.highest_y = y;
            return None;
        }

        self.is_airborne = false;
        let fall_distance = self.highest_y - y;
        let landing = Landing {
            apex_y: self.highest_y,
            landing_y: y,
            fall_distance,
            lethal: fall_distance >= lethal_height,
        };
        self.highest_y = y;
        Some(landing)
    }

    /// Forget the current episode, e.g. after a teleport.
    pub fn reset(&mut self, y: f32) {
        *self = Self::new(y);
    }
}
