//! Respawn domain: the session-wide game manager.
//!
//! One instance exists per session, inserted by `RespawnPlugin`. Checkpoints,
//! hazards, hint zones and the fall-damage monitor reach it through
//! `ResMut<GameManager>`.

use bevy::prelude::*;

use crate::content::Tuning;
use crate::respawn::sequencer::{RespawnSequencer, RespawnTiming};

/// Smallest light radius a debuff can shrink to, as a fraction of the base.
const MIN_LIGHT_RATIO: f32 = 0.1;

/// Temporarily shrinks the player's light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightDebuff {
    pub remaining: f32,
    pub ratio: f32,
}

#[derive(Resource, Debug)]
pub struct GameManager {
    respawn_point: Vec2,
    death_hint: Option<Entity>,
    sequencer: RespawnSequencer,
    light_debuff: Option<LightDebuff>,
    won: bool,
}

impl FromWorld for GameManager {
    fn from_world(world: &mut World) -> Self {
        let timing = world
            .get_resource::<Tuning>()
            .map(|tuning| tuning.respawn.clone())
            .unwrap_or_default();
        Self::new(timing)
    }
}

impl GameManager {
    pub fn new(timing: RespawnTiming) -> Self {
        Self {
            respawn_point: Vec2::ZERO,
            death_hint: None,
            sequencer: RespawnSequencer::new(timing),
            light_debuff: None,
            won: false,
        }
    }

    pub fn respawn_point(&self) -> Vec2 {
        self.respawn_point
    }

    pub fn update_respawn_point(&mut self, position: Vec2) {
        self.respawn_point = position;
        debug!("Respawn point set to {:?}", position);
    }

    pub fn is_dead(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Start the death sequence. Ignored while already dying or after a win.
    pub fn trigger_death(&mut self) -> bool {
        if self.won {
            return false;
        }
        let started = self.sequencer.trigger(self.respawn_point, self.death_hint);
        if started {
            info!(
                "Player died; respawning at {:?} (hint: {})",
                self.respawn_point,
                self.death_hint.is_some()
            );
        }
        started
    }

    /// Ignored while dying or if already won.
    pub fn trigger_win(&mut self) -> bool {
        if self.won || self.is_dead() {
            return false;
        }
        self.won = true;
        info!("Level complete");
        true
    }

    /// Shrink the player's light to `ratio` of its size for `duration`
    /// seconds. A new debuff replaces the running one. Ignored while dying.
    pub fn trigger_light_debuff(&mut self, duration: f32, ratio: f32) -> bool {
        if self.is_dead() || duration <= 0.0 {
            return false;
        }
        let ratio = ratio.clamp(MIN_LIGHT_RATIO, 1.0);
        self.light_debuff = Some(LightDebuff {
            remaining: duration,
            ratio,
        });
        info!("Light debuff: {:.0}% for {:.1}s", ratio * 100.0, duration);
        true
    }

    pub fn light_debuff(&self) -> Option<LightDebuff> {
        self.light_debuff
    }

    /// Count down the light debuff.
    pub fn tick_light_debuff(&mut self, dt: f32) {
        let Some(debuff) = self.light_debuff.as_mut() else {
            return;
        };
        debuff.remaining -= dt;
        if debuff.remaining <= 0.0 {
            self.light_debuff = None;
            debug!("Light debuff expired");
        }
    }

    /// Multiplier for the player's light size.
    pub fn light_scale(&self) -> f32 {
        self.light_debuff.map_or(1.0, |debuff| debuff.ratio)
    }

    pub fn death_hint(&self) -> Option<Entity> {
        self.death_hint
    }

    pub fn set_death_hint(&mut self, hint: Entity) {
        self.death_hint = Some(hint);
    }

    /// Clear the armed hint, but only if it is still `hint`: a zone's delayed
    /// clear must not disarm a hint armed since by another zone.
    pub fn clear_death_hint(&mut self, hint: Entity) {
        if self.death_hint == Some(hint) {
            self.death_hint = None;
        }
    }

    pub fn sequencer(&self) -> &RespawnSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut RespawnSequencer {
        &mut self.sequencer
    }
}
