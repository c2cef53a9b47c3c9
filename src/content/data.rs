//! Data definitions for the tuning RON file.
//!
//! Mirrors the structure of `assets/data/tuning.ron`. Every section falls back
//! to its defaults when omitted, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ControllerConfig, SensorConfig};
use crate::respawn::RespawnTiming;

/// Only schema understood by this build.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

/// Loaded feel tuning, inserted as a resource at startup.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Tuning {
    pub schema_version: u32,
    pub controller: ControllerConfig,
    pub sensor: SensorConfig,
    pub respawn: RespawnTiming,
    /// Seconds a death hint lingers after the player leaves its zone.
    pub hint_clear_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            controller: ControllerConfig::default(),
            sensor: SensorConfig::default(),
            respawn: RespawnTiming::default(),
            hint_clear_delay: 3.0,
        }
    }
}
