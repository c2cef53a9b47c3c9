//! Movement domain: messages that modify the controller.

use bevy::ecs::message::Message;

/// Permanent, stacking jump upgrade (fired by power-ups)
#[derive(Debug)]
pub struct JumpAbilityGranted {
    pub height_delta: f32,
    pub speed_delta: f32,
}

impl Message for JumpAbilityGranted {}
