//! Development tools, only built with the `dev-tools` feature.

use avian2d::prelude::{PhysicsDebugPlugin, PhysicsGizmos};
use bevy::prelude::*;

const TOGGLE_KEY: KeyCode = KeyCode::F3;

pub(crate) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsDebugPlugin::default())
        .add_systems(Startup, hide_physics_debug)
        .add_systems(Update, toggle_physics_debug);
}

fn hide_physics_debug(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<PhysicsGizmos>();
    config.enabled = false;
}

fn toggle_physics_debug(keys: Res<ButtonInput<KeyCode>>, mut store: ResMut<GizmoConfigStore>) {
    if keys.just_pressed(TOGGLE_KEY) {
        let (config, _) = store.config_mut::<PhysicsGizmos>();
        config.enabled = !config.enabled;
        info!(
            "Physics debug rendering: {}",
            if config.enabled { "ON" } else { "OFF" }
        );
    }
}
