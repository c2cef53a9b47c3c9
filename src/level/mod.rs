//! Level domain: the demo level layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::Tuning;
use crate::movement::{GameLayer, Ground};
use crate::triggers::{Checkpoint, DeathHintZone, KillZone, PowerUp, WaterMonster, WinZone};

/// Top of the main floor.
const FLOOR_TOP: f32 = -320.0;

pub const PLAYER_SPAWN: Vec2 = Vec2::new(-560.0, FLOOR_TOP + 24.0);

const GROUND_COLOR: Color = Color::srgb(0.22, 0.2, 0.26);
const PLATFORM_COLOR: Color = Color::srgb(0.35, 0.3, 0.28);
const WALL_COLOR: Color = Color::srgb(0.15, 0.14, 0.18);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.03, 0.03, 0.05)))
            .add_systems(Startup, spawn_level);
    }
}

fn solid(commands: &mut Commands, center: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn sensor_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player])
}

pub(crate) fn spawn_level(mut commands: Commands, tuning: Res<Tuning>) {
    // Floor, split by a pit
    solid(
        &mut commands,
        Vec2::new(-260.0, FLOOR_TOP - 20.0),
        Vec2::new(760.0, 40.0),
        GROUND_COLOR,
    );
    solid(
        &mut commands,
        Vec2::new(450.0, FLOOR_TOP - 20.0),
        Vec2::new(380.0, 40.0),
        GROUND_COLOR,
    );

    // Boundary walls
    for x in [-660.0, 660.0] {
        solid(
            &mut commands,
            Vec2::new(x, 0.0),
            Vec2::new(40.0, 760.0),
            WALL_COLOR,
        );
    }

    // Steps up to the high ledge
    solid(
        &mut commands,
        Vec2::new(-300.0, FLOOR_TOP + 160.0),
        Vec2::new(140.0, 20.0),
        PLATFORM_COLOR,
    );
    solid(
        &mut commands,
        Vec2::new(-120.0, FLOOR_TOP + 320.0),
        Vec2::new(140.0, 20.0),
        PLATFORM_COLOR,
    );
    // High enough that dropping off it to the floor is lethal
    solid(
        &mut commands,
        Vec2::new(-420.0, FLOOR_TOP + 480.0),
        Vec2::new(160.0, 20.0),
        PLATFORM_COLOR,
    );

    // Pit
    commands.spawn((
        KillZone,
        Transform::from_xyz(190.0, FLOOR_TOP - 80.0, 0.0),
        Collider::rectangle(140.0, 40.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));

    commands.spawn((
        Checkpoint::default(),
        Sprite {
            color: Color::srgb(0.45, 0.4, 0.35),
            custom_size: Some(Vec2::new(10.0, 24.0)),
            ..default()
        },
        Transform::from_xyz(-380.0, FLOOR_TOP + 12.0, 0.5),
        Collider::rectangle(24.0, 48.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));

    // Hint shown with the respawn prompt after dying near the ledge
    let hint = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(130.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            ZIndex(110),
        ))
        .with_child((
            Text::new("Long drops snuff the flame. Climb down the steps."),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(Color::srgb(0.7, 0.7, 0.8)),
        ))
        .id();

    commands.spawn((
        DeathHintZone::new(hint, tuning.hint_clear_delay),
        Transform::from_xyz(-420.0, FLOOR_TOP + 540.0, 0.0),
        Collider::rectangle(200.0, 100.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));

    commands.spawn((
        PowerUp::default(),
        Sprite {
            color: Color::srgb(0.6, 0.9, 1.0),
            custom_size: Some(Vec2::splat(12.0)),
            ..default()
        },
        Transform::from_xyz(-460.0, FLOOR_TOP + 510.0, 0.5),
        Collider::rectangle(16.0, 16.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));

    let monster_x = 420.0;
    commands.spawn((
        WaterMonster::new(monster_x),
        Sprite {
            color: Color::srgb(0.2, 0.4, 0.7),
            custom_size: Some(Vec2::new(28.0, 16.0)),
            ..default()
        },
        Transform::from_xyz(monster_x, FLOOR_TOP + 8.0, 0.5),
        RigidBody::Kinematic,
        Collider::rectangle(28.0, 16.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    commands.spawn((
        WinZone::default(),
        Sprite {
            color: Color::srgba(1.0, 0.9, 0.5, 0.3),
            custom_size: Some(Vec2::new(40.0, 80.0)),
            ..default()
        },
        Transform::from_xyz(600.0, FLOOR_TOP + 40.0, 0.0),
        Collider::rectangle(40.0, 80.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));

    info!("Level spawned");
}
