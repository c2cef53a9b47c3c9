//! Movement domain: tests for tuning math, locomotion and the jump controller.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::fall_damage::FallDamageMonitor;
use super::ground::{
    CornerProbe, CornerRays, FootProbe, probe_corner_obstruction, probe_ground,
};
use super::jumping::{Launch, SETTLED_SPEED, air_step};
use super::running::{ground_step, move_towards};
use super::{ControllerConfig, ControllerState, Facing, GameLayer, JumpPhase, MovementInput};
use crate::core::{BASE_GRAVITY, PIXELS_PER_METER};

const DT: f32 = 1.0 / 64.0;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn grounded_state(config: &ControllerConfig) -> ControllerState {
    let mut state = ControllerState::new(config, -BASE_GRAVITY);
    state.is_grounded = true;
    state
}

fn press() -> MovementInput {
    MovementInput {
        jump_just_pressed: true,
        jump_held: true,
        ..Default::default()
    }
}

fn hold() -> MovementInput {
    MovementInput {
        jump_held: true,
        ..Default::default()
    }
}

/// Semi-implicit Euler flight from `vy` until the apex; returns the height gained.
fn apex_height(state: &ControllerState, config: &ControllerConfig, vy: f32) -> f32 {
    let dt = 0.0005;
    let mut v = vy;
    let mut y = 0.0;
    while v > 0.0 {
        v -= BASE_GRAVITY * state.gravity_scale_for(config, v) * dt;
        y += v.max(0.0) * dt;
    }
    y
}

// -----------------------------------------------------------------------------
// ControllerConfig tests
// -----------------------------------------------------------------------------

#[test]
fn test_add_jump_ability_is_monotonic() {
    let mut config = ControllerConfig::default();
    for (height_delta, speed_delta) in [(0.0, 0.0), (96.0, 32.0), (0.5, 0.0), (0.0, 7.0)] {
        let before_height = config.max_jump_height;
        let before_speed = config.max_rise_speed;

        config.add_jump_ability(height_delta, speed_delta);

        assert!(config.max_jump_height >= before_height);
        assert!(config.max_rise_speed >= before_speed);
        assert!(config.rise_gravity_scale(-BASE_GRAVITY) > 0.0);
    }
}

#[test]
fn test_rise_gravity_scale_matches_height() {
    let config = ControllerConfig::default();
    let scale = config.rise_gravity_scale(-BASE_GRAVITY);
    let expected = 160.0 * 160.0 / (2.0 * 288.0) / BASE_GRAVITY;
    assert!(approx(scale, expected, 1e-5));
}

#[test]
fn test_rise_gravity_scale_falls_back_when_unset() {
    let config = ControllerConfig {
        max_jump_height: 0.0,
        ..Default::default()
    };
    assert_eq!(config.rise_gravity_scale(-BASE_GRAVITY), 1.0);

    let config = ControllerConfig::default();
    assert_eq!(config.rise_gravity_scale(0.0), 1.0);
}

#[test]
fn test_short_hop_speed() {
    let config = ControllerConfig::default();
    assert!(approx(config.short_hop_speed(), 160.0 * (1.0 - 0.684), 1e-4));
}

// -----------------------------------------------------------------------------
// Ground movement tests
// -----------------------------------------------------------------------------

#[test]
fn test_move_towards_never_overshoots() {
    assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
    assert_eq!(move_towards(9.0, 10.0, 3.0), 10.0);
    assert_eq!(move_towards(0.0, -10.0, 3.0), -3.0);
}

#[test]
fn test_turn_uses_turn_speed_until_sign_crosses() {
    let config = ControllerConfig::default();

    // Moving right at full speed, input left: turn rate
    let vx = ground_step(&config, -1.0, config.max_move_speed, 0.0, DT);
    assert_eq!(vx, Some(config.max_move_speed - config.turn_speed * DT));

    // Still right of zero: turn rate carries across the sign change
    let vx = ground_step(&config, -1.0, 5.0, 0.0, DT);
    assert_eq!(vx, Some(5.0 - config.turn_speed * DT));

    // Now moving left with the input: plain acceleration
    let vx = ground_step(&config, -1.0, -10.0, 0.0, DT);
    assert_eq!(vx, Some(-10.0 - config.acceleration * DT));
}

#[test]
fn test_release_decelerates() {
    let config = ControllerConfig::default();
    let vx = ground_step(&config, 0.0, 100.0, 0.0, DT);
    assert_eq!(vx, Some(100.0 - config.deceleration * DT));
}

#[test]
fn test_ground_step_yields_when_moving_vertically() {
    let config = ControllerConfig::default();
    assert_eq!(ground_step(&config, 1.0, 0.0, 50.0, DT), None);
    assert_eq!(ground_step(&config, 1.0, 0.0, -50.0, DT), None);
}

#[test]
fn test_facing_from_axis() {
    assert_eq!(Facing::from_axis(1.0), Some(Facing::Right));
    assert_eq!(Facing::from_axis(-1.0), Some(Facing::Left));
    assert_eq!(Facing::from_axis(0.0), None);
    assert_eq!(Facing::Left.sign(), -1.0);
}

#[test]
fn test_face_only_reports_changes() {
    let mut state = ControllerState::default();

    assert_eq!(state.face(1.0), None);
    assert_eq!(state.face(-1.0), Some(Facing::Left));
    assert_eq!(state.face(-1.0), None);
    assert_eq!(state.face(0.0), None);
    assert_eq!(state.facing, Facing::Left);
}

// -----------------------------------------------------------------------------
// Air control tests
// -----------------------------------------------------------------------------

#[test]
fn test_air_step_keeps_momentum_above_cap() {
    let config = ControllerConfig::default();
    let fast = config.max_air_speed + 100.0;
    assert_eq!(air_step(&config, 1.0, fast, DT), fast);
}

#[test]
fn test_air_step_steers_and_drags() {
    let config = ControllerConfig::default();
    let rate = config.air_acceleration * config.air_control;

    assert!(approx(air_step(&config, 1.0, 0.0, DT), rate * DT, 1e-4));
    assert!(approx(
        air_step(&config, 0.0, 50.0, DT),
        50.0 - config.air_drag * DT,
        1e-4
    ));
}

#[test]
fn test_fixed_tick_clamps_and_picks_gravity() {
    let config = ControllerConfig::default();
    let mut state = ControllerState::new(&config, -BASE_GRAVITY);

    let mut velocity = Vec2::new(0.0, -10_000.0);
    let report = state.fixed_tick(&config, 0.0, &mut velocity, CornerProbe::default(), DT);
    assert_eq!(velocity.y, -config.max_fall_speed);
    assert_eq!(report.gravity_scale, config.fall_gravity_scale);

    let mut velocity = Vec2::new(0.0, 50.0);
    let report = state.fixed_tick(&config, 0.0, &mut velocity, CornerProbe::default(), DT);
    assert_eq!(report.gravity_scale, state.rise_gravity_scale);
}

// -----------------------------------------------------------------------------
// Corner correction tests
// -----------------------------------------------------------------------------

#[test]
fn test_corner_nudge_pushes_away_from_single_hit() {
    let left = CornerProbe {
        left_blocked: true,
        right_blocked: false,
    };
    let right = CornerProbe {
        left_blocked: false,
        right_blocked: true,
    };
    let both = CornerProbe {
        left_blocked: true,
        right_blocked: true,
    };

    assert_eq!(left.nudge(3.2), 3.2);
    assert_eq!(right.nudge(3.2), -3.2);
    assert_eq!(both.nudge(3.2), 0.0);
    assert_eq!(CornerProbe::default().nudge(3.2), 0.0);
}

#[test]
fn test_corner_nudge_only_while_rising_in_air() {
    let config = ControllerConfig::default();
    let mut state = ControllerState::new(&config, -BASE_GRAVITY);
    let corner = CornerProbe {
        left_blocked: true,
        right_blocked: false,
    };

    let mut rising = Vec2::new(0.0, 100.0);
    let report = state.fixed_tick(&config, 0.0, &mut rising, corner, DT);
    assert_eq!(report.nudge_x, config.corner_correction_nudge);

    let mut falling = Vec2::new(0.0, -100.0);
    let report = state.fixed_tick(&config, 0.0, &mut falling, corner, DT);
    assert_eq!(report.nudge_x, 0.0);

    state.is_grounded = true;
    let mut rising = Vec2::new(0.0, 100.0);
    let report = state.fixed_tick(&config, 0.0, &mut rising, corner, DT);
    assert_eq!(report.nudge_x, 0.0);
}

#[test]
fn test_probe_geometry() {
    let half = Vec2::new(8.0, 12.0);

    let foot = FootProbe::new(Vec2::new(10.0, 20.0), half, 12.8, 3.2);
    assert_eq!(foot.origin, Vec2::new(10.0, 8.0));
    assert_eq!(foot.size.x, 12.8);
    assert_eq!(foot.max_distance, 3.2);

    let rays = CornerRays::new(Vec2::ZERO, half, 3.2);
    assert_eq!(rays.left_origin, Vec2::new(-8.0, 0.0));
    assert_eq!(rays.right_origin, Vec2::new(8.0, 0.0));
    assert!(approx(rays.length, 15.2, 1e-5));
}

// -----------------------------------------------------------------------------
// Spatial query tests
// -----------------------------------------------------------------------------

fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(TransformPlugin);
    // Required by avian's collider hierarchy plugin
    app.insert_resource(bevy::scene::SceneSpawner::default());
    app.add_plugins(PhysicsPlugins::default().with_length_unit(PIXELS_PER_METER));
    app.insert_resource(Time::<Fixed>::from_hz(60.0));
    // Step virtual time deterministically so fixed-timestep physics runs
    app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
        Duration::from_secs_f64(1.0 / 60.0),
    ));
    app.finish();
    app.cleanup();
    app
}

fn spawn_solid(app: &mut App, position: Vec2, half_size: Vec2) {
    let transform = Transform::from_translation(position.extend(0.0));
    app.world_mut().spawn((
        transform,
        GlobalTransform::from(transform),
        RigidBody::Static,
        Collider::rectangle(half_size.x * 2.0, half_size.y * 2.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn settle(app: &mut App) {
    for _ in 0..3 {
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .advance_by(Duration::from_secs_f64(1.0 / 60.0));
        app.update();
    }
}

fn ground_below(app: &mut App, position: Vec2, collider: Option<Collider>) -> bool {
    app.world_mut()
        .run_system_once(move |spatial_query: SpatialQuery| {
            probe_ground(
                &spatial_query,
                Entity::PLACEHOLDER,
                position,
                collider.as_ref(),
                12.8,
                3.2,
                GameLayer::Ground,
            )
        })
        .expect("ground query runs")
}

fn corners_above(app: &mut App, position: Vec2, collider: Option<Collider>) -> CornerProbe {
    app.world_mut()
        .run_system_once(move |spatial_query: SpatialQuery| {
            probe_corner_obstruction(
                &spatial_query,
                Entity::PLACEHOLDER,
                position,
                collider.as_ref(),
                3.2,
                GameLayer::Ground,
            )
        })
        .expect("corner query runs")
}

#[test]
fn test_ground_detected_within_check_distance() {
    let mut app = physics_app();
    spawn_solid(&mut app, Vec2::ZERO, Vec2::new(100.0, 5.0));
    settle(&mut app);
    let body = Collider::rectangle(16.0, 24.0);

    assert!(ground_below(&mut app, Vec2::new(0.0, 18.0), Some(body.clone())));
    assert!(!ground_below(&mut app, Vec2::new(0.0, 40.0), Some(body)));
}

#[test]
fn test_ground_query_without_collider_reports_airborne() {
    let mut app = physics_app();
    spawn_solid(&mut app, Vec2::ZERO, Vec2::new(100.0, 5.0));
    settle(&mut app);

    assert!(!ground_below(&mut app, Vec2::new(0.0, 18.0), None));
}

#[test]
fn test_corner_query_sees_single_blocked_corner() {
    let mut app = physics_app();
    // Bottom edge at y = 95, spans only the left top corner
    spawn_solid(&mut app, Vec2::new(-20.0, 100.0), Vec2::new(14.0, 5.0));
    settle(&mut app);
    let body = Collider::rectangle(16.0, 24.0);

    let probe = corners_above(&mut app, Vec2::new(0.0, 81.0), Some(body));
    assert_eq!(
        probe,
        CornerProbe {
            left_blocked: true,
            right_blocked: false,
        }
    );
    assert_eq!(
        corners_above(&mut app, Vec2::new(0.0, 81.0), None),
        CornerProbe::default()
    );
}

// -----------------------------------------------------------------------------
// Jump controller tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_press_starts_windup_without_velocity() {
    let config = ControllerConfig::default();
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;

    let report = state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);

    assert!(report.windup_started);
    assert!(report.launched.is_none());
    assert!(state.is_preparing_jump());
    assert!(report.flags.is_preparing);
    assert_eq!(velocity.y, 0.0);
}

#[test]
fn test_windup_launches_full_jump_when_held() {
    let config = ControllerConfig::default();
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;

    state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);
    // 64 frames of 1/64 s complete the 1 s windup
    for _ in 0..63 {
        let report = state.frame_tick(&config, &hold(), &mut velocity, 0.0, DT);
        assert!(report.launched.is_none());
    }
    let report = state.frame_tick(&config, &hold(), &mut velocity, 0.0, DT);

    assert_eq!(report.launched, Some(Launch::Full));
    assert_eq!(velocity.y, config.max_rise_speed);
    assert_eq!(state.phase, JumpPhase::Rising);
}

#[test]
fn test_windup_released_early_launches_short_hop() {
    let config = ControllerConfig {
        pre_jump_duration: 4.0 * DT,
        ..Default::default()
    };
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;

    state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);
    let released = MovementInput {
        jump_just_released: true,
        ..Default::default()
    };
    state.frame_tick(&config, &released, &mut velocity, 0.0, DT);
    let mut launched = None;
    for _ in 0..4 {
        let report = state.frame_tick(&config, &MovementInput::default(), &mut velocity, 0.0, DT);
        launched = launched.or(report.launched);
    }

    assert_eq!(launched, Some(Launch::ShortHop));
    assert!(approx(velocity.y, config.short_hop_speed(), 1e-4));
}

#[test]
fn test_press_during_windup_is_ignored() {
    let config = ControllerConfig::default();
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;

    state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);
    state.frame_tick(&config, &hold(), &mut velocity, 0.0, DT);
    let report = state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);

    assert!(!report.windup_started);
    assert_eq!(state.jump_buffer_timer, 0.0);
    assert_eq!(state.phase, JumpPhase::Preparing { elapsed: DT * 2.0 });
}

#[test]
fn test_leaving_ground_aborts_windup() {
    let config = ControllerConfig::default();
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;

    state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);
    state.is_grounded = false;
    let report = state.frame_tick(&config, &hold(), &mut velocity, 0.0, DT);

    assert!(report.windup_aborted);
    assert!(report.launched.is_none());
    assert!(report.flags.is_falling);
    assert!(!report.flags.is_preparing);
    assert_eq!(state.phase, JumpPhase::Falling);
}

#[test]
fn test_coyote_window_edge() {
    let config = ControllerConfig {
        coyote_time: 0.125,
        ..Default::default()
    };

    for (airborne_frames, should_jump) in [(7, true), (8, false)] {
        let mut state = grounded_state(&config);
        let mut velocity = Vec2::ZERO;
        state.frame_tick(&config, &MovementInput::default(), &mut velocity, 0.0, DT);

        // Walk off the ledge
        state.is_grounded = false;
        velocity.y = -50.0;
        for _ in 0..airborne_frames - 1 {
            state.frame_tick(&config, &MovementInput::default(), &mut velocity, 0.0, DT);
        }
        let report = state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);

        assert_eq!(
            report.launched.is_some(),
            should_jump,
            "press on airborne frame {}",
            airborne_frames
        );
        if should_jump {
            // Coyote jumps skip the windup
            assert!(!report.windup_started);
            assert_eq!(velocity.y, config.max_rise_speed);
        }
    }
}

#[test]
fn test_buffered_press_fires_on_landing() {
    let config = ControllerConfig {
        jump_buffer_time: 0.125,
        ..Default::default()
    };

    for (frames_to_land, should_fire) in [(7, true), (8, false)] {
        let mut state = ControllerState::new(&config, -BASE_GRAVITY);
        let mut velocity = Vec2::new(0.0, -50.0);

        state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);
        for _ in 0..frames_to_land - 1 {
            state.frame_tick(&config, &hold(), &mut velocity, 0.0, DT);
        }
        state.is_grounded = true;
        velocity.y = 0.0;
        let report = state.frame_tick(&config, &hold(), &mut velocity, 0.0, DT);

        assert_eq!(
            report.windup_started, should_fire,
            "landing {} frames after the press",
            frames_to_land
        );
    }
}

#[test]
fn test_coyote_does_not_refill_while_rising() {
    let config = ControllerConfig {
        pre_jump_duration: 0.0,
        ..Default::default()
    };
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;

    let report = state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);
    assert_eq!(report.launched, Some(Launch::Full));

    // Sensor still touching the floor right after launch
    state.frame_tick(&config, &hold(), &mut velocity, 0.0, DT);
    assert_eq!(state.coyote_timer, 0.0);
}

#[test]
fn test_release_cuts_rise_speed() {
    let config = ControllerConfig::default();
    let mut state = ControllerState::new(&config, -BASE_GRAVITY);
    let mut velocity = Vec2::new(0.0, 100.0);
    let released = MovementInput {
        jump_just_released: true,
        ..Default::default()
    };

    let report = state.frame_tick(&config, &released, &mut velocity, 0.0, DT);

    assert!(report.cut);
    assert!(approx(velocity.y, 100.0 * (1.0 - config.jump_cutoff), 1e-4));
}

#[test]
fn test_full_jump_apex_matches_height() {
    let config = ControllerConfig::default();
    let state = ControllerState::new(&config, -BASE_GRAVITY);

    let apex = apex_height(&state, &config, config.max_rise_speed);

    assert!(
        approx(apex, config.max_jump_height, config.max_jump_height * 0.01),
        "apex {}",
        apex
    );
}

#[test]
fn test_short_hop_apex_scales_with_cutoff() {
    let config = ControllerConfig::default();
    let state = ControllerState::new(&config, -BASE_GRAVITY);
    let expected = config.max_jump_height * (1.0 - config.jump_cutoff).powi(2);

    let apex = apex_height(&state, &config, config.short_hop_speed());

    assert!(approx(apex, expected, expected * 0.02), "apex {}", apex);
}

#[test]
fn test_upgraded_jump_reaches_new_height() {
    let mut config = ControllerConfig::default();
    let mut state = ControllerState::new(&config, -BASE_GRAVITY);

    config.add_jump_ability(96.0, 32.0);
    state.recompute_rise_gravity(&config, -BASE_GRAVITY);

    let apex = apex_height(&state, &config, config.max_rise_speed);
    assert!(approx(apex, 384.0, 384.0 * 0.01), "apex {}", apex);
}

#[test]
fn test_fall_start_reported_once() {
    let config = ControllerConfig::default();
    let mut state = ControllerState::new(&config, -BASE_GRAVITY);
    let mut velocity = Vec2::new(0.0, -50.0);

    let first = state.frame_tick(&config, &MovementInput::default(), &mut velocity, 0.0, DT);
    let second = state.frame_tick(&config, &MovementInput::default(), &mut velocity, 0.0, DT);

    assert!(first.fall_started);
    assert!(!second.fall_started);
    assert!(second.flags.is_falling);
}

#[test]
fn test_landing_sound_has_cooldown() {
    let config = ControllerConfig::default();
    let mut state = ControllerState::new(&config, -BASE_GRAVITY);
    let idle = MovementInput::default();

    let land_at = |state: &mut ControllerState, now: f32| {
        state.is_grounded = false;
        let mut velocity = Vec2::new(0.0, -100.0);
        state.frame_tick(&config, &idle, &mut velocity, now, DT);
        state.is_grounded = true;
        velocity.y = 0.0;
        state.frame_tick(&config, &idle, &mut velocity, now, DT)
    };

    let first = land_at(&mut state, 1.0);
    assert!(first.landed);
    assert!(first.play_land_sound);

    let quick = land_at(&mut state, 1.2);
    assert!(quick.landed);
    assert!(!quick.play_land_sound);

    let later = land_at(&mut state, 2.0);
    assert!(later.play_land_sound);
}

#[test]
fn test_not_landed_while_still_moving() {
    let config = ControllerConfig::default();
    let mut state = ControllerState::new(&config, -BASE_GRAVITY);
    let idle = MovementInput::default();

    let mut velocity = Vec2::new(0.0, -100.0);
    state.frame_tick(&config, &idle, &mut velocity, 0.0, DT);
    state.is_grounded = true;
    let report = state.frame_tick(&config, &idle, &mut velocity, 0.0, DT);

    assert!(!report.landed);
}

#[test]
fn test_state_reset_keeps_tuning() {
    let config = ControllerConfig::default();
    let mut state = grounded_state(&config);
    let mut velocity = Vec2::ZERO;
    state.frame_tick(&config, &press(), &mut velocity, 0.0, DT);
    let rise = state.rise_gravity_scale;

    state.reset();

    assert_eq!(state.phase, JumpPhase::Idle);
    assert!(!state.is_grounded);
    assert_eq!(state.coyote_timer, 0.0);
    assert_eq!(state.rise_gravity_scale, rise);
}

// -----------------------------------------------------------------------------
// Fall damage tests
// -----------------------------------------------------------------------------

#[test]
fn test_fall_below_lethal_height_is_safe() {
    let mut monitor = FallDamageMonitor::new(0.0);
    let lethal = 480.0;

    assert!(monitor.observe(0.0, 0.0, true, lethal).is_none());
    assert!(monitor.observe(100.0, 50.0, false, lethal).is_none());
    assert!(monitor.observe(-200.0, -300.0, false, lethal).is_none());
    let landing = monitor.observe(-200.0, 0.0, true, lethal);

    let landing = landing.expect("landing reported");
    assert_eq!(landing.apex_y, 100.0);
    assert_eq!(landing.fall_distance, 300.0);
    assert!(!landing.lethal);
}

#[test]
fn test_lethal_fall_reports_once() {
    let mut monitor = FallDamageMonitor::new(0.0);
    let lethal = 480.0;

    monitor.observe(0.0, 0.0, true, lethal);
    // Walk off the ledge
    monitor.observe(-10.0, -40.0, false, lethal);
    monitor.observe(-490.0, -600.0, false, lethal);
    let landing = monitor.observe(-500.0, 0.0, true, lethal);

    assert!(landing.is_some_and(|l| l.lethal));
    assert!(monitor.observe(-500.0, 0.0, true, lethal).is_none());
}

#[test]
fn test_grounded_but_moving_is_still_airborne() {
    let mut monitor = FallDamageMonitor::new(0.0);
    monitor.observe(0.0, 0.0, true, 480.0);
    monitor.observe(-100.0, -200.0, false, 480.0);

    // Sensor reaches the floor before the body stops
    assert!(monitor.observe(-100.0, -200.0, true, 480.0).is_none());
    assert!(monitor.observe(-100.0, SETTLED_SPEED * 0.5, true, 480.0).is_some());
}

#[test]
fn test_monitor_reset_forgets_apex() {
    let mut monitor = FallDamageMonitor::new(0.0);
    monitor.observe(1000.0, 10.0, false, 480.0);

    monitor.reset(0.0);

    assert!(!monitor.is_airborne);
    assert_eq!(monitor.highest_y, 0.0);
    assert!(monitor.observe(0.0, 0.0, true, 480.0).is_none());
}
