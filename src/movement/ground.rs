//! Movement domain: ground and corner probes against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Height of the foot probe shape.
const FOOT_PROBE_THICKNESS: f32 = 1.6;

/// Fallback half extents when the collider isn't a box.
const DEFAULT_HALF_EXTENTS: Vec2 = Vec2::new(8.0, 12.0);

/// Half extents of a (scaled) collider, assuming a box.
pub fn collider_half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => DEFAULT_HALF_EXTENTS,
    }
}

/// Downward probe under the body's base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootProbe {
    pub origin: Vec2,
    pub size: Vec2,
    pub max_distance: f32,
}

impl FootProbe {
    pub fn new(position: Vec2, half_extents: Vec2, foot_width: f32, check_distance: f32) -> Self {
        Self {
            origin: position - Vec2::new(0.0, half_extents.y),
            size: Vec2::new(foot_width, FOOT_PROBE_THICKNESS),
            max_distance: check_distance,
        }
    }
}

/// Two upward rays from the body's top-left and top-right extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRays {
    pub left_origin: Vec2,
    pub right_origin: Vec2,
    pub length: f32,
}

impl CornerRays {
    pub fn new(position: Vec2, half_extents: Vec2, distance: f32) -> Self {
        Self {
            left_origin: position - Vec2::new(half_extents.x, 0.0),
            right_origin: position + Vec2::new(half_extents.x, 0.0),
            length: half_extents.y + distance,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CornerProbe {
    pub left_blocked: bool,
    pub right_blocked: bool,
}

impl CornerProbe {
    /// Horizontal push away from a single blocked corner. Nothing happens when
    /// both or neither side is blocked: that is a ceiling or open air.
    pub fn nudge(self, force: f32) -> f32 {
        match (self.left_blocked, self.right_blocked) {
            (true, false) => force,
            (false, true) => -force,
            _ => 0.0,
        }
    }
}

fn filter_for(body: Entity, layer_mask: impl Into<LayerMask>) -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask(layer_mask).with_excluded_entities([body])
}

/// Is there ground within `check_distance` below the body's collider?
///
/// Returns `false` when the collider is missing.
pub fn probe_ground(
    spatial_query: &SpatialQuery,
    body: Entity,
    position: Vec2,
    collider: Option<&Collider>,
    foot_width: f32,
    check_distance: f32,
    layer_mask: impl Into<LayerMask>,
) -> bool {
    let Some(collider) = collider else {
        return false;
    };
    let probe = FootProbe::new(
        position,
        collider_half_extents(collider),
        foot_width,
        check_distance,
    );
    let shape = Collider::rectangle(probe.size.x, probe.size.y);
    let config = ShapeCastConfig::from_max_distance(probe.max_distance);

    spatial_query
        .cast_shape(
            &shape,
            probe.origin,
            0.0,
            Dir2::NEG_Y,
            &config,
            &filter_for(body, layer_mask),
        )
        .is_some()
}

/// Which top corners would hit something within `distance` above the body.
///
/// Returns no hits when the collider is missing.
pub fn probe_corner_obstruction(
    spatial_query: &SpatialQuery,
    body: Entity,
    position: Vec2,
    collider: Option<&Collider>,
    distance: f32,
    layer_mask: impl Into<LayerMask>,
) -> CornerProbe {
    let Some(collider) = collider else {
        return CornerProbe::default();
    };
    let rays = CornerRays::new(position, collider_half_extents(collider), distance);
    let filter = filter_for(body, layer_mask);

    let left = spatial_query.cast_ray(rays.left_origin, Dir2::Y, rays.length, true, &filter);
    let right = spatial_query.cast_ray(rays.right_origin, Dir2::Y, rays.length, true, &filter);

    CornerProbe {
        left_blocked: left.is_some(),
        right_blocked: right.is_some(),
    }
}
