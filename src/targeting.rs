//! Target acquisition result structures and surface eligibility.
//!
//! These structures hold the result of the aim probe (a physics query
//! restricted to the configured hook range) and the policy deciding whether
//! a hit surface may serve as a grapple anchor.

use bevy::prelude::*;

/// Marker for surfaces that are explicitly tagged as grapple anchors.
///
/// With the default permissive policy every surface is eligible and this
/// marker is advisory only; set
/// [`TargetingConfig::require_anchor_tag`](crate::config::TargetingConfig)
/// to make it mandatory.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct GrappleAnchor;

/// Information about an aim probe result.
#[derive(Reflect, Debug, Clone, Copy, Default)]
pub struct TargetCast {
    /// Whether the probe hit something.
    pub hit: bool,
    /// Distance to the hit point (if hit).
    pub distance: f32,
    /// Normal of the surface at the hit point.
    pub normal: Vec3,
    /// World position of the hit point.
    pub point: Vec3,
    /// Entity that was hit (if any).
    pub entity: Option<Entity>,
}

impl TargetCast {
    /// Create an empty (no hit) result.
    pub fn miss() -> Self {
        Self::default()
    }

    /// Create a hit result.
    pub fn hit(distance: f32, normal: Vec3, point: Vec3, entity: Option<Entity>) -> Self {
        Self {
            hit: true,
            distance,
            normal,
            point,
            entity,
        }
    }
}

/// Decide whether a hit surface may anchor a grapple.
///
/// When `require_anchor_tag` is false every surface is eligible regardless
/// of tagging.
pub fn anchor_eligible(require_anchor_tag: bool, tagged: bool) -> bool {
    !require_anchor_tag || tagged
}
