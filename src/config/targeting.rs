//! Configuration for target acquisition.

use bevy::prelude::*;

/// Configuration for target acquisition.
#[derive(Reflect, Debug, Clone, Copy)]
pub struct TargetingConfig {
    /// Maximum hook range (world units). Caps the aim probe length and
    /// normalizes the distance-based tension factor.
    pub max_distance: f32,

    /// Radius of the thin shape cast used as the aim probe.
    pub probe_radius: f32,

    /// Whether hit surfaces must carry a `GrappleAnchor` marker to be
    /// eligible. When false (the default), every surface is eligible and
    /// the marker is advisory only.
    pub require_anchor_tag: bool,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            max_distance: 300.0,
            probe_radius: 0.1,
            require_anchor_tag: false,
        }
    }
}
