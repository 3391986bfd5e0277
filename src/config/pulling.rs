//! Configuration for the pulling force.

use bevy::prelude::*;

/// Configuration for the pulling force.
#[derive(Reflect, Debug, Clone, Copy)]
pub struct PullingConfig {
    /// Scale applied to the tension-weighted pull direction (force units).
    pub force_multiplier: f32,

    /// Floor on the distance-based tension factor (0.0-1.0). Keeps the pull
    /// from fading out as the character closes on the target.
    pub min_tension: f32,

    /// Distance to the target (world units) below which the episode ends
    /// with an arrival release instead of another pull tick.
    pub arrival_threshold: f32,
}

impl Default for PullingConfig {
    fn default() -> Self {
        Self {
            force_multiplier: 4000.0,
            min_tension: 0.2,
            arrival_threshold: 5.0,
        }
    }
}
