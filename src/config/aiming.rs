//! Configuration for aim validation.

use bevy::prelude::*;

/// Configuration for aim validation.
#[derive(Reflect, Debug, Clone, Copy)]
pub struct AimingConfig {
    /// Maximum deviation of the aim direction from the camera's forward
    /// vector (radians). Aims at or beyond this angle are rejected.
    pub angle_limit: f32,
}

impl Default for AimingConfig {
    fn default() -> Self {
        Self {
            // 120 degrees.
            angle_limit: 2.0 * std::f32::consts::FRAC_PI_3,
        }
    }
}
