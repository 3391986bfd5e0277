//! Grapple controller configuration.
//!
//! All tunables live on the [`GrappleConfig`] component, grouped by concern.
//! Use the builder methods to adjust individual values.

mod aiming;
mod cooldown;
mod pulling;
mod targeting;

pub use aiming::AimingConfig;
pub use cooldown::CooldownConfig;
pub use pulling::PullingConfig;
pub use targeting::TargetingConfig;

use bevy::prelude::*;

/// Tunables for a grapple-capable character.
///
/// Attach this alongside [`GrappleController`](crate::controller::GrappleController)
/// on the character entity.
///
/// # Example
///
/// ```rust
/// use msg_grapple_controller::prelude::*;
///
/// let config = GrappleConfig::default()
///     .with_max_distance(150.0)
///     .with_cooldown(0.5)
///     .with_required_anchors(true);
/// assert_eq!(config.targeting.max_distance, 150.0);
/// ```
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct GrappleConfig {
    /// Target acquisition (probe range, anchor policy).
    pub targeting: TargetingConfig,
    /// Aim-cone validation.
    pub aiming: AimingConfig,
    /// Pull force shaping and arrival detection.
    pub pulling: PullingConfig,
    /// Post-release cooldown.
    pub cooldown: CooldownConfig,
}

impl GrappleConfig {
    /// Set the maximum hook range (world units).
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.targeting.max_distance = max_distance;
        self
    }

    /// Set the aim probe radius.
    pub fn with_probe_radius(mut self, radius: f32) -> Self {
        self.targeting.probe_radius = radius;
        self
    }

    /// Require hit surfaces to carry a `GrappleAnchor` marker.
    pub fn with_required_anchors(mut self, required: bool) -> Self {
        self.targeting.require_anchor_tag = required;
        self
    }

    /// Set the maximum aim deviation from camera forward (radians).
    pub fn with_angle_limit(mut self, angle_limit: f32) -> Self {
        self.aiming.angle_limit = angle_limit;
        self
    }

    /// Set the pull force multiplier.
    pub fn with_force_multiplier(mut self, force_multiplier: f32) -> Self {
        self.pulling.force_multiplier = force_multiplier;
        self
    }

    /// Set the floor on the distance-based tension factor.
    pub fn with_min_tension(mut self, min_tension: f32) -> Self {
        self.pulling.min_tension = min_tension;
        self
    }

    /// Set the arrival distance (world units).
    pub fn with_arrival_threshold(mut self, threshold: f32) -> Self {
        self.pulling.arrival_threshold = threshold;
        self
    }

    /// Set the cooldown duration (seconds).
    pub fn with_cooldown(mut self, duration: f32) -> Self {
        self.cooldown.duration = duration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_values() {
        let config = GrappleConfig::default();
        assert_eq!(config.targeting.max_distance, 300.0);
        assert_eq!(config.pulling.force_multiplier, 4000.0);
        assert_eq!(config.pulling.min_tension, 0.2);
        assert_eq!(config.pulling.arrival_threshold, 5.0);
        assert_eq!(config.cooldown.duration, 2.0);
        assert!(!config.targeting.require_anchor_tag);
        // 120 degrees in radians.
        assert!((config.aiming.angle_limit - 120.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn builders_update_nested_fields() {
        let config = GrappleConfig::default()
            .with_max_distance(100.0)
            .with_angle_limit(1.0)
            .with_force_multiplier(500.0)
            .with_min_tension(0.5)
            .with_arrival_threshold(2.0)
            .with_cooldown(0.25)
            .with_probe_radius(0.5)
            .with_required_anchors(true);

        assert_eq!(config.targeting.max_distance, 100.0);
        assert_eq!(config.aiming.angle_limit, 1.0);
        assert_eq!(config.pulling.force_multiplier, 500.0);
        assert_eq!(config.pulling.min_tension, 0.5);
        assert_eq!(config.pulling.arrival_threshold, 2.0);
        assert_eq!(config.cooldown.duration, 0.25);
        assert_eq!(config.targeting.probe_radius, 0.5);
        assert!(config.targeting.require_anchor_tag);
    }
}
