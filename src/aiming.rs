//! Aim-cone validation.
//!
//! Rejects fire attempts whose aim direction deviates too far from the
//! camera's forward vector, so the hook cannot be fired behind the player.

use bevy::prelude::*;

/// Check whether an aim direction lies inside the allowed cone around the
/// camera's forward vector.
///
/// Both vectors are normalized before the comparison. The pass condition is
/// strictly `angle < angle_limit`: an aim exactly at the limit is rejected.
/// Degenerate (near-zero) directions never pass.
pub fn aim_within_limit(camera_forward: Vec3, aim_direction: Vec3, angle_limit: f32) -> bool {
    let forward = camera_forward.normalize_or_zero();
    let direction = aim_direction.normalize_or_zero();
    if forward == Vec3::ZERO || direction == Vec3::ZERO {
        return false;
    }

    let dot = forward.dot(direction).clamp(-1.0, 1.0);
    let angle = dot.acos();

    angle < angle_limit
}
