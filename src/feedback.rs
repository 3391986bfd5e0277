//! Feedback messages for presentation code.
//!
//! The controller never renders anything. Beams, hook markers, crosshair
//! flashes and sounds live entirely in host code that reads these messages;
//! with no reader attached the controller still runs fine.

use bevy::prelude::*;

use crate::controller::GrapplePhase;

/// Why a fire attempt was denied.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDenyReason {
    /// The controller was not Idle (hook out, or cooldown running).
    NotReady,
    /// The aim direction was outside the allowed cone around camera forward.
    AimOutsideLimit,
    /// The aim probe hit nothing within range.
    NoTarget,
    /// The hit surface is not an eligible anchor.
    IneligibleSurface,
}

/// Why an active episode ended.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    /// The player released the hook.
    Manual,
    /// The character reached the target point.
    Arrived,
    /// The character (or its controller) went away mid-episode.
    Interrupted,
}

/// A hook attached: start beams, markers, travel animations.
#[derive(Message, Debug, Clone)]
pub struct GrappleFired {
    /// The grappling character.
    pub entity: Entity,
    /// World-space anchor point.
    pub target: Vec3,
}

/// A fire attempt was rejected. State did not change and no cooldown was
/// incurred.
#[derive(Message, Debug, Clone)]
pub struct GrappleFireDenied {
    /// The character whose attempt was denied.
    pub entity: Entity,
    /// Which guard rejected it.
    pub reason: FireDenyReason,
}

/// An active episode ended: tear down beams and markers.
#[derive(Message, Debug, Clone)]
pub struct GrappleReleased {
    /// The character that released. May already be despawned when the
    /// reason is [`ReleaseReason::Interrupted`].
    pub entity: Entity,
    /// What ended the episode.
    pub reason: ReleaseReason,
}

/// The controller moved to a new lifecycle phase.
#[derive(Message, Debug, Clone)]
pub struct GrappleStateChanged {
    /// The character whose state changed.
    pub entity: Entity,
    /// The phase just entered.
    pub phase: GrapplePhase,
}
