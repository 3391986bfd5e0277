//! Grapple input commands.
//!
//! Intents represent edge-triggered fire/release requests from player input
//! or AI. Host input systems write intents; the controller systems consume
//! them exactly once per command. Input code never touches the grapple state
//! directly.

use bevy::prelude::*;

/// World-space aim data captured at the moment a fire was requested.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct AimSnapshot {
    /// Where the hook is fired from.
    pub origin: Vec3,
    /// Direction the hook travels. Does not need to be pre-normalized.
    pub direction: Vec3,
    /// The camera's forward vector, used for the aim-cone check.
    pub camera_forward: Vec3,
}

impl AimSnapshot {
    /// Create an aim snapshot.
    pub fn new(origin: Vec3, direction: Vec3, camera_forward: Vec3) -> Self {
        Self {
            origin,
            direction,
            camera_forward,
        }
    }
}

/// Pending grapple commands for one character.
///
/// Fire and release are latches, not levels: a request stays pending until
/// the controller consumes it, and repeated requests while one is pending
/// are ignored.
///
/// # Example
///
/// ```rust
/// use bevy::prelude::*;
/// use msg_grapple_controller::prelude::*;
///
/// let mut intent = GrappleIntent::new();
/// intent.request_fire(AimSnapshot::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::NEG_Z));
/// assert!(intent.fire_pending());
///
/// // The controller consumes the command exactly once.
/// assert!(intent.take_fire().is_some());
/// assert!(intent.take_fire().is_none());
/// ```
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct GrappleIntent {
    fire: Option<AimSnapshot>,
    release: bool,
}

impl GrappleIntent {
    /// Create an empty intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a fire with the given aim. Ignored if a fire is already
    /// pending.
    pub fn request_fire(&mut self, aim: AimSnapshot) {
        if self.fire.is_none() {
            self.fire = Some(aim);
        }
    }

    /// Request a manual release of the active hook.
    pub fn request_release(&mut self) {
        self.release = true;
    }

    /// Whether a fire command is waiting to be processed.
    pub fn fire_pending(&self) -> bool {
        self.fire.is_some()
    }

    /// Peek at the pending fire command without consuming it.
    pub fn pending_fire(&self) -> Option<&AimSnapshot> {
        self.fire.as_ref()
    }

    /// Consume the pending fire command.
    pub fn take_fire(&mut self) -> Option<AimSnapshot> {
        self.fire.take()
    }

    /// Consume the pending release request.
    pub fn take_release(&mut self) -> bool {
        std::mem::take(&mut self.release)
    }

    /// Drop all pending commands.
    pub fn clear(&mut self) {
        self.fire = None;
        self.release = false;
    }
}
