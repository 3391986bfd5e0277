//! Grapple state machine data.
//!
//! [`GrappleController`] owns the per-character grapple lifecycle
//! (Idle → Active → Cooldown → Idle), the active target point, and the
//! force bookkeeping that carries the commanded pull into the physics
//! backend without clobbering external forces on the body.

use bevy::prelude::*;

use crate::targeting::TargetCast;

/// The grapple lifecycle state.
///
/// Per-state payloads make the data invariants structural: a target point
/// exists exactly while Active, and a cooldown clock exists exactly while
/// in Cooldown.
#[derive(Reflect, Debug, Clone, PartialEq, Default)]
pub enum GrappleState {
    /// No hook out, ready to fire.
    #[default]
    Idle,

    /// Hook attached, pulling toward the target point.
    Active {
        /// World-space anchor point the character is pulled toward.
        target: Vec3,
    },

    /// Episode over, next fire gated until the clock runs out.
    Cooldown {
        /// Seconds left before the next fire attempt is admissible.
        remaining: f32,
    },
}

impl GrappleState {
    /// The payload-free discriminant of this state.
    pub fn phase(&self) -> GrapplePhase {
        match self {
            GrappleState::Idle => GrapplePhase::Idle,
            GrappleState::Active { .. } => GrapplePhase::Active,
            GrappleState::Cooldown { .. } => GrapplePhase::Cooldown,
        }
    }
}

/// Payload-free view of [`GrappleState`], used in feedback messages.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrapplePhase {
    /// Ready to fire.
    Idle,
    /// Hook attached and pulling.
    Active,
    /// Waiting out the post-release cooldown.
    Cooldown,
}

/// Grapple state machine for one character.
///
/// Attach alongside [`GrappleConfig`](crate::config::GrappleConfig) and
/// [`GrappleIntent`](crate::intent::GrappleIntent). The controller systems
/// drive every transition; hosts read state through the accessors and never
/// mutate it directly.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct GrappleController {
    state: GrappleState,

    /// Aim probe result for the current frame, written by the backend's
    /// sensor system and consumed by the fire transition.
    aim_cast: Option<TargetCast>,

    /// Force commanded this tick. Non-zero only while Active.
    pull_force: Vec3,

    /// Force the backend last handed to the physics engine. The engine-side
    /// primitive is adjusted by the difference each frame, so external
    /// forces on the same body survive untouched.
    applied_force: Vec3,
}

impl GrappleController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &GrappleState {
        &self.state
    }

    /// Payload-free discriminant of the current state.
    pub fn phase(&self) -> GrapplePhase {
        self.state.phase()
    }

    /// Whether the controller is ready to fire.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, GrappleState::Idle)
    }

    /// Whether a hook is attached and pulling.
    pub fn is_active(&self) -> bool {
        matches!(self.state, GrappleState::Active { .. })
    }

    /// Whether the post-release cooldown is running.
    pub fn in_cooldown(&self) -> bool {
        matches!(self.state, GrappleState::Cooldown { .. })
    }

    /// The active target point, if any.
    pub fn target_point(&self) -> Option<Vec3> {
        match self.state {
            GrappleState::Active { target } => Some(target),
            _ => None,
        }
    }

    /// Seconds left on the cooldown, if one is running.
    pub fn cooldown_remaining(&self) -> Option<f32> {
        match self.state {
            GrappleState::Cooldown { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// Enter Active with the given target point.
    pub(crate) fn begin_active(&mut self, target: Vec3) {
        self.state = GrappleState::Active { target };
    }

    /// Leave Active (or any state) for Cooldown and drop the commanded pull.
    pub(crate) fn begin_cooldown(&mut self, duration: f32) {
        self.state = GrappleState::Cooldown {
            remaining: duration,
        };
        self.pull_force = Vec3::ZERO;
    }

    /// Count the cooldown down. Returns true when it just finished and the
    /// controller went back to Idle. No-op outside Cooldown.
    pub(crate) fn tick_cooldown(&mut self, delta: f32) -> bool {
        let GrappleState::Cooldown { remaining } = &mut self.state else {
            return false;
        };
        *remaining -= delta;
        if *remaining <= 0.0 {
            self.state = GrappleState::Idle;
            return true;
        }
        false
    }

    /// Store this frame's aim probe result.
    pub fn set_aim_cast(&mut self, cast: TargetCast) {
        self.aim_cast = Some(cast);
    }

    /// Drop any stored aim probe result.
    pub fn clear_aim_cast(&mut self) {
        self.aim_cast = None;
    }

    /// This frame's aim probe result, if the sensor ran.
    pub fn aim_cast(&self) -> Option<&TargetCast> {
        self.aim_cast.as_ref()
    }

    /// Consume this frame's aim probe result.
    pub(crate) fn take_aim_cast(&mut self) -> Option<TargetCast> {
        self.aim_cast.take()
    }

    /// Command the pull force for this tick.
    pub(crate) fn set_pull_force(&mut self, force: Vec3) {
        self.pull_force = force;
    }

    /// The force commanded this tick.
    pub fn pull_force(&self) -> Vec3 {
        self.pull_force
    }

    /// Hand the commanded force to the backend: returns the adjustment to
    /// apply to the engine's force primitive and records the new applied
    /// value. Called once per frame by the backend's final-application
    /// system.
    pub fn commit_force(&mut self) -> Vec3 {
        let delta = self.pull_force - self.applied_force;
        self.applied_force = self.pull_force;
        delta
    }

    /// The force currently resident in the physics engine.
    pub fn applied_force(&self) -> Vec3 {
        self.applied_force
    }
}
