//! # MSG Grapple Controller
//!
//! A physics-based grappling hook controller plugin for Bevy.
//!
//! On command a hook is fired along a validated aim direction; if the aim
//! probe strikes an eligible surface, a continuous pulling force drags the
//! character toward the hit point until arrival or manual release, after
//! which a cooldown gates the next attempt.
//!
//! ## Architecture
//!
//! The controller is split into a backend-agnostic core and a swappable
//! physics backend:
//!
//! - The core owns the Idle → Active → Cooldown lifecycle
//!   ([`GrappleController`](controller::GrappleController)), consumes
//!   edge-triggered input commands ([`GrappleIntent`](intent::GrappleIntent)),
//!   validates aims and surfaces, and computes the tension-scaled pull force
//!   every fixed tick.
//! - The backend ([`GrapplePhysicsBackend`](backend::GrapplePhysicsBackend))
//!   runs the aim probe against world collision and hands the commanded
//!   force to the engine's continuous-force primitive. The `avian3d` feature
//!   (default) provides the Avian3D backend.
//!
//! Presentation is decoupled entirely: beams, hook markers and crosshair
//! feedback live in host code that reads the [`feedback`] messages, and the
//! controller runs fine with no reader attached.
//!
//! All controller systems run on chained phases of `FixedUpdate`
//! ([`GrappleControllerSet`]), so state transitions are serialized with the
//! pull tick; input callbacks only ever write intents.
//!
//! ## Example
//!
//! ```rust
//! use bevy::prelude::*;
//! use msg_grapple_controller::prelude::*;
//!
//! let mut app = App::new();
//! app.add_plugins(MinimalPlugins)
//!     .add_plugins(GrappleControllerPlugin::<NoOpBackend>::default());
//!
//! // Host input systems aim and fire by writing intents:
//! fn aim_and_fire(mut query: Query<(&Transform, &mut GrappleIntent)>) {
//!     for (transform, mut intent) in &mut query {
//!         let forward = transform.forward().as_vec3();
//!         intent.request_fire(AimSnapshot::new(transform.translation, forward, forward));
//!     }
//! }
//! ```

use std::marker::PhantomData;

use bevy::prelude::*;

pub mod aiming;
pub mod backend;
pub mod config;
pub mod controller;
pub mod feedback;
pub mod intent;
pub mod systems;
pub mod targeting;

#[cfg(feature = "avian3d")]
pub mod avian;

use backend::GrapplePhysicsBackend;
use systems::ActiveEpisodes;

/// Common imports for hosts of the grapple controller.
pub mod prelude {
    pub use crate::backend::{GrapplePhysicsBackend, NoOpBackend, NoOpBackendPlugin};
    pub use crate::config::{
        AimingConfig, CooldownConfig, GrappleConfig, PullingConfig, TargetingConfig,
    };
    pub use crate::controller::{GrappleController, GrapplePhase, GrappleState};
    pub use crate::feedback::{
        FireDenyReason, GrappleFireDenied, GrappleFired, GrappleReleased, GrappleStateChanged,
        ReleaseReason,
    };
    pub use crate::intent::{AimSnapshot, GrappleIntent};
    pub use crate::systems::ActiveEpisodes;
    pub use crate::targeting::{GrappleAnchor, TargetCast};
    pub use crate::{GrappleControllerPlugin, GrappleControllerSet};

    #[cfg(feature = "avian3d")]
    pub use crate::avian::{Avian3dBackend, Avian3dBackendPlugin};
}

/// System phases of the grapple controller, chained in `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrappleControllerSet {
    /// Backend aim probes (world collision queries).
    Sensors,
    /// Forced teardowns, cooldown ticking, fire/release processing.
    Transitions,
    /// Per-tick pull computation and arrival detection.
    Forces,
    /// Backend hand-off of commanded forces to the physics engine.
    FinalApplication,
}

/// Grapple controller plugin, generic over the physics backend.
///
/// ```rust
/// use bevy::prelude::*;
/// use msg_grapple_controller::prelude::*;
///
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .add_plugins(GrappleControllerPlugin::<NoOpBackend>::default());
/// ```
pub struct GrappleControllerPlugin<B: GrapplePhysicsBackend> {
    _backend: PhantomData<B>,
}

impl<B: GrapplePhysicsBackend> Default for GrappleControllerPlugin<B> {
    fn default() -> Self {
        Self {
            _backend: PhantomData,
        }
    }
}

impl<B: GrapplePhysicsBackend> Plugin for GrappleControllerPlugin<B> {
    fn build(&self, app: &mut App) {
        app.register_type::<controller::GrappleController>()
            .register_type::<config::GrappleConfig>()
            .register_type::<intent::GrappleIntent>()
            .register_type::<targeting::GrappleAnchor>();

        app.add_message::<feedback::GrappleFired>()
            .add_message::<feedback::GrappleFireDenied>()
            .add_message::<feedback::GrappleReleased>()
            .add_message::<feedback::GrappleStateChanged>();

        app.init_resource::<ActiveEpisodes>();

        app.configure_sets(
            FixedUpdate,
            (
                GrappleControllerSet::Sensors,
                GrappleControllerSet::Transitions,
                GrappleControllerSet::Forces,
                GrappleControllerSet::FinalApplication,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                systems::release_removed_controllers,
                systems::tick_cooldowns,
                systems::process_grapple_intents,
            )
                .chain()
                .in_set(GrappleControllerSet::Transitions),
        );
        app.add_systems(
            FixedUpdate,
            systems::update_pull.in_set(GrappleControllerSet::Forces),
        );

        app.add_plugins(B::plugin());
    }
}
