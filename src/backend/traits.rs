//! Physics backend abstraction.
//!
//! This module defines the trait that physics backends must implement to
//! work with the grapple controller. This allows easy swapping between
//! physics engines (Avian, Rapier, custom, etc.).

use bevy::prelude::*;

/// Trait for physics backend implementations.
///
/// A backend supplies the continuous-force actuator the pull update writes
/// to, the aim probe that resolves fire commands against world collision,
/// and accessors over the character's body. The core only ever commands a
/// force vector; it never reads the actuator back.
///
/// The [`Avian3dBackend`](crate::avian::Avian3dBackend) implements this
/// trait for Avian3D (enable the `avian3d` feature). The
/// [`NoOpBackend`](crate::backend::NoOpBackend) runs the core without any
/// physics engine, which is how the headless state-machine tests work.
pub trait GrapplePhysicsBackend: 'static + Send + Sync {
    /// Returns the plugin that sets up this backend.
    fn plugin() -> impl Plugin;

    /// Get the current world position of an entity.
    fn get_position(world: &World, entity: Entity) -> Vec3;

    /// Get the current linear velocity of an entity.
    fn get_velocity(world: &World, entity: Entity) -> Vec3;

    /// Set the linear velocity of an entity.
    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec3);

    /// Get the mass of an entity, or 0.0 when it has no valid mass
    /// properties.
    fn get_mass(world: &World, entity: Entity) -> f32;

    /// Get the fixed timestep delta time.
    fn get_fixed_timestep(world: &World) -> f32;
}
