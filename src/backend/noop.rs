//! Backend that runs the core without a physics engine.

use bevy::prelude::*;

use crate::backend::GrapplePhysicsBackend;

/// Physics backend with no physics engine behind it.
///
/// Positions come from `Transform`; velocity and mass queries return zeros
/// and writes are dropped. Commanded pull forces stay readable on the
/// controller, which is what the headless tests assert against.
pub struct NoOpBackend;

impl GrapplePhysicsBackend for NoOpBackend {
    fn plugin() -> impl Plugin {
        NoOpBackendPlugin
    }

    fn get_position(world: &World, entity: Entity) -> Vec3 {
        world
            .get::<GlobalTransform>(entity)
            .map(|t| t.translation())
            .or_else(|| world.get::<Transform>(entity).map(|t| t.translation))
            .unwrap_or(Vec3::ZERO)
    }

    fn get_velocity(_world: &World, _entity: Entity) -> Vec3 {
        Vec3::ZERO
    }

    fn set_velocity(_world: &mut World, _entity: Entity, _velocity: Vec3) {}

    fn get_mass(_world: &World, _entity: Entity) -> f32 {
        0.0
    }

    fn get_fixed_timestep(world: &World) -> f32 {
        world
            .get_resource::<Time<Fixed>>()
            .map(|t| t.delta_secs())
            .filter(|&d| d > 0.0)
            .unwrap_or(1.0 / 60.0)
    }
}

/// Empty plugin for backends that don't need additional setup.
pub struct NoOpBackendPlugin;

impl Plugin for NoOpBackendPlugin {
    fn build(&self, _app: &mut App) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_falls_back_to_transform() {
        let mut world = World::new();
        let entity = world
            .spawn(Transform::from_xyz(1.0, 2.0, 3.0))
            .id();

        let position = NoOpBackend::get_position(&world, entity);
        assert_eq!(position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn missing_components_yield_zeros() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        assert_eq!(NoOpBackend::get_position(&world, entity), Vec3::ZERO);
        assert_eq!(NoOpBackend::get_velocity(&world, entity), Vec3::ZERO);
        assert_eq!(NoOpBackend::get_mass(&world, entity), 0.0);
    }

    #[test]
    fn fixed_timestep_defaults_without_the_resource() {
        let world = World::new();
        assert_eq!(NoOpBackend::get_fixed_timestep(&world), 1.0 / 60.0);
    }
}
