//! Avian3D physics backend implementation.
//!
//! This module provides the physics backend for Avian3D (`avian3d`).
//! Enable with the `avian3d` feature.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::backend::GrapplePhysicsBackend;
use crate::config::GrappleConfig;
use crate::controller::GrappleController;
use crate::intent::GrappleIntent;
use crate::targeting::TargetCast;

/// Avian3D physics backend for the grapple controller.
///
/// The continuous-force actuator is a `ConstantForce` kept resident on the
/// character and adjusted by the commanded-pull delta each frame, so the
/// engine-side force is exactly the commanded pull (zero outside an Active
/// episode) and external forces on the same body survive untouched. The aim
/// probe is a thin shape cast through `SpatialQuery`.
pub struct Avian3dBackend;

impl GrapplePhysicsBackend for Avian3dBackend {
    fn plugin() -> impl Plugin {
        Avian3dBackendPlugin
    }

    fn get_position(world: &World, entity: Entity) -> Vec3 {
        // Try Avian's Position component first, then fall back to Transform
        world
            .get::<Position>(entity)
            .map(|p| p.0)
            .or_else(|| world.get::<Transform>(entity).map(|t| t.translation))
            .or_else(|| {
                world
                    .get::<GlobalTransform>(entity)
                    .map(|t| t.translation())
            })
            .unwrap_or(Vec3::ZERO)
    }

    fn get_velocity(world: &World, entity: Entity) -> Vec3 {
        world
            .get::<LinearVelocity>(entity)
            .map(|v| v.0)
            .unwrap_or(Vec3::ZERO)
    }

    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec3) {
        if let Some(mut vel) = world.get_mut::<LinearVelocity>(entity) {
            vel.0 = velocity;
        }
    }

    fn get_mass(world: &World, entity: Entity) -> f32 {
        let Some(computed_mass) = world.get::<ComputedMass>(entity) else {
            return 0.0;
        };
        let mass = computed_mass.value();
        if mass <= 0.0 || !mass.is_finite() {
            return 0.0;
        }
        mass
    }

    fn get_fixed_timestep(world: &World) -> f32 {
        world
            .get_resource::<Time<Fixed>>()
            .map(|t| t.delta_secs())
            .filter(|&d| d > 0.0)
            .unwrap_or(1.0 / 60.0)
    }
}

/// Plugin that sets up Avian3D-specific systems for the grapple controller.
pub struct Avian3dBackendPlugin;

impl Plugin for Avian3dBackendPlugin {
    fn build(&self, app: &mut App) {
        use crate::GrappleControllerSet;

        // Phase 1: Sensors - resolve pending fire commands against world
        // collision. Actuator attachment runs first so a freshly spawned
        // character has its force primitive before the frame's final
        // application.
        app.add_systems(
            FixedUpdate,
            (attach_force_actuators, avian_aim_probe)
                .chain()
                .in_set(GrappleControllerSet::Sensors),
        );

        // Phase 4: Final Application - hand commanded pulls to the physics
        // engine.
        app.add_systems(
            FixedUpdate,
            apply_pull_forces.in_set(GrappleControllerSet::FinalApplication),
        );
    }
}

/// Perform a thin shape cast for the aim probe.
///
/// The cast is clamped to `max_distance`, excludes the firing character's
/// own collision geometry, and respects the character's collision layers
/// when present.
fn avian_spherecast(
    spatial_query: &SpatialQuery,
    origin: Vec3,
    direction: Dir3,
    max_distance: f32,
    radius: f32,
    exclude_entity: Entity,
    collision_layers: Option<CollisionLayers>,
) -> Option<TargetCast> {
    let shape = Collider::sphere(radius);

    // Use the character's filters as the mask - the probe can only anchor to
    // entities the character is allowed to collide with
    let filter = if let Some(layers) = collision_layers {
        SpatialQueryFilter::from_mask(layers.filters).with_excluded_entities([exclude_entity])
    } else {
        SpatialQueryFilter::default().with_excluded_entities([exclude_entity])
    };

    let config = ShapeCastConfig::from_max_distance(max_distance);

    spatial_query
        .cast_shape(&shape, origin, Quat::IDENTITY, direction, &config, &filter)
        .map(|hit| {
            let point = origin + direction * hit.distance;
            TargetCast::hit(hit.distance, hit.normal1, point, Some(hit.entity))
        })
}

/// Avian-specific aim probe system.
///
/// Runs one synchronous cast per pending fire command and stores the result
/// on the controller for the transition phase. The previous frame's result
/// is always dropped first, so the fire guard chain only ever sees a cast
/// taken with the aim it is validating.
pub fn avian_aim_probe(
    spatial_query: SpatialQuery,
    mut q_controllers: Query<(
        Entity,
        &GrappleConfig,
        &GrappleIntent,
        &mut GrappleController,
        Option<&CollisionLayers>,
    )>,
) {
    for (entity, config, intent, mut controller, collision_layers) in &mut q_controllers {
        controller.clear_aim_cast();

        let Some(aim) = intent.pending_fire() else {
            continue;
        };
        let Ok(direction) = Dir3::new(aim.direction) else {
            // Degenerate aim; the gate rejects it without a probe.
            continue;
        };

        if let Some(cast) = avian_spherecast(
            &spatial_query,
            aim.origin,
            direction,
            config.targeting.max_distance,
            config.targeting.probe_radius,
            entity,
            collision_layers.cloned(),
        ) {
            controller.set_aim_cast(cast);
        }
    }
}

/// Insert a zeroed force actuator on grapple controllers that lack one.
pub fn attach_force_actuators(
    mut commands: Commands,
    q_missing: Query<Entity, (With<GrappleController>, Without<ConstantForce>)>,
) {
    for entity in &q_missing {
        commands.entity(entity).insert(ConstantForce::default());
    }
}

/// Apply commanded pull forces to the physics engine.
///
/// Only the difference from what was applied last frame is written, so
/// external forces accumulated on the same `ConstantForce` are preserved.
pub fn apply_pull_forces(
    mut q_controllers: Query<(&mut GrappleController, &mut ConstantForce)>,
) {
    for (mut controller, mut force) in &mut q_controllers {
        force.0 += controller.commit_force();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GrappleControllerPlugin;

    const FIXED_UPDATE_HZ: f64 = 60.0;

    fn create_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::transform::TransformPlugin);
        app.add_plugins(AssetPlugin::default());
        // Avian's collider cache reads `AssetEvent<Mesh>` every frame; register
        // the Mesh asset so that message (and `Assets<Mesh>`) exists headless.
        app.init_asset::<Mesh>();
        // Insert SceneSpawner resource required by Avian's ColliderHierarchyPlugin
        app.insert_resource(bevy::scene::SceneSpawner::default());
        app.add_plugins(PhysicsPlugins::default());
        app.add_plugins(GrappleControllerPlugin::<Avian3dBackend>::default());
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_UPDATE_HZ));
        // Drive time deterministically: each `app.update()` advances the clock
        // by exactly one fixed timestep so `FixedUpdate` runs once per `tick`.
        let timestep = std::time::Duration::from_secs_f64(1.0 / FIXED_UPDATE_HZ);
        app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(timestep));
        app.finish();
        app.cleanup();
        // The first update only establishes the time baseline (zero delta), so
        // warm it up here; every subsequent `tick` then advances one timestep.
        app.update();
        app
    }

    fn tick(app: &mut App) {
        app.update();
    }

    #[test]
    fn avian_backend_get_position() {
        let mut app = create_test_app();

        let entity = app
            .world_mut()
            .spawn((Transform::from_xyz(100.0, 200.0, 50.0), RigidBody::Dynamic))
            .id();

        tick(&mut app);

        let pos = Avian3dBackend::get_position(app.world(), entity);
        assert!((pos.x - 100.0).abs() < 0.01);
        assert!((pos.y - 200.0).abs() < 0.01);
        assert!((pos.z - 50.0).abs() < 0.01);
    }

    #[test]
    fn avian_backend_velocity() {
        let mut app = create_test_app();

        let entity = app
            .world_mut()
            .spawn((
                Transform::default(),
                RigidBody::Dynamic,
                LinearVelocity(Vec3::new(50.0, 30.0, 0.0)),
            ))
            .id();

        tick(&mut app);

        let vel = Avian3dBackend::get_velocity(app.world(), entity);
        assert!((vel.x - 50.0).abs() < 0.01);
        assert!((vel.y - 30.0).abs() < 0.01);

        Avian3dBackend::set_velocity(app.world_mut(), entity, Vec3::new(100.0, 0.0, 0.0));

        let vel = Avian3dBackend::get_velocity(app.world(), entity);
        assert!((vel.x - 100.0).abs() < 0.01);
        assert!(vel.y.abs() < 0.01);
    }

    #[test]
    fn avian_backend_mass_from_collider() {
        let mut app = create_test_app();

        let entity = app
            .world_mut()
            .spawn((
                Transform::default(),
                RigidBody::Dynamic,
                Collider::sphere(0.5),
            ))
            .id();

        tick(&mut app);

        let mass = Avian3dBackend::get_mass(app.world(), entity);
        assert!(mass > 0.0, "computed mass should be positive: {}", mass);

        let timestep = Avian3dBackend::get_fixed_timestep(app.world());
        assert!((timestep - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn controllers_get_a_force_actuator_attached() {
        let mut app = create_test_app();

        let entity = app
            .world_mut()
            .spawn((
                Transform::default(),
                GlobalTransform::default(),
                RigidBody::Dynamic,
                Collider::capsule(0.4, 1.0),
                crate::controller::GrappleController::new(),
                GrappleConfig::default(),
                GrappleIntent::new(),
            ))
            .id();

        tick(&mut app);

        assert!(
            app.world().get::<ConstantForce>(entity).is_some(),
            "a zeroed ConstantForce should be attached automatically"
        );
    }
}
