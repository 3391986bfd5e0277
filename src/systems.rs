//! Grapple state transitions and the per-tick pull update.
//!
//! Everything here runs on chained `FixedUpdate` phases, so transitions are
//! serialized: input callbacks only write [`GrappleIntent`], and no fire or
//! release can interleave with a pull tick.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::aiming::aim_within_limit;
use crate::config::GrappleConfig;
use crate::controller::{GrappleController, GrapplePhase};
use crate::feedback::{
    FireDenyReason, GrappleFireDenied, GrappleFired, GrappleReleased, GrappleStateChanged,
    ReleaseReason,
};
use crate::intent::GrappleIntent;
use crate::targeting::{anchor_eligible, GrappleAnchor};

/// Characters with a live Active episode.
///
/// Exists so a character despawned mid-episode can still be reported to
/// presentation code: the controller component (and its state) dies with
/// the entity, but the registry entry survives until the teardown sweep.
#[derive(Resource, Debug, Default)]
pub struct ActiveEpisodes(pub HashSet<Entity>);

/// End an episode: one routine for every exit path (manual release,
/// arrival, forced teardown of a still-live entity).
fn finish_episode(
    entity: Entity,
    reason: ReleaseReason,
    cooldown: f32,
    controller: &mut GrappleController,
    episodes: &mut ActiveEpisodes,
    released: &mut MessageWriter<GrappleReleased>,
    changed: &mut MessageWriter<GrappleStateChanged>,
) {
    controller.begin_cooldown(cooldown);
    episodes.0.remove(&entity);
    released.write(GrappleReleased { entity, reason });
    changed.write(GrappleStateChanged {
        entity,
        phase: GrapplePhase::Cooldown,
    });
    debug!("grapple released ({:?}): {:?}", reason, entity);
}

/// Report forced teardowns: a character despawned (or stripped of its
/// controller) during an Active episode counts as an immediate release.
///
/// The cooldown timer and commanded force live in the removed component, so
/// nothing can fire after teardown; this sweep only tells presentation code
/// to drop its beam/marker resources.
pub fn release_removed_controllers(
    mut removed: RemovedComponents<GrappleController>,
    mut episodes: ResMut<ActiveEpisodes>,
    mut released: MessageWriter<GrappleReleased>,
) {
    for entity in removed.read() {
        if episodes.0.remove(&entity) {
            released.write(GrappleReleased {
                entity,
                reason: ReleaseReason::Interrupted,
            });
            debug!("grapple interrupted by teardown: {:?}", entity);
        }
    }
}

/// Count cooldowns down and reset finished ones to Idle.
pub fn tick_cooldowns(
    time: Res<Time>,
    mut q_controllers: Query<(Entity, &mut GrappleController)>,
    mut changed: MessageWriter<GrappleStateChanged>,
) {
    let delta = time.delta_secs();
    for (entity, mut controller) in &mut q_controllers {
        if controller.tick_cooldown(delta) {
            changed.write(GrappleStateChanged {
                entity,
                phase: GrapplePhase::Idle,
            });
            debug!("grapple cooldown over: {:?}", entity);
        }
    }
}

/// Process pending fire and release commands.
///
/// The release latch is handled first, so a release and a fire arriving on
/// the same frame behave as release-then-fire (and the fire is then denied
/// by the fresh cooldown). The fire guard chain runs in order: controller
/// Idle, aim inside the cone, probe hit, surface eligible. Any failure
/// leaves state untouched and emits a denial; firing while not Idle and
/// releasing while not Active are no-ops at the state level.
pub fn process_grapple_intents(
    mut q_controllers: Query<(
        Entity,
        &GrappleConfig,
        &mut GrappleIntent,
        &mut GrappleController,
    )>,
    q_anchors: Query<(), With<GrappleAnchor>>,
    mut episodes: ResMut<ActiveEpisodes>,
    mut fired: MessageWriter<GrappleFired>,
    mut denied: MessageWriter<GrappleFireDenied>,
    mut released: MessageWriter<GrappleReleased>,
    mut changed: MessageWriter<GrappleStateChanged>,
) {
    for (entity, config, mut intent, mut controller) in &mut q_controllers {
        if intent.take_release() && controller.is_active() {
            finish_episode(
                entity,
                ReleaseReason::Manual,
                config.cooldown.duration,
                &mut controller,
                &mut episodes,
                &mut released,
                &mut changed,
            );
        }

        let Some(aim) = intent.take_fire() else {
            continue;
        };
        // Consume the probe result even on denial so a stale cast can never
        // validate a later attempt.
        let cast = controller.take_aim_cast();

        if !controller.is_idle() {
            denied.write(GrappleFireDenied {
                entity,
                reason: FireDenyReason::NotReady,
            });
            continue;
        }

        if !aim_within_limit(aim.camera_forward, aim.direction, config.aiming.angle_limit) {
            denied.write(GrappleFireDenied {
                entity,
                reason: FireDenyReason::AimOutsideLimit,
            });
            continue;
        }

        let Some(cast) = cast.filter(|cast| cast.hit) else {
            denied.write(GrappleFireDenied {
                entity,
                reason: FireDenyReason::NoTarget,
            });
            continue;
        };

        let tagged = cast
            .entity
            .is_some_and(|surface| q_anchors.contains(surface));
        if !anchor_eligible(config.targeting.require_anchor_tag, tagged) {
            denied.write(GrappleFireDenied {
                entity,
                reason: FireDenyReason::IneligibleSurface,
            });
            continue;
        }

        controller.begin_active(cast.point);
        episodes.0.insert(entity);
        fired.write(GrappleFired {
            entity,
            target: cast.point,
        });
        changed.write(GrappleStateChanged {
            entity,
            phase: GrapplePhase::Active,
        });
        debug!("grapple fired: {:?} -> {}", entity, cast.point);
    }
}

/// Per-tick pull update for Active controllers.
///
/// Within the arrival threshold the episode finishes (Arrived); otherwise
/// the commanded force is the unit direction to the target scaled by the
/// force multiplier and the distance-based tension factor. Controllers that
/// are not Active have their commanded force zeroed, making a stray tick a
/// safe no-op.
pub fn update_pull(
    mut q_controllers: Query<(
        Entity,
        &GlobalTransform,
        &GrappleConfig,
        &mut GrappleController,
    )>,
    mut episodes: ResMut<ActiveEpisodes>,
    mut released: MessageWriter<GrappleReleased>,
    mut changed: MessageWriter<GrappleStateChanged>,
) {
    for (entity, transform, config, mut controller) in &mut q_controllers {
        let Some(target) = controller.target_point() else {
            controller.set_pull_force(Vec3::ZERO);
            continue;
        };

        let delta = target - transform.translation();
        let distance = delta.length();

        if distance < config.pulling.arrival_threshold {
            finish_episode(
                entity,
                ReleaseReason::Arrived,
                config.cooldown.duration,
                &mut controller,
                &mut episodes,
                &mut released,
                &mut changed,
            );
            continue;
        }

        let tension = (distance / config.targeting.max_distance)
            .clamp(config.pulling.min_tension, 1.0);
        let force = delta.normalize_or_zero() * config.pulling.force_multiplier * tension;
        controller.set_pull_force(force);
    }
}
