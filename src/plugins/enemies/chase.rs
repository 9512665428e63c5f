//! Chase state machine.
//!
//! ```text
//! Idle ──activate_mimics──> Chasing (terminal)
//!                             │
//!                             ├─ DirectSteering: tick_direct_chase
//!                             └─ NavSteering:    tick_nav_chase -> NavAgent
//! ```
//!
//! Activation is the only place that looks at `MovementStrategy`. It attaches
//! exactly one steering marker, and each marker has its own tick system.

use bevy::prelude::*;

use crate::plugins::camera::MainCamera;
use crate::plugins::player::{Player, PlayerEntity};

use super::components::{
    ChaseState, ChaseTarget, DirectSteering, Mimic, MimicConfig, MovementStrategy, NavSteering,
};
use super::nav::NavAgent;
use super::spawn::{spawn_position, CameraPose, SpawnRng};
use super::steering::{move_towards, turn_towards};

/// Place idle mimics off-screen and start them chasing.
pub fn activate_mimics(
    mut commands: Commands,
    mut rng: ResMut<SpawnRng>,
    player_e: Option<Res<PlayerEntity>>,
    q_players: Query<Entity, With<Player>>,
    q_camera: Query<(&Transform, &Projection), (With<MainCamera>, Without<Mimic>)>,
    q_targets: Query<&Transform, Without<Mimic>>,
    mut q: Query<
        (
            Entity,
            &MimicConfig,
            &mut ChaseState,
            &mut ChaseTarget,
            &mut Transform,
            Option<&mut NavAgent>,
        ),
        With<Mimic>,
    >,
) {
    let camera = q_camera
        .iter()
        .next()
        .map(|(tf, projection)| CameraPose::new(tf, projection));
    let registered_player = player_e
        .and_then(|p| p.0)
        .or_else(|| q_players.single().ok());

    for (e, config, mut state, mut target, mut tf, agent) in &mut q {
        if *state != ChaseState::Idle {
            continue;
        }

        if target.0.is_none() {
            target.0 = registered_player;
        }
        let target_pos = target.0.and_then(|t| q_targets.get(t).ok()).map(|t| t.translation);

        let dir = rng.unit_direction();
        match spawn_position(tf.translation, camera.as_ref(), target_pos, dir, config) {
            Some(pos) => tf.translation = pos,
            None => debug!("Mimic {e:?}: no camera or target, spawning in place"),
        }

        *state = ChaseState::Chasing;

        match (config.strategy, agent) {
            (MovementStrategy::NavAgent, Some(mut agent)) => {
                agent.resume(config.speed, target_pos.map(|p| p.truncate()));
                commands.entity(e).insert(NavSteering);
            }
            (strategy, _) => {
                if strategy == MovementStrategy::NavAgent {
                    debug!("Mimic {e:?}: no NavAgent, falling back to direct steering");
                }
                commands.entity(e).insert(DirectSteering);
            }
        }

        debug!("Mimic {e:?} chasing {:?} from {}", target.0, tf.translation);
    }
}

/// Direct strategy: move at constant speed, then face the remaining gap.
pub fn tick_direct_chase(
    time: Res<Time>,
    q_targets: Query<&Transform, Without<Mimic>>,
    mut q: Query<(&MimicConfig, &ChaseState, &ChaseTarget, &mut Transform), (With<Mimic>, With<DirectSteering>)>,
) {
    let dt = time.delta_secs();

    for (config, state, target, mut tf) in &mut q {
        if *state != ChaseState::Chasing {
            continue;
        }
        let Some(target_tf) = target.0.and_then(|t| q_targets.get(t).ok()) else {
            continue;
        };

        let goal = target_tf.translation.truncate().extend(tf.translation.z);
        tf.translation = move_towards(tf.translation, goal, config.speed * dt);

        let to_target = (goal - tf.translation).truncate();
        tf.rotation = turn_towards(tf.rotation, to_target, config.facing_offset, config.direct_turn_rate, dt);
    }
}

/// Nav-agent strategy: keep the agent's destination on the target and
/// turn toward it. Movement itself happens in `steer_nav_agents`.
pub fn tick_nav_chase(
    time: Res<Time>,
    q_targets: Query<&Transform, Without<Mimic>>,
    mut q: Query<
        (&MimicConfig, &ChaseState, &ChaseTarget, &mut Transform, &mut NavAgent),
        (With<Mimic>, With<NavSteering>),
    >,
) {
    let dt = time.delta_secs();

    for (config, state, target, mut tf, mut agent) in &mut q {
        if *state != ChaseState::Chasing {
            continue;
        }
        let Some(target_tf) = target.0.and_then(|t| q_targets.get(t).ok()) else {
            continue;
        };

        let goal = target_tf.translation.truncate();
        agent.speed = config.speed;
        agent.set_destination(goal);

        let to_target = goal - tf.translation.truncate();
        tf.rotation = turn_towards(tf.rotation, to_target, config.facing_offset, config.nav_turn_rate, dt);
    }
}
