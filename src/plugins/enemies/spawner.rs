//! Periodic mimic spawning.
//!
//! New mimics are spawned `Idle` at the origin; `activate_mimics` moves them
//! off-screen on the same frame.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::player::PlayerEntity;

use super::components::{ChaseState, ChaseTarget, Mimic, MimicConfig, MovementStrategy};
use super::nav::NavAgent;

const MIMIC_SIZE: f32 = 28.0;

#[derive(Resource, Debug)]
pub struct MimicSpawner {
    pub timer: Timer,
    pub max_alive: usize,
}

impl MimicSpawner {
    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self {
            timer: Timer::from_seconds(tunables.mimic_spawn_interval, TimerMode::Repeating),
            max_alive: tunables.max_mimics,
        }
    }
}

/// Components of a freshly spawned, idle mimic.
pub fn mimic_bundle(config: MimicConfig, target: Option<Entity>, at: Vec3) -> impl Bundle {
    let layers = CollisionLayers::new(Layer::Enemy, [Layer::Player, Layer::PlayerBullet]);

    (
        Name::new("Mimic"),
        Mimic,
        ChaseState::Idle,
        ChaseTarget(target),
        config,
        Sprite {
            color: Color::srgb(0.9, 0.25, 0.25),
            custom_size: Some(Vec2::splat(MIMIC_SIZE)),
            ..default()
        },
        Transform::from_translation(at),
        RigidBody::Kinematic,
        Collider::circle(MIMIC_SIZE * 0.5),
        layers,
        LinearVelocity::ZERO,
        Occluder2d::circle(MIMIC_SIZE * 0.5),
        DespawnOnExit(GameState::InGame),
    )
}

pub fn spawn_mimic(commands: &mut Commands, tunables: &Tunables, target: Option<Entity>, at: Vec3) -> Entity {
    let config = MimicConfig::from_tunables(tunables);
    let wants_agent = config.strategy == MovementStrategy::NavAgent;

    let mut e = commands.spawn(mimic_bundle(config, target, at));
    if wants_agent {
        e.insert(NavAgent::default());
    }
    e.id()
}

pub fn tick_mimic_spawner(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    player_e: Option<Res<PlayerEntity>>,
    mut spawner: ResMut<MimicSpawner>,
    q_alive: Query<(), With<Mimic>>,
) {
    spawner.timer.tick(time.delta());
    if !spawner.timer.just_finished() {
        return;
    }

    let alive = q_alive.iter().count();
    if alive >= spawner.max_alive {
        return;
    }

    let target = player_e.and_then(|p| p.0);
    let e = spawn_mimic(&mut commands, &tunables, target, Vec3::new(0.0, 0.0, 1.0));
    debug!("Spawned mimic {e:?} ({} alive)", alive + 1);
}
