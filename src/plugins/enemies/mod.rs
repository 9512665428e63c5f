//! Enemies plugin: mimics that appear just outside the camera and chase the
//! player.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED (ECS)
//! ---------------------------
//! 1) FACTS live in components:
//!    - `MimicConfig` is fixed per actor (radius, margin, speed, strategy).
//!    - `ChaseState` is the lifecycle (Idle -> Chasing, never back).
//!    - `ChaseTarget` is a plain `Option<Entity>`; nothing is owned.
//!    - `NavAgent` (optional) holds destination/speed/stopped.
//!
//! 2) RULES run in a fixed order every frame:
//!    Update:      spawner -> activation -> strategy ticks
//!    FixedUpdate: nav steering, on the same clock as the physics step
//!
//! 3) Every missing collaborator (camera, target, agent) is an expected
//!    branch, never a panic.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};

pub mod chase;
pub mod components;
pub mod nav;
pub mod spawn;
pub mod spawner;
pub mod steering;

pub use components::{
    ChaseState, ChaseTarget, DirectSteering, Mimic, MimicConfig, MovementStrategy, NavSteering,
};
pub use nav::NavAgent;
pub use spawn::SpawnRng;

/// Register enemy systems.
pub fn plugin(app: &mut App) {
    let spawner = spawner::MimicSpawner::from_tunables(app.world().resource::<Tunables>());

    app.insert_resource(spawner);
    app.init_resource::<SpawnRng>();

    app.add_systems(
        Update,
        (
            spawner::tick_mimic_spawner,
            chase::activate_mimics,
            chase::tick_direct_chase,
            chase::tick_nav_chase,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedUpdate,
        nav::steer_nav_agents.run_if(in_state(GameState::InGame)),
    );
}
