//! Projectiles plugin: **Message-based producer → consumer** bullet spawning.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: request_player_bullets                                      │
//!│      - reads: MouseButton input, Aim, Player Transform, FireCooldown       │
//!│      - writes: SpawnBulletRequest message                                  │
//!│                                                                            │
//!│  (B) Consumer: spawn_requested_bullets                                     │
//!│      - reads: SpawnBulletRequest messages                                  │
//!│      - spawns: Bullet + Lifetime + sensor body moving at LinearVelocity    │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!FixedUpdate / FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (C) bullet_lifetime: despawn bullets whose Lifetime finished              │
//!│  (D) Physics emits CollisionStart messages (Avian)                         │
//!│  (E) process_bullet_hits: bullet + mimic despawned, Score += kill_score    │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never spawn; the consumer is the single place bullets are built.

pub mod collision;
pub mod components;
pub mod lifetime;
pub mod messages;
pub mod request;
pub mod spawn;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{Bullet, FireCooldown, Lifetime};

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FireCooldown>()
            .add_message::<messages::SpawnBulletRequest>();

        app.add_systems(
            Update,
            (
                request::request_player_bullets,
                spawn::spawn_requested_bullets.after(request::request_player_bullets),
            )
                .after(crate::plugins::player::update_aim_from_cursor)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            lifetime::bullet_lifetime.run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            collision::process_bullet_hits
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests;
