use bevy::prelude::*;

pub use crate::common::tunables::MovementStrategy;
use crate::common::tunables::Tunables;

/// Marker for chasing enemies.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Mimic;

/// Chase lifecycle.
///
/// - Idle: freshly spawned, not yet placed, does not move.
/// - Chasing: placed off-screen and steering toward its target. Terminal.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChaseState {
    #[default]
    Idle,
    Chasing,
}

/// Non-owning reference to the entity being chased.
///
/// Usually assigned at spawn. When it is `None` at activation the player
/// registry is consulted once.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChaseTarget(pub Option<Entity>);

/// Per-actor spawn and movement parameters, fixed for the actor's lifetime.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MimicConfig {
    /// Minimum distance from the camera centre at spawn.
    pub spawn_radius: f32,
    /// Extra clearance beyond the orthographic half-diagonal.
    pub spawn_margin: f32,
    /// World units per second.
    pub speed: f32,
    pub strategy: MovementStrategy,
    pub nav_turn_rate: f32,
    pub direct_turn_rate: f32,
    /// Radians added to the travel angle to get the sprite rotation.
    pub facing_offset: f32,
}

impl MimicConfig {
    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self {
            spawn_radius: tunables.mimic_spawn_radius,
            spawn_margin: tunables.mimic_spawn_margin,
            speed: tunables.mimic_speed,
            strategy: tunables.mimic_strategy,
            nav_turn_rate: tunables.mimic_nav_turn_rate,
            direct_turn_rate: tunables.mimic_direct_turn_rate,
            facing_offset: tunables.facing_offset,
        }
    }
}

impl Default for MimicConfig {
    fn default() -> Self {
        Self::from_tunables(&Tunables::default())
    }
}

/// Selected at activation: steer by moving the transform directly.
#[derive(Component, Debug, Clone, Copy)]
pub struct DirectSteering;

/// Selected at activation: steer through the entity's `NavAgent`.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavSteering;
