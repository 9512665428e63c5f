//! Tunable gameplay constants.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// How a mimic wants to move once it starts chasing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementStrategy {
    /// Move straight at the target, clamped so it never overshoots.
    #[default]
    Direct,
    /// Hand the target to the entity's `NavAgent`.
    /// Falls back to `Direct` when the entity has no agent.
    NavAgent,
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub bullet_speed: f32,
    /// Seconds before an unspent bullet is removed.
    pub bullet_lifetime: f32,
    /// Minimum seconds between shots while the trigger is held.
    pub fire_interval: f32,
    /// Distance ahead of the player where bullets appear.
    pub muzzle_offset: f32,
    /// Sprites are drawn facing +Y; rotations are `atan2 + facing_offset`.
    pub facing_offset: f32,

    pub mimic_speed: f32,
    pub mimic_spawn_radius: f32,
    pub mimic_spawn_margin: f32,
    pub mimic_strategy: MovementStrategy,
    pub mimic_nav_turn_rate: f32,
    pub mimic_direct_turn_rate: f32,
    pub mimic_spawn_interval: f32,
    pub max_mimics: usize,

    pub score_per_second: f32,
    pub kill_score: f32,

    pub light_pulse_speed: f32,
    pub light_min_range: f32,
    pub light_max_range: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            bullet_speed: 900.0,
            bullet_lifetime: 2.0,
            fire_interval: 0.2,
            muzzle_offset: 18.0,
            facing_offset: -FRAC_PI_2,

            mimic_speed: 160.0,
            mimic_spawn_radius: 400.0,
            mimic_spawn_margin: 40.0,
            mimic_strategy: MovementStrategy::Direct,
            mimic_nav_turn_rate: 10.0,
            mimic_direct_turn_rate: 10.0,
            mimic_spawn_interval: 2.0,
            max_mimics: 12,

            score_per_second: 1.0,
            kill_score: 10.0,

            light_pulse_speed: 2.0,
            light_min_range: 300.0,
            light_max_range: 450.0,
        }
    }
}
