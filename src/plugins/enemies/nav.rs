//! Minimal navigation agent.
//!
//! The agent owns "where to go and how fast"; the steering system turns that
//! into a kinematic `LinearVelocity` and lets the physics step integrate it.
//! There is no path planning: the agent heads straight for its destination.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Within this distance the agent counts as arrived.
pub const ARRIVE_DISTANCE: f32 = 0.5;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct NavAgent {
    pub speed: f32,
    pub destination: Option<Vec2>,
    pub stopped: bool,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            speed: 0.0,
            destination: None,
            stopped: true,
        }
    }
}

impl NavAgent {
    /// Un-stop the agent and point it at `destination`.
    pub fn resume(&mut self, speed: f32, destination: Option<Vec2>) {
        self.stopped = false;
        self.speed = speed;
        if destination.is_some() {
            self.destination = destination;
        }
    }

    pub fn set_destination(&mut self, destination: Vec2) {
        self.destination = Some(destination);
    }

    /// Velocity that approaches the destination without overshooting it
    /// within one step of `dt`.
    pub fn desired_velocity(&self, position: Vec2, dt: f32) -> Vec2 {
        if self.stopped {
            return Vec2::ZERO;
        }
        let Some(destination) = self.destination else {
            return Vec2::ZERO;
        };

        let delta = destination - position;
        let dist = delta.length();
        if dist <= ARRIVE_DISTANCE {
            return Vec2::ZERO;
        }

        let mut speed = self.speed.max(0.0);
        if dt > 0.0 {
            speed = speed.min(dist / dt);
        }
        delta / dist * speed
    }
}

/// Write each agent's desired velocity onto its body.
///
/// Runs in `FixedUpdate`, so `dt` is the physics step that integrates the
/// velocity and the no-overshoot clamp is exact.
pub fn steer_nav_agents(
    time: Res<Time>,
    mut q: Query<(&NavAgent, &Transform, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    for (agent, tf, mut vel) in &mut q {
        vel.0 = agent.desired_velocity(tf.translation.truncate(), dt);
    }
}
