//! Off-screen spawn placement.
//!
//! A mimic is placed on a circle around the camera whose radius clears the
//! visible area (orthographic) or equals the configured radius (anything
//! else). Without a camera it is placed around its target instead.
//!
//! ```text
//!            radius = max(spawn_radius, half_diagonal + margin)
//!      ┌───────────────┐
//!      │    camera     │ half_h
//!      │       +───────┼──── dir * radius ──>  x  (spawn)
//!      │               │
//!      └───────────────┘
//!            half_w = half_h * aspect
//! ```
//!
//! This is a heuristic: a rotated or perspective camera can still see a
//! point on the circle.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::components::MimicConfig;

/// Random source for spawn directions.
#[derive(Resource, Debug)]
pub struct SpawnRng(StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Uniformly distributed unit vector.
    pub fn unit_direction(&mut self) -> Vec2 {
        Vec2::from_angle(self.0.random_range(0.0..TAU))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

/// The part of a camera projection that matters for placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraView {
    Orthographic { half_height: f32, aspect: f32 },
    Perspective,
}

impl CameraView {
    pub fn from_projection(projection: &Projection) -> Self {
        match projection {
            Projection::Orthographic(ortho) => {
                let height = ortho.area.height();
                let aspect = if height > 0.0 { ortho.area.width() / height } else { 1.0 };
                Self::Orthographic { half_height: height * 0.5, aspect }
            }
            _ => Self::Perspective,
        }
    }
}

/// Camera position, orientation and view at the moment of spawning.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub view: CameraView,
}

impl CameraPose {
    pub fn new(tf: &Transform, projection: &Projection) -> Self {
        Self {
            translation: tf.translation,
            rotation: tf.rotation,
            view: CameraView::from_projection(projection),
        }
    }
}

/// Distance from the camera centre at which to spawn.
pub fn effective_spawn_radius(view: CameraView, spawn_radius: f32, margin: f32) -> f32 {
    match view {
        CameraView::Orthographic { half_height, aspect } => {
            let half_width = half_height * aspect;
            let half_diagonal = (half_height * half_height + half_width * half_width).sqrt();
            spawn_radius.max(half_diagonal + margin)
        }
        CameraView::Perspective => spawn_radius,
    }
}

/// Where an actor currently at `actor` should be placed.
///
/// `dir` must be a unit vector. Returns `None` when there is neither a camera
/// nor a target to place around; the actor then stays where it is.
pub fn spawn_position(
    actor: Vec3,
    camera: Option<&CameraPose>,
    target: Option<Vec3>,
    dir: Vec2,
    config: &MimicConfig,
) -> Option<Vec3> {
    let mut pos = if let Some(cam) = camera {
        let radius = effective_spawn_radius(cam.view, config.spawn_radius, config.spawn_margin);
        cam.translation + cam.rotation * dir.extend(0.0) * radius
    } else {
        target? + dir.extend(0.0) * config.spawn_radius
    };

    pos.z = actor.z;
    Some(pos)
}
