//! Steering math shared by the chase strategies.
//!
//! Everything here is a pure function of plain `glam` values so the
//! behaviour can be tested without building a world.

use bevy::prelude::*;

/// Below this squared distance the facing direction is undefined.
pub const FACING_EPSILON: f32 = 1e-4;

/// Move `current` toward `target` by at most `max_delta`, never past it.
#[inline]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let dist = delta.length();
    if dist <= max_delta || dist <= f32::EPSILON {
        return target;
    }
    current + delta / dist * max_delta
}

/// Facing angle (radians, about +Z) for a travel vector.
///
/// `offset` compensates for sprites authored facing something other than +X.
/// Returns `None` for degenerate vectors.
#[inline]
pub fn facing_angle(to_target: Vec2, offset: f32) -> Option<f32> {
    if to_target.length_squared() <= FACING_EPSILON {
        return None;
    }
    Some(to_target.y.atan2(to_target.x) + offset)
}

/// Blend `current` toward the facing for `to_target`.
///
/// The blend factor is `turn_rate * dt`, saturated at 1 (a full snap).
pub fn turn_towards(current: Quat, to_target: Vec2, offset: f32, turn_rate: f32, dt: f32) -> Quat {
    let Some(angle) = facing_angle(to_target, offset) else {
        return current;
    };
    let blend = (turn_rate * dt).clamp(0.0, 1.0);
    current.slerp(Quat::from_rotation_z(angle), blend)
}
