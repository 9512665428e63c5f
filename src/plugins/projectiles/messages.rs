//! Buffered spawn requests.
//!
//! Producers create *intent*; the consumer turns it into entities.
//! This is a producer → queue → consumer pipeline.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBulletRequest {
    pub pos: Vec2,
    pub vel: Vec2,
}
