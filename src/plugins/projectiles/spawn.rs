//! Spawn consumer: turn SpawnBulletRequest messages into bullet entities.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

use super::components::{Bullet, Lifetime};
use super::messages::SpawnBulletRequest;

pub fn spawn_requested_bullets(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnBulletRequest>,
) {
    let layers = CollisionLayers::new(Layer::PlayerBullet, [Layer::Enemy]);

    for req in reader.read() {
        commands.spawn((
            Name::new("Bullet"),
            Bullet,
            Lifetime::from_seconds(tunables.bullet_lifetime),
            Sprite {
                color: Color::srgb(1.0, 0.85, 0.3),
                custom_size: Some(Vec2::splat(8.0)),
                ..default()
            },
            Transform::from_translation(req.pos.extend(2.0))
                .with_rotation(Quat::from_rotation_z(req.vel.to_angle())),
            RigidBody::Dynamic,
            Collider::circle(4.0),
            Sensor,
            layers,
            LinearVelocity(req.vel),
            // Avian only emits CollisionStart/End if one collider has this marker.
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
