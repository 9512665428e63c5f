use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::{Aim, Player};

use super::components::FireCooldown;
use super::messages::SpawnBulletRequest;

/// Direction from `origin` to `aim`, `+Y` when they coincide.
#[inline]
pub fn fire_direction(origin: Vec2, aim: Vec2) -> Vec2 {
    let dir = aim - origin;
    if dir.length_squared() < 1e-4 { Vec2::Y } else { dir.normalize() }
}

/// Producer: while the trigger is held and the cooldown allows it, write a
/// SpawnBulletRequest aimed at the cursor.
///
/// This system does not spawn anything itself.
pub fn request_player_bullets(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    time: Res<Time>,
    aim: Res<Aim>,
    tunables: Res<Tunables>,
    mut cooldown: ResMut<FireCooldown>,
    q_player: Query<&Transform, With<Player>>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.pressed(MouseButton::Left) { return; }

    let Some(world_cursor) = aim.world_cursor else {
        debug!("Trigger held without a cursor position");
        return;
    };

    let player_tf = match q_player.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single Player Transform: {e:?}"); return; }
    };

    if !cooldown.try_fire(time.elapsed_secs(), tunables.fire_interval) {
        return;
    }

    let origin = player_tf.translation.truncate();
    let dir = fire_direction(origin, world_cursor);

    writer.write(SpawnBulletRequest {
        pos: origin + dir * tunables.muzzle_offset,
        vel: dir * tunables.bullet_speed,
    });
}
