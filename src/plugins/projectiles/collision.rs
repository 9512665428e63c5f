//! Bullet hit resolution.
//!
//! Reading `CollisionStart` as Messages is the cheap bulk path for many
//! bullet hits. Each bullet and each mimic is consumed at most once per run,
//! so two bullets hitting one mimic in the same step score once.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::enemies::Mimic;
use crate::plugins::score::Score;

use super::components::Bullet;

pub fn process_bullet_hits(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    tunables: Res<Tunables>,
    mut score: ResMut<Score>,
    q_bullets: Query<(), With<Bullet>>,
    q_mimics: Query<(), With<Mimic>>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let a = ev.body1.unwrap_or(ev.collider1);
        let b = ev.body2.unwrap_or(ev.collider2);

        let (bullet, other) = if q_bullets.contains(a) {
            (a, b)
        } else if q_bullets.contains(b) {
            (b, a)
        } else {
            continue;
        };

        if !q_mimics.contains(other) {
            continue;
        }
        if seen.contains(&bullet) || seen.contains(&other) {
            continue;
        }
        seen.insert(bullet);
        seen.insert(other);

        commands.entity(bullet).despawn();
        commands.entity(other).despawn();
        score.add(tunables.kill_score);
        debug!("Bullet {bullet:?} killed mimic {other:?}");
    }
}
