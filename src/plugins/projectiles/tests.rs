//! Projectiles plugin tests — **deterministic**.
//!
//! Collisions are not produced by the physics pipeline here. We inject
//! `CollisionStart` messages directly and run the hit system once.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::common::test_utils::{run_system_once, time_with_delta};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::enemies::Mimic;
use crate::plugins::player::{Aim, Player};
use crate::plugins::score::Score;

use super::components::{Bullet, FireCooldown, Lifetime};
use super::messages::SpawnBulletRequest;
use super::{collision, lifetime, request, spawn, ProjectilesPlugin};

// --------------------------------------------------------------------------------------
// Helpers
// --------------------------------------------------------------------------------------

fn write_collision(world: &mut World, a: Entity, b: Entity) {
    world.write_message(CollisionStart { collider1: a, collider2: b, body1: None, body2: None });
}

fn hit_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.insert_resource(Tunables { kill_score: 10.0, ..default() });
    world.insert_resource(Score::new(0.0));
    world
}

fn fire_world(elapsed: f32) -> World {
    let mut world = World::new();
    world.init_resource::<Messages<SpawnBulletRequest>>();
    world.insert_resource(Tunables { fire_interval: 0.2, muzzle_offset: 18.0, bullet_speed: 900.0, ..default() });
    world.insert_resource(FireCooldown::default());
    world.insert_resource(time_with_delta(elapsed));
    world.insert_resource(Aim { world_cursor: Some(Vec2::new(100.0, 0.0)) });

    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    world.insert_resource(buttons);

    world.spawn((Player, Transform::from_xyz(0.0, 0.0, 1.0)));
    world
}

fn bullet_count(world: &mut World) -> usize {
    world.query::<&Bullet>().iter(world).count()
}

// --------------------------------------------------------------------------------------
// Pure logic
// --------------------------------------------------------------------------------------

#[test]
fn cooldown_gates_shots_by_interval() {
    let mut cd = FireCooldown::default();
    assert!(cd.try_fire(0.0, 0.2));
    assert!(!cd.try_fire(0.1, 0.2));
    assert!(cd.try_fire(0.2, 0.2));
    assert!(!cd.try_fire(0.35, 0.2));
    assert!(cd.try_fire(0.45, 0.2));
}

#[test]
fn fire_direction_is_unit_or_up() {
    let d = request::fire_direction(Vec2::ZERO, Vec2::new(3.0, 4.0));
    assert!((d - Vec2::new(0.6, 0.8)).length() < 1e-6);
    assert_eq!(request::fire_direction(Vec2::ONE, Vec2::ONE), Vec2::Y);
}

// --------------------------------------------------------------------------------------
// Producer -> consumer
// --------------------------------------------------------------------------------------

#[test]
fn held_trigger_spawns_bullet_toward_cursor() {
    let mut world = fire_world(1.0);

    run_system_once(&mut world, request::request_player_bullets);
    run_system_once(&mut world, spawn::spawn_requested_bullets);

    let (tf, vel) = world
        .query_filtered::<(&Transform, &LinearVelocity), With<Bullet>>()
        .single(&world)
        .expect("one bullet");
    assert_eq!(tf.translation, Vec3::new(18.0, 0.0, 2.0));
    assert_eq!(vel.0, Vec2::new(900.0, 0.0));
}

#[test]
fn request_is_just_muzzle_position_and_velocity() {
    let mut world = fire_world(1.0);

    run_system_once(&mut world, request::request_player_bullets);

    let requests: Vec<_> = world.resource_mut::<Messages<SpawnBulletRequest>>().drain().collect();
    assert_eq!(requests.len(), 1);
    let SpawnBulletRequest { pos, vel } = requests[0];
    assert_eq!(pos, Vec2::new(18.0, 0.0));
    assert_eq!(vel, Vec2::new(900.0, 0.0));
}

#[test]
fn spawned_bullet_is_a_timed_sensor() {
    let mut world = fire_world(1.0);
    world.write_message(SpawnBulletRequest { pos: Vec2::ZERO, vel: Vec2::X });

    run_system_once(&mut world, spawn::spawn_requested_bullets);

    let e = world
        .query_filtered::<Entity, (With<Bullet>, With<Sensor>, With<CollisionEventsEnabled>)>()
        .single(&world)
        .expect("one sensor bullet");
    assert_eq!(world.get::<Lifetime>(e).unwrap().duration().as_secs_f32(), 2.0);
}

#[test]
fn cooldown_blocks_second_shot_in_same_instant() {
    let mut world = fire_world(1.0);

    run_system_once(&mut world, request::request_player_bullets);
    run_system_once(&mut world, request::request_player_bullets);
    run_system_once(&mut world, spawn::spawn_requested_bullets);

    assert_eq!(bullet_count(&mut world), 1);
}

#[test]
fn no_cursor_means_no_shot() {
    let mut world = fire_world(1.0);
    world.insert_resource(Aim::default());

    run_system_once(&mut world, request::request_player_bullets);
    run_system_once(&mut world, spawn::spawn_requested_bullets);

    assert_eq!(bullet_count(&mut world), 0);
    assert_eq!(world.resource::<FireCooldown>().ready_at, 0.0);
}

#[test]
fn released_trigger_means_no_shot() {
    let mut world = fire_world(1.0);
    world.resource_mut::<ButtonInput<MouseButton>>().release(MouseButton::Left);

    run_system_once(&mut world, request::request_player_bullets);
    run_system_once(&mut world, spawn::spawn_requested_bullets);

    assert_eq!(bullet_count(&mut world), 0);
}

// --------------------------------------------------------------------------------------
// Lifetime
// --------------------------------------------------------------------------------------

#[test]
fn expired_bullets_are_despawned() {
    let mut world = World::new();
    let mut fixed = Time::<Fixed>::default();
    fixed.advance_by(Duration::from_secs_f32(0.5));
    world.insert_resource(fixed);

    let short = world.spawn((Bullet, Lifetime::from_seconds(0.25))).id();
    let long = world.spawn((Bullet, Lifetime::from_seconds(2.0))).id();

    run_system_once(&mut world, lifetime::bullet_lifetime);

    assert!(world.get_entity(short).is_err());
    assert!(world.get_entity(long).is_ok());
}

/// Projectiles plugin on a bare app, with one short-lived bullet.
fn lifetime_app(in_game: bool) -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    if in_game {
        app.add_plugins(StatesPlugin).init_state::<GameState>();
    }
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)));
    app.insert_resource(Tunables::default());
    app.insert_resource(Score::new(0.0));
    app.init_resource::<Aim>();
    app.init_resource::<Messages<CollisionStart>>();
    app.add_plugins(ProjectilesPlugin);

    let bullet = app.world_mut().spawn((Bullet, Lifetime::from_seconds(0.1))).id();
    (app, bullet)
}

#[test]
fn lifetime_runs_in_game() {
    let (mut app, bullet) = lifetime_app(true);
    for _ in 0..10 {
        app.update();
    }
    assert!(app.world().get_entity(bullet).is_err());
}

#[test]
fn lifetime_is_paused_outside_game_state() {
    let (mut app, bullet) = lifetime_app(false);
    for _ in 0..10 {
        app.update();
    }
    assert!(app.world().get_entity(bullet).is_ok());
}

// --------------------------------------------------------------------------------------
// Hits
// --------------------------------------------------------------------------------------

#[test]
fn hit_mimic_despawns_both_and_scores() {
    let mut world = hit_world();

    let bullet = world.spawn(Bullet).id();
    let mimic = world.spawn(Mimic).id();

    write_collision(&mut world, mimic, bullet);
    run_system_once(&mut world, collision::process_bullet_hits);

    assert!(world.get_entity(bullet).is_err());
    assert!(world.get_entity(mimic).is_err());
    assert_eq!(world.resource::<Score>().whole(), 10);
}

#[test]
fn two_bullets_one_mimic_scores_once() {
    let mut world = hit_world();

    let b1 = world.spawn(Bullet).id();
    let b2 = world.spawn(Bullet).id();
    let mimic = world.spawn(Mimic).id();

    write_collision(&mut world, b1, mimic);
    write_collision(&mut world, b2, mimic);
    run_system_once(&mut world, collision::process_bullet_hits);

    assert!(world.get_entity(b1).is_err());
    assert!(world.get_entity(b2).is_ok());
    assert_eq!(world.resource::<Score>().whole(), 10);
}

#[test]
fn bullet_touching_non_mimic_is_ignored() {
    let mut world = hit_world();

    let bullet = world.spawn(Bullet).id();
    let other = world.spawn(Player).id();

    write_collision(&mut world, bullet, other);
    run_system_once(&mut world, collision::process_bullet_hits);

    assert!(world.get_entity(bullet).is_ok());
    assert!(world.get_entity(other).is_ok());
    assert_eq!(world.resource::<Score>().whole(), 0);
}
