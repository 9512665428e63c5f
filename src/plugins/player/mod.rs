//! Player plugin.
//!
//! Pipeline:
//! - Update: sample keys + cursor, write `PlayerInput` / `Aim`
//! - Update: face the cursor, mirror movement into `PlayerMotion`
//! - FixedUpdate: apply velocity to kinematic rigid body
//!
//! The player entity is recorded in `PlayerEntity` so other plugins can
//! reference it explicitly instead of searching for it.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::camera::MainCamera;
use crate::plugins::enemies::steering::facing_angle;

#[derive(Component)]
pub struct Player;

/// Handle to the live player, if any.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerEntity(pub Option<Entity>);

/// Cursor position in world space. `None` when the cursor is outside the
/// window or there is no window/camera (headless).
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Aim {
    pub world_cursor: Option<Vec2>,
}

/// Animation-facing movement state.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMotion {
    pub running: bool,
}

#[derive(Resource, Default, Debug)]
pub(crate) struct PlayerInput {
    pub(crate) move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .init_resource::<PlayerEntity>()
        .init_resource::<Aim>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (
                gather_input,
                update_aim_from_cursor,
                (face_cursor, update_motion),
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(mut commands: Commands) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::Enemy]);

    let e = commands
        .spawn((
            Name::new("Player"),
            Player,
            PlayerMotion::default(),
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::new(22.0, 30.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            RigidBody::Kinematic,
            Collider::circle(13.0),
            layers,
            LinearVelocity::ZERO,
            TranslationExtrapolation,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.insert_resource(PlayerEntity(Some(e)));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = if axis.length_squared() > 0.0 {
        axis.normalize()
    } else {
        Vec2::ZERO
    };
}

/// Project the cursor into world space through the main camera.
pub fn update_aim_from_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<Aim>,
) {
    aim.world_cursor = None;

    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };

    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => aim.world_cursor = Some(p),
        Err(e) => debug!("viewport_to_world_2d failed: {e:?}"),
    }
}

/// Rotate the player sprite toward the cursor.
fn face_cursor(
    aim: Res<Aim>,
    tunables: Res<Tunables>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    let Some(cursor) = aim.world_cursor else { return; };
    let Ok(mut tf) = q_player.single_mut() else { return; };

    let to_cursor = cursor - tf.translation.truncate();
    if let Some(angle) = facing_angle(to_cursor, tunables.facing_offset) {
        tf.rotation = Quat::from_rotation_z(angle);
    }
}

fn update_motion(input: Res<PlayerInput>, mut q_player: Query<&mut PlayerMotion, With<Player>>) {
    let running = input.move_axis != Vec2::ZERO;
    for mut motion in &mut q_player {
        motion.set_if_neq(PlayerMotion { running });
    }
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;
}
