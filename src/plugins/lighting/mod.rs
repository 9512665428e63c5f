//! Lighting plugin (Firefly) (render-only).
//!
//! A single point light follows the player and breathes between a minimum
//! and maximum range.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::player::Player;

#[derive(Component)]
pub struct PlayerLight;

/// Sinusoidal range animation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LightPulse {
    /// Angular speed of the pulse (rad/s).
    pub speed: f32,
    pub min_range: f32,
    pub max_range: f32,
}

impl LightPulse {
    /// Range at `elapsed` seconds: `lerp(min, max, (sin(t * speed) + 1) / 2)`.
    pub fn range_at(&self, elapsed: f32) -> f32 {
        let t = ((elapsed * self.speed).sin() + 1.0) * 0.5;
        self.min_range + (self.max_range - self.min_range) * t
    }
}

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, (follow_player_light, pulse_lights));
}

fn setup(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        LightPulse {
            speed: tunables.light_pulse_speed,
            min_range: tunables.light_min_range,
            max_range: tunables.light_max_range,
        },
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            radius: tunables.light_max_range,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player_light(
    q_player: Query<&Transform, (With<Player>, Without<PlayerLight>)>,
    mut q_light: Query<&mut Transform, (With<PlayerLight>, Without<Player>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}

fn pulse_lights(time: Res<Time>, mut q: Query<(&LightPulse, &mut PointLight2d)>) {
    let elapsed = time.elapsed_secs();
    for (pulse, mut light) in &mut q {
        light.radius = pulse.range_at(elapsed);
    }
}
