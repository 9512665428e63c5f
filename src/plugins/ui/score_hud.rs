//! Score HUD: a text node in the top-left corner bound to `Score`.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::score::Score;

#[derive(Component)]
pub struct ScoreText;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(Update, refresh_score_text.run_if(in_state(GameState::InGame)));
}

pub fn score_label(score: &Score) -> String {
    format!("Score: {}", score.whole())
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("ScoreText"),
        ScoreText,
        Text::new("Score: 0"),
        TextFont { font_size: 24.0, ..default() },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));
}

fn refresh_score_text(score: Option<Res<Score>>, mut q: Query<&mut Text, With<ScoreText>>) {
    let Some(score) = score else { return; };
    if !score.is_changed() {
        return;
    }

    let label = score_label(&score);
    for mut text in &mut q {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}
