mod common;

use bevy::prelude::*;
use mimic_shooter::common::state::GameState;
use mimic_shooter::plugins::player::{Player, PlayerEntity};
use mimic_shooter::plugins::score::Score;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn player_is_spawned_registered_and_smoothed() {
    let mut app = common::app_headless();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();

    for _ in 0..5 {
        app.update();
    }

    let player = app
        .world_mut()
        .query_filtered::<Entity, (With<Player>, With<avian2d::prelude::TranslationExtrapolation>)>()
        .single(app.world())
        .expect("Player should opt in to smoothing via TranslationExtrapolation");

    assert_eq!(app.world().resource::<PlayerEntity>().0, Some(player));
}

#[test]
fn score_accrues_while_in_game() {
    let mut app = common::app_headless();

    for _ in 0..10 {
        app.update();
    }

    let score = app.world().resource::<Score>();
    assert!(score.value > 0.0);
}
