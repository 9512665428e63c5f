//! Score plugin: points accrue over time survived, plus a bonus per kill.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Score {
    pub value: f32,
    pub per_second: f32,
}

impl Score {
    pub fn new(per_second: f32) -> Self {
        Self { value: 0.0, per_second }
    }

    pub fn add(&mut self, amount: f32) {
        self.value += amount;
    }

    /// Points shown to the player (rounded down).
    pub fn whole(&self) -> i64 {
        self.value.floor() as i64
    }
}

pub fn plugin(app: &mut App) {
    let per_second = app.world().resource::<Tunables>().score_per_second;
    app.insert_resource(Score::new(per_second))
        .add_systems(Update, accumulate_score.run_if(in_state(GameState::InGame)));
}

fn accumulate_score(time: Res<Time>, mut score: ResMut<Score>) {
    let amount = time.delta_secs() * score.per_second;
    score.add(amount);
}
