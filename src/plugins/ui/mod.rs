//! UI plugins.

pub mod score_hud;
