use bevy::prelude::*;

/// Every bullet kills the first mimic it touches.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Bullet;

/// Despawn when the timer runs out.
#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_seconds(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }
}

/// Trigger gate: the next shot is allowed once `elapsed >= ready_at`.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FireCooldown {
    pub ready_at: f32,
}

impl FireCooldown {
    /// Consume a shot if the gate is open. Returns whether the shot fires.
    pub fn try_fire(&mut self, now: f32, interval: f32) -> bool {
        if now < self.ready_at {
            return false;
        }
        self.ready_at = now + interval;
        true
    }
}
