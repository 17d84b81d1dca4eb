//! The global hack cooldown gating all action dispatch.
use bevy::prelude::*;

/// Process-wide cooldown: READY while `remaining <= 0`, COOLING otherwise.
/// Deliberately global rather than per-entity, so switching targets does
/// not reset it.
#[derive(Resource, Debug, Default)]
pub struct HackCooldown {
    remaining: f32,
}

impl HackCooldown {
    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Starts a fresh cooldown of `duration` seconds.
    pub fn trigger(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    /// Arms the cooldown if READY. Returns whether the caller may fire.
    pub fn try_fire(&mut self, duration: f32) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.trigger(duration);
        true
    }

    /// Runs the cooldown down, flooring at zero.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_ready() {
        let cooldown = HackCooldown::default();
        assert!(cooldown.is_ready());
        assert_eq!(cooldown.remaining(), 0.0);
    }

    #[test]
    fn trigger_blocks_until_the_duration_elapses() {
        let mut cooldown = HackCooldown::default();
        cooldown.trigger(1.0);
        assert!(!cooldown.is_ready());

        cooldown.tick(0.4);
        assert!(!cooldown.is_ready());
        assert!((cooldown.remaining() - 0.6).abs() < 1e-6);

        cooldown.tick(0.6);
        assert!(cooldown.is_ready());
    }

    #[test]
    fn ticks_decrease_monotonically_and_floor_at_zero() {
        let mut cooldown = HackCooldown::default();
        cooldown.trigger(1.0);

        let mut previous = cooldown.remaining();
        for _ in 0..10 {
            cooldown.tick(0.25);
            assert!(cooldown.remaining() <= previous);
            assert!(cooldown.remaining() >= 0.0);
            previous = cooldown.remaining();
        }
        assert_eq!(cooldown.remaining(), 0.0);
    }

    #[test]
    fn try_fire_arms_when_ready_and_rejects_while_cooling() {
        let mut cooldown = HackCooldown::default();

        assert!(cooldown.try_fire(1.0));
        assert_eq!(cooldown.remaining(), 1.0);

        assert!(!cooldown.try_fire(1.0), "second fire must be rejected");
        assert_eq!(cooldown.remaining(), 1.0, "rejection must not re-arm");

        cooldown.tick(1.0);
        assert!(cooldown.try_fire(1.0));
    }

    #[test]
    fn retrigger_after_expiry_blocks_again() {
        let mut cooldown = HackCooldown::default();
        cooldown.trigger(1.0);
        cooldown.tick(2.0);
        assert!(cooldown.is_ready());

        cooldown.trigger(1.0);
        assert!(!cooldown.is_ready());
    }
}
