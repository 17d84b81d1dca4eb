//! Components and resources for the HUD overlay.
use bevy::prelude::*;

/// Marker for the "Nearest: ..." line.
#[derive(Component, Debug)]
pub struct TargetText;

/// Marker for the action prompt list below the target line.
#[derive(Component, Debug)]
pub struct ActionPromptText;

/// Marker for the transient status message line.
#[derive(Component, Debug)]
pub struct StatusText;

/// Marker for the cooldown readout line.
#[derive(Component, Debug)]
pub struct CooldownText;

/// Transient status message, overwritten by the most recent feedback and
/// cleared when its timer runs out.
#[derive(Resource, Debug, Default)]
pub struct StatusBanner {
    message: String,
    remaining: f32,
}

impl StatusBanner {
    /// Shows `message` for `lifetime` seconds, replacing any prior message.
    pub fn show(&mut self, message: impl Into<String>, lifetime: f32) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        self.message = message;
        self.remaining = lifetime;
    }

    /// Runs the banner timer down, clearing the message at zero.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
            if self.remaining == 0.0 {
                self.message.clear();
            }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_until_the_lifetime_elapses() {
        let mut banner = StatusBanner::default();
        banner.show("Door opened.", 2.5);
        assert_eq!(banner.message(), "Door opened.");

        banner.tick(2.0);
        assert_eq!(banner.message(), "Door opened.");

        banner.tick(0.5);
        assert_eq!(banner.message(), "");
    }

    #[test]
    fn newer_messages_replace_older_ones() {
        let mut banner = StatusBanner::default();
        banner.show("Door opened.", 2.5);
        banner.tick(2.4);
        banner.show("Door locked.", 2.5);

        banner.tick(1.0);
        assert_eq!(banner.message(), "Door locked.");
    }

    #[test]
    fn empty_messages_are_ignored() {
        let mut banner = StatusBanner::default();
        banner.show("Door opened.", 2.5);
        banner.show("", 2.5);
        assert_eq!(banner.message(), "Door opened.");
    }
}
