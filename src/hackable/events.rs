//! Messages broadcast by the action dispatch system.
use bevy::prelude::Message;

/// Fired whenever action dispatch produces player-facing feedback, whether
/// the action ran or was rejected by the cooldown.
#[derive(Message, Debug, Clone)]
pub struct HackFeedbackEvent {
    pub message: String,
}
