//! Hacking plugin wiring targeting, dispatch, and state rendering.
use bevy::prelude::*;

use crate::{
    hackable::{
        cooldown::HackCooldown,
        events::HackFeedbackEvent,
        systems::{
            acquire_target, handle_hack_input, spawn_hackables, tick_cooldown,
            tick_distractions, update_door_sprites, update_npc_sprites,
            update_target_highlight,
        },
        target::HackTarget,
    },
    player::systems::player_movement,
};

pub struct HackingPlugin;

impl Plugin for HackingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HackTarget>()
            .init_resource::<HackCooldown>()
            .add_message::<HackFeedbackEvent>()
            .add_systems(Startup, spawn_hackables)
            .add_systems(
                Update,
                (
                    acquire_target.after(player_movement),
                    tick_distractions.after(acquire_target),
                    tick_cooldown.after(tick_distractions),
                    handle_hack_input.after(tick_cooldown),
                    (update_door_sprites, update_npc_sprites, update_target_highlight)
                        .after(handle_hack_input),
                ),
            );
    }
}
