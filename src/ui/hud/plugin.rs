//! HUD plugin wiring the overlay systems.
use bevy::prelude::*;

use crate::{
    hackable::systems::{acquire_target, handle_hack_input},
    ui::hud::{
        components::StatusBanner,
        systems::{
            collect_feedback, spawn_hud, tick_status_banner, update_cooldown_text,
            update_status_text, update_target_readout,
        },
    },
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatusBanner>()
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (
                    collect_feedback.after(handle_hack_input),
                    tick_status_banner.after(collect_feedback),
                    update_status_text.after(tick_status_banner),
                    update_target_readout.after(acquire_target),
                    update_cooldown_text.after(handle_hack_input),
                ),
            );
    }
}
