//! WorldPlugin coordinates playfield bounds, settings, and environment setup.
use bevy::prelude::*;

use crate::world::{
    components::PlayfieldBounds,
    settings::GameplaySettings,
    systems::{exit_on_escape, spawn_world_environment},
    PLAYFIELD_HEIGHT, PLAYFIELD_MARGIN, PLAYFIELD_WIDTH,
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        let settings = GameplaySettings::load_or_default();
        info!(
            "Gameplay configured: speed {:.0} u/s, hack radius {:.0} u, cooldown {:.1}s",
            settings.player_speed, settings.hack_radius, settings.hack_cooldown_seconds
        );

        app.insert_resource(settings)
            .insert_resource(PlayfieldBounds::new(
                PLAYFIELD_WIDTH,
                PLAYFIELD_HEIGHT,
                PLAYFIELD_MARGIN,
            ))
            .add_systems(Startup, spawn_world_environment)
            .add_systems(Update, exit_on_escape);
    }
}
