//! Player plugin wiring spawn and movement systems.
use bevy::prelude::*;

use crate::player::systems::{player_movement, spawn_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player)
            .add_systems(Update, player_movement);
    }
}
