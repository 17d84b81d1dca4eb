//! Components for the player module.
use bevy::prelude::*;

/// Marker component identifying the player entity.
#[derive(Component, Debug)]
pub struct Player;
