//! Systems for spawning and moving the player.
use bevy::prelude::*;

use crate::{
    player::components::Player,
    world::{components::PlayfieldBounds, settings::GameplaySettings},
};

const PLAYER_COLOR: Color = Color::srgb(0.353, 0.784, 0.980);
const PLAYER_SIZE: f32 = 44.0;
const PLAYER_Z: f32 = 2.0;

/// Spawns the player sprite at the center of the playfield.
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Sprite::from_color(PLAYER_COLOR, Vec2::splat(PLAYER_SIZE)),
        Transform::from_xyz(0.0, 0.0, PLAYER_Z),
        Player,
        Name::new("Player"),
    ));
}

/// Moves the player with WASD / arrow keys, clamped to the playfield.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<GameplaySettings>,
    bounds: Res<PlayfieldBounds>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    let direction = wish_direction(&keyboard);
    if direction == Vec2::ZERO {
        return;
    }

    let next = transform.translation.truncate()
        + direction * settings.player_speed * time.delta_secs();
    let clamped = bounds.clamp(next);
    transform.translation.x = clamped.x;
    transform.translation.y = clamped.y;
}

/// Builds a unit-length movement direction from the held directional keys.
///
/// Diagonals combine and are normalized so they are not faster than
/// axis-aligned movement.
fn wish_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }
    direction.normalize_or_zero()
}
