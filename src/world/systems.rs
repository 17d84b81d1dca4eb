//! Systems for the world module.
use bevy::{app::AppExit, ecs::message::MessageWriter, prelude::*};

use crate::world::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

const BACKGROUND_COLOR: Color = Color::srgb(0.102, 0.114, 0.129);
const FLOOR_TILE_SIZE: f32 = 64.0;
const FLOOR_TILE_LIGHT: Color = Color::srgb(0.157, 0.173, 0.212);
const FLOOR_TILE_DARK: Color = Color::srgb(0.141, 0.153, 0.188);

/// Spawns the camera and the checkered floor backdrop.
pub fn spawn_world_environment(mut commands: Commands) {
    commands.insert_resource(ClearColor(BACKGROUND_COLOR));
    commands.spawn(Camera2d);

    let columns = (PLAYFIELD_WIDTH / FLOOR_TILE_SIZE) as i32;
    let rows = (PLAYFIELD_HEIGHT / FLOOR_TILE_SIZE) as i32;

    for column in 0..columns {
        for row in 0..rows {
            let color = if (column + row) % 2 == 0 {
                FLOOR_TILE_DARK
            } else {
                FLOOR_TILE_LIGHT
            };
            let x = (column as f32 + 0.5) * FLOOR_TILE_SIZE - PLAYFIELD_WIDTH / 2.0;
            let y = (row as f32 + 0.5) * FLOOR_TILE_SIZE - PLAYFIELD_HEIGHT / 2.0;
            commands.spawn((
                Sprite::from_color(color, Vec2::splat(FLOOR_TILE_SIZE)),
                Transform::from_xyz(x, y, 0.0),
            ));
        }
    }
}

/// Quits the app when Escape is pressed. Window close is handled by Bevy.
pub fn exit_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, shutting down");
        exit.write(AppExit::Success);
    }
}
