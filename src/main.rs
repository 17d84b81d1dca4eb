use bevy::{prelude::*, window::WindowResolution};

mod hackable;
mod player;
mod ui;
mod world;

use crate::{hackable::HackingPlugin, player::PlayerPlugin, ui::UiPlugin, world::WorldPlugin};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Streethack Prototype".to_string(),
                    resolution: WindowResolution::new(
                        world::PLAYFIELD_WIDTH as u32,
                        world::PLAYFIELD_HEIGHT as u32,
                    ),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            WorldPlugin,
            PlayerPlugin,
            HackingPlugin,
            UiPlugin, // After HackingPlugin to receive HackFeedbackEvent
        ))
        .run();
}
