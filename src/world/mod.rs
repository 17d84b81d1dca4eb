//! Playfield bounds, gameplay settings, and environment setup.
pub mod components;
pub mod plugin;
pub mod settings;
pub mod systems;

pub use plugin::WorldPlugin;

/// Logical playfield size in world units. The window matches it 1:1.
pub const PLAYFIELD_WIDTH: f32 = 960.0;
pub const PLAYFIELD_HEIGHT: f32 = 640.0;

/// Inset keeping the player sprite fully inside the visible playfield.
pub const PLAYFIELD_MARGIN: f32 = 16.0;
