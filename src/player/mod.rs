//! Player entity and input-driven movement.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
