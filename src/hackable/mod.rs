//! Hackable world objects: targeting, actions, and the hack cooldown.
pub mod components;
pub mod cooldown;
pub mod events;
pub mod plugin;
pub mod systems;
pub mod target;

pub use plugin::HackingPlugin;
