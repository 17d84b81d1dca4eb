// src/ui/mod.rs
//
// UI module providing the screen-space status overlay.
//
// Current features:
// - HUD overlay (target name, action prompts, status banner, cooldown)

pub mod hud;

// Re-export the main plugin
pub use hud::UiPlugin;
