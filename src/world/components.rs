//! Components and resources for the world module.
use bevy::prelude::*;

/// Axis-aligned rectangle the player position is confined to.
///
/// The playfield is centered on the origin, so the rectangle spans half the
/// playfield in each direction, inset by the configured margin.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayfieldBounds {
    min: Vec2,
    max: Vec2,
}

impl PlayfieldBounds {
    /// Creates bounds for a playfield of `width` x `height`, inset by `margin`.
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        let half = Vec2::new(width, height) / 2.0 - Vec2::splat(margin);
        Self {
            min: -half,
            max: half,
        }
    }

    /// Clamps a point into the bounds.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}
