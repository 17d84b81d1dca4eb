//! Nearest-in-range target selection.
use bevy::prelude::*;

use crate::hackable::components::HackAction;

/// The hackable currently in range of the player, with its available
/// actions. Recomputed from scratch every frame.
#[derive(Resource, Debug, Default)]
pub struct HackTarget {
    pub entity: Option<Entity>,
    pub label: &'static str,
    pub actions: Vec<HackAction>,
}

impl HackTarget {
    pub fn clear(&mut self) {
        self.entity = None;
        self.label = "";
        self.actions.clear();
    }
}

/// Picks the candidate with the strictly smallest distance among those
/// within `radius`. Ties keep the first candidate in iteration order, so
/// the result is deterministic for a fixed world order.
///
/// O(n) over the candidates. Fine at this entity count; a spatial index
/// would be the move for large worlds.
pub fn closest_within<T>(
    candidates: impl IntoIterator<Item = (T, f32)>,
    radius: f32,
) -> Option<(T, f32)> {
    let mut best: Option<(T, f32)> = None;
    for (candidate, distance) in candidates {
        if distance > radius {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_minimal_in_range_candidate() {
        let candidates = [("far", 180.0), ("near", 40.0), ("mid", 90.0)];
        let (winner, distance) = closest_within(candidates, 200.0).expect("one in range");
        assert_eq!(winner, "near");
        assert_eq!(distance, 40.0);
    }

    #[test]
    fn ignores_candidates_beyond_the_radius() {
        let candidates = [("a", 250.0), ("b", 201.0)];
        assert!(closest_within(candidates, 200.0).is_none());
    }

    #[test]
    fn boundary_distance_still_qualifies() {
        let candidates = [("edge", 200.0)];
        let (winner, _) = closest_within(candidates, 200.0).expect("boundary is in range");
        assert_eq!(winner, "edge");
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let candidates = [("first", 50.0), ("second", 50.0)];
        let (winner, _) = closest_within(candidates, 200.0).expect("in range");
        assert_eq!(winner, "first");
    }

    #[test]
    fn empty_input_yields_none() {
        let candidates: [((), f32); 0] = [];
        assert!(closest_within(candidates, 200.0).is_none());
    }
}
