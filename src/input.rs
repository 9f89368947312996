use crate::model::lane::{LANE_COUNT, Lane};

/// A single input edge on a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Down,
    Up,
}

/// Tracks which lanes are currently held, turning full-contact snapshots
/// (pointer/touch style input) into the same edge events that keyboard
/// input produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneInput {
    held: [bool; LANE_COUNT],
}

impl LaneInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a lane is currently held.
    pub fn is_held(&self, lane: Lane) -> bool {
        self.held[lane.index()]
    }

    /// Record a discrete press edge.
    pub fn press(&mut self, lane: Lane) {
        self.held[lane.index()] = true;
    }

    /// Record a discrete release edge.
    pub fn release(&mut self, lane: Lane) {
        self.held[lane.index()] = false;
    }

    /// Diff a full lane snapshot against the held state, returning one edge
    /// per lane whose state changed. The snapshot becomes the new held state.
    pub fn diff(&mut self, snapshot: [bool; LANE_COUNT]) -> Vec<(Lane, Edge)> {
        let mut edges = Vec::new();
        for lane in Lane::all() {
            let index = lane.index();
            if snapshot[index] != self.held[index] {
                let edge = if snapshot[index] { Edge::Down } else { Edge::Up };
                edges.push((*lane, edge));
            }
        }
        self.held = snapshot;
        edges
    }

    /// Release everything (session reset).
    pub fn clear(&mut self) {
        self.held = [false; LANE_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_emits_one_edge_per_change() {
        let mut input = LaneInput::new();

        let mut snapshot = [false; LANE_COUNT];
        snapshot[0] = true;
        let edges = input.diff(snapshot);
        assert_eq!(edges, vec![(Lane::Key1, Edge::Down)]);

        // Same snapshot again: no edges.
        assert!(input.diff(snapshot).is_empty());

        let edges = input.diff([false; LANE_COUNT]);
        assert_eq!(edges, vec![(Lane::Key1, Edge::Up)]);
    }

    #[test]
    fn test_diff_handles_multiple_lanes() {
        let mut input = LaneInput::new();
        input.press(Lane::Key2);

        let mut snapshot = [false; LANE_COUNT];
        snapshot[4] = true;
        let edges = input.diff(snapshot);
        assert_eq!(
            edges,
            vec![(Lane::Key2, Edge::Up), (Lane::Key5, Edge::Down)]
        );
    }

    #[test]
    fn test_discrete_edges_update_held_state() {
        let mut input = LaneInput::new();
        input.press(Lane::Key8);
        assert!(input.is_held(Lane::Key8));

        // A snapshot still holding the lane produces no duplicate down.
        let mut snapshot = [false; LANE_COUNT];
        snapshot[7] = true;
        assert!(input.diff(snapshot).is_empty());

        input.release(Lane::Key8);
        assert!(!input.is_held(Lane::Key8));
    }
}
