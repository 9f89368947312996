/// Total number of input lanes (two 4-key pads).
pub const LANE_COUNT: usize = 8;

/// One of the eight input lanes.
///
/// Lanes 0-3 form the left pad, lanes 4-7 the right pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lane {
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
}

impl Lane {
    /// Returns all lanes in order.
    pub fn all() -> &'static [Lane] {
        &[
            Lane::Key1,
            Lane::Key2,
            Lane::Key3,
            Lane::Key4,
            Lane::Key5,
            Lane::Key6,
            Lane::Key7,
            Lane::Key8,
        ]
    }

    /// Returns the lane index (0-based).
    pub fn index(self) -> usize {
        match self {
            Lane::Key1 => 0,
            Lane::Key2 => 1,
            Lane::Key3 => 2,
            Lane::Key4 => 3,
            Lane::Key5 => 4,
            Lane::Key6 => 5,
            Lane::Key7 => 6,
            Lane::Key8 => 7,
        }
    }

    /// Create a lane from a 0-based index.
    pub fn from_index(index: usize) -> Option<Lane> {
        match index {
            0 => Some(Lane::Key1),
            1 => Some(Lane::Key2),
            2 => Some(Lane::Key3),
            3 => Some(Lane::Key4),
            4 => Some(Lane::Key5),
            5 => Some(Lane::Key6),
            6 => Some(Lane::Key7),
            7 => Some(Lane::Key8),
            _ => None,
        }
    }

    /// Returns true if this lane belongs to the left pad.
    pub fn is_left_pad(self) -> bool {
        self.index() < 4
    }

    /// Returns true if this lane belongs to the right pad.
    pub fn is_right_pad(self) -> bool {
        !self.is_left_pad()
    }
}
