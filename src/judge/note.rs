use crate::judge::{RESOLVE_ANIMATION_MS, Resolution};
use crate::model::difficulty::Difficulty;
use crate::model::object::{Note, NoteWindows};

/// Judgment state of a tap note. `Hit` and `Missed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    Pending,
    Missed,
    Hit,
}

/// Judgment state machine for a single admitted note.
#[derive(Debug, Clone)]
pub struct ActiveNote {
    windows: NoteWindows,
    state: NoteState,
    hit_tick: Option<f64>,
    miss_tick: Option<f64>,
}

impl ActiveNote {
    pub fn new(note: &Note, difficulty: Difficulty) -> Self {
        Self {
            windows: NoteWindows::resolve(note, difficulty),
            state: NoteState::Pending,
            hit_tick: None,
            miss_tick: None,
        }
    }

    /// Advance to `tick`. A pending note past its window becomes a miss;
    /// resolved notes expire once their animation has played out.
    pub fn update(&mut self, tick: f64) -> Resolution {
        match self.state {
            NoteState::Pending => {
                if tick > self.windows.beat_end {
                    self.state = NoteState::Missed;
                    self.miss_tick = Some(tick);
                    return Resolution::MoveToFinishing;
                }
                Resolution::KeepActive
            }
            NoteState::Missed => {
                if tick > self.miss_tick.unwrap_or(f64::NEG_INFINITY) + RESOLVE_ANIMATION_MS {
                    return Resolution::Remove;
                }
                Resolution::KeepActive
            }
            NoteState::Hit => {
                if tick > self.hit_tick.unwrap_or(f64::NEG_INFINITY) + RESOLVE_ANIMATION_MS {
                    return Resolution::Remove;
                }
                Resolution::KeepActive
            }
        }
    }

    /// Apply a press. A press always consumes a pending note: inside the
    /// window it is a hit, outside it is a miss.
    pub fn down(&mut self, tick: f64) -> Resolution {
        if self.state != NoteState::Pending {
            return Resolution::KeepActive;
        }
        if self.windows.beat_begin <= tick && tick <= self.windows.beat_end {
            self.state = NoteState::Hit;
            self.hit_tick = Some(tick);
        } else {
            self.state = NoteState::Missed;
            self.miss_tick = Some(tick);
        }
        Resolution::MoveToFinishing
    }

    /// Releases never affect tap notes.
    pub fn up(&mut self, _tick: f64) -> Resolution {
        Resolution::KeepActive
    }

    pub fn state(&self) -> NoteState {
        self.state
    }

    pub fn windows(&self) -> &NoteWindows {
        &self.windows
    }

    pub fn hit_tick(&self) -> Option<f64> {
        self.hit_tick
    }

    pub fn miss_tick(&self) -> Option<f64> {
        self.miss_tick
    }
}
