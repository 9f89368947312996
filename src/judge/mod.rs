pub mod note;
pub mod slider;

pub use note::{ActiveNote, NoteState};
pub use slider::{ActiveSlider, SliderState};

use crate::model::difficulty::Difficulty;
use crate::model::object::{NoteWindows, SliderWindows, TimedObject};

/// How long a resolved object keeps animating before it is dropped, in
/// milliseconds. Applies to hits and misses alike.
pub const RESOLVE_ANIMATION_MS: f64 = 500.0;

/// Queue directive returned by every state-machine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The object is still being judged; leave it where it is.
    KeepActive,
    /// The outcome is decided; move the object from active to finishing.
    MoveToFinishing,
    /// The object is fully spent; drop it from all queues.
    Remove,
}

/// Kind of scheduled object, for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Note,
    Slider,
}

/// Current judgment state of an active object, for snapshots and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectState {
    Note(NoteState),
    Slider(SliderState),
}

/// Resolved windows of an active object, for snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectWindows {
    Note(NoteWindows),
    Slider(SliderWindows),
}

/// A judgment instance wrapping one admitted object.
///
/// Created at admission with its windows frozen; afterwards mutated only
/// through `update`, `down` and `up`.
#[derive(Debug, Clone)]
pub enum ActiveObject {
    Note(ActiveNote),
    Slider(ActiveSlider),
}

impl ActiveObject {
    /// Wrap a scheduled object, resolving its windows against the session
    /// difficulty.
    pub fn admit(object: &TimedObject, difficulty: Difficulty) -> Self {
        match object {
            TimedObject::Note(note) => ActiveObject::Note(ActiveNote::new(note, difficulty)),
            TimedObject::Slider(slider) => {
                ActiveObject::Slider(ActiveSlider::new(slider, difficulty))
            }
        }
    }

    /// Advance the state machine to `tick`.
    pub fn update(&mut self, tick: f64) -> Resolution {
        match self {
            ActiveObject::Note(n) => n.update(tick),
            ActiveObject::Slider(s) => s.update(tick),
        }
    }

    /// Apply a press at `tick`.
    pub fn down(&mut self, tick: f64) -> Resolution {
        match self {
            ActiveObject::Note(n) => n.down(tick),
            ActiveObject::Slider(s) => s.down(tick),
        }
    }

    /// Apply a release at `tick`.
    pub fn up(&mut self, tick: f64) -> Resolution {
        match self {
            ActiveObject::Note(n) => n.up(tick),
            ActiveObject::Slider(s) => s.up(tick),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            ActiveObject::Note(_) => ObjectKind::Note,
            ActiveObject::Slider(_) => ObjectKind::Slider,
        }
    }

    pub fn state(&self) -> ObjectState {
        match self {
            ActiveObject::Note(n) => ObjectState::Note(n.state()),
            ActiveObject::Slider(s) => ObjectState::Slider(s.state()),
        }
    }

    pub fn windows(&self) -> ObjectWindows {
        match self {
            ActiveObject::Note(n) => ObjectWindows::Note(*n.windows()),
            ActiveObject::Slider(s) => ObjectWindows::Slider(*s.windows()),
        }
    }

    /// Tick of the most recent hit resolution, if any.
    pub fn hit_tick(&self) -> Option<f64> {
        match self {
            ActiveObject::Note(n) => n.hit_tick(),
            ActiveObject::Slider(s) => s.hit_tick(),
        }
    }

    /// Tick of the most recent miss resolution, if any.
    pub fn miss_tick(&self) -> Option<f64> {
        match self {
            ActiveObject::Note(n) => n.miss_tick(),
            ActiveObject::Slider(s) => s.miss_tick(),
        }
    }
}
