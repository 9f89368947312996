use crate::model::difficulty::Difficulty;
use crate::model::lane::Lane;

/// An instantaneous tap note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Nominal hit instant in milliseconds.
    pub time: f64,
    pub lane: Lane,
}

impl Note {
    pub fn new(time: f64, lane: Lane) -> Self {
        Self { time, lane }
    }

    /// Tick at which the note becomes visible/judgeable.
    pub fn appear(&self, difficulty: Difficulty) -> f64 {
        self.time - difficulty.approach_duration()
    }

    /// Earliest tick at which a press counts as a hit.
    pub fn beat_begin(&self, difficulty: Difficulty) -> f64 {
        self.time - difficulty.early_tolerance()
    }

    /// Latest tick at which a press counts as a hit.
    pub fn beat_end(&self, difficulty: Difficulty) -> f64 {
        self.time + difficulty.late_tolerance()
    }
}

/// A held slider with a start instant and a hold duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    /// Start instant in milliseconds.
    pub time: f64,
    pub lane: Lane,
    /// Hold duration in milliseconds.
    pub length: f64,
}

impl Slider {
    pub fn new(time: f64, lane: Lane, length: f64) -> Self {
        Self { time, lane, length }
    }

    pub fn appear(&self, difficulty: Difficulty) -> f64 {
        self.time - difficulty.approach_duration()
    }

    pub fn start_beat_begin(&self, difficulty: Difficulty) -> f64 {
        self.time - difficulty.early_tolerance()
    }

    pub fn start_beat_end(&self, difficulty: Difficulty) -> f64 {
        self.time + difficulty.late_tolerance()
    }

    /// Nominal release instant.
    pub fn end_beat(&self) -> f64 {
        self.time + self.length
    }

    pub fn end_appear(&self, difficulty: Difficulty) -> f64 {
        self.end_beat() - difficulty.approach_duration()
    }

    pub fn end_beat_begin(&self, difficulty: Difficulty) -> f64 {
        self.end_beat() - difficulty.early_tolerance()
    }

    pub fn end_beat_end(&self, difficulty: Difficulty) -> f64 {
        self.end_beat() + difficulty.late_tolerance()
    }
}

/// A scheduled object in the beatmap. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimedObject {
    Note(Note),
    Slider(Slider),
}

impl TimedObject {
    /// Nominal (start) time in milliseconds.
    pub fn time(&self) -> f64 {
        match self {
            TimedObject::Note(n) => n.time,
            TimedObject::Slider(s) => s.time,
        }
    }

    pub fn lane(&self) -> Lane {
        match self {
            TimedObject::Note(n) => n.lane,
            TimedObject::Slider(s) => s.lane,
        }
    }

    /// Tick at which the object enters its lane's active queue.
    pub fn appear(&self, difficulty: Difficulty) -> f64 {
        match self {
            TimedObject::Note(n) => n.appear(difficulty),
            TimedObject::Slider(s) => s.appear(difficulty),
        }
    }
}

/// Note windows resolved against a difficulty setting.
///
/// Computed once at admission and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteWindows {
    pub time: f64,
    pub appear: f64,
    pub beat_begin: f64,
    pub beat_end: f64,
}

impl NoteWindows {
    pub fn resolve(note: &Note, difficulty: Difficulty) -> Self {
        Self {
            time: note.time,
            appear: note.appear(difficulty),
            beat_begin: note.beat_begin(difficulty),
            beat_end: note.beat_end(difficulty),
        }
    }
}

/// Slider windows resolved against a difficulty setting, covering both the
/// start instant and the release instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderWindows {
    pub time: f64,
    pub appear: f64,
    pub start_beat_begin: f64,
    pub start_beat_end: f64,
    pub end_beat: f64,
    pub end_appear: f64,
    pub end_beat_begin: f64,
    pub end_beat_end: f64,
}

impl SliderWindows {
    pub fn resolve(slider: &Slider, difficulty: Difficulty) -> Self {
        Self {
            time: slider.time,
            appear: slider.appear(difficulty),
            start_beat_begin: slider.start_beat_begin(difficulty),
            start_beat_end: slider.start_beat_end(difficulty),
            end_beat: slider.end_beat(),
            end_appear: slider.end_appear(difficulty),
            end_beat_begin: slider.end_beat_begin(difficulty),
            end_beat_end: slider.end_beat_end(difficulty),
        }
    }
}
