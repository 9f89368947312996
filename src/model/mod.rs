pub mod beatmap;
pub mod difficulty;
pub mod lane;
pub mod object;

pub use beatmap::{Beatmap, BeatmapError, BeatmapEntry, BeatmapFile};
pub use difficulty::{DEFAULT_AR, DEFAULT_OD_MINUS, DEFAULT_OD_PLUS, Difficulty, DifficultyError};
pub use lane::{LANE_COUNT, Lane};
pub use object::{Note, NoteWindows, Slider, SliderWindows, TimedObject};
