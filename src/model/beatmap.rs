use serde::Deserialize;
use thiserror::Error;

use crate::model::lane::{LANE_COUNT, Lane};
use crate::model::object::{Note, Slider, TimedObject};

#[derive(Debug, Error)]
pub enum BeatmapError {
    #[error("objects not sorted by time: object {index} at {time}ms is earlier than {previous}ms")]
    NotSorted {
        index: usize,
        time: f64,
        previous: f64,
    },

    #[error("lane index out of range at object {index}: {lane} (must be 0..{LANE_COUNT})")]
    LaneOutOfRange { index: usize, lane: usize },

    #[error("slider length must be positive at object {index}: {length}")]
    NonPositiveLength { index: usize, length: f64 },

    #[error("bpm must be positive: {0}")]
    NonPositiveBpm(f64),

    #[error("failed to parse beatmap file")]
    Parse(#[from] serde_json::Error),
}

/// A validated, time-sorted schedule of objects.
#[derive(Debug, Clone)]
pub struct Beatmap {
    objects: Vec<TimedObject>,
}

impl Beatmap {
    /// Validate and wrap a schedule. Objects must be sorted ascending by
    /// start time (ties allowed, e.g. chords across lanes) and sliders must
    /// have a positive length. A malformed schedule is rejected as a whole.
    pub fn new(objects: Vec<TimedObject>) -> Result<Self, BeatmapError> {
        let mut previous = f64::NEG_INFINITY;
        for (index, object) in objects.iter().enumerate() {
            let time = object.time();
            if time < previous {
                return Err(BeatmapError::NotSorted {
                    index,
                    time,
                    previous,
                });
            }
            previous = time;

            if let TimedObject::Slider(slider) = object {
                if !(slider.length > 0.0) {
                    return Err(BeatmapError::NonPositiveLength {
                        index,
                        length: slider.length,
                    });
                }
            }
        }
        Ok(Self { objects })
    }

    /// The schedule, sorted ascending by start time.
    pub fn objects(&self) -> &[TimedObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// On-disk beatmap representation. Objects are authored on a beat grid and
/// converted to milliseconds at load: `ms = beat * bar_resolution / bpm *
/// 60000 + offset`.
#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapFile {
    pub bpm: f64,
    pub bar_resolution: f64,
    /// Milliseconds between audio start and beat zero.
    pub offset: f64,
    pub objects: Vec<BeatmapEntry>,
}

/// A single authored object. A missing `length` means a tap note; a present
/// one means a slider held for that many beats.
#[derive(Debug, Clone, Deserialize)]
pub struct BeatmapEntry {
    pub beat: f64,
    pub lane: usize,
    #[serde(default)]
    pub length: Option<f64>,
}

impl BeatmapFile {
    /// Parse from JSON text.
    pub fn parse(text: &str) -> Result<Self, BeatmapError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert the beat grid to a validated millisecond schedule.
    pub fn into_beatmap(self) -> Result<Beatmap, BeatmapError> {
        if !(self.bpm > 0.0) {
            return Err(BeatmapError::NonPositiveBpm(self.bpm));
        }
        let beat_ms = self.bar_resolution / self.bpm * 60_000.0;

        let mut objects = Vec::with_capacity(self.objects.len());
        for (index, entry) in self.objects.iter().enumerate() {
            let lane = Lane::from_index(entry.lane).ok_or(BeatmapError::LaneOutOfRange {
                index,
                lane: entry.lane,
            })?;
            let time = entry.beat * beat_ms + self.offset;
            let object = match entry.length {
                None => TimedObject::Note(Note::new(time, lane)),
                Some(length) => TimedObject::Slider(Slider::new(time, lane, length * beat_ms)),
            };
            objects.push(object);
        }
        Beatmap::new(objects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(time: f64, lane: Lane) -> TimedObject {
        TimedObject::Note(Note::new(time, lane))
    }

    #[test]
    fn test_accepts_sorted_schedule_with_ties() {
        let objects = vec![
            note(100.0, Lane::Key1),
            note(200.0, Lane::Key2),
            note(200.0, Lane::Key6),
            TimedObject::Slider(Slider::new(300.0, Lane::Key3, 50.0)),
        ];
        assert!(Beatmap::new(objects).is_ok());
    }

    #[test]
    fn test_rejects_unsorted_schedule() {
        let objects = vec![note(200.0, Lane::Key1), note(100.0, Lane::Key2)];
        let err = Beatmap::new(objects).unwrap_err();
        assert!(matches!(err, BeatmapError::NotSorted { index: 1, .. }));
    }

    #[test]
    fn test_rejects_non_positive_slider_length() {
        let objects = vec![TimedObject::Slider(Slider::new(100.0, Lane::Key1, 0.0))];
        let err = Beatmap::new(objects).unwrap_err();
        assert!(matches!(err, BeatmapError::NonPositiveLength { index: 0, .. }));
    }

    #[test]
    fn test_file_beat_grid_conversion() {
        let file = BeatmapFile {
            bpm: 120.0,
            bar_resolution: 4.0,
            offset: 500.0,
            objects: vec![
                BeatmapEntry {
                    beat: 1.0,
                    lane: 0,
                    length: None,
                },
                BeatmapEntry {
                    beat: 2.0,
                    lane: 3,
                    length: Some(0.5),
                },
            ],
        };
        let beatmap = file.into_beatmap().unwrap();

        // One bar at 120 bpm with resolution 4 is 2000ms.
        assert_eq!(beatmap.objects()[0].time(), 2500.0);
        match beatmap.objects()[1] {
            TimedObject::Slider(s) => {
                assert_eq!(s.time, 4500.0);
                assert_eq!(s.length, 1000.0);
            }
            _ => panic!("expected slider"),
        }
    }

    #[test]
    fn test_file_rejects_out_of_range_lane() {
        let file = BeatmapFile {
            bpm: 120.0,
            bar_resolution: 4.0,
            offset: 0.0,
            objects: vec![BeatmapEntry {
                beat: 0.0,
                lane: 8,
                length: None,
            }],
        };
        let err = file.into_beatmap().unwrap_err();
        assert!(matches!(err, BeatmapError::LaneOutOfRange { lane: 8, .. }));
    }

    #[test]
    fn test_parse_json() {
        let text = r#"{
            "bpm": 201.35,
            "bar_resolution": 4,
            "offset": 6389,
            "objects": [
                { "beat": 8, "lane": 6 },
                { "beat": 13, "lane": 6, "length": 1.25 }
            ]
        }"#;
        let beatmap = BeatmapFile::parse(text).unwrap().into_beatmap().unwrap();
        assert_eq!(beatmap.len(), 2);
    }
}
