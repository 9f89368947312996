pub mod lane_queue;

pub use lane_queue::{JudgeEvent, LaneQueue};

use log::{debug, info};
use thiserror::Error;

use crate::input::{Edge, LaneInput};
use crate::judge::ActiveObject;
use crate::model::beatmap::Beatmap;
use crate::model::difficulty::Difficulty;
use crate::model::lane::{LANE_COUNT, Lane};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("lane index out of range: {0} (must be 0..{LANE_COUNT})")]
    LaneOutOfRange(usize),
}

/// The playback clock and all per-lane judgment state for one play-through.
///
/// Single-threaded and frame-driven: the host calls `advance` once per
/// display frame and delivers input edges between frames. One admission and
/// update pass completes synchronously per call; nothing is buffered.
pub struct Session {
    difficulty: Difficulty,
    beatmap: Beatmap,
    /// Schedule cursor: index of the next unadmitted object.
    cursor: usize,
    /// Elapsed logical time in milliseconds.
    tick: f64,
    paused: bool,
    /// Swallow the next delta so a pause does not fast-forward the clock.
    rebaseline: bool,
    lanes: [LaneQueue; LANE_COUNT],
    input: LaneInput,
    events: Vec<JudgeEvent>,
}

impl Session {
    pub fn new(beatmap: Beatmap, difficulty: Difficulty) -> Self {
        info!(
            "session start: {} objects, ar={} od={}",
            beatmap.len(),
            difficulty.ar(),
            difficulty.od()
        );
        Self {
            difficulty,
            beatmap,
            cursor: 0,
            tick: 0.0,
            paused: false,
            rebaseline: false,
            lanes: std::array::from_fn(|i| {
                LaneQueue::new(Lane::from_index(i).expect("index within LANE_COUNT"))
            }),
            input: LaneInput::new(),
            events: Vec::new(),
        }
    }

    /// Current logical time in milliseconds.
    pub fn tick(&self) -> f64 {
        self.tick
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Read-only view of one lane's queues, for rendering.
    pub fn lane(&self, lane: Lane) -> &LaneQueue {
        &self.lanes[lane.index()]
    }

    /// Read-only view of all lanes, for rendering.
    pub fn lanes(&self) -> &[LaneQueue; LANE_COUNT] {
        &self.lanes
    }

    /// True once every object has been admitted and every queue drained.
    pub fn is_drained(&self) -> bool {
        self.cursor >= self.beatmap.len() && self.lanes.iter().all(LaneQueue::is_empty)
    }

    /// Take the judgment transitions observed since the last call.
    pub fn take_events(&mut self) -> Vec<JudgeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the clock by one frame's delta and run the admission and
    /// per-lane update pass. Ignored while paused. All admissions for a tick
    /// happen before any queue update, so an object can be updated in the
    /// pass that admits it but never before.
    pub fn advance(&mut self, delta_ms: f64) {
        if self.paused {
            return;
        }
        let delta = if self.rebaseline {
            self.rebaseline = false;
            0.0
        } else {
            delta_ms.max(0.0)
        };
        self.tick += delta;

        while let Some(object) = self.beatmap.objects().get(self.cursor) {
            if object.appear(self.difficulty) > self.tick {
                break;
            }
            debug!(
                "admit object {} at tick {:.1} (lane {})",
                self.cursor,
                self.tick,
                object.lane().index()
            );
            self.lanes[object.lane().index()]
                .admit(ActiveObject::admit(object, self.difficulty));
            self.cursor += 1;
        }

        for lane in &mut self.lanes {
            lane.update(self.tick, &mut self.events);
        }
    }

    /// Press edge on a lane, stamped with the current tick.
    pub fn down(&mut self, lane: usize) -> Result<(), InputError> {
        let lane = Lane::from_index(lane).ok_or(InputError::LaneOutOfRange(lane))?;
        self.apply_edge(lane, Edge::Down);
        Ok(())
    }

    /// Release edge on a lane, stamped with the current tick.
    pub fn up(&mut self, lane: usize) -> Result<(), InputError> {
        let lane = Lane::from_index(lane).ok_or(InputError::LaneOutOfRange(lane))?;
        self.apply_edge(lane, Edge::Up);
        Ok(())
    }

    /// Apply a full held-lane snapshot, emitting a press or release for
    /// exactly the lanes whose state changed since the previous snapshot.
    pub fn update_down(&mut self, snapshot: [bool; LANE_COUNT]) {
        for (lane, edge) in self.input.diff(snapshot) {
            self.dispatch(lane, edge);
        }
    }

    /// Gate the clock. Subsequent `advance` calls are ignored.
    pub fn pause(&mut self) {
        self.paused = true;
        info!("session paused at tick {:.1}", self.tick);
    }

    /// Reopen the clock. The first delta after resuming is clamped to zero
    /// so wall-clock time spent paused cannot fast-forward the session.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.rebaseline = true;
            info!("session resumed at tick {:.1}", self.tick);
        }
    }

    /// Clear all lanes and rewind the clock and cursor to zero.
    pub fn reset(&mut self) {
        for lane in &mut self.lanes {
            lane.clear();
        }
        self.cursor = 0;
        self.tick = 0.0;
        self.rebaseline = true;
        self.input.clear();
        self.events.clear();
        info!("session reset");
    }

    fn apply_edge(&mut self, lane: Lane, edge: Edge) {
        match edge {
            Edge::Down => self.input.press(lane),
            Edge::Up => self.input.release(lane),
        }
        self.dispatch(lane, edge);
    }

    fn dispatch(&mut self, lane: Lane, edge: Edge) {
        let queue = &mut self.lanes[lane.index()];
        match edge {
            Edge::Down => queue.down(self.tick, &mut self.events),
            Edge::Up => queue.up(self.tick, &mut self.events),
        }
    }
}
