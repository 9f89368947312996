use std::collections::VecDeque;

use crate::judge::{ActiveObject, ObjectState, Resolution};
use crate::model::lane::Lane;

/// A judgment transition observed on a lane, for host-side feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JudgeEvent {
    pub lane: Lane,
    /// State the object transitioned into.
    pub state: ObjectState,
    pub tick: f64,
}

/// Per-lane queues: an active FIFO of objects awaiting resolution and a
/// finishing pile of resolved objects still animating out.
///
/// Input only ever reaches the front of the active queue; the moment the
/// front resolves it moves to finishing, so a rapid second keystroke can
/// never re-apply to a stale front.
#[derive(Debug)]
pub struct LaneQueue {
    lane: Lane,
    active: VecDeque<ActiveObject>,
    finishing: Vec<ActiveObject>,
}

impl LaneQueue {
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            active: VecDeque::new(),
            finishing: Vec::new(),
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Append a newly admitted object to the active tail. Admission order
    /// equals schedule order, so the queue stays time-sorted.
    pub fn admit(&mut self, object: ActiveObject) {
        self.active.push_back(object);
    }

    /// The object currently eligible for input, if any.
    pub fn front(&self) -> Option<&ActiveObject> {
        self.active.front()
    }

    /// All unresolved objects, front first.
    pub fn active(&self) -> impl Iterator<Item = &ActiveObject> {
        self.active.iter()
    }

    /// Resolved objects still animating out.
    pub fn finishing(&self) -> &[ActiveObject] {
        &self.finishing
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.finishing.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.finishing.clear();
    }

    /// Advance every queued object to `tick`.
    ///
    /// Non-front active objects can only change by time, so their resolution
    /// is ignored until they reach the front. The front moves to finishing
    /// when it resolves; the finishing pile is then pruned of spent objects.
    pub fn update(&mut self, tick: f64, events: &mut Vec<JudgeEvent>) {
        let lane = self.lane;
        for object in self.active.iter_mut().skip(1) {
            let before = object.state();
            object.update(tick);
            emit(events, lane, before, object, tick);
        }

        if let Some(front) = self.active.front_mut() {
            let before = front.state();
            let resolution = front.update(tick);
            emit(events, lane, before, front, tick);
            if resolution != Resolution::KeepActive {
                let object = self.active.pop_front().unwrap();
                self.finishing.push(object);
            }
        }

        self.finishing.retain_mut(|object| {
            let before = object.state();
            let resolution = object.update(tick);
            emit(events, lane, before, object, tick);
            resolution != Resolution::Remove
        });
    }

    /// Route a press edge to the front object.
    pub fn down(&mut self, tick: f64, events: &mut Vec<JudgeEvent>) {
        self.dispatch(tick, events, |object, tick| object.down(tick));
    }

    /// Route a release edge to the front object.
    pub fn up(&mut self, tick: f64, events: &mut Vec<JudgeEvent>) {
        self.dispatch(tick, events, |object, tick| object.up(tick));
    }

    fn dispatch(
        &mut self,
        tick: f64,
        events: &mut Vec<JudgeEvent>,
        apply: impl Fn(&mut ActiveObject, f64) -> Resolution,
    ) {
        let lane = self.lane;
        if let Some(front) = self.active.front_mut() {
            let before = front.state();
            let resolution = apply(front, tick);
            emit(events, lane, before, front, tick);
            if resolution != Resolution::KeepActive {
                let object = self.active.pop_front().unwrap();
                self.finishing.push(object);
            }
        }
    }
}

fn emit(
    events: &mut Vec<JudgeEvent>,
    lane: Lane,
    before: ObjectState,
    object: &ActiveObject,
    tick: f64,
) {
    let after = object.state();
    if after != before {
        events.push(JudgeEvent {
            lane,
            state: after,
            tick,
        });
    }
}
