use crate::judge::{RESOLVE_ANIMATION_MS, Resolution};
use crate::model::difficulty::Difficulty;
use crate::model::object::{Slider, SliderWindows};

/// Judgment state of a slider.
///
/// The head is judged on press, the tail on release. `EarlyRelease` doubles
/// as the silent terminal for a missed head: after its miss animation the
/// slider body lingers without further feedback until the nominal release
/// instant has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderState {
    Pending,
    StartMissed,
    Holding,
    EarlyRelease,
    EndHit,
    EndMissed,
}

/// Judgment state machine for a single admitted slider.
#[derive(Debug, Clone)]
pub struct ActiveSlider {
    windows: SliderWindows,
    state: SliderState,
    hit_tick: Option<f64>,
    miss_tick: Option<f64>,
}

impl ActiveSlider {
    pub fn new(slider: &Slider, difficulty: Difficulty) -> Self {
        Self {
            windows: SliderWindows::resolve(slider, difficulty),
            state: SliderState::Pending,
            hit_tick: None,
            miss_tick: None,
        }
    }

    /// Advance to `tick`.
    pub fn update(&mut self, tick: f64) -> Resolution {
        match self.state {
            SliderState::Pending => {
                if tick > self.windows.start_beat_end {
                    self.state = SliderState::StartMissed;
                    self.miss_tick = Some(tick);
                    return Resolution::MoveToFinishing;
                }
                Resolution::KeepActive
            }
            SliderState::StartMissed => {
                if tick > self.miss_tick.unwrap_or(f64::NEG_INFINITY) + RESOLVE_ANIMATION_MS {
                    self.state = SliderState::EarlyRelease;
                }
                Resolution::KeepActive
            }
            SliderState::Holding => {
                if tick > self.windows.end_beat_end {
                    self.state = SliderState::EndMissed;
                    self.miss_tick = Some(tick);
                    return Resolution::MoveToFinishing;
                }
                Resolution::KeepActive
            }
            SliderState::EarlyRelease => {
                if tick > self.windows.end_beat {
                    return Resolution::Remove;
                }
                Resolution::KeepActive
            }
            SliderState::EndHit => {
                if tick > self.hit_tick.unwrap_or(f64::NEG_INFINITY) + RESOLVE_ANIMATION_MS {
                    return Resolution::Remove;
                }
                Resolution::KeepActive
            }
            SliderState::EndMissed => {
                if tick > self.miss_tick.unwrap_or(f64::NEG_INFINITY) + RESOLVE_ANIMATION_MS {
                    return Resolution::Remove;
                }
                Resolution::KeepActive
            }
        }
    }

    /// Apply a press. Only a pending slider reacts: inside the start window
    /// the hold begins and the slider stays active for tail judgment;
    /// outside, the head is missed.
    pub fn down(&mut self, tick: f64) -> Resolution {
        if self.state != SliderState::Pending {
            return Resolution::KeepActive;
        }
        if self.windows.start_beat_begin <= tick && tick <= self.windows.start_beat_end {
            self.state = SliderState::Holding;
            self.hit_tick = Some(tick);
            Resolution::KeepActive
        } else {
            self.state = SliderState::StartMissed;
            self.miss_tick = Some(tick);
            Resolution::MoveToFinishing
        }
    }

    /// Apply a release. Only a held slider reacts: before the end window the
    /// release is early, inside it the tail is hit, after it the tail is
    /// missed. Any release ends the hold.
    pub fn up(&mut self, tick: f64) -> Resolution {
        if self.state != SliderState::Holding {
            return Resolution::KeepActive;
        }
        if tick < self.windows.end_beat_begin {
            self.state = SliderState::EarlyRelease;
        } else if tick <= self.windows.end_beat_end {
            self.state = SliderState::EndHit;
            self.hit_tick = Some(tick);
        } else {
            self.state = SliderState::EndMissed;
            self.miss_tick = Some(tick);
        }
        Resolution::MoveToFinishing
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn windows(&self) -> &SliderWindows {
        &self.windows
    }

    pub fn hit_tick(&self) -> Option<f64> {
        self.hit_tick
    }

    pub fn miss_tick(&self) -> Option<f64> {
        self.miss_tick
    }
}
