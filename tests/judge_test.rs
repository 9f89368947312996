use octotap::judge::{ActiveNote, ActiveSlider, NoteState, Resolution, SliderState};
use octotap::model::{Difficulty, Lane, Note, Slider};

#[test]
fn test_note_window_values_at_reference_difficulty() {
    let note = ActiveNote::new(&Note::new(1000.0, Lane::Key1), Difficulty::default());
    let w = note.windows();

    assert_eq!(w.appear, -833.0);
    assert_eq!(w.beat_begin, 634.0);
    assert_eq!(w.beat_end, 1166.0);
}

#[test]
fn test_note_hit_and_miss_by_press() {
    let mut note = ActiveNote::new(&Note::new(1000.0, Lane::Key1), Difficulty::default());
    assert_eq!(note.down(900.0), Resolution::MoveToFinishing);
    assert_eq!(note.state(), NoteState::Hit);
    assert_eq!(note.hit_tick(), Some(900.0));

    let mut note = ActiveNote::new(&Note::new(1000.0, Lane::Key1), Difficulty::default());
    assert_eq!(note.down(1200.0), Resolution::MoveToFinishing);
    assert_eq!(note.state(), NoteState::Missed);
    assert_eq!(note.miss_tick(), Some(1200.0));
}

#[test]
fn test_note_expiry_boundary() {
    let mut note = ActiveNote::new(&Note::new(1000.0, Lane::Key1), Difficulty::default());
    note.down(900.0);

    // Not removed at exactly hit_tick + 500, only strictly after.
    assert_eq!(note.update(1400.0), Resolution::KeepActive);
    assert_eq!(note.update(1400.5), Resolution::Remove);
}

#[test]
fn test_slider_full_hold_lifecycle() {
    let slider = Slider::new(1000.0, Lane::Key4, 1000.0);
    let mut active = ActiveSlider::new(&slider, Difficulty::default());

    assert_eq!(active.update(800.0), Resolution::KeepActive);
    assert_eq!(active.down(990.0), Resolution::KeepActive);
    assert_eq!(active.state(), SliderState::Holding);

    // Held through the body; releases inside the end window hit the tail.
    assert_eq!(active.update(1500.0), Resolution::KeepActive);
    assert_eq!(active.up(2010.0), Resolution::MoveToFinishing);
    assert_eq!(active.state(), SliderState::EndHit);
    assert_eq!(active.hit_tick(), Some(2010.0));
}

#[test]
fn test_slider_never_released_misses_tail() {
    let slider = Slider::new(1000.0, Lane::Key4, 1000.0);
    let mut active = ActiveSlider::new(&slider, Difficulty::default());
    active.down(1000.0);

    let end_beat_end = active.windows().end_beat_end;
    assert_eq!(active.update(end_beat_end), Resolution::KeepActive);
    assert_eq!(active.update(end_beat_end + 1.0), Resolution::MoveToFinishing);
    assert_eq!(active.state(), SliderState::EndMissed);
}

#[test]
fn test_slider_early_release_silent_until_end_beat() {
    let slider = Slider::new(1000.0, Lane::Key4, 1000.0);
    let mut active = ActiveSlider::new(&slider, Difficulty::default());
    active.down(1000.0);

    assert_eq!(active.up(1200.0), Resolution::MoveToFinishing);
    assert_eq!(active.state(), SliderState::EarlyRelease);

    // Lingers without animation until the nominal release instant passes.
    assert_eq!(active.update(2000.0), Resolution::KeepActive);
    assert_eq!(active.update(2000.5), Resolution::Remove);
}

#[test]
fn test_slider_head_miss_path_reaches_silent_terminal() {
    let slider = Slider::new(1000.0, Lane::Key4, 2000.0);
    let mut active = ActiveSlider::new(&slider, Difficulty::default());

    let start_beat_end = active.windows().start_beat_end;
    assert_eq!(active.update(start_beat_end + 1.0), Resolution::MoveToFinishing);
    assert_eq!(active.state(), SliderState::StartMissed);

    // After the miss animation the state decays without an up ever arriving.
    let miss_tick = active.miss_tick().unwrap();
    assert_eq!(active.update(miss_tick + 501.0), Resolution::KeepActive);
    assert_eq!(active.state(), SliderState::EarlyRelease);

    // A late press in this state changes nothing.
    assert_eq!(active.down(miss_tick + 502.0), Resolution::KeepActive);
    assert_eq!(active.state(), SliderState::EarlyRelease);
}

#[test]
fn test_tighter_difficulty_narrows_hit_window() {
    let difficulty = Difficulty::new(1.0, 2.0).unwrap();
    let mut note = ActiveNote::new(&Note::new(1000.0, Lane::Key1), difficulty);

    // 634 would hit at OD 1.0 but the window now starts at 817.
    assert_eq!(note.windows().beat_begin, 817.0);
    note.down(700.0);
    assert_eq!(note.state(), NoteState::Missed);
}
