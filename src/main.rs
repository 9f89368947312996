use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use octotap::judge::{NoteState, ObjectState, SliderState};
use octotap::model::{Beatmap, BeatmapFile, Difficulty, TimedObject};
use octotap::session::Session;

/// Headless autoplay driver: judges a beatmap with perfect scripted input
/// and reports the resulting transitions.
#[derive(Parser)]
#[command(name = "octotap", version)]
struct Args {
    /// Beatmap JSON file.
    beatmap: PathBuf,

    /// Approach rate.
    #[arg(long, default_value_t = 1.0)]
    ar: f64,

    /// Overall difficulty.
    #[arg(long, default_value_t = 1.0)]
    od: f64,

    /// Simulated frame duration in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScriptEdge {
    Down,
    Up,
}

/// Perfect input: press every object at its nominal time, release notes
/// shortly after and sliders at their nominal release instant.
fn build_script(beatmap: &Beatmap) -> Vec<(f64, usize, ScriptEdge)> {
    let mut script = Vec::new();
    for object in beatmap.objects() {
        let lane = object.lane().index();
        match object {
            TimedObject::Note(note) => {
                script.push((note.time, lane, ScriptEdge::Down));
                script.push((note.time + 40.0, lane, ScriptEdge::Up));
            }
            TimedObject::Slider(slider) => {
                script.push((slider.time, lane, ScriptEdge::Down));
                script.push((slider.end_beat(), lane, ScriptEdge::Up));
            }
        }
    }
    script.sort_by(|a, b| a.0.total_cmp(&b.0));
    script
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.beatmap)
        .with_context(|| format!("failed to read {}", args.beatmap.display()))?;
    let beatmap = BeatmapFile::parse(&text)?.into_beatmap()?;
    let difficulty = Difficulty::new(args.ar, args.od)?;

    let script = build_script(&beatmap);
    let mut session = Session::new(beatmap, difficulty);

    let mut next_edge = 0;
    let mut hits = 0u32;
    let mut misses = 0u32;
    let mut end_hits = 0u32;
    let mut end_misses = 0u32;
    let mut holds = 0u32;

    while !session.is_drained() {
        session.advance(args.frame_ms);

        while next_edge < script.len() && script[next_edge].0 <= session.tick() {
            let (_, lane, edge) = script[next_edge];
            match edge {
                ScriptEdge::Down => session.down(lane)?,
                ScriptEdge::Up => session.up(lane)?,
            }
            next_edge += 1;
        }

        for event in session.take_events() {
            match event.state {
                ObjectState::Note(NoteState::Hit) => hits += 1,
                ObjectState::Note(NoteState::Missed) => misses += 1,
                ObjectState::Slider(SliderState::Holding) => holds += 1,
                ObjectState::Slider(SliderState::EndHit) => end_hits += 1,
                ObjectState::Slider(SliderState::StartMissed) => misses += 1,
                ObjectState::Slider(SliderState::EndMissed) => end_misses += 1,
                _ => {}
            }
        }
    }

    info!("autoplay finished at tick {:.0}", session.tick());
    println!("hits:          {hits}");
    println!("misses:        {misses}");
    println!("slider holds:  {holds}");
    println!("slider tails:  {end_hits} hit / {end_misses} missed");

    Ok(())
}
