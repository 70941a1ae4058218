//! Replay a recorded hand-observation session through the gesture
//! state machine.

mod session;

use anyhow::{Context, Result};
use clap::Parser;
use handslide_core::{PresentationController, PresentationSnapshot};
use std::io::{self, Write};
use std::path::PathBuf;

use session::{load_session_from_path, RecordedFrame};

/// Replay recorded hand gestures against a slide deck.
#[derive(Parser, Debug)]
#[command(name = "handslide-replay")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session CSV (t,thumb,index,middle,ring,pinky,x,y)
    input: PathBuf,

    /// Number of slides in the deck
    #[arg(short, long)]
    slides: usize,

    /// Start with gesture control already enabled
    #[arg(short, long)]
    enabled: bool,

    /// Slide to start on (0-based, clamped to the deck)
    #[arg(long, default_value = "0")]
    start_slide: usize,

    /// Print the state after every frame instead of only the final state
    #[arg(short, long)]
    trace: bool,

    /// Print snapshots as JSON
    #[arg(short, long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let frames = load_session_from_path(&args.input)?;
    log::debug!("Loaded {} frames from {}", frames.len(), args.input.display());

    let controller = PresentationController::new(args.slides)
        .context("Cannot replay against an empty deck")?
        .with_gesture_control(args.enabled)
        .with_start_slide(args.start_slide);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    replay(controller, &frames, &args, &mut out)
}

/// Feed every frame to the controller, printing snapshots as requested.
fn replay<W: Write>(
    mut controller: PresentationController,
    frames: &[RecordedFrame],
    args: &Args,
    out: &mut W,
) -> Result<()> {
    let mut last = controller.snapshot();

    for frame in frames {
        last = controller.process_frame(frame.observation, frame.now);
        if args.trace {
            write_snapshot(out, Some(frame), &last, args.json)?;
        }
    }

    if !args.trace {
        write_snapshot(out, None, &last, args.json)?;
    }

    Ok(())
}

fn write_snapshot<W: Write>(
    out: &mut W,
    frame: Option<&RecordedFrame>,
    snapshot: &PresentationSnapshot,
    json: bool,
) -> Result<()> {
    if json {
        let line = serde_json::to_string(snapshot).context("Failed to serialize snapshot")?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    match frame {
        Some(frame) => writeln!(
            out,
            "t={:>8.3}s  {:<17}  {}",
            frame.now.as_secs_f64(),
            snapshot.gesture,
            snapshot
        )?,
        None => writeln!(out, "{}", snapshot)?,
    }
    Ok(())
}
