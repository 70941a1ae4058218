//! Recorded hand-observation sessions.
//!
//! One CSV row per captured frame, with header
//! `t,thumb,index,middle,ring,pinky,x,y`. `t` is seconds since capture
//! started. Leaving the finger columns empty records a frame with no hand.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use handslide_core::{FingerVector, HandObservation, Point, Timestamp};

const COLUMNS: usize = 8;

/// A single recorded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub now: Timestamp,
    pub observation: Option<HandObservation>,
}

/// Load a session from a CSV file.
pub fn load_session_from_path(path: impl AsRef<Path>) -> Result<Vec<RecordedFrame>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    load_session(file).with_context(|| format!("Invalid session {}", path.display()))
}

/// Load a session from CSV text.
pub fn load_session<R: Read>(reader: R) -> Result<Vec<RecordedFrame>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut frames = Vec::new();
    let mut last: Option<Timestamp> = None;

    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = result.with_context(|| format!("Row {} is not valid CSV", row))?;
        let frame = parse_row(&record, row)?;

        if let Some(previous) = last {
            if frame.now < previous {
                log::warn!(
                    "Row {} at {:.3}s precedes the previous frame at {:.3}s",
                    row,
                    frame.now.as_secs_f64(),
                    previous.as_secs_f64()
                );
                bail!("Row {}: timestamps must not go backwards", row);
            }
        }
        last = Some(frame.now);
        frames.push(frame);
    }

    ensure!(!frames.is_empty(), "Session contains no frames");
    Ok(frames)
}

fn parse_row(record: &StringRecord, row: usize) -> Result<RecordedFrame> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let secs: f64 = field(0)
        .parse()
        .with_context(|| format!("Row {}: invalid timestamp {:?}", row, field(0)))?;
    ensure!(
        secs.is_finite() && secs >= 0.0,
        "Row {}: timestamp must be a non-negative number",
        row
    );
    let now = Duration::try_from_secs_f64(secs)
        .with_context(|| format!("Row {}: timestamp out of range", row))?;

    if (1..=5).all(|i| field(i).is_empty()) {
        return Ok(RecordedFrame {
            now,
            observation: None,
        });
    }

    ensure!(
        record.len() >= COLUMNS,
        "Row {} has {} columns, expected {}",
        row,
        record.len(),
        COLUMNS
    );

    let mut bits = [0u8; 5];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = field(i + 1)
            .parse()
            .with_context(|| format!("Row {}: invalid finger value {:?}", row, field(i + 1)))?;
    }
    let fingers = FingerVector::from_bits(&bits).with_context(|| format!("Row {}", row))?;

    let x: f32 = field(6)
        .parse()
        .with_context(|| format!("Row {}: invalid x {:?}", row, field(6)))?;
    let y: f32 = field(7)
        .parse()
        .with_context(|| format!("Row {}: invalid y {:?}", row, field(7)))?;

    Ok(RecordedFrame {
        now,
        observation: Some(HandObservation::new(fingers, Point::new(x, y))),
    })
}
