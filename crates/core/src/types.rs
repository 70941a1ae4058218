//! Per-frame input types produced by the hand-tracking collaborator.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Monotonic time since the start of the session.
pub type Timestamp = Duration;

/// A 2D point in slide pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Which fingers are extended, ordered thumb, index, middle, ring, pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerVector([bool; 5]);

impl FingerVector {
    pub const fn new(fingers: [bool; 5]) -> Self {
        Self(fingers)
    }

    /// Build a vector from five 0/1 values, the shape landmark detectors emit.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        if bits.len() != 5 {
            return Err(Error::InvalidFingerVector(format!(
                "expected 5 values, got {}",
                bits.len()
            )));
        }

        let mut fingers = [false; 5];
        for (slot, &bit) in fingers.iter_mut().zip(bits) {
            *slot = match bit {
                0 => false,
                1 => true,
                other => {
                    return Err(Error::InvalidFingerVector(format!(
                        "values must be 0 or 1, got {}",
                        other
                    )))
                }
            };
        }

        Ok(Self(fingers))
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    pub fn thumb(&self) -> bool {
        self.0[0]
    }

    pub fn index(&self) -> bool {
        self.0[1]
    }

    pub fn middle(&self) -> bool {
        self.0[2]
    }

    pub fn ring(&self) -> bool {
        self.0[3]
    }

    pub fn pinky(&self) -> bool {
        self.0[4]
    }
}

/// Parses the compact "01100" form used in recorded sessions.
impl FromStr for FingerVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(Error::InvalidFingerVector(format!(
                    "unexpected character {:?} in {:?}",
                    other, s
                ))),
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::from_bits(&bits)
    }
}

impl fmt::Display for FingerVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for up in self.0 {
            f.write_str(if up { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// A single tracked hand for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub fingers: FingerVector,
    pub center: Point,
}

impl HandObservation {
    pub fn new(fingers: FingerVector, center: impl Into<Point>) -> Self {
        Self {
            fingers,
            center: center.into(),
        }
    }
}
