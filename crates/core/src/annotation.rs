//! Freehand annotation strokes for the current slide.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// An ordered polyline drawn while the annotate gesture was held.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Line segments between consecutive points, in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Stroke collection for one slide.
///
/// Always holds at least one stroke; the last one is the current stroke.
/// Points can only be appended while a stroke is open.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    strokes: Vec<Stroke>,
    open: bool,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self {
            strokes: vec![Stroke::new()],
            open: false,
        }
    }
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty stroke and make it the open one.
    pub fn start_stroke(&mut self) {
        self.strokes.push(Stroke::new());
        self.open = true;
    }

    /// Append a point to the open stroke. Returns false if no stroke is open.
    pub fn append_point(&mut self, point: Point) -> bool {
        if !self.open {
            return false;
        }
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => false,
        }
    }

    /// End the open stroke, keeping its points. Returns whether one was open.
    pub fn close_stroke(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Remove the last stroke.
    ///
    /// Removing the final stroke leaves a single empty one in its place, so a
    /// store holding only an empty stroke is unchanged. Returns whether
    /// anything changed.
    pub fn undo_last(&mut self) -> bool {
        self.open = false;
        if self.is_blank() {
            return false;
        }
        self.strokes.pop();
        if self.strokes.is_empty() {
            self.strokes.push(Stroke::new());
        }
        true
    }

    /// Reset to exactly one empty stroke.
    pub fn clear_all(&mut self) {
        self.strokes.clear();
        self.strokes.push(Stroke::new());
        self.open = false;
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True when the store holds a single empty stroke.
    pub fn is_blank(&self) -> bool {
        self.strokes.len() == 1 && self.strokes[0].is_empty()
    }

    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}
