//! Presentation state machine driven by one classified gesture per frame.
//!
//! The controller owns every piece of mutable presentation state: the slide
//! index, zoom level, gesture-control flag, annotation strokes and the
//! debounce gate. The control loop holds it exclusively and calls
//! [`PresentationController::process_frame`] once per captured frame.
//!
//! Transitions:
//! - open palm toggles gesture control, even while control is off;
//! - while control is off every other gesture is ignored;
//! - navigation, undo, clear and zoom must pass the cooldown gate;
//! - the annotate gesture draws continuously while held, and any other
//!   frame (another gesture or no hand at all) ends the stroke;
//! - a slide change always discards the slide's annotations.

use crate::annotation::{AnnotationStore, Stroke};
use crate::debounce::DebounceGate;
use crate::error::{Error, Result};
use crate::gesture::{classify, GestureId};
use crate::types::{HandObservation, Point, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest zoom level (no magnification).
pub const MIN_ZOOM: f64 = 1.0;
/// Largest zoom level.
pub const MAX_ZOOM: f64 = 2.0;
/// Change applied by one zoom gesture.
pub const ZOOM_STEP: f64 = 0.1;

// Zoom is tracked in whole tenths so repeated steps never drift.
const MIN_ZOOM_TENTHS: u8 = 10;
const MAX_ZOOM_TENTHS: u8 = 20;

/// Transient pointer marker the renderer draws at the hand center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub center: Point,
    pub gesture: GestureId,
}

/// Read-only view of the presentation state after a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSnapshot {
    pub slide_index: usize,
    pub slide_count: usize,
    pub zoom_level: f64,
    pub gesture_control_enabled: bool,
    pub strokes: Vec<Stroke>,
    pub stroke_open: bool,
    /// Gesture classified this frame (`None` when no hand was seen).
    pub gesture: GestureId,
    pub marker: Option<Marker>,
}

impl fmt::Display for PresentationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points: usize = self.strokes.iter().map(Stroke::len).sum();
        write!(
            f,
            "slide {}/{} | zoom {:.1}x | control {} | strokes {} ({} points{})",
            self.slide_index + 1,
            self.slide_count,
            self.zoom_level,
            if self.gesture_control_enabled { "ON" } else { "OFF" },
            self.strokes.len(),
            points,
            if self.stroke_open { ", drawing" } else { "" },
        )
    }
}

/// Owns the presentation state and applies gestures to it.
#[derive(Debug, Clone)]
pub struct PresentationController {
    slide_count: usize,
    slide_index: usize,
    zoom_tenths: u8,
    gesture_control_enabled: bool,
    annotations: AnnotationStore,
    gate: DebounceGate,
}

impl PresentationController {
    /// Create a controller for a deck of `slide_count` slides.
    ///
    /// Starts on the first slide, unzoomed, with gesture control off.
    pub fn new(slide_count: usize) -> Result<Self> {
        if slide_count == 0 {
            return Err(Error::NoSlides);
        }

        Ok(Self {
            slide_count,
            slide_index: 0,
            zoom_tenths: MIN_ZOOM_TENTHS,
            gesture_control_enabled: false,
            annotations: AnnotationStore::new(),
            gate: DebounceGate::new(),
        })
    }

    /// Set whether gesture control starts enabled.
    pub fn with_gesture_control(mut self, enabled: bool) -> Self {
        self.gesture_control_enabled = enabled;
        self
    }

    /// Start on a given slide, clamped to the deck.
    pub fn with_start_slide(mut self, index: usize) -> Self {
        self.slide_index = index.min(self.slide_count - 1);
        self
    }

    /// Apply one frame's observation at time `now`.
    pub fn process_frame(
        &mut self,
        observation: Option<HandObservation>,
        now: Timestamp,
    ) -> PresentationSnapshot {
        let (gesture, marker) = match observation {
            Some(observation) => self.apply(observation, now),
            None => {
                if self.annotations.close_stroke() {
                    log::debug!("Hand lost, stroke closed");
                }
                (GestureId::None, None)
            }
        };

        self.snapshot_with(gesture, marker)
    }

    fn apply(&mut self, observation: HandObservation, now: Timestamp) -> (GestureId, Option<Marker>) {
        let gesture = classify(observation.fingers);

        if (gesture != GestureId::AnnotateStart || !self.gesture_control_enabled)
            && self.annotations.close_stroke()
        {
            log::debug!("Stroke closed by {}", gesture);
        }

        if gesture == GestureId::ToggleControl {
            if self.gate.try_accept(now) {
                self.gesture_control_enabled = !self.gesture_control_enabled;
                log::info!(
                    "Gesture control: {}",
                    if self.gesture_control_enabled { "ON" } else { "OFF" }
                );
            } else {
                log::debug!("Toggle ignored during cooldown");
            }
            return (gesture, None);
        }

        if !self.gesture_control_enabled {
            if gesture != GestureId::None {
                log::debug!("Ignoring {} while gesture control is off", gesture);
            }
            return (gesture, None);
        }

        let marker = Some(Marker {
            center: observation.center,
            gesture,
        });

        match gesture {
            GestureId::DrawPoint => return (gesture, marker),
            GestureId::AnnotateStart => {
                if !self.annotations.is_open() {
                    self.annotations.start_stroke();
                    log::debug!("Stroke {} opened", self.annotations.strokes().len());
                }
                self.annotations.append_point(observation.center);
                return (gesture, marker);
            }
            _ => {}
        }

        if !gesture.is_cooldown_gated() {
            return (gesture, None);
        }
        if !self.gate.try_accept(now) {
            log::debug!("Ignoring {} during cooldown", gesture);
            return (gesture, None);
        }

        match gesture {
            GestureId::Previous => {
                if self.slide_index > 0 {
                    self.go_to_slide(self.slide_index - 1);
                }
            }
            GestureId::Next => {
                if self.slide_index + 1 < self.slide_count {
                    self.go_to_slide(self.slide_index + 1);
                }
            }
            GestureId::UndoStroke => {
                if self.annotations.undo_last() {
                    log::info!("Undid last stroke");
                }
            }
            GestureId::ClearAll => {
                let points = self.annotations.point_count();
                self.annotations.clear_all();
                log::info!("Cleared all annotations ({} points)", points);
            }
            GestureId::ZoomIn => {
                self.zoom_tenths = (self.zoom_tenths + 1).min(MAX_ZOOM_TENTHS);
                log::info!("Zoom in: {:.1}", self.zoom_level());
            }
            GestureId::ZoomOut => {
                self.zoom_tenths = self.zoom_tenths.saturating_sub(1).max(MIN_ZOOM_TENTHS);
                log::info!("Zoom out: {:.1}", self.zoom_level());
            }
            GestureId::DrawPoint
            | GestureId::AnnotateStart
            | GestureId::ToggleControl
            | GestureId::None => {}
        }

        (gesture, None)
    }

    fn go_to_slide(&mut self, index: usize) {
        log::info!("Slide {} -> {}", self.slide_index + 1, index + 1);
        self.slide_index = index;
        self.annotations.clear_all();
    }

    /// Current state without a per-frame gesture or marker.
    pub fn snapshot(&self) -> PresentationSnapshot {
        self.snapshot_with(GestureId::None, None)
    }

    fn snapshot_with(&self, gesture: GestureId, marker: Option<Marker>) -> PresentationSnapshot {
        PresentationSnapshot {
            slide_index: self.slide_index,
            slide_count: self.slide_count,
            zoom_level: self.zoom_level(),
            gesture_control_enabled: self.gesture_control_enabled,
            strokes: self.annotations.strokes().to_vec(),
            stroke_open: self.annotations.is_open(),
            gesture,
            marker,
        }
    }

    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn zoom_level(&self) -> f64 {
        f64::from(self.zoom_tenths) / 10.0
    }

    pub fn gesture_control_enabled(&self) -> bool {
        self.gesture_control_enabled
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.annotations.strokes()
    }

    pub fn stroke_open(&self) -> bool {
        self.annotations.is_open()
    }

    /// Time of the last gesture that passed the cooldown gate.
    pub fn last_gesture_at(&self) -> Option<Timestamp> {
        self.gate.last_accepted()
    }
}
