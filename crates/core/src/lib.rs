//! Gesture classification and presentation state machine for controlling
//! slides, annotations and zoom with hand gestures.

pub mod annotation;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod gesture;
pub mod types;
pub mod viewport;

pub use annotation::{AnnotationStore, Stroke};
pub use controller::{
    Marker, PresentationController, PresentationSnapshot, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
pub use debounce::{DebounceGate, GESTURE_COOLDOWN};
pub use error::{Error, Result};
pub use gesture::{classify, GestureId, GESTURE_TABLE};
pub use types::{FingerVector, HandObservation, Point, Timestamp};
pub use viewport::ZoomViewport;
