//! Finger-vector gesture classification.
//!
//! Each gesture is an exact finger pattern. Patterns are mutually exclusive,
//! so table order carries no meaning.

use crate::types::FingerVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic gesture recognised from a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureId {
    /// Open palm: turn gesture control on or off.
    ToggleControl,
    /// Thumb only.
    Previous,
    /// Pinky only.
    Next,
    /// Index and middle: pointer preview.
    DrawPoint,
    /// Index only: draw while held.
    AnnotateStart,
    /// Index, middle and ring.
    UndoStroke,
    /// Thumb and index.
    ClearAll,
    /// Closed fist.
    ZoomIn,
    /// Thumb and pinky.
    ZoomOut,
    /// No pattern matched.
    None,
}

const fn pattern(bits: [u8; 5]) -> FingerVector {
    FingerVector::new([
        bits[0] == 1,
        bits[1] == 1,
        bits[2] == 1,
        bits[3] == 1,
        bits[4] == 1,
    ])
}

/// The fixed gesture table, thumb to pinky.
pub const GESTURE_TABLE: [(FingerVector, GestureId); 9] = [
    (pattern([1, 1, 1, 1, 1]), GestureId::ToggleControl),
    (pattern([1, 0, 0, 0, 0]), GestureId::Previous),
    (pattern([0, 0, 0, 0, 1]), GestureId::Next),
    (pattern([0, 1, 1, 0, 0]), GestureId::DrawPoint),
    (pattern([0, 1, 0, 0, 0]), GestureId::AnnotateStart),
    (pattern([0, 1, 1, 1, 0]), GestureId::UndoStroke),
    (pattern([1, 1, 0, 0, 0]), GestureId::ClearAll),
    (pattern([0, 0, 0, 0, 0]), GestureId::ZoomIn),
    (pattern([1, 0, 0, 0, 1]), GestureId::ZoomOut),
];

/// Classify a finger vector by exact match against [`GESTURE_TABLE`].
pub fn classify(fingers: FingerVector) -> GestureId {
    GESTURE_TABLE
        .iter()
        .find(|(p, _)| *p == fingers)
        .map(|&(_, gesture)| gesture)
        .unwrap_or(GestureId::None)
}

impl GestureId {
    /// Whether this gesture must pass the debounce gate before it fires.
    ///
    /// Drawing gestures act continuously while held and are never gated.
    pub fn is_cooldown_gated(self) -> bool {
        !matches!(
            self,
            GestureId::DrawPoint | GestureId::AnnotateStart | GestureId::None
        )
    }

    /// The finger pattern that produces this gesture, if any.
    pub fn pattern(self) -> Option<FingerVector> {
        GESTURE_TABLE
            .iter()
            .find(|&&(_, g)| g == self)
            .map(|&(p, _)| p)
    }

    /// Human-readable name for logs and traces.
    pub fn label(self) -> &'static str {
        match self {
            GestureId::ToggleControl => "toggle control",
            GestureId::Previous => "previous slide",
            GestureId::Next => "next slide",
            GestureId::DrawPoint => "pointer",
            GestureId::AnnotateStart => "annotate",
            GestureId::UndoStroke => "undo stroke",
            GestureId::ClearAll => "clear annotations",
            GestureId::ZoomIn => "zoom in",
            GestureId::ZoomOut => "zoom out",
            GestureId::None => "none",
        }
    }
}

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fv(bits: [u8; 5]) -> FingerVector {
        FingerVector::from_bits(&bits).unwrap()
    }

    #[test]
    fn test_classify_table_entries() {
        assert_eq!(classify(fv([1, 1, 1, 1, 1])), GestureId::ToggleControl);
        assert_eq!(classify(fv([1, 0, 0, 0, 0])), GestureId::Previous);
        assert_eq!(classify(fv([0, 0, 0, 0, 1])), GestureId::Next);
        assert_eq!(classify(fv([0, 1, 1, 0, 0])), GestureId::DrawPoint);
        assert_eq!(classify(fv([0, 1, 0, 0, 0])), GestureId::AnnotateStart);
        assert_eq!(classify(fv([0, 1, 1, 1, 0])), GestureId::UndoStroke);
        assert_eq!(classify(fv([1, 1, 0, 0, 0])), GestureId::ClearAll);
        assert_eq!(classify(fv([0, 0, 0, 0, 0])), GestureId::ZoomIn);
        assert_eq!(classify(fv([1, 0, 0, 0, 1])), GestureId::ZoomOut);
    }

    #[test]
    fn test_unmatched_vectors_are_none() {
        let table: HashSet<FingerVector> = GESTURE_TABLE.iter().map(|(p, _)| *p).collect();

        let mut unmatched = 0;
        for code in 0u8..32 {
            let bits: Vec<u8> = (0..5).map(|i| (code >> (4 - i)) & 1).collect();
            let v = FingerVector::from_bits(&bits).unwrap();
            if !table.contains(&v) {
                assert_eq!(classify(v), GestureId::None, "vector {}", v);
                unmatched += 1;
            }
        }
        assert_eq!(unmatched, 32 - GESTURE_TABLE.len());
    }

    #[test]
    fn test_patterns_are_unique() {
        let patterns: HashSet<FingerVector> = GESTURE_TABLE.iter().map(|(p, _)| *p).collect();
        assert_eq!(patterns.len(), GESTURE_TABLE.len());
    }

    #[test]
    fn test_pattern_lookup() {
        assert_eq!(GestureId::Next.pattern(), Some(fv([0, 0, 0, 0, 1])));
        assert_eq!(GestureId::None.pattern(), None);
    }

    #[test]
    fn test_cooldown_gating() {
        assert!(GestureId::Next.is_cooldown_gated());
        assert!(GestureId::ZoomOut.is_cooldown_gated());
        assert!(!GestureId::AnnotateStart.is_cooldown_gated());
        assert!(!GestureId::DrawPoint.is_cooldown_gated());
    }
}
