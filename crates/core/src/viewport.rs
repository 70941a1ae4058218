//! Crop geometry for showing a zoomed slide at its original size.

use crate::controller::{MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};

/// A slide scaled by the zoom level and cropped back to its original size
/// around the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomViewport {
    /// Size of the scaled slide before cropping.
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Top-left corner of the crop inside the scaled slide.
    pub offset_x: u32,
    pub offset_y: u32,
    /// Size of the visible window (the original slide size).
    pub width: u32,
    pub height: u32,
}

impl ZoomViewport {
    /// Centered crop for a `width` x `height` slide at `zoom`.
    ///
    /// The zoom is snapped to the nearest tenth and clamped to the supported
    /// range, so the scaled size is computed exactly. A non-finite zoom is
    /// treated as no zoom, and scaled sizes saturate at `u32::MAX`.
    pub fn centered(width: u32, height: u32, zoom: f64) -> Self {
        let zoom = if zoom.is_finite() { zoom } else { MIN_ZOOM };
        let tenths = (zoom * 10.0)
            .round()
            .clamp(MIN_ZOOM * 10.0, MAX_ZOOM * 10.0) as u64;
        let scale = |dim: u32| u32::try_from(u64::from(dim) * tenths / 10).unwrap_or(u32::MAX);

        let scaled_width = scale(width);
        let scaled_height = scale(height);

        Self {
            scaled_width,
            scaled_height,
            offset_x: scaled_width.saturating_sub(width) / 2,
            offset_y: scaled_height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// True when no scaling or cropping is needed.
    pub fn is_identity(&self) -> bool {
        self.scaled_width == self.width && self.scaled_height == self.height
    }
}
