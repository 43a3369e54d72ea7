//! Per-frame view parameters
//!
//! The viewer owns one `ViewState` and mutates it from input events; the
//! renderer only ever sees an immutable snapshot.

use serde::{Deserialize, Serialize};
use super::types::LightingMode;

pub const MIN_ZOOM: f64 = 0.1;
/// Zoom change per wheel unit
pub const ZOOM_STEP: f64 = 0.1;

pub const HEADING_RANGE: (i32, i32) = (0, 360);
pub const PITCH_RANGE: (i32, i32) = (-90, 90);

pub const DEFAULT_HEADING: i32 = 180;
pub const DEFAULT_PITCH: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// Degrees, 0-360
    pub heading: i32,
    /// Degrees, -90-90
    pub pitch: i32,
    pub lighting: LightingMode,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            heading: DEFAULT_HEADING,
            pitch: DEFAULT_PITCH,
            lighting: LightingMode::Ambient,
        }
    }

    /// Apply a wheel rotation (positive = away from the user = zoom out)
    pub fn apply_wheel(&mut self, rotation: f64) {
        self.zoom = (self.zoom - rotation * ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Accumulate a drag delta in screen pixels
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx / self.zoom;
        self.pan_y += dy / self.zoom;
    }

    pub fn set_heading(&mut self, heading: i32) {
        self.heading = heading.clamp(HEADING_RANGE.0, HEADING_RANGE.1);
    }

    pub fn set_pitch(&mut self, pitch: i32) {
        self.pitch = pitch.clamp(PITCH_RANGE.0, PITCH_RANGE.1);
    }

    /// Reset zoom, pan and angles; the lighting mode is kept
    pub fn reset(&mut self) {
        *self = Self {
            lighting: self.lighting,
            ..Self::new()
        };
    }

    /// Clamp values that may have come from a hand-edited config
    pub fn sanitized(self) -> Self {
        let mut view = self;
        view.zoom = if view.zoom.is_finite() { view.zoom.max(MIN_ZOOM) } else { 1.0 };
        view.set_heading(view.heading);
        view.set_pitch(view.pitch);
        view
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
