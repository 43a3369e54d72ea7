//! Viewer application state
//!
//! Owns the view state and the last rendered frame. A frame is re-rendered
//! only when the view or the canvas size changed since the previous one.

use std::path::PathBuf;
use crate::config::ViewerConfig;
use crate::export::{export_png, ExportError};
use crate::rasterizer::{render_frame, Color, Frame, Triangle, ViewState};
use crate::scene::create_triangles;

/// Transient message shown under the controls
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: f64,
}

pub struct ViewerApp {
    pub view: ViewState,
    pub background: Color,
    pub export_path: PathBuf,
    triangles: Vec<Triangle>,
    /// Last rendered frame and the inputs that produced it
    frame: Option<(Frame, ViewState)>,
    status: Option<StatusMessage>,
    /// Last mouse position while panning the canvas
    pan_anchor: Option<(f32, f32)>,
}

impl ViewerApp {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            view: config.view,
            background: config.background,
            export_path: config.export_path.clone(),
            triangles: create_triangles(),
            frame: None,
            status: None,
            pan_anchor: None,
        }
    }

    /// Whether the current view or canvas differs from the last frame
    pub fn needs_redraw(&self, width: usize, height: usize) -> bool {
        match &self.frame {
            Some((frame, view)) => frame.width != width || frame.height != height || *view != self.view,
            None => true,
        }
    }

    /// Render if needed. Returns true when a new frame was produced.
    pub fn update_frame(&mut self, width: usize, height: usize) -> bool {
        if width == 0 || height == 0 || !self.needs_redraw(width, height) {
            return false;
        }
        let frame = render_frame(&self.triangles, &self.view, width, height, self.background);
        self.frame = Some((frame, self.view));
        true
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref().map(|(frame, _)| frame)
    }

    /// Reset zoom, pan and angles
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Begin, continue or end a canvas pan from the current mouse state
    pub fn drag_canvas(&mut self, x: f32, y: f32, pressed_inside: bool, down: bool) {
        if !down {
            self.pan_anchor = None;
            return;
        }
        if pressed_inside {
            self.pan_anchor = Some((x, y));
            return;
        }
        if let Some((last_x, last_y)) = self.pan_anchor {
            if (x, y) != (last_x, last_y) {
                self.view.apply_drag((x - last_x) as f64, (y - last_y) as f64);
                self.pan_anchor = Some((x, y));
            }
        }
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Write the current frame to the configured export path
    pub fn export(&self) -> Result<PathBuf, ExportError> {
        let frame = self.frame().ok_or(ExportError::NoFrame)?;
        export_png(frame, &self.export_path)?;
        Ok(std::fs::canonicalize(&self.export_path).unwrap_or_else(|_| self.export_path.clone()))
    }

    /// Export and report the outcome in the status line
    pub fn export_and_report(&mut self, now: f64) {
        match self.export() {
            Ok(path) => {
                self.set_status(&format!("Image exported to {}", path.display()), now, 4.0);
            }
            Err(e) => {
                log::error!("export to {} failed: {}", self.export_path.display(), e);
                self.set_status(&format!("Export failed: {}", e), now, 6.0);
            }
        }
    }

    pub fn set_status(&mut self, text: &str, now: f64, duration: f64) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            expires_at: now + duration,
        });
    }

    /// Current status text, if it hasn't expired
    pub fn status(&self, now: f64) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| now < s.expires_at)
            .map(|s| s.text.as_str())
    }
}
