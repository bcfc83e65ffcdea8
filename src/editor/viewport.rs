use serde::{Deserialize, Serialize};

/// Smallest zoom factor the canvas supports.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest zoom factor the canvas supports.
pub const MAX_ZOOM: f64 = 3.0;

/// The pan/zoom transform a canvas applies when rendering the document.
///
/// Entirely independent of document content; viewport changes are never
/// history-committed. Zoom is anchored at the document origin — a canvas
/// wanting zoom-to-cursor composes its own pan correction on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Shifts the pan offset. No bounds beyond floating-point range.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Multiplies the zoom by `factor`, clamping the result into
    /// [`MIN_ZOOM`]..=[`MAX_ZOOM`]. Non-finite or non-positive factors are
    /// ignored so the clamp invariant holds for any call sequence.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::trace!(factor, "ignoring degenerate zoom factor");
            return;
        }
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Sets an absolute zoom, clamped the same way as [`zoom_by`](Self::zoom_by).
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Restores the identity transform `{0, 0, 1}`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
