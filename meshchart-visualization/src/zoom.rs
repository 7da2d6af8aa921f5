//! Scroll zoom of the chart scene

use serde::{Deserialize, Serialize};

/// Factor applied per scroll step
pub const ZOOM_STEP: f64 = 1.2;

pub const MIN_SCALE: f64 = 0.1;

pub const MAX_SCALE: f64 = 20.0;

/// Uniform scale of the chart, clamped to `[MIN_SCALE, MAX_SCALE]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zoom {
    scale: f64,
}

impl Zoom {
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Apply one scroll event and return the new scale.
    ///
    /// Scrolling down (negative delta) zooms out, anything else zooms in.
    pub fn on_scroll(&mut self, delta_y: f64) -> f64 {
        let scale = if delta_y < 0.0 {
            self.scale / ZOOM_STEP
        } else {
            self.scale * ZOOM_STEP
        };
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self.scale
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new()
    }
}
