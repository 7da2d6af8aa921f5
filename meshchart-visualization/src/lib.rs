//! Interaction and presentation state for meshchart surface charts
//!
//! This crate holds everything the renderer needs besides the surface itself:
//! - Drag-driven cube orientation and the shared label rotation
//! - Wall visibility, dynamic or set by hand
//! - Axis legend ticks, titles and their placement while the cube turns
//! - Scroll zoom and picking back into data coordinates

pub mod orientation;
pub mod walls;
pub mod legend;
pub mod zoom;
pub mod chart;

pub use orientation::*;
pub use walls::*;
pub use legend::*;
pub use zoom::*;
pub use chart::*;
