//! # Meshchart Reconstruction
//!
//! Turns an irregular scatter cloud into a textured surface for a 3D chart.
//!
//! The raw points are normalized into the chart cube, triangulated through a pluggable
//! axis adapter and Delaunay oracle, and coloured by a diffuse map whose hue follows the
//! interpolated surface height.

pub mod normalize;
pub mod axis;
pub mod delaunay;
pub mod locate;
pub mod texture;
pub mod parallel;
pub mod pipeline;

// Re-export commonly used items
pub use normalize::*;
pub use axis::*;
pub use delaunay::*;
pub use locate::*;
pub use texture::*;
pub use pipeline::*;
