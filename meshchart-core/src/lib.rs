//! Core data structures for meshchart
//!
//! This crate provides the fundamental types shared by the surface pipeline and the
//! chart view: points, triangles, per-axis extents, renderer-ready meshes, colours,
//! the [`Drawable`] trait and the common error type.

pub mod point;
pub mod point_cloud;
pub mod extent;
pub mod triangle;
pub mod mesh;
pub mod color;
pub mod transform;
pub mod traits;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use extent::*;
pub use triangle::*;
pub use mesh::*;
pub use color::*;
pub use transform::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix3, Rotation3, Unit, UnitQuaternion};
