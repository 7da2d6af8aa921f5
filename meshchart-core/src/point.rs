//! Point types and related functionality

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 2D point with double precision coordinates
pub type Point2d = Point2<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 3D point with single precision coordinates, used for renderer buffers
pub type Point3f = Point3<f32>;

/// One of the three coordinate axes of the chart cube.
///
/// The cube is Y-up: the surface floor spans X and Z, heights run along Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in component order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis inside a point
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Read this axis' component from a point
    pub fn component(self, point: &Point3d) -> f64 {
        point[self.index()]
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Project a cube-space point onto the surface floor.
///
/// The returned point carries `(x, z)`; the height `y` is dropped.
pub fn floor_projection(point: &Point3d) -> Point2d {
    Point2d::new(point.x, point.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_component() {
        let p = Point3d::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.component(&p), 1.0);
        assert_eq!(Axis::Y.component(&p), 2.0);
        assert_eq!(Axis::Z.component(&p), 3.0);
    }

    #[test]
    fn test_floor_projection_drops_height() {
        let p = Point3d::new(4.0, 100.0, -2.0);
        assert_eq!(floor_projection(&p), Point2d::new(4.0, -2.0));
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
