//! Axis adapters between cube space and triangulation space
//!
//! The triangulation oracle works on the `(x, z)` components of a [`TriangulationPoint`]
//! and carries `height` along untouched. Some datasets triangulate badly when Y is the
//! height axis; an adapter lets the caller pick which cube axis plays that role.

use meshchart_core::{Point2d, Point3d};
use serde::{Deserialize, Serialize};

/// A point as seen by the triangulation oracle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationPoint {
    /// Position in the triangulated plane
    pub position: Point2d,
    /// Coordinate ignored by the triangulation
    pub height: f64,
}

impl TriangulationPoint {
    pub fn new(position: Point2d, height: f64) -> Self {
        Self { position, height }
    }
}

/// Conversion between cube space and triangulation space.
///
/// Implementations must be exact inverses of each other (up to rounding).
pub trait AxisAdapter: Send + Sync {
    fn to_triangulation_space(&self, point: &Point3d) -> TriangulationPoint;

    fn from_triangulation_space(&self, point: &TriangulationPoint) -> Point3d;
}

/// Pass-through adapter: triangulate over `(x, z)`, keep `y` as height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityAdapter;

impl AxisAdapter for IdentityAdapter {
    fn to_triangulation_space(&self, point: &Point3d) -> TriangulationPoint {
        TriangulationPoint::new(Point2d::new(point.x, point.z), point.y)
    }

    fn from_triangulation_space(&self, point: &TriangulationPoint) -> Point3d {
        Point3d::new(point.position.x, point.height, point.position.y)
    }
}

/// Horizontal cube axis that can trade places with the height axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalAxis {
    X,
    Z,
}

/// Swap the height axis with one horizontal axis before triangulating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapHeightAdapter {
    pub axis: HorizontalAxis,
}

impl SwapHeightAdapter {
    pub fn new(axis: HorizontalAxis) -> Self {
        Self { axis }
    }

    fn swap(&self, point: &Point3d) -> Point3d {
        match self.axis {
            HorizontalAxis::X => Point3d::new(point.y, point.x, point.z),
            HorizontalAxis::Z => Point3d::new(point.x, point.z, point.y),
        }
    }
}

impl AxisAdapter for SwapHeightAdapter {
    fn to_triangulation_space(&self, point: &Point3d) -> TriangulationPoint {
        IdentityAdapter.to_triangulation_space(&self.swap(point))
    }

    fn from_triangulation_space(&self, point: &TriangulationPoint) -> Point3d {
        // a swap is its own inverse
        self.swap(&IdentityAdapter.from_triangulation_space(point))
    }
}
