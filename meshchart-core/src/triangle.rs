//! Surface triangles produced by triangulating the normalized cloud

use crate::point::{floor_projection, Point2d, Point3d};
use serde::{Deserialize, Serialize};

/// A triangle of the surface in cube space.
///
/// `indices` are the positions of the three vertices in the normalized point set, so
/// mesh faces never need to search for their vertices by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle3 {
    pub vertices: [Point3d; 3],
    pub indices: [usize; 3],
}

impl Triangle3 {
    pub fn new(vertices: [Point3d; 3], indices: [usize; 3]) -> Self {
        Self { vertices, indices }
    }

    pub fn p0(&self) -> &Point3d {
        &self.vertices[0]
    }

    pub fn p1(&self) -> &Point3d {
        &self.vertices[1]
    }

    pub fn p2(&self) -> &Point3d {
        &self.vertices[2]
    }

    /// Arithmetic mean of the three vertices
    pub fn centroid(&self) -> Point3d {
        let sum = self.vertices[0].coords + self.vertices[1].coords + self.vertices[2].coords;
        Point3d::from(sum / 3.0)
    }

    /// Centroid projected onto the `(x, z)` floor
    pub fn floor_centroid(&self) -> Point2d {
        floor_projection(&self.centroid())
    }

    /// Twice the signed area of the triangle projected onto the `(x, z)` floor
    pub fn floor_double_area(&self) -> f64 {
        let [p0, p1, p2] = &self.vertices;
        (p1.x - p0.x) * (p2.z - p0.z) - (p2.x - p0.x) * (p1.z - p0.z)
    }

    /// Lowest and highest vertex height
    pub fn height_range(&self) -> (f64, f64) {
        let heights = self.vertices.map(|v| v.y);
        let lo = heights.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = heights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_double_area_sign() {
        let ccw = Triangle3::new(
            [
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(2.0, 5.0, 0.0),
                Point3d::new(0.0, 9.0, 2.0),
            ],
            [0, 1, 2],
        );
        assert_eq!(ccw.floor_double_area(), 4.0);

        let cw = Triangle3::new([ccw.vertices[0], ccw.vertices[2], ccw.vertices[1]], [0, 2, 1]);
        assert_eq!(cw.floor_double_area(), -4.0);
    }

    #[test]
    fn test_centroid_and_height_range() {
        let t = Triangle3::new(
            [
                Point3d::new(0.0, 3.0, 0.0),
                Point3d::new(3.0, 6.0, 0.0),
                Point3d::new(0.0, 0.0, 3.0),
            ],
            [0, 1, 2],
        );
        assert_eq!(t.centroid(), Point3d::new(1.0, 3.0, 1.0));
        assert_eq!(t.floor_centroid(), Point2d::new(1.0, 1.0));
        assert_eq!(t.height_range(), (0.0, 6.0));
    }
}
