//! Core traits for meshchart

use crate::{mesh::SurfaceMesh, point::*, point_cloud::PointCloud};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3d, Point3d);

    /// Get the center point of the object
    fn center(&self) -> Point3d {
        let (min, max) = self.bounding_box();
        Point3d::from((min.coords + max.coords) / 2.0)
    }
}

fn bounds<I>(mut points: I) -> (Point3d, Point3d)
where
    I: Iterator<Item = Point3d>,
{
    let first = match points.next() {
        Some(p) => p,
        None => return (Point3d::origin(), Point3d::origin()),
    };

    points.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)))
}

impl Drawable for PointCloud {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        bounds(self.points.iter().copied())
    }
}

impl Drawable for SurfaceMesh {
    /// Bounds of the mesh in scene space, translation included
    fn bounding_box(&self) -> (Point3d, Point3d) {
        let offset = self.translation.cast::<f64>();
        bounds(self.vertices.iter().map(|v| v.cast::<f64>() + offset))
    }
}
