//! Per-axis bounds of a point set and the cube rescaling built on them

use crate::point::{Axis, Point3d};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum and maximum of every axis over a non-empty point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: Point3d,
    pub max: Point3d,
}

impl Extent {
    /// Compute the extent with a single scan over `points`.
    ///
    /// Fails with [`Error::EmptyInput`] for an empty slice and with
    /// [`Error::InvalidData`] if any coordinate is not finite.
    pub fn from_points(points: &[Point3d]) -> Result<Self> {
        let first = points.first().ok_or(Error::EmptyInput)?;
        let mut min = *first;
        let mut max = *first;

        for (index, point) in points.iter().enumerate() {
            if !point.iter().all(|c| c.is_finite()) {
                return Err(Error::InvalidData(format!(
                    "point {} has a non-finite coordinate: {:?}",
                    index, point
                )));
            }
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);

            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        Ok(Self { min, max })
    }

    pub fn min(&self, axis: Axis) -> f64 {
        axis.component(&self.min)
    }

    pub fn max(&self, axis: Axis) -> f64 {
        axis.component(&self.max)
    }

    /// Span `max - min` along `axis`
    pub fn size(&self, axis: Axis) -> f64 {
        self.max(axis) - self.min(axis)
    }

    pub fn size_x(&self) -> f64 {
        self.size(Axis::X)
    }

    pub fn size_y(&self) -> f64 {
        self.size(Axis::Y)
    }

    pub fn size_z(&self) -> f64 {
        self.size(Axis::Z)
    }

    /// First axis (in x, y, z order) whose span is exactly zero
    pub fn degenerate_axis(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| self.size(axis) == 0.0)
    }

    /// Fail with [`Error::DegenerateExtent`] if any axis has zero span
    pub fn ensure_non_degenerate(&self) -> Result<()> {
        match self.degenerate_axis() {
            Some(axis) => Err(Error::DegenerateExtent { axis }),
            None => Ok(()),
        }
    }

    /// Rescale a raw point so every axis maps `[min, max]` onto `[0, cube_size]`.
    ///
    /// Callers must have checked [`Extent::ensure_non_degenerate`] first.
    pub fn normalize_point(&self, point: &Point3d, cube_size: f64) -> Point3d {
        Point3d::new(
            (point.x - self.min.x) / self.size_x() * cube_size,
            (point.y - self.min.y) / self.size_y() * cube_size,
            (point.z - self.min.z) / self.size_z() * cube_size,
        )
    }

    /// Map a cube-space point back into data coordinates
    pub fn denormalize_point(&self, point: &Point3d, cube_size: f64) -> Point3d {
        Point3d::new(
            self.min.x + point.x * self.size_x() / cube_size,
            self.min.y + point.y * self.size_y() / cube_size,
            self.min.z + point.z * self.size_z() / cube_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Vec<Point3d> {
        vec![
            Point3d::new(-1.0, 10.0, 5.0),
            Point3d::new(3.0, 20.0, 7.0),
            Point3d::new(1.0, 15.0, 6.0),
        ]
    }

    #[test]
    fn test_extent_from_points() {
        let extent = Extent::from_points(&sample()).unwrap();
        assert_eq!(extent.min, Point3d::new(-1.0, 10.0, 5.0));
        assert_eq!(extent.max, Point3d::new(3.0, 20.0, 7.0));
        assert_eq!(extent.size_x(), 4.0);
        assert_eq!(extent.size_y(), 10.0);
        assert_eq!(extent.size_z(), 2.0);
    }

    #[test]
    fn test_extent_empty() {
        assert_eq!(Extent::from_points(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn test_extent_rejects_nan() {
        let points = vec![Point3d::new(0.0, f64::NAN, 0.0)];
        assert!(matches!(Extent::from_points(&points), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_degenerate_axis_detected() {
        let points = vec![Point3d::new(0.0, 1.0, 0.0), Point3d::new(2.0, 1.0, 3.0)];
        let extent = Extent::from_points(&points).unwrap();
        assert_eq!(extent.degenerate_axis(), Some(Axis::Y));
        assert_eq!(
            extent.ensure_non_degenerate(),
            Err(Error::DegenerateExtent { axis: Axis::Y })
        );
    }

    #[test]
    fn test_normalize_denormalize() {
        let extent = Extent::from_points(&sample()).unwrap();
        let p = Point3d::new(1.0, 15.0, 6.0);
        let normalized = extent.normalize_point(&p, 400.0);
        assert_relative_eq!(normalized, Point3d::new(200.0, 200.0, 200.0));
        assert_relative_eq!(extent.denormalize_point(&normalized, 400.0), p);
    }
}
