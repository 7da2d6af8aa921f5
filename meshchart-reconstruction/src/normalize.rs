//! Cube normalization of raw scatter data
//!
//! The raw cloud is rescaled so each axis maps its data range onto `[0, cube_size]`.
//! The resulting [`MeshComposite`] owns the normalized points and the append-only set
//! of surface triangles built from them.

use meshchart_core::{Error, Extent, Point3d, PointCloud, Result, Triangle3};
use tracing::debug;

/// Rescale `points` into a cube of edge `cube_size`.
///
/// The i-th normalized point is the image of the i-th input point. Fails with
/// [`Error::EmptyInput`] for an empty set and with [`Error::DegenerateExtent`] if any
/// axis has zero span.
pub fn normalize(points: &[Point3d], cube_size: u32) -> Result<(Extent, Vec<Point3d>)> {
    if cube_size == 0 {
        return Err(Error::InvalidData("cube size must be positive".to_string()));
    }

    let extent = Extent::from_points(points)?;
    extent.ensure_non_degenerate()?;

    let size = cube_size as f64;
    let normalized = points
        .iter()
        .map(|p| extent.normalize_point(p, size))
        .collect();

    Ok((extent, normalized))
}

/// Data points, their cube-space images and the surface triangles of one mesh build
#[derive(Debug, Clone)]
pub struct MeshComposite {
    data_points: Vec<Point3d>,
    normalized_points: Vec<Point3d>,
    extent: Extent,
    cube_size: u32,
    triangles: Vec<Triangle3>,
}

impl MeshComposite {
    /// Normalize `cloud` into a cube of edge `cube_size` with an empty triangle set
    pub fn new(cloud: &PointCloud, cube_size: u32) -> Result<Self> {
        let (extent, normalized_points) = normalize(&cloud.points, cube_size)?;
        debug!(
            points = cloud.len(),
            cube_size,
            "normalized point cloud into chart cube"
        );

        Ok(Self {
            data_points: cloud.points.clone(),
            normalized_points,
            extent,
            cube_size,
            triangles: Vec::with_capacity(cloud.len() / 2),
        })
    }

    pub fn data_points(&self) -> &[Point3d] {
        &self.data_points
    }

    pub fn normalized_points(&self) -> &[Point3d] {
        &self.normalized_points
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn cube_size(&self) -> u32 {
        self.cube_size
    }

    pub fn triangles(&self) -> &[Triangle3] {
        &self.triangles
    }

    /// Append a surface triangle. No deduplication or membership check is done.
    pub fn add_triangle(&mut self, triangle: Triangle3) {
        self.triangles.push(triangle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshchart_core::Axis;

    fn cloud() -> PointCloud {
        PointCloud::from_points(vec![
            Point3d::new(10.0, -5.0, 0.5),
            Point3d::new(20.0, 5.0, 1.5),
            Point3d::new(15.0, 0.0, 1.0),
            Point3d::new(12.0, 2.5, 0.75),
        ])
    }

    #[test]
    fn test_normalize_range() {
        let (extent, normalized) = normalize(&cloud().points, 400).unwrap();
        assert_eq!(extent.size_x(), 10.0);
        assert_eq!(normalized.len(), 4);
        for p in &normalized {
            for c in p.iter() {
                assert!((0.0..=400.0).contains(c), "{} outside cube", c);
            }
        }
        assert_eq!(normalized[0], Point3d::new(0.0, 0.0, 0.0));
        assert_eq!(normalized[1], Point3d::new(400.0, 400.0, 400.0));
        assert_eq!(normalized[2], Point3d::new(200.0, 200.0, 200.0));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(&[], 400), Err(Error::EmptyInput));
    }

    #[test]
    fn test_normalize_flat_axis() {
        let points = vec![Point3d::new(0.0, 0.0, 7.0), Point3d::new(1.0, 1.0, 7.0)];
        assert_eq!(
            normalize(&points, 400),
            Err(Error::DegenerateExtent { axis: Axis::Z })
        );
    }

    #[test]
    fn test_normalize_zero_cube() {
        assert!(matches!(normalize(&cloud().points, 0), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_composite_keeps_order_and_triangles() {
        let mut composite = MeshComposite::new(&cloud(), 100).unwrap();
        assert_eq!(composite.data_points()[3], Point3d::new(12.0, 2.5, 0.75));
        assert_eq!(composite.normalized_points()[3], Point3d::new(20.0, 75.0, 25.0));
        assert!(composite.triangles().is_empty());

        let n = composite.normalized_points();
        let triangle = Triangle3::new([n[0], n[1], n[2]], [0, 1, 2]);
        composite.add_triangle(triangle);
        composite.add_triangle(triangle);
        assert_eq!(composite.triangles().len(), 2);
    }
}
