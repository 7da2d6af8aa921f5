//! Delaunay triangulation of the normalized cloud
//!
//! The triangulation itself is an injected [`Triangulator`]; [`SpadeTriangulator`] is the
//! default implementation on top of the `spade` crate. [`triangulate_composite`] runs the
//! adapter round trip and fills the composite's triangle set.

use crate::axis::{AxisAdapter, TriangulationPoint};
use crate::normalize::MeshComposite;
use meshchart_core::{Error, Point2d, Result, Triangle3};
use spade::{DelaunayTriangulation, HasPosition, Point2, Triangulation};
use tracing::debug;

/// One triangle reported by a triangulation oracle.
///
/// `vertices` index into the point slice given to [`Triangulator::triangulate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleTriangle {
    pub vertices: [usize; 3],
    /// Degenerate hull artefact that must be discarded
    pub half_plane: bool,
}

impl OracleTriangle {
    pub fn proper(vertices: [usize; 3]) -> Self {
        Self {
            vertices,
            half_plane: false,
        }
    }

    pub fn half_plane(vertices: [usize; 3]) -> Self {
        Self {
            vertices,
            half_plane: true,
        }
    }
}

/// A 2D triangulation algorithm
pub trait Triangulator: Send + Sync {
    fn triangulate(&self, points: &[Point2d]) -> Result<Vec<OracleTriangle>>;
}

#[derive(Debug, Clone, Copy)]
struct IndexedVertex {
    position: Point2<f64>,
    index: usize,
}

impl HasPosition for IndexedVertex {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

/// 2D Delaunay triangulation using spade crate.
///
/// Every inserted vertex remembers its input index. When several inputs share a
/// position, the first one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpadeTriangulator;

impl Triangulator for SpadeTriangulator {
    fn triangulate(&self, points: &[Point2d]) -> Result<Vec<OracleTriangle>> {
        if points.len() < 3 {
            return Err(Error::InvalidData("Need at least 3 points for triangulation".to_string()));
        }

        let mut triangulation: DelaunayTriangulation<IndexedVertex> = DelaunayTriangulation::new();

        for (index, point) in points.iter().enumerate() {
            let position = Point2::new(point.x, point.y);
            if triangulation.locate_vertex(position).is_some() {
                continue;
            }
            triangulation
                .insert(IndexedVertex { position, index })
                .map_err(|e| Error::Algorithm(format!("Failed to insert point {} in Delaunay triangulation: {:?}", index, e)))?;
        }

        let triangles = triangulation
            .inner_faces()
            .map(|face| OracleTriangle::proper(face.vertices().map(|v| v.data().index)))
            .collect();

        Ok(triangles)
    }
}

/// Triangulate the composite's normalized points and append the resulting triangles.
///
/// Points go through `adapter` into triangulation space, the oracle's half-plane
/// triangles are dropped, and the rest are mapped back to cube space. Either every
/// triangle is appended or, on error, none is. Returns the number of triangles added.
pub fn triangulate_composite(
    composite: &mut MeshComposite,
    adapter: &dyn AxisAdapter,
    triangulator: &dyn Triangulator,
) -> Result<usize> {
    let lifted: Vec<TriangulationPoint> = composite
        .normalized_points()
        .iter()
        .map(|p| adapter.to_triangulation_space(p))
        .collect();
    let positions: Vec<Point2d> = lifted.iter().map(|p| p.position).collect();

    let oracle_triangles = triangulator.triangulate(&positions)?;

    let mut triangles = Vec::with_capacity(oracle_triangles.len());
    let mut discarded = 0usize;
    for triangle in &oracle_triangles {
        if triangle.half_plane {
            discarded += 1;
            continue;
        }
        if let Some(&bad) = triangle.vertices.iter().find(|&&i| i >= lifted.len()) {
            return Err(Error::Algorithm(format!(
                "triangulation referenced vertex {} of {}",
                bad,
                lifted.len()
            )));
        }
        let vertices = triangle
            .vertices
            .map(|i| adapter.from_triangulation_space(&lifted[i]));
        triangles.push(Triangle3::new(vertices, triangle.vertices));
    }

    debug!(
        triangles = triangles.len(),
        half_planes = discarded,
        "triangulated normalized points"
    );

    let added = triangles.len();
    for triangle in triangles {
        composite.add_triangle(triangle);
    }
    Ok(added)
}
