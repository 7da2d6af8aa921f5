//! Renderer-facing mesh built from the normalized cloud and its triangles

use crate::point::*;
use crate::triangle::Triangle3;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A textured triangle mesh ready to hand to a scene graph.
///
/// Vertices are in screen orientation (Y pointing down), texture coordinates address
/// the diffuse map over the `(x, z)` floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<Point3f>,
    pub tex_coords: Vec<[f32; 2]>,
    pub faces: Vec<[usize; 3]>,
    /// Offset that centres the cube on the scene origin
    pub translation: Vector3<f32>,
}

impl SurfaceMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            faces: Vec::new(),
            translation: Vector3::zeros(),
        }
    }

    /// Build the mesh for a cube of edge `cube_size`.
    ///
    /// Faces come straight from each triangle's vertex indices.
    pub fn from_surface(normalized: &[Point3d], triangles: &[Triangle3], cube_size: f64) -> Self {
        let vertices = normalized
            .iter()
            .map(|p| Point3f::new(p.x as f32, -p.y as f32, p.z as f32))
            .collect();

        let tex_coords = normalized
            .iter()
            .map(|p| [(p.x / cube_size) as f32, (p.z / cube_size) as f32])
            .collect();

        let faces = triangles.iter().map(|t| t.indices).collect();

        let half = (0.5 * cube_size) as f32;
        Self {
            vertices,
            tex_coords,
            faces,
            translation: Vector3::new(-half, half, -half),
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_surface_layout() {
        let normalized = vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(400.0, 100.0, 0.0),
            Point3d::new(0.0, 400.0, 200.0),
        ];
        let triangles = vec![Triangle3::new(
            [normalized[0], normalized[1], normalized[2]],
            [0, 1, 2],
        )];

        let mesh = SurfaceMesh::from_surface(&normalized, &triangles, 400.0);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertices[1], Point3f::new(400.0, -100.0, 0.0));
        assert_eq!(mesh.tex_coords[2], [0.0, 0.5]);
        assert_eq!(mesh.faces[0], [0, 1, 2]);
        assert_eq!(mesh.translation, Vector3::new(-200.0, 200.0, -200.0));
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = SurfaceMesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }
}
