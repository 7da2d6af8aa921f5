//! Full surface build: normalization, triangulation, mesh and diffuse map
//!
//! A build either succeeds completely or leaves the caller's current surface alone.

use crate::axis::{AxisAdapter, IdentityAdapter};
use crate::delaunay::{triangulate_composite, SpadeTriangulator, Triangulator};
use crate::normalize::MeshComposite;
use crate::texture::{DiffuseMap, TextureSynthesizer};
use meshchart_core::{Error, PointCloud, Result, SurfaceMesh};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

/// Configuration for a surface build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Edge length of the chart cube in scene units
    pub cube_size: u32,
    /// Edge length of the diffuse map; cost grows with its square
    pub image_size: u32,
    /// Shade texel rows on the rayon pool
    pub parallel: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            cube_size: 400,
            image_size: 800,
            parallel: true,
        }
    }
}

impl SurfaceConfig {
    pub fn with_cube_size(mut self, cube_size: u32) -> Self {
        self.cube_size = cube_size;
        self
    }

    pub fn with_image_size(mut self, image_size: u32) -> Self {
        self.image_size = image_size;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cube_size == 0 {
            return Err(Error::InvalidData("cube_size must be positive".to_string()));
        }
        if self.image_size == 0 {
            return Err(Error::InvalidData("image_size must be positive".to_string()));
        }
        Ok(())
    }
}

/// Everything a renderer needs to show one surface
#[derive(Debug, Clone)]
pub struct Surface {
    pub composite: MeshComposite,
    pub mesh: SurfaceMesh,
    pub diffuse_map: DiffuseMap,
}

/// Builds [`Surface`]s with a configurable axis adapter and triangulation oracle
pub struct SurfaceBuilder {
    config: SurfaceConfig,
    adapter: Box<dyn AxisAdapter>,
    triangulator: Box<dyn Triangulator>,
}

impl SurfaceBuilder {
    /// Builder with the identity adapter and the spade triangulator
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            adapter: Box::new(IdentityAdapter),
            triangulator: Box::new(SpadeTriangulator),
        }
    }

    pub fn with_adapter(mut self, adapter: impl AxisAdapter + 'static) -> Self {
        self.adapter = Box::new(adapter);
        self
    }

    pub fn with_triangulator(mut self, triangulator: impl Triangulator + 'static) -> Self {
        self.triangulator = Box::new(triangulator);
        self
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Run one complete mesh build for `cloud`
    pub fn build(&self, cloud: &PointCloud) -> Result<Surface> {
        self.config.validate()?;
        let start = Instant::now();

        let mut composite = MeshComposite::new(cloud, self.config.cube_size)?;
        let added = triangulate_composite(&mut composite, self.adapter.as_ref(), self.triangulator.as_ref())?;
        if added == 0 {
            return Err(Error::Algorithm("No valid triangles generated".to_string()));
        }

        let mesh = SurfaceMesh::from_surface(
            composite.normalized_points(),
            composite.triangles(),
            self.config.cube_size as f64,
        );

        let diffuse_map = TextureSynthesizer::new(self.config.image_size)
            .with_parallel(self.config.parallel)
            .synthesize_composite(&composite)?;

        info!(
            points = cloud.len(),
            triangles = added,
            transparent_texels = diffuse_map.stats.transparent,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "surface built"
        );

        Ok(Surface {
            composite,
            mesh,
            diffuse_map,
        })
    }

    /// Replace `current` with a fresh build of `cloud`.
    ///
    /// On error `current` is left exactly as it was.
    pub fn rebuild(&self, current: &mut Option<Surface>, cloud: &PointCloud) -> Result<()> {
        let surface = self.build(cloud)?;
        *current = Some(surface);
        Ok(())
    }
}

impl Default for SurfaceBuilder {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}
