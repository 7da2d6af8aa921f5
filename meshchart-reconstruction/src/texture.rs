//! Diffuse map synthesis
//!
//! Every texel of a square image is mapped onto the `(x, z)` floor of the chart cube,
//! located among the surface triangles and coloured by its interpolated height. Texels
//! that fall into a gap of the triangulation borrow the colour of a neighbour; the
//! search is bounded so only thin gaps are filled.
//!
//! Texel `(col, row)` samples floor point `(col * f, row * f)` with
//! `f = cube_size / image_size`, which matches the mesh texture coordinates
//! `(x / cube_size, z / cube_size)`.

use crate::locate::locate_height;
use crate::normalize::MeshComposite;
use crate::parallel;
use image::{ImageFormat, Rgba, RgbaImage};
use meshchart_core::{height_color, Error, Point2d, Result, Rgb, Triangle3, TRANSPARENT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Recursion depth at which the neighbour search gives up.
///
/// Depth 0 is the texel itself, depth 1 its direct neighbours.
pub const GAP_FILL_MAX_DEPTH: u32 = 2;

/// Outcome of colouring one texel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Texel {
    /// A triangle contains the texel itself
    Covered(Rgb),
    /// Colour taken from a neighbouring texel
    GapFilled(Rgb),
    /// No triangle contributes; not an error
    Transparent,
}

impl Texel {
    pub fn color(self) -> Option<Rgb> {
        match self {
            Texel::Covered(c) | Texel::GapFilled(c) => Some(c),
            Texel::Transparent => None,
        }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        self.color().map_or(TRANSPARENT, Rgb::to_rgba)
    }
}

/// How many texels ended up in each [`Texel`] class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageStats {
    pub covered: usize,
    pub gap_filled: usize,
    pub transparent: usize,
}

impl CoverageStats {
    fn record(&mut self, texel: Texel) {
        match texel {
            Texel::Covered(_) => self.covered += 1,
            Texel::GapFilled(_) => self.gap_filled += 1,
            Texel::Transparent => self.transparent += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.covered + self.gap_filled + self.transparent
    }
}

/// The synthesized texture and its coverage
#[derive(Debug, Clone)]
pub struct DiffuseMap {
    pub image: RgbaImage,
    pub stats: CoverageStats,
}

impl DiffuseMap {
    /// Write the map as a PNG file, transparent texels included
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::Image(format!("failed to write {}: {}", path.display(), e)))
    }
}

/// Builds the diffuse map of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSynthesizer {
    image_size: u32,
    parallel: bool,
}

impl TextureSynthesizer {
    pub fn new(image_size: u32) -> Self {
        Self {
            image_size,
            parallel: true,
        }
    }

    /// Run the texel loop on the calling thread only
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Synthesize the diffuse map for a built composite
    pub fn synthesize_composite(&self, composite: &MeshComposite) -> Result<DiffuseMap> {
        self.synthesize(composite.cube_size(), composite.triangles())
    }

    /// Synthesize a `image_size x image_size` map for triangles in a cube of edge `cube_size`
    pub fn synthesize(&self, cube_size: u32, triangles: &[Triangle3]) -> Result<DiffuseMap> {
        self.check_sizes(cube_size)?;

        let usable: Vec<Triangle3> = triangles
            .iter()
            .filter(|t| t.floor_double_area() != 0.0)
            .copied()
            .collect();
        if usable.len() < triangles.len() {
            warn!(
                skipped = triangles.len() - usable.len(),
                "skipping zero-area triangles during texture synthesis"
            );
        }

        let sampler = Sampler {
            triangles: &usable,
            cube_size: cube_size as f64,
            factor: cube_size as f64 / self.image_size as f64,
        };

        let size = self.image_size;
        let rows: Vec<u32> = (0..size).collect();
        let shade_row = |&row: &u32| -> Vec<Texel> { (0..size).map(|col| sampler.texel(col, row)).collect() };
        let texels = if self.parallel {
            parallel::parallel_map(&rows, shade_row)
        } else {
            rows.iter().map(shade_row).collect()
        };

        let mut image = RgbaImage::new(size, size);
        let mut stats = CoverageStats::default();
        for (row, line) in texels.iter().enumerate() {
            for (col, &texel) in line.iter().enumerate() {
                stats.record(texel);
                image.put_pixel(col as u32, row as u32, Rgba(texel.to_rgba()));
            }
        }

        debug!(
            image_size = size,
            covered = stats.covered,
            gap_filled = stats.gap_filled,
            transparent = stats.transparent,
            "synthesized diffuse map"
        );

        Ok(DiffuseMap { image, stats })
    }

    /// Colour a single texel of the map
    pub fn texel(&self, cube_size: u32, triangles: &[Triangle3], col: u32, row: u32) -> Result<Texel> {
        self.check_sizes(cube_size)?;
        let sampler = Sampler {
            triangles,
            cube_size: cube_size as f64,
            factor: cube_size as f64 / self.image_size as f64,
        };
        Ok(sampler.texel(col, row))
    }

    fn check_sizes(&self, cube_size: u32) -> Result<()> {
        if self.image_size == 0 || cube_size == 0 {
            return Err(Error::InvalidData(
                "image size and cube size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Read-only state shared by every texel of one synthesis run
struct Sampler<'a> {
    triangles: &'a [Triangle3],
    cube_size: f64,
    factor: f64,
}

impl Sampler<'_> {
    fn texel(&self, col: u32, row: u32) -> Texel {
        if let Some(color) = self.direct(col, row) {
            return Texel::Covered(color);
        }
        match self.search_neighbours(1, col, row) {
            Some(color) => Texel::GapFilled(color),
            None => Texel::Transparent,
        }
    }

    fn direct(&self, col: u32, row: u32) -> Option<Rgb> {
        let p = Point2d::new(col as f64 * self.factor, row as f64 * self.factor);
        locate_height(&p, self.triangles).map(|h| height_color(h, self.cube_size))
    }

    fn sample(&self, depth: u32, col: u32, row: u32) -> Option<Rgb> {
        if depth >= GAP_FILL_MAX_DEPTH {
            return None;
        }
        self.direct(col, row)
            .or_else(|| self.search_neighbours(depth + 1, col, row))
    }

    /// Probe the 4-connected neighbours of an uncovered texel.
    ///
    /// Column 0 only looks right and row 0 only looks down, so no probe ever
    /// reaches a negative index. Probes past the far edge simply find nothing.
    fn search_neighbours(&self, depth: u32, col: u32, row: u32) -> Option<Rgb> {
        if col == 0 {
            return self.sample(depth, col + 1, row);
        }
        if row == 0 {
            return self.sample(depth, col, row + 1);
        }
        [(col, row + 1), (col + 1, row), (col - 1, row), (col, row - 1)]
            .into_iter()
            .find_map(|(c, r)| self.sample(depth, c, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshchart_core::{height_to_hue, Point3d};

    /// Right triangle over the floor region `x + z < 100`
    fn half_floor(height: f64) -> Triangle3 {
        Triangle3::new(
            [
                Point3d::new(-1.0, height, -1.0),
                Point3d::new(101.0, height, -1.0),
                Point3d::new(-1.0, height, 101.0),
            ],
            [0, 1, 2],
        )
    }

    /// Triangle covering the whole floor of a 100-unit cube with room to spare
    fn full_floor(height: f64) -> Triangle3 {
        Triangle3::new(
            [
                Point3d::new(-10.0, height, -10.0),
                Point3d::new(300.0, height, -10.0),
                Point3d::new(-10.0, height, 300.0),
            ],
            [0, 1, 2],
        )
    }

    #[test]
    fn test_full_coverage() {
        let synth = TextureSynthesizer::new(20).with_parallel(false);
        let map = synth.synthesize(100, &[full_floor(50.0)]).unwrap();

        assert_eq!(map.image.dimensions(), (20, 20));
        assert_eq!(map.stats.covered, 400);
        assert_eq!(map.stats.total(), 400);
        assert!(map.image.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_uniform_height_colour() {
        let synth = TextureSynthesizer::new(10);
        let map = synth.synthesize(100, &[full_floor(0.0)]).unwrap();
        assert!(map.image.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn test_far_texels_transparent() {
        let synth = TextureSynthesizer::new(10).with_parallel(false);
        // texel (col, row) samples (10 col, 10 row), covered iff col + row <= 9
        let triangles = [half_floor(30.0)];

        assert!(matches!(synth.texel(100, &triangles, 3, 3).unwrap(), Texel::Covered(_)));
        assert_eq!(synth.texel(100, &triangles, 9, 9).unwrap(), Texel::Transparent);

        let map = synth.synthesize(100, &triangles).unwrap();
        assert_eq!(map.image.get_pixel(9, 9).0, TRANSPARENT);
        assert_eq!(map.image.get_pixel(0, 0).0[3], 255);
        assert_eq!(map.stats.covered, 55);
    }

    #[test]
    fn test_gap_fill_reaches_one_hop_only() {
        let synth = TextureSynthesizer::new(10);
        let triangles = [half_floor(30.0)];

        // (5, 5) lies on the hypotenuse, its left neighbour is covered
        assert!(matches!(synth.texel(100, &triangles, 5, 5).unwrap(), Texel::GapFilled(_)));
        // (6, 6) is two steps away from the nearest covered texel
        assert_eq!(synth.texel(100, &triangles, 6, 6).unwrap(), Texel::Transparent);
    }

    #[test]
    fn test_boundary_probes_one_direction() {
        let synth = TextureSynthesizer::new(10);
        // covers only x > 5, so column 0 is uncovered while column 1 is
        let right = Triangle3::new(
            [
                Point3d::new(5.0, 10.0, -10.0),
                Point3d::new(300.0, 10.0, -10.0),
                Point3d::new(5.0, 10.0, 300.0),
            ],
            [0, 1, 2],
        );
        assert!(matches!(synth.texel(100, &[right], 0, 4).unwrap(), Texel::GapFilled(_)));
    }

    #[test]
    fn test_degenerate_triangle_skipped() {
        let synth = TextureSynthesizer::new(10);
        let flat = Triangle3::new(
            [
                Point3d::new(0.0, 1.0, 0.0),
                Point3d::new(50.0, 1.0, 50.0),
                Point3d::new(100.0, 1.0, 100.0),
            ],
            [0, 1, 2],
        );
        let map = synth.synthesize(100, &[flat, full_floor(10.0)]).unwrap();
        assert_eq!(map.stats.covered, 100);
    }

    #[test]
    fn test_hue_increases_with_height() {
        let synth = TextureSynthesizer::new(10);
        // slope rising along z
        let ramp = Triangle3::new(
            [
                Point3d::new(-10.0, 0.0, -10.0),
                Point3d::new(300.0, 0.0, -10.0),
                Point3d::new(-10.0, 62.0, 300.0),
            ],
            [0, 1, 2],
        );
        let low = crate::locate::locate_height(&Point2d::new(10.0, 10.0), &[ramp]).unwrap();
        let high = crate::locate::locate_height(&Point2d::new(10.0, 60.0), &[ramp]).unwrap();
        assert!(high > low);
        assert!(height_to_hue(high, 100.0) > height_to_hue(low, 100.0));

        let lo = synth.texel(100, &[ramp], 1, 1).unwrap().color().unwrap();
        let hi = synth.texel(100, &[ramp], 1, 6).unwrap().color().unwrap();
        assert_ne!(lo, hi);
        // moving from red towards yellow raises green while red stays saturated
        assert_eq!(lo.r, 255);
        assert!(hi.g > lo.g);
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(TextureSynthesizer::new(0).synthesize(100, &[]).is_err());
        assert!(TextureSynthesizer::new(10).synthesize(0, &[]).is_err());

        let triangles = [full_floor(50.0)];
        assert!(matches!(
            TextureSynthesizer::new(0).texel(100, &triangles, 0, 0),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            TextureSynthesizer::new(10).texel(0, &triangles, 1, 1),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_save_png_bad_path() {
        let map = TextureSynthesizer::new(2).synthesize(100, &[]).unwrap();
        let path = std::env::temp_dir().join("meshchart-missing-dir").join("nested").join("map.png");
        assert!(matches!(map.save_png(&path), Err(Error::Image(_))));
    }

    #[test]
    fn test_empty_triangle_set_is_transparent() {
        let map = TextureSynthesizer::new(4).synthesize(100, &[]).unwrap();
        assert_eq!(map.stats.transparent, 16);
    }
}
