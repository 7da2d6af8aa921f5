//! Point location and height interpolation over the surface triangles
//!
//! All tests work on the `(x, z)` floor projection of the triangles; the height is the
//! `y` coordinate. A query point's `x` component is the floor `x`, its `y` component
//! the floor `z`.

use meshchart_core::{Error, Point2d, Result, Triangle3};

/// Strict-interior containment test using barycentric coordinates.
///
/// Points on an edge or a vertex are outside. Zero-area triangles contain nothing.
pub fn is_point_in_triangle(p: &Point2d, triangle: &Triangle3) -> bool {
    let [p0, p1, p2] = &triangle.vertices;

    let area = 0.5 * (-p1.z * p2.x + p0.z * (-p1.x + p2.x) + p0.x * (p1.z - p2.z) + p1.x * p2.z);
    let sign = if area < 0.0 { -1.0 } else { 1.0 };
    let s = (p0.z * p2.x - p0.x * p2.z + (p2.z - p0.z) * p.x + (p0.x - p2.x) * p.y) * sign;
    let t = (p0.x * p1.z - p0.z * p1.x + (p0.z - p1.z) * p.x + (p1.x - p0.x) * p.y) * sign;

    s > 0.0 && t > 0.0 && (s + t) < 2.0 * area * sign
}

/// First triangle, in slice order, whose floor projection strictly contains `p`
pub fn locate<'a>(p: &Point2d, triangles: &'a [Triangle3]) -> Option<&'a Triangle3> {
    triangles.iter().find(|t| is_point_in_triangle(p, t))
}

/// Height of the triangle's plane above the floor point `p`.
///
/// Fails with [`Error::DegenerateTriangle`] if the triangle has zero floor area.
pub fn interpolate_height(p: &Point2d, triangle: &Triangle3) -> Result<f64> {
    let [p0, p1, p2] = &triangle.vertices;
    let d1 = p1 - p0;
    let d2 = p2 - p0;

    let divider = d1.x * d2.z - d2.x * d1.z;
    if divider == 0.0 || !divider.is_finite() {
        return Err(Error::DegenerateTriangle);
    }

    let slope_x = (d1.y * d2.z - d2.y * d1.z) / divider;
    let slope_z = (d1.x * d2.y - d2.x * d1.y) / divider;

    Ok(p0.y + slope_x * (p.x - p0.x) + slope_z * (p.y - p0.z))
}

/// Locate `p` and interpolate its height.
///
/// Containing triangles that fail to interpolate are skipped in favour of the next
/// containing one.
pub fn locate_height(p: &Point2d, triangles: &[Triangle3]) -> Option<f64> {
    triangles
        .iter()
        .filter(|t| is_point_in_triangle(p, t))
        .find_map(|t| interpolate_height(p, t).ok())
}
