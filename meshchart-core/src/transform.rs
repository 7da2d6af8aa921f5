//! Rigid rotations applied to the chart cube and its labels

use crate::point::{Point3d, Vector3d};
use nalgebra::{Matrix3, Rotation3, Unit};
use serde::{Deserialize, Serialize};

/// A 3D rotation stored as its 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix3<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Rotation about the world X axis by `degrees`
    pub fn rotation_x(degrees: f64) -> Self {
        Self::from_axis_angle(&Vector3d::x(), degrees)
    }

    /// Rotation about the world Y axis by `degrees`
    pub fn rotation_y(degrees: f64) -> Self {
        Self::from_axis_angle(&Vector3d::y(), degrees)
    }

    /// Rotation about an arbitrary axis by `degrees`; the axis need not be normalized
    pub fn from_axis_angle(axis: &Vector3d, degrees: f64) -> Self {
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(*axis), degrees.to_radians());
        Self {
            matrix: *rotation.matrix(),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3d) -> Point3d {
        Point3d::from(self.matrix * point.coords)
    }

    /// Compose this transformation with another; `other` is applied first
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Inverse rotation
    pub fn inverse(self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix3::identity()).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix3<f64>> for Transform3D {
    fn from(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }
}
