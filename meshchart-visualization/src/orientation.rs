//! Drag-driven orientation of the chart cube
//!
//! The cube turns about the world X axis by the first angle and about Y by the second.
//! Labels live inside the cube but must stay readable, so each one gets the inverse of
//! the cube rotation. That inverse is expressed as a single axis and angle, so every
//! label shares one transform instead of composing two rotations each.

use meshchart_core::{Matrix3, Rotation3, Transform3D, UnitQuaternion, Vector3d};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Equivalent rotation angles (radians) below this are treated as no rotation
pub const ROTATION_EPSILON: f64 = 1e-8;

/// Close to a half turn the axis formula loses precision; fall back to a quaternion
const HALF_TURN_EPSILON: f64 = 1e-6;

/// Wrap an angle in degrees into `[0, 360)`
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// True while the first angle has tipped the cube over, `90 <= first < 270`
pub fn is_upside_down(first: f64) -> bool {
    (90.0..270.0).contains(&first)
}

/// A rotation about `axis` by `angle_degrees`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentRotation {
    pub axis: Vector3d,
    pub angle_degrees: f64,
}

impl EquivalentRotation {
    pub fn to_transform(&self) -> Transform3D {
        Transform3D::from_axis_angle(&self.axis, self.angle_degrees)
    }
}

impl Default for EquivalentRotation {
    /// No rotation about the scene's Z axis
    fn default() -> Self {
        Self {
            axis: Vector3d::z(),
            angle_degrees: 0.0,
        }
    }
}

/// Matrix applied to every label for cube angles `first` and `second` (degrees).
///
/// This is the inverse of rotating about X by `first` and then about Y by `second`.
pub fn label_rotation_matrix(first: f64, second: f64) -> Matrix3<f64> {
    let (sb, cb) = first.to_radians().sin_cos();
    let (sg, cg) = second.to_radians().sin_cos();

    Matrix3::new(
        cg, sb * sg, -cb * sg,
        0.0, cb, sb,
        sg, -cg * sb, cb * cg,
    )
}

/// Single axis-angle rotation equal to [`label_rotation_matrix`].
///
/// Returns `None` when the angle is numerically zero, where the axis is undefined;
/// callers keep their previous rotation in that case.
pub fn equivalent_rotation(first: f64, second: f64) -> Option<EquivalentRotation> {
    let a = label_rotation_matrix(first, second);

    let cos_angle = ((a.trace() - 1.0) / 2.0).clamp(-1.0, 1.0);
    let angle = cos_angle.acos();
    if angle.abs() < ROTATION_EPSILON {
        return None;
    }

    let axis = if PI - angle < HALF_TURN_EPSILON {
        let rotation = Rotation3::from_matrix_unchecked(a);
        UnitQuaternion::from_rotation_matrix(&rotation).axis()?.into_inner()
    } else {
        let den = 2.0 * angle.sin();
        Vector3d::new(
            (a[(2, 1)] - a[(1, 2)]) / den,
            (a[(0, 2)] - a[(2, 0)]) / den,
            (a[(1, 0)] - a[(0, 1)]) / den,
        )
    };

    Some(EquivalentRotation {
        axis,
        angle_degrees: angle.to_degrees(),
    })
}

/// Which walls of the bounding cube face the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceVisibility {
    pub front: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl FaceVisibility {
    /// Visibility for wrapped cube angles in degrees
    pub fn from_angles(first: f64, second: f64) -> Self {
        let upside_down = is_upside_down(first);
        let bottom = first < 180.0;
        let front = (90.0..270.0).contains(&second) ^ upside_down;
        let right = (second >= 180.0) ^ upside_down;

        Self {
            front,
            back: !front,
            left: !right,
            right,
            top: !bottom,
            bottom,
        }
    }
}

impl Default for FaceVisibility {
    fn default() -> Self {
        Self::from_angles(0.0, 0.0)
    }
}

/// Accumulated cube angles and the label rotation derived from them
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationEngine {
    first: f64,
    second: f64,
    rotation: EquivalentRotation,
}

impl OrientationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one drag step in screen pixels.
    ///
    /// Moving up turns the cube about X, moving right turns it about Y. Returns the new
    /// label rotation, or `None` if the previous one was kept.
    pub fn on_drag(&mut self, delta_x: f64, delta_y: f64) -> Option<EquivalentRotation> {
        self.first = wrap_degrees(self.first - delta_y);
        self.second = wrap_degrees(self.second + delta_x);

        let rotation = equivalent_rotation(self.first, self.second)?;
        self.rotation = rotation;
        Some(rotation)
    }

    /// Angle about the world X axis, in `[0, 360)`
    pub fn first_angle(&self) -> f64 {
        self.first
    }

    /// Angle about the world Y axis, in `[0, 360)`
    pub fn second_angle(&self) -> f64 {
        self.second
    }

    pub fn is_upside_down(&self) -> bool {
        is_upside_down(self.first)
    }

    /// Current label rotation
    pub fn rotation(&self) -> EquivalentRotation {
        self.rotation
    }

    pub fn visible_faces(&self) -> FaceVisibility {
        FaceVisibility::from_angles(self.first, self.second)
    }

    /// Rotation of the cube itself: about X first, then about Y
    pub fn cube_transform(&self) -> Transform3D {
        Transform3D::rotation_x(self.first) * Transform3D::rotation_y(self.second)
    }
}
