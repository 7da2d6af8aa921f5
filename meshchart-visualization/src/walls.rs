//! Wall visibility of the bounding cube
//!
//! With dynamic walls the cube hides the walls between the viewer and the surface on
//! every drag. Without them the caller decides, one wall at a time.

use crate::orientation::FaceVisibility;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The six walls of the chart cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wall {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// Current wall visibility and whether it follows the view angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeWalls {
    visibility: FaceVisibility,
    dynamic: bool,
}

impl CubeWalls {
    /// Walls for the resting orientation, following the view angle
    pub fn new() -> Self {
        Self {
            visibility: FaceVisibility::default(),
            dynamic: true,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    pub fn visibility(&self) -> FaceVisibility {
        self.visibility
    }

    pub fn is_visible(&self, wall: Wall) -> bool {
        let v = &self.visibility;
        match wall {
            Wall::Front => v.front,
            Wall::Back => v.back,
            Wall::Left => v.left,
            Wall::Right => v.right,
            Wall::Top => v.top,
            Wall::Bottom => v.bottom,
        }
    }

    /// Recompute visibility for wrapped cube angles.
    ///
    /// Returns `false` and changes nothing while dynamic walls are off.
    pub fn follow_angles(&mut self, first: f64, second: f64) -> bool {
        if !self.dynamic {
            return false;
        }
        self.visibility = FaceVisibility::from_angles(first, second);
        true
    }

    /// Show or hide one wall by hand.
    ///
    /// Ignored while dynamic walls are on; returns whether the request was applied.
    pub fn set_visible(&mut self, wall: Wall, visible: bool) -> bool {
        if self.dynamic {
            debug!(?wall, "ignoring manual wall visibility while dynamic walls are on");
            return false;
        }
        let v = &mut self.visibility;
        match wall {
            Wall::Front => v.front = visible,
            Wall::Back => v.back = visible,
            Wall::Left => v.left = visible,
            Wall::Right => v.right = visible,
            Wall::Top => v.top = visible,
            Wall::Bottom => v.bottom = visible,
        }
        true
    }
}

impl Default for CubeWalls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_walls_follow_angles() {
        let mut walls = CubeWalls::new();
        assert!(walls.follow_angles(200.0, 10.0));
        assert!(walls.is_visible(Wall::Top));
        assert!(!walls.is_visible(Wall::Bottom));
        assert_eq!(walls.visibility(), FaceVisibility::from_angles(200.0, 10.0));
    }

    #[test]
    fn test_manual_setter_ignored_when_dynamic() {
        let mut walls = CubeWalls::new();
        assert!(!walls.set_visible(Wall::Top, true));
        assert!(!walls.is_visible(Wall::Top));
    }

    #[test]
    fn test_static_walls_keep_manual_state() {
        let mut walls = CubeWalls::new();
        walls.set_dynamic(false);

        assert!(walls.set_visible(Wall::Top, true));
        assert!(walls.set_visible(Wall::Front, true));
        assert!(!walls.follow_angles(0.0, 0.0));

        // both walls of an opposite pair may be shown at once
        assert!(walls.is_visible(Wall::Top) && walls.is_visible(Wall::Bottom));
        assert!(walls.is_visible(Wall::Front) && walls.is_visible(Wall::Back));
    }
}
