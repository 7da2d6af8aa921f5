//! Interaction state of one chart view
//!
//! [`ChartView`] ties the orientation engine, the cube walls, the axis legend and the
//! zoom together and turns raw pointer events into updates a renderer can apply.

use crate::legend::{AxisLegend, LabelLayout};
use crate::orientation::{EquivalentRotation, FaceVisibility, OrientationEngine};
use crate::walls::{CubeWalls, Wall};
use crate::zoom::Zoom;
use meshchart_core::{Axis, Extent, Point3d};
use tracing::trace;

/// Everything that changed because of one drag event
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationUpdate {
    /// Wrapped angle about the world X axis
    pub first_angle: f64,
    /// Wrapped angle about the world Y axis
    pub second_angle: f64,
    /// Walls to show after this drag
    pub faces: FaceVisibility,
    /// New rotation for every label; `None` keeps the previous one
    pub rotation: Option<EquivalentRotation>,
    /// New label placement; `None` while dynamic walls are off
    pub layout: Option<LabelLayout>,
}

/// Pointer-driven state of a chart cube showing one surface
#[derive(Debug, Clone)]
pub struct ChartView {
    extent: Extent,
    cube_size: u32,
    engine: OrientationEngine,
    walls: CubeWalls,
    legend: AxisLegend,
    zoom: Zoom,
    anchor: Option<(f64, f64)>,
}

impl ChartView {
    /// View of a surface whose data spans `extent`, drawn in a cube of edge `cube_size`
    pub fn new(extent: Extent, cube_size: u32) -> Self {
        Self {
            legend: AxisLegend::new(&extent, cube_size),
            extent,
            cube_size,
            engine: OrientationEngine::new(),
            walls: CubeWalls::new(),
            zoom: Zoom::new(),
            anchor: None,
        }
    }

    pub fn with_titles(mut self, x: Option<&str>, y: Option<&str>, z: Option<&str>) -> Self {
        for (axis, text) in Axis::ALL.into_iter().zip([x, y, z]) {
            if let Some(text) = text {
                self.legend.set_title(axis, text);
            }
        }
        self
    }

    pub fn orientation(&self) -> &OrientationEngine {
        &self.engine
    }

    pub fn walls(&self) -> &CubeWalls {
        &self.walls
    }

    pub fn legend(&self) -> &AxisLegend {
        &self.legend
    }

    pub fn zoom(&self) -> f64 {
        self.zoom.scale()
    }

    /// Turn dynamic walls on or off. Switching them on snaps walls to the view angle.
    pub fn set_dynamic_walls(&mut self, dynamic: bool) {
        self.walls.set_dynamic(dynamic);
        self.walls
            .follow_angles(self.engine.first_angle(), self.engine.second_angle());
    }

    /// Show or hide a wall by hand; ignored while dynamic walls are on
    pub fn set_wall_visible(&mut self, wall: Wall, visible: bool) -> bool {
        self.walls.set_visible(wall, visible)
    }

    /// Start a drag at screen position `(x, y)`
    pub fn press(&mut self, x: f64, y: f64) {
        self.anchor = Some((x, y));
    }

    /// Continue the drag to `(x, y)`.
    ///
    /// Returns `None` if no drag was started with [`ChartView::press`].
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<OrientationUpdate> {
        let (old_x, old_y) = self.anchor.replace((x, y))?;
        let rotation = self.engine.on_drag(x - old_x, y - old_y);

        let first = self.engine.first_angle();
        let second = self.engine.second_angle();

        let layout = if self.walls.follow_angles(first, second) {
            let layout = LabelLayout::compute(first, second, &self.walls.visibility(), self.cube_size);
            self.legend.apply_layout(&layout);
            Some(layout)
        } else {
            None
        };

        trace!(first, second, rotated = rotation.is_some(), "chart dragged");

        Some(OrientationUpdate {
            first_angle: first,
            second_angle: second,
            faces: self.walls.visibility(),
            rotation,
            layout,
        })
    }

    /// End the current drag
    pub fn release(&mut self) {
        self.anchor = None;
    }

    /// Apply a scroll event and return the new scene scale
    pub fn scroll(&mut self, delta_y: f64) -> f64 {
        self.zoom.on_scroll(delta_y)
    }

    /// Data coordinates of a point picked on the mesh.
    ///
    /// `mesh_point` is in mesh-local space, where the height axis points down.
    pub fn pick(&self, mesh_point: &Point3d) -> Point3d {
        let cube_point = Point3d::new(mesh_point.x, -mesh_point.y, mesh_point.z);
        self.extent.denormalize_point(&cube_point, self.cube_size as f64)
    }
}
