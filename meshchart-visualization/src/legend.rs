//! Axis legend and label placement
//!
//! Each axis carries ten tick labels along one cube edge plus an optional title. While
//! the cube turns, labels hop to the edges that stay in front of the surface.

use crate::orientation::{is_upside_down, FaceVisibility};
use meshchart_core::{Axis, Extent, Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// Tick labels per axis
pub const LEGEND_TICKS: usize = 10;

/// Titles sit slightly outside the tick labels
const TITLE_SPREAD: f64 = 1.1;

/// A tick label: its data value and where it sits in scene space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendLabel {
    pub value: f64,
    pub position: Point3d,
}

/// Title of one axis; `text` is `None` until the caller names the axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub text: Option<String>,
    pub position: Point3d,
}

/// Labels and titles of all three axes, in scene space centred on the cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLegend {
    labels: [Vec<LegendLabel>; 3],
    titles: [AxisTitle; 3],
}

impl AxisLegend {
    /// Ticks at `min + span / 10 * i` for `i` in `0..10`, on the cube's resting edges
    pub fn new(extent: &Extent, cube_size: u32) -> Self {
        let s = cube_size as f64;
        let h = 0.5 * s;
        let step = s / LEGEND_TICKS as f64;

        let ticks = |axis: Axis, place: &dyn Fn(f64) -> Point3d| -> Vec<LegendLabel> {
            (0..LEGEND_TICKS)
                .map(|i| LegendLabel {
                    value: extent.min(axis) + extent.size(axis) / LEGEND_TICKS as f64 * i as f64,
                    position: place(i as f64 * step),
                })
                .collect()
        };

        let labels = [
            ticks(Axis::X, &|d: f64| Point3d::new(-h + d, h, -h)),
            ticks(Axis::Y, &|d: f64| Point3d::new(h, h - d, h)),
            ticks(Axis::Z, &|d: f64| Point3d::new(h, h, -h + d)),
        ];

        let title = |position: Point3d| AxisTitle { text: None, position };
        let titles = [
            title(Point3d::new(-0.05 * s, h + 15.0, -h - 15.0)),
            title(Point3d::new(h - 30.0, -0.05 * s, h - 15.0)),
            title(Point3d::new(h + 15.0, h + 15.0, 0.0)),
        ];

        Self { labels, titles }
    }

    pub fn labels(&self, axis: Axis) -> &[LegendLabel] {
        &self.labels[axis.index()]
    }

    pub fn title(&self, axis: Axis) -> &AxisTitle {
        &self.titles[axis.index()]
    }

    pub fn set_title(&mut self, axis: Axis, text: impl Into<String>) {
        self.titles[axis.index()].text = Some(text.into());
    }

    /// Number of labels and titles the label rotation applies to
    pub fn node_count(&self) -> usize {
        self.labels.iter().map(Vec::len).sum::<usize>() + self.titles.len()
    }

    /// Move every label and title according to `layout`
    pub fn apply_layout(&mut self, layout: &LabelLayout) {
        for axis in Axis::ALL {
            let i = axis.index();
            for label in &mut self.labels[i] {
                label.position = layout.labels[i].place(&label.position);
            }
            let title = &mut self.titles[i];
            title.position = layout.titles[i].place(&title.position);
        }
    }
}

/// New position for a group of labels.
///
/// Labels keep their own coordinate along `along`, the axis they annotate; the
/// other two coordinates are taken from `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPlacement {
    pub along: Axis,
    pub offset: Vector3d,
}

impl AxisPlacement {
    pub fn place(&self, base: &Point3d) -> Point3d {
        let mut placed = Point3d::from(self.offset);
        placed[self.along.index()] = base[self.along.index()];
        placed
    }

    fn spread(self, factor: f64) -> Self {
        Self {
            along: self.along,
            offset: self.offset * factor,
        }
    }
}

/// Label placement for one orientation, indexed by axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub labels: [AxisPlacement; 3],
    pub titles: [AxisPlacement; 3],
}

impl LabelLayout {
    /// Layout for wrapped cube angles and the walls currently shown
    pub fn compute(first: f64, second: f64, faces: &FaceVisibility, cube_size: u32) -> Self {
        let s = cube_size as f64;
        let h = 0.5 * s;
        let side = |positive: bool| if positive { h } else { -h };
        let upside_down = is_upside_down(first);
        let below = side(first < 180.0);

        let x = AxisPlacement {
            along: Axis::X,
            offset: Vector3d::new(0.0, below, side(faces.front)),
        };

        let y = AxisPlacement {
            along: Axis::Y,
            offset: Vector3d::new(side(faces.back ^ upside_down), 0.0, side(second < 180.0)),
        };

        let z_title = AxisPlacement {
            along: Axis::Z,
            offset: Vector3d::new(side(faces.left), below, 0.0),
        };
        let mut z = z_title;
        if !faces.left {
            z.offset.x -= s / 15.0;
        }

        Self {
            labels: [x, y, z],
            titles: [x.spread(TITLE_SPREAD), y, z_title.spread(TITLE_SPREAD)],
        }
    }
}
