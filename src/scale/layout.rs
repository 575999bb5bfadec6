//! Scale layout construction and hit testing

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Geometry knobs for a rating scale
///
/// Defaults reproduce the reference experiment: a 700px usable row on an
/// 800px-wide canvas, 15px buttons at y = -50, and a submit control at
/// (225, -130).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleGeometry {
    /// Width of the presentation canvas, in pixels
    pub canvas_width: i32,
    /// Portion of the canvas the button row spreads across
    pub usable_width: i32,
    /// Hit radius of each rating button
    pub button_radius: i32,
    /// Fixed y coordinate of the button row
    pub row_y: i32,
    /// Center of the submit control
    pub submit_center: (i32, i32),
    /// Hit radius of the submit control
    pub submit_radius: i32,
}

impl Default for ScaleGeometry {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            usable_width: 700,
            button_radius: 15,
            row_y: -50,
            submit_center: (225, -130),
            submit_radius: 15,
        }
    }
}

impl ScaleGeometry {
    /// Geometry for a canvas of the given width, keeping the reference
    /// usable-width ratio (700 of 800)
    pub fn for_canvas(canvas_width: i32) -> Self {
        Self {
            canvas_width,
            usable_width: canvas_width * 7 / 8,
            ..Self::default()
        }
    }
}

/// One rating button: its 1-based ordinal index and its center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalePoint {
    pub index: usize,
    pub center: (i32, i32),
}

/// The submit control's position and hit radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitControl {
    pub center: (i32, i32),
    pub radius: i32,
}

/// Geometric description of an N-point rating scale
///
/// Immutable after construction. One layout is built per batch of prompts
/// sharing the same scale; each prompt is a presentable screen reusing the
/// same button geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleLayout {
    points: Vec<ScalePoint>,
    button_radius: i32,
    submit: SubmitControl,
    legends: Vec<String>,
    prompts: Vec<String>,
}

impl ScaleLayout {
    /// Build a layout with the reference geometry ratio for a canvas width
    ///
    /// Fails with [`Error::InvalidScaleSize`] if `n` is even or below 3, and
    /// with [`Error::LegendCountMismatch`] if `legends.len() != n`.
    pub fn build(
        n: usize,
        legends: Vec<String>,
        prompts: Vec<String>,
        canvas_width: i32,
    ) -> Result<Self> {
        Self::build_with_geometry(n, legends, prompts, &ScaleGeometry::for_canvas(canvas_width))
    }

    /// Build a layout with explicit geometry
    pub fn build_with_geometry(
        n: usize,
        legends: Vec<String>,
        prompts: Vec<String>,
        geometry: &ScaleGeometry,
    ) -> Result<Self> {
        if n < 3 || n % 2 == 0 {
            return Err(Error::InvalidScaleSize(n));
        }
        if legends.len() != n {
            return Err(Error::LegendCountMismatch {
                expected: n,
                got: legends.len(),
            });
        }

        let half = (n as i32 - 1) / 2;
        let step = geometry.usable_width as f64 / n as f64;
        let points = (-half..=half)
            .map(|i| ScalePoint {
                index: (i + half) as usize + 1,
                center: ((i as f64 * step).round() as i32, geometry.row_y),
            })
            .collect();

        Ok(Self {
            points,
            button_radius: geometry.button_radius,
            submit: SubmitControl {
                center: geometry.submit_center,
                radius: geometry.submit_radius,
            },
            legends,
            prompts,
        })
    }

    /// Number of points on the scale
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A scale always has at least 3 points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The laid-out buttons, in ordinal order
    pub fn points(&self) -> &[ScalePoint] {
        &self.points
    }

    /// Shared hit radius of the rating buttons
    pub fn button_radius(&self) -> i32 {
        self.button_radius
    }

    /// The submit control
    pub fn submit(&self) -> &SubmitControl {
        &self.submit
    }

    /// Per-point legend strings
    pub fn legends(&self) -> &[String] {
        &self.legends
    }

    /// Prompt texts; one presentable screen per prompt
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Hit-test a click against the rating buttons
    ///
    /// The test is a strict axis-aligned box around each center, not a true
    /// circular test; it under-covers the circle's corners and is reproduced
    /// exactly for compatibility with recorded data.
    pub fn hit_button(&self, point: (i32, i32)) -> Option<usize> {
        let r = self.button_radius;
        self.points
            .iter()
            .find(|p| (point.0 - p.center.0).abs() < r && (point.1 - p.center.1).abs() < r)
            .map(|p| p.index)
    }

    /// Hit-test a click against the submit control (same box test)
    pub fn hits_submit(&self, point: (i32, i32)) -> bool {
        let r = self.submit.radius;
        (point.0 - self.submit.center.0).abs() < r && (point.1 - self.submit.center.1).abs() < r
    }
}
