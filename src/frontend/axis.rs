//! Left and bottom axes
//!
//! An axis is a list of ticks, each with a pixel offset along the axis, a
//! gridline across the plot and a formatted label. Ticks are keyed by their
//! exact value, so keys are unique within an axis and stable across
//! rebuilds of the same domain.

use crate::scale::{ContinuousScale, LinearScale, TimeScale};
use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke, Vec2};

/// Font size of tick labels
const TICK_FONT_SIZE: f32 = 12.0;

/// Which side of the plot the axis sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    /// Vertical axis on the left, horizontal gridlines
    Left,
    /// Horizontal axis at the bottom, vertical gridlines
    Bottom,
}

/// One labelled reference point on an axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Exact tick value as an integer: milliseconds for time, the bit
    /// pattern of the `f64` value for years
    pub key: i64,
    /// Distance along the axis from the plot origin
    pub offset: f32,
    pub label: String,
}

/// A fully laid-out axis
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub ticks: Vec<AxisTick>,
    /// Length of each gridline across the plot
    pub grid_length: f32,
    /// Gap between the plot edge and the labels
    pub label_offset: f32,
}

impl Axis {
    /// Time axis with `MM:SS` labels
    pub fn left(scale: &TimeScale, count: usize, inner_width: f32, label_offset: f32) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|t| AxisTick {
                key: t.millis(),
                offset: scale.apply(t) as f32,
                label: t.format(),
            })
            .collect();

        Self {
            orient: AxisOrient::Left,
            ticks,
            grid_length: inner_width,
            label_offset,
        }
    }

    /// Year axis with the year printed verbatim
    pub fn bottom(scale: &LinearScale, count: usize, inner_height: f32, label_offset: f32) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| AxisTick {
                key: v.to_bits() as i64,
                offset: scale.apply(v) as f32,
                label: format_year(v),
            })
            .collect();

        Self {
            orient: AxisOrient::Bottom,
            ticks,
            grid_length: inner_height,
            label_offset,
        }
    }

    /// Paint gridlines and labels, offset by the plot origin
    pub fn paint(&self, painter: &Painter, origin: Vec2, grid_color: Color32, text_color: Color32) {
        let stroke = Stroke::new(1.0, grid_color);
        let font = FontId::proportional(TICK_FONT_SIZE);

        for tick in &self.ticks {
            match self.orient {
                AxisOrient::Left => {
                    let y = tick.offset;
                    painter.line_segment(
                        [Pos2::new(0.0, y) + origin, Pos2::new(self.grid_length, y) + origin],
                        stroke,
                    );
                    painter.text(
                        Pos2::new(-self.label_offset, y) + origin,
                        Align2::RIGHT_CENTER,
                        &tick.label,
                        font.clone(),
                        text_color,
                    );
                }
                AxisOrient::Bottom => {
                    let x = tick.offset;
                    painter.line_segment(
                        [Pos2::new(x, 0.0) + origin, Pos2::new(x, self.grid_length) + origin],
                        stroke,
                    );
                    painter.text(
                        Pos2::new(x, self.grid_length + self.label_offset) + origin,
                        Align2::CENTER_TOP,
                        &tick.label,
                        font.clone(),
                        text_color,
                    );
                }
            }
        }
    }
}

/// Years are whole numbers; anything else keeps its fraction
fn format_year(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
