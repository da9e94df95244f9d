//! Chart scene: everything derived from the config and the loaded records
//!
//! The scene is built once when the records arrive and painted every frame.
//! It owns the two scales and the axes, marks and legend laid out from them.

use super::axis::Axis;
use super::legend::Legend;
use super::marks::MarkLayer;
use crate::config::{ChartConfig, StyleConfig};
use crate::scale::{extent, LinearScale, TimeScale};
use crate::types::Record;
use egui::{Color32, FontId, Painter, Pos2, Vec2};
use std::sync::Arc;

/// Gap between the left axis label and the tick labels
const LEFT_LABEL_GAP: f32 = 50.0;

/// Laid-out chart for one record set
#[derive(Debug, Clone)]
pub struct ChartScene {
    records: Arc<[Record]>,
    pub x: LinearScale,
    pub y: TimeScale,
    pub left_axis: Axis,
    pub bottom_axis: Axis,
    pub marks: MarkLayer,
    pub legend: Legend,
    /// Top-left of the plotting area relative to the canvas
    pub plot_offset: Vec2,
    style: StyleConfig,
    left_label: String,
}

impl ChartScene {
    /// Build the scene, or `None` if there is nothing to plot
    pub fn build(config: &ChartConfig, records: Arc<[Record]>) -> Option<Self> {
        let years = extent(records.iter().map(|r| r.year as f64))?;
        let times = extent(records.iter().map(|r| r.time))?;

        let inner_width = config.inner_width();
        let inner_height = config.inner_height();
        let style = &config.style;

        let x = LinearScale::from_extent(years, (0.0, inner_width as f64));
        let y = TimeScale::from_extent(times, (0.0, inner_height as f64));
        tracing::debug!(
            "Scales built: years {:?} -> {:?}, times {:?} -> {:?}",
            x.domain(),
            (0.0, inner_width),
            y.domain(),
            (0.0, inner_height)
        );

        let left_axis = Axis::left(&y, style.tick_count, inner_width, style.tick_offset_left);
        let bottom_axis =
            Axis::bottom(&x, style.tick_count, inner_height, style.tick_offset_bottom);
        let marks = MarkLayer::new(&records, &x, &y, style);
        let legend = Legend::new(config);

        Some(Self {
            records,
            x,
            y,
            left_axis,
            bottom_axis,
            marks,
            legend,
            plot_offset: Vec2::new(config.canvas.margin.left, config.canvas.margin.top),
            style: style.clone(),
            left_label: config.labels.left_axis.clone(),
        })
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record behind the mark with `key`
    pub fn record(&self, key: u32) -> Option<&Record> {
        self.marks
            .get(key)
            .and_then(|mark| self.records.get(mark.index))
    }

    /// Screen position of the plot origin for a canvas at `canvas_min`
    pub fn plot_origin(&self, canvas_min: Pos2) -> Pos2 {
        canvas_min + self.plot_offset
    }

    /// Paint gridlines, tick labels, the rotated left label, marks and legend
    pub fn paint(&self, painter: &Painter, canvas_min: Pos2, text_color: Color32) {
        let origin = self.plot_origin(canvas_min).to_vec2();

        let [r, g, b] = self.style.grid_color;
        let grid_color = Color32::from_rgb(r, g, b);

        self.left_axis.paint(painter, origin, grid_color, text_color);
        self.bottom_axis.paint(painter, origin, grid_color, text_color);
        self.paint_left_label(painter, origin, text_color);
        self.marks.paint(painter, origin, &self.style);
        self.legend.paint(painter, origin, text_color);
    }

    fn paint_left_label(&self, painter: &Painter, origin: Vec2, text_color: Color32) {
        let galley = painter.layout_no_wrap(
            self.left_label.clone(),
            FontId::proportional(14.0),
            text_color,
        );
        // Rotated a quarter turn counter-clockwise, centred on the axis
        let center = Pos2::new(
            -self.left_axis.label_offset - LEFT_LABEL_GAP,
            self.bottom_axis.grid_length / 2.0,
        ) + origin;
        let pos = center + Vec2::new(-galley.size().y / 2.0, galley.size().x / 2.0);
        painter.add(
            egui::epaint::TextShape::new(pos, galley, text_color)
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RaceTime;

    fn records() -> Arc<[Record]> {
        vec![
            Record {
                rank: 1,
                year: 1995,
                time: RaceTime::parse("36:50").unwrap(),
                name: "Marco Pantani".to_string(),
                nationality: "ITA".to_string(),
                doping: "Alleged drug use".to_string(),
            },
            Record {
                rank: 2,
                year: 1997,
                time: RaceTime::parse("36:55").unwrap(),
                name: "Marco Pantani".to_string(),
                nationality: "ITA".to_string(),
                doping: String::new(),
            },
        ]
        .into()
    }

    #[test]
    fn test_build_empty_is_none() {
        let empty: Arc<[Record]> = Vec::new().into();
        assert!(ChartScene::build(&ChartConfig::default(), empty).is_none());
    }

    #[test]
    fn test_build_and_lookup() {
        let scene = ChartScene::build(&ChartConfig::default(), records()).unwrap();
        assert_eq!(scene.marks.len(), 2);
        assert_eq!(scene.record(2).map(|r| r.year), Some(1997));
        assert!(scene.record(3).is_none());
        assert_eq!(scene.plot_origin(Pos2::new(8.0, 40.0)), Pos2::new(118.0, 90.0));
    }

    #[test]
    fn test_marks_inside_plot() {
        let config = ChartConfig::default();
        let scene = ChartScene::build(&config, records()).unwrap();
        for mark in scene.marks.marks() {
            assert!(mark.center.x >= 0.0 && mark.center.x <= config.inner_width());
            assert!(mark.center.y >= 0.0 && mark.center.y <= config.inner_height());
        }
    }
}
