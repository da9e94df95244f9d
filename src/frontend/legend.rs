//! Static two-entry legend

use super::marks::MarkFill;
use crate::config::ChartConfig;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

/// Side of the square colour swatch
const SWATCH_SIZE: f32 = 10.0;

/// Gap between a label and its swatch
const SWATCH_GAP: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub fill: MarkFill,
    pub color: Color32,
    /// Right edge of the label, vertical centre of the entry (plot coordinates)
    pub anchor: Pos2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Lay out the legend as a fraction of the plotting area
    pub fn new(config: &ChartConfig) -> Self {
        let style = &config.style;
        let origin = Pos2::new(
            config.inner_width() * style.legend_anchor[0],
            config.inner_height() * style.legend_anchor[1],
        );

        let entries = [
            (config.labels.doping_legend.clone(), MarkFill::Doping),
            (config.labels.clean_legend.clone(), MarkFill::Clean),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (label, fill))| LegendEntry {
            label,
            fill,
            color: fill.color(style),
            anchor: origin + Vec2::new(0.0, i as f32 * style.legend_spacing),
        })
        .collect();

        Self { entries }
    }

    pub fn paint(&self, painter: &Painter, origin: Vec2, text_color: Color32) {
        let font = FontId::proportional(12.0);
        for entry in &self.entries {
            let anchor = entry.anchor + origin;
            painter.text(anchor, Align2::RIGHT_CENTER, &entry.label, font.clone(), text_color);

            let swatch = Rect::from_center_size(
                anchor + Vec2::new(SWATCH_GAP + SWATCH_SIZE / 2.0, 0.0),
                Vec2::splat(SWATCH_SIZE),
            );
            painter.rect_filled(swatch, 0.0, entry.color);
        }
    }
}
