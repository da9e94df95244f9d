//! Custom widgets for the chart window
//!
//! - [`StatusIndicator`] - Coloured status dot with label, used for the
//!   placeholder screens shown before (or instead of) the chart

use crate::backend::LoadStatus;
use egui::{Color32, Response, Ui, Widget};

/// A widget that displays a coloured status indicator
pub struct StatusIndicator {
    color: Color32,
    label: String,
    tooltip: Option<String>,
}

impl StatusIndicator {
    /// Create a new status indicator with the given colour and label
    pub fn new(color: Color32, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
            tooltip: None,
        }
    }

    /// Indicator for a settled load that has nothing to plot
    ///
    /// `None` while loading or once records are available, since those
    /// screens show the loading text or the chart instead.
    pub fn for_status(status: &LoadStatus) -> Option<Self> {
        match status {
            LoadStatus::Loading | LoadStatus::Loaded(_) => None,
            LoadStatus::Empty => Some(Self::new(Color32::GRAY, "No data")),
            LoadStatus::Failed(message) => Some(
                Self::new(Color32::RED, "Failed to load data").with_tooltip(message.clone()),
            ),
        }
    }

    /// Add a tooltip to the indicator
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Widget for StatusIndicator {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.horizontal(|ui| {
            ui.colored_label(self.color, "●");
            ui.label(&self.label);
        });

        let response = response.response;

        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip)
        } else {
            response
        }
    }
}
