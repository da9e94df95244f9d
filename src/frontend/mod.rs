//! Frontend module for egui UI
//!
//! This module provides the chart window using eframe/egui. It receives the
//! dataset from the loader thread through a crossbeam channel, builds the
//! chart scene once, and repaints it every frame.
//!
//! # Architecture
//!
//! [`ScatterApp`] is the root composer. It owns the configuration, the
//! loader handle, the laid-out [`ChartScene`] and the [`HoverState`]. Each
//! frame it:
//!
//! 1. polls the loader and builds the scene when records arrive,
//! 2. paints axes, marks and legend onto a fixed-size canvas,
//! 3. hit-tests the pointer against the marks and applies the resulting
//!    [`PointerEvent`]s to the hover state,
//! 4. paints the tooltip next to the pointer if a record is hovered.
//!
//! # Submodules
//!
//! - `axis` - Left (time) and bottom (year) axes
//! - `chart` - Scene built from the config and records
//! - `interaction` - Hover state and pointer events
//! - `legend` - Two-entry legend
//! - `marks` - One circle per record, hit testing
//! - `tooltip` - Hidden/visible tooltip
//! - `widgets` - Status indicator for placeholder screens

pub mod axis;
pub mod chart;
pub mod interaction;
pub mod legend;
pub mod marks;
pub mod tooltip;
pub mod widgets;

pub use chart::ChartScene;
pub use interaction::{HoverState, PointerEvent};
pub use tooltip::{TooltipController, TooltipState, TooltipView};
pub use widgets::StatusIndicator;

use crate::backend::{DataLoader, LoadStatus};
use crate::config::ChartConfig;
use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Vec2};
use std::time::Duration;

/// How often to poll the loader while the fetch is in flight
const LOADING_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Height of the strip under the canvas holding the bottom axis label
const BOTTOM_LABEL_HEIGHT: f32 = 20.0;

/// Main application state for the chart window
pub struct ScatterApp {
    config: ChartConfig,
    loader: DataLoader,
    scene: Option<ChartScene>,
    hover: HoverState,
    tooltip: TooltipController,
    /// Screen position of the plot origin on the last painted frame
    last_plot_origin: Option<Pos2>,
}

impl ScatterApp {
    pub fn new(config: ChartConfig, loader: DataLoader) -> Self {
        let [dx, dy] = config.style.tooltip_offset;
        let scene = loader
            .status()
            .records()
            .and_then(|records| ChartScene::build(&config, records.clone()));

        Self {
            config,
            loader,
            scene,
            hover: HoverState::default(),
            tooltip: TooltipController::new(Vec2::new(dx, dy)),
            last_plot_origin: None,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        self.loader.status()
    }

    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn last_plot_origin(&self) -> Option<Pos2> {
        self.last_plot_origin
    }

    /// The tooltip that would be painted for the current hover state
    pub fn tooltip_view(&self) -> Option<TooltipView> {
        let scene = self.scene.as_ref()?;
        self.tooltip.view(&self.hover, |key| scene.record(key))
    }

    /// Drain the loader and build the scene when records arrive
    ///
    /// Returns true if the status changed.
    fn process_loader(&mut self) -> bool {
        let (status, changed) = self.loader.poll();
        if changed {
            self.scene = status
                .records()
                .and_then(|records| ChartScene::build(&self.config, records.clone()));
            self.hover = HoverState::default();
        }
        changed
    }

    /// Run one frame against `ctx`
    pub fn show(&mut self, ctx: &egui::Context) {
        let changed = self.process_loader();
        if changed {
            ctx.request_repaint();
        } else if !self.loader.status().is_settled() {
            ctx.request_repaint_after(LOADING_POLL_INTERVAL);
        }

        let status = self.loader.status().clone();
        let frame = egui::Frame::central_panel(&ctx.style()).fill(Color32::WHITE);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| match &status {
            LoadStatus::Loading => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Loading...").monospace());
                });
            }
            LoadStatus::Empty => {
                ui.vertical_centered(|ui| {
                    if let Some(indicator) = StatusIndicator::for_status(&status) {
                        ui.add(indicator);
                    }
                    ui.label("The dataset contains no records to plot.");
                });
            }
            LoadStatus::Failed(message) => {
                ui.vertical_centered(|ui| {
                    if let Some(indicator) = StatusIndicator::for_status(&status) {
                        ui.add(indicator);
                    }
                    ui.label(RichText::new(message).color(Color32::DARK_RED));
                });
            }
            LoadStatus::Loaded(_) => self.show_chart(ui),
        });

        if let Some(view) = self.tooltip_view() {
            view.show(ctx);
        }
    }

    fn show_chart(&mut self, ui: &mut egui::Ui) {
        let Some(scene) = self.scene.as_ref() else {
            return;
        };
        let labels = &self.config.labels;
        let text_color = Color32::from_gray(40);

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(&labels.title).color(text_color).strong());
            ui.label(RichText::new(&labels.subtitle).color(text_color));
        });

        let canvas = Vec2::new(self.config.canvas.width, self.config.canvas.height);
        let (response, painter) = ui.allocate_painter(canvas, Sense::hover());
        scene.paint(&painter, response.rect.min, text_color);

        let origin = scene.plot_origin(response.rect.min);
        let pointer = ui
            .ctx()
            .pointer_hover_pos()
            .filter(|p| response.rect.contains(*p));
        let events = scene.marks.dispatch(self.hover.hovered, pointer, origin);
        self.hover.apply_all(events);
        self.last_plot_origin = Some(origin);

        let (strip, _) =
            ui.allocate_exact_size(Vec2::new(canvas.x, BOTTOM_LABEL_HEIGHT), Sense::hover());
        ui.painter().text(
            Pos2::new(origin.x + self.config.inner_width() / 2.0, strip.top()),
            Align2::CENTER_TOP,
            &labels.bottom_axis,
            FontId::proportional(14.0),
            text_color,
        );
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
