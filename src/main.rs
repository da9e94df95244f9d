//! Cyclist Scatter - Main Entry Point
//!
//! Opens a window with the Alpe d'Huez scatter chart. The dataset is fetched
//! in the background while the window shows a loading message.

use cyclist_scatter::{backend::source, ChartConfig, DataLoader, ScatterApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Room around the canvas for the title block and the bottom axis label
const WINDOW_PADDING: [f32; 2] = [40.0, 140.0];

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cyclist_scatter=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cyclist Scatter");

    let config = ChartConfig::load_or_default();
    let loader = DataLoader::spawn(source::from_config(&config.data));

    let window_size = [
        config.canvas.width + WINDOW_PADDING[0],
        config.canvas.height + WINDOW_PADDING[1],
    ];
    let title = config.labels.title.clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size(window_size)
            .with_title(title.clone()),
        ..Default::default()
    };

    let result = eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ScatterApp::new(config, loader)))
        }),
    );

    tracing::info!("Shutting down...");
    result
}
