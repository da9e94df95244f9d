//! # Cyclist Scatter: Doping in Professional Bicycle Racing
//!
//! A single-window scatter chart of the fastest recorded ascents of Alpe
//! d'Huez. Each point is one ranked performance, placed by race year
//! (horizontal) and elapsed climb time (vertical), and coloured by whether
//! the rider has a doping allegation on record. Hovering a point shows a
//! tooltip with the rider's details.
//!
//! ## Architecture
//!
//! - **Backend**: Fetches and normalises the dataset once on a background
//!   thread, publishing the result over a crossbeam channel
//! - **Scales**: Niced linear and time scales mapping data onto pixels
//! - **Frontend**: Paints axes, marks, legend and tooltip with eframe/egui
//!
//! ## Configuration
//!
//! Layout, styling, labels and the dataset location come from an optional
//! TOML file in the platform-appropriate config directory under
//! `dev.hxyulin.cyclist-scatter` (see [`config`]).
//!
//! ## Example
//!
//! ```ignore
//! use cyclist_scatter::{backend::source, ChartConfig, DataLoader, ScatterApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let config = ChartConfig::load_or_default();
//!     let loader = DataLoader::spawn(source::from_config(&config.data));
//!
//!     eframe::run_native(
//!         "Doping in Professional Bicycle Racing",
//!         eframe::NativeOptions::default(),
//!         Box::new(|_cc| Ok(Box::new(ScatterApp::new(config, loader)))),
//!     )
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;
pub mod scale;
pub mod types;

// Re-export commonly used types
pub use backend::{DataLoader, DataSource, LoadStatus};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use frontend::ScatterApp;
pub use scale::{ContinuousScale, LinearScale, TimeScale};
pub use types::{RaceTime, RawRecord, Record};
