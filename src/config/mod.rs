//! Configuration module for the scatter chart
//!
//! All layout constants (canvas size, margins), styling, labels and the
//! dataset location live in a single immutable [`ChartConfig`] that is handed
//! to the root composer at startup.
//!
//! # Config Location
//!
//! The config file is optional and read from the platform-appropriate
//! location under `dev.hxyulin.cyclist-scatter`:
//! - **Linux**: `~/.config/dev.hxyulin.cyclist-scatter/chart.toml`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.cyclist-scatter/chart.toml`
//! - **Windows**: `%APPDATA%\dev.hxyulin.cyclist-scatter\chart.toml`
//!
//! Every field has a default, so a partial file only overrides what it names.
//!
//! # Example
//!
//! ```toml
//! [canvas]
//! width = 960.0
//! height = 500.0
//!
//! [data]
//! path = "/tmp/cyclist-data.json"
//!
//! [style]
//! circle_radius = 5.0
//! ```

use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "dev.hxyulin.cyclist-scatter";

/// Config filename
pub const CONFIG_FILE: &str = "chart.toml";

/// Published location of the dataset
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Fill for riders with an allegation (#E25A42)
pub const DOPING_COLOR: [u8; 3] = [0xE2, 0x5A, 0x42];

/// Fill for riders without an allegation (#6BBBA1)
pub const CLEAN_COLOR: [u8; 3] = [0x6B, 0xBB, 0xA1];

/// Gridline stroke (#F1F2F3)
pub const GRID_COLOR: [u8; 3] = [0xF1, 0xF2, 0xF3];

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Get the path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== Chart Config ====================

/// Complete chart configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas: CanvasConfig,
    pub data: DataConfig,
    pub style: StyleConfig,
    pub labels: LabelConfig,
}

impl ChartConfig {
    /// Width of the plotting area inside the margins
    pub fn inner_width(&self) -> f32 {
        self.canvas.width - self.canvas.margin.left - self.canvas.margin.right
    }

    /// Height of the plotting area inside the margins
    pub fn inner_height(&self) -> f32 {
        self.canvas.height - self.canvas.margin.top - self.canvas.margin.bottom
    }

    /// Check that the layout leaves a drawable plotting area
    pub fn validate(&self) -> Result<()> {
        if !(self.inner_width() > 0.0) || !(self.inner_height() > 0.0) {
            return Err(ChartError::Config(format!(
                "Margins leave no plotting area ({}x{})",
                self.inner_width(),
                self.inner_height()
            )));
        }
        if !(self.style.circle_radius > 0.0) {
            return Err(ChartError::Config(format!(
                "Circle radius must be positive, got {}",
                self.style.circle_radius
            )));
        }
        if self.style.tick_count == 0 {
            return Err(ChartError::Config("Tick count must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChartError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ChartError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config from the default location
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is
    /// logged and also yields the defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            tracing::debug!("No config directory on this platform, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save the config to disk as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ChartError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            ChartError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }
}

// ==================== Canvas ====================

/// Drawing surface size and margins, in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            margin: Margin::default(),
        }
    }
}

/// Space reserved around the plotting area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 20.0,
            bottom: 30.0,
            left: 110.0,
        }
    }
}

// ==================== Data Source ====================

/// Where the dataset comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// URL fetched when no local path is set
    pub url: String,
    /// Local JSON file, takes precedence over `url`
    pub path: Option<PathBuf>,
    /// HTTP timeout in seconds (0 disables the timeout)
    pub timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            path: None,
            timeout_secs: 0,
        }
    }
}

// ==================== Style ====================

/// Colours, marker size and offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub circle_radius: f32,
    pub doping_color: [u8; 3],
    pub clean_color: [u8; 3],
    pub grid_color: [u8; 3],
    /// Tooltip offset from the pointer, `[right, down]`
    pub tooltip_offset: [f32; 2],
    /// Legend anchor as a fraction of the plotting area, `[x, y]`
    pub legend_anchor: [f32; 2],
    /// Vertical distance between legend entries
    pub legend_spacing: f32,
    /// Gap between the left axis labels and the plot
    pub tick_offset_left: f32,
    /// Gap between the plot bottom and the bottom axis labels
    pub tick_offset_bottom: f32,
    /// Number of ticks requested from each scale
    pub tick_count: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            circle_radius: 7.0,
            doping_color: DOPING_COLOR,
            clean_color: CLEAN_COLOR,
            grid_color: GRID_COLOR,
            tooltip_offset: [25.0, -25.0],
            legend_anchor: [0.82, 0.32],
            legend_spacing: 20.0,
            tick_offset_left: 20.0,
            tick_offset_bottom: 8.0,
            tick_count: crate::scale::DEFAULT_TICK_COUNT,
        }
    }
}

// ==================== Labels ====================

/// Static text drawn around the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub title: String,
    pub subtitle: String,
    pub left_axis: String,
    pub bottom_axis: String,
    pub doping_legend: String,
    pub clean_legend: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            title: "Doping in Professional Bicycle Racing".to_string(),
            subtitle: "35 Fastest times up Alpe d'Huez".to_string(),
            left_axis: "Time in minutes".to_string(),
            bottom_axis: "Year".to_string(),
            doping_legend: "Riders with doping allegations".to_string(),
            clean_legend: "No doping allegations".to_string(),
        }
    }
}

// ==================== Tests ====================
