//! Backend module for loading the dataset
//!
//! The dataset is fetched once, off the UI thread, and handed to the
//! frontend through a crossbeam channel.
//!
//! # Components
//!
//! - [`DataSource`] - Where raw records come from (HTTP, file, memory)
//! - [`DataLoader`] - Background fetch + normalisation with observable status
//! - [`LoadStatus`] - Loading / Loaded / Empty / Failed
//!
//! # Example
//!
//! ```ignore
//! use cyclist_scatter::backend::{source, DataLoader};
//! use cyclist_scatter::config::ChartConfig;
//!
//! let config = ChartConfig::default();
//! let mut loader = DataLoader::spawn(source::from_config(&config.data));
//!
//! // Once per frame
//! let (status, changed) = loader.poll();
//! if changed {
//!     println!("dataset is now {}", status.label());
//! }
//! ```

pub mod loader;
pub mod source;

pub use loader::{DataLoader, LoadStatus, LoaderMessage};
pub use source::{DataSource, FileSource, HttpSource, StaticSource};
