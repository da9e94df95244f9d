//! One-shot dataset loader
//!
//! The loader fetches the raw records from a [`DataSource`] on a background
//! thread, normalises them into an immutable record sequence and publishes
//! the outcome once over a channel. The UI polls [`DataLoader::poll`] each
//! frame and renders according to the resulting [`LoadStatus`].
//!
//! There are no retries and no timeout beyond what the source applies: a
//! source that never returns leaves the status at [`LoadStatus::Loading`].

use super::source::DataSource;
use crate::error::{Result, ResultExt};
use crate::types::{normalize, Record};
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

/// Externally observable state of the dataset
#[derive(Debug, Clone, Default)]
pub enum LoadStatus {
    /// Fetch in flight
    #[default]
    Loading,
    /// Records normalised and ready to plot
    Loaded(Arc<[Record]>),
    /// Fetch succeeded but there is nothing to plot
    Empty,
    /// Fetch or normalisation failed
    Failed(String),
}

impl LoadStatus {
    /// Loaded records, if any
    pub fn records(&self) -> Option<&Arc<[Record]>> {
        match self {
            LoadStatus::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Whether the loader has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadStatus::Loading)
    }

    /// Short label for status displays
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::Loading => "Loading",
            LoadStatus::Loaded(_) => "Loaded",
            LoadStatus::Empty => "Empty",
            LoadStatus::Failed(_) => "Failed",
        }
    }
}

/// Message sent from the loader thread to the UI thread
#[derive(Debug)]
pub enum LoaderMessage {
    /// Normalised records (possibly empty)
    Records(Vec<Record>),
    /// Fetch or normalisation error, already formatted
    Error(String),
}

/// Handle to the background load
pub struct DataLoader {
    receiver: Receiver<LoaderMessage>,
    status: LoadStatus,
}

impl DataLoader {
    /// Start loading from `source` on a background thread
    pub fn spawn(source: Box<dyn DataSource>) -> Self {
        let (tx, rx) = bounded(1);
        let description = source.describe();

        let spawned = std::thread::Builder::new()
            .name("data-loader".to_string())
            .spawn(move || {
                let message = match Self::fetch_and_normalize(source.as_ref()) {
                    Ok(records) => LoaderMessage::Records(records),
                    Err(e) => LoaderMessage::Error(e.to_string()),
                };
                if tx.send(message).is_err() {
                    tracing::debug!("Loader result dropped, UI already gone");
                }
            });

        let status = match spawned {
            Ok(_) => {
                tracing::info!("Loading dataset from {}", description);
                LoadStatus::Loading
            }
            Err(e) => {
                tracing::error!("Failed to spawn loader thread: {}", e);
                LoadStatus::Failed(format!("Failed to start loader: {}", e))
            }
        };

        Self {
            receiver: rx,
            status,
        }
    }

    /// Run the whole load on the calling thread
    pub fn load_blocking(source: &dyn DataSource) -> LoadStatus {
        match Self::fetch_and_normalize(source) {
            Ok(records) => status_from_records(records),
            Err(e) => {
                tracing::error!("Failed to load dataset: {}", e);
                LoadStatus::Failed(e.to_string())
            }
        }
    }

    /// Fetch the raw records and normalise them in one step
    pub fn fetch_and_normalize(source: &dyn DataSource) -> Result<Vec<Record>> {
        let start = Instant::now();
        let raw = source.fetch()?;
        let fetched = raw.len();
        let records = normalize(raw).context("Failed to normalize dataset")?;
        tracing::debug!(
            "Fetched and normalized {} records from {} in {:?}",
            fetched,
            source.describe(),
            start.elapsed()
        );
        Ok(records)
    }

    /// Apply any pending loader message and return the current status
    ///
    /// Returns `true` in the second slot when the status changed on this call.
    pub fn poll(&mut self) -> (&LoadStatus, bool) {
        if self.status.is_settled() {
            return (&self.status, false);
        }

        let changed = match self.receiver.try_recv() {
            Ok(LoaderMessage::Records(records)) => {
                self.status = status_from_records(records);
                true
            }
            Ok(LoaderMessage::Error(message)) => {
                tracing::error!("Failed to load dataset: {}", message);
                self.status = LoadStatus::Failed(message);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("Loader thread exited without a result");
                self.status = LoadStatus::Failed("Loader stopped unexpectedly".to_string());
                true
            }
        };

        (&self.status, changed)
    }

    /// A loader that has already settled on `status`
    ///
    /// Used when the records were obtained some other way, e.g. a blocking
    /// load for headless rendering.
    pub fn from_status(status: LoadStatus) -> Self {
        let (_tx, rx) = bounded(1);
        Self {
            receiver: rx,
            status,
        }
    }

    /// Current status without polling
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

fn status_from_records(records: Vec<Record>) -> LoadStatus {
    if records.is_empty() {
        tracing::warn!("Dataset is empty");
        LoadStatus::Empty
    } else {
        tracing::info!("Loaded {} records", records.len());
        LoadStatus::Loaded(records.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::source::{MockDataSource, StaticSource};
    use crate::error::ChartError;
    use crate::types::RawRecord;
    use std::time::Duration;

    fn raw(place: u32, time: &str) -> RawRecord {
        RawRecord {
            time: time.to_string(),
            place,
            seconds: 0,
            name: "Rider".to_string(),
            year: 2000,
            nationality: "ESP".to_string(),
            doping: String::new(),
            url: String::new(),
        }
    }

    fn poll_until_settled(loader: &mut DataLoader) -> LoadStatus {
        for _ in 0..200 {
            let (status, _) = loader.poll();
            if status.is_settled() {
                return status.clone();
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("loader did not settle");
    }

    #[test]
    fn test_load_blocking_loaded() {
        let source = StaticSource::new(vec![raw(1, "36:50"), raw(2, "37:10")]);
        let status = DataLoader::load_blocking(&source);
        let records = status.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].time.format(), "37:10");
    }

    #[test]
    fn test_load_blocking_empty() {
        let status = DataLoader::load_blocking(&StaticSource::default());
        assert!(matches!(status, LoadStatus::Empty));
        assert_eq!(status.label(), "Empty");
    }

    #[test]
    fn test_load_blocking_bad_time_fails() {
        let source = StaticSource::new(vec![raw(1, "bad")]);
        match DataLoader::load_blocking(&source) {
            LoadStatus::Failed(message) => {
                assert!(message.contains("Failed to normalize dataset"));
                assert!(message.contains("\"bad\""));
            }
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_spawned_loader_publishes_records() {
        let source = StaticSource::new(vec![raw(1, "36:50")]);
        let mut loader = DataLoader::spawn(Box::new(source));
        let status = poll_until_settled(&mut loader);
        assert_eq!(status.records().map(|r| r.len()), Some(1));

        // Settled status is sticky and no longer reports changes
        let (status, changed) = loader.poll();
        assert!(!changed);
        assert_eq!(status.label(), "Loaded");
    }

    #[test]
    fn test_spawned_loader_reports_fetch_error() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(ChartError::Fetch("connection refused".to_string())));
        source
            .expect_describe()
            .returning(|| "mock".to_string());

        let mut loader = DataLoader::spawn(Box::new(source));
        match poll_until_settled(&mut loader) {
            LoadStatus::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn test_status_defaults_to_loading() {
        let status = LoadStatus::default();
        assert!(!status.is_settled());
        assert!(status.records().is_none());
    }
}
