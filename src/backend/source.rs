//! DataSource trait for retrieving the raw dataset
//!
//! The loader does not care where records come from: a published URL, a
//! local JSON file, or an in-memory list for tests all implement
//! [`DataSource`].

use crate::config::DataConfig;
use crate::error::{ChartError, Result, ResultExt};
use crate::types::RawRecord;
use std::path::PathBuf;
use std::time::Duration;

/// Something that can produce the raw dataset once
#[cfg_attr(test, mockall::automock)]
pub trait DataSource: Send {
    /// Retrieve every raw record
    fn fetch(&self) -> Result<Vec<RawRecord>>;

    /// Human-readable description for logs and status messages
    fn describe(&self) -> String;
}

/// Build the source named by the data config
///
/// A local path takes precedence over the URL.
pub fn from_config(config: &DataConfig) -> Box<dyn DataSource> {
    match &config.path {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => {
            let timeout =
                (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
            Box::new(HttpSource::new(config.url.clone()).with_timeout(timeout))
        }
    }
}

// ==================== HTTP ====================

/// Dataset published as a JSON array at a URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Bound the whole request by `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn agent(&self) -> ureq::Agent {
        match self.timeout {
            Some(timeout) => ureq::Agent::config_builder()
                .timeout_global(Some(timeout))
                .build()
                .into(),
            None => ureq::Agent::new_with_defaults(),
        }
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("GET {}", self.url);
        let response = self
            .agent()
            .get(&self.url)
            .call()
            .with_context(|| format!("Failed to fetch {}", self.url))?;

        response
            .into_body()
            .read_json::<Vec<RawRecord>>()
            .with_context(|| format!("Failed to decode dataset from {}", self.url))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// ==================== File ====================

/// Dataset stored as a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<Vec<RawRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(ChartError::from)
            .with_context(|| format!("Failed to read {:?}", self.path))?;

        serde_json::from_str(&content)
            .map_err(ChartError::from)
            .with_context(|| format!("Failed to parse {:?}", self.path))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ==================== Static ====================

/// In-memory dataset
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RawRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}
