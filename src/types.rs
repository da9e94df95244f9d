//! Core data types for the scatter chart
//!
//! This module contains the dataset records in both their wire form and
//! their normalised, immutable form.
//!
//! # Main Types
//!
//! - [`RawRecord`] - One entry of the JSON dataset, as published
//! - [`Record`] - A normalised ranked performance, shared read-only
//! - [`RaceTime`] - Elapsed climb time anchored to a fixed calendar date
//!
//! # Time Normalisation
//!
//! Elapsed times arrive as `"MM:SS"` strings. They are turned into a
//! [`chrono::NaiveDateTime`] on 1976-07-28 so that only the time-of-day
//! component varies and a time scale can be used on the vertical axis.

use crate::error::{ChartError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Format used for race times on the axis and in the tooltip
pub const RACE_TIME_FORMAT: &str = "%M:%S";

/// The fixed date every race time is anchored to
pub fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1976, 7, 28)
        .unwrap_or_default()
        .and_time(NaiveTime::default())
}

/// Elapsed race time, stored as a time-of-day on the anchor date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RaceTime(NaiveDateTime);

impl RaceTime {
    /// Build a race time from minutes and seconds
    pub fn from_min_sec(minutes: u32, seconds: u32) -> Option<Self> {
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        let time = NaiveTime::from_hms_opt(0, minutes, seconds)?;
        Some(Self(anchor().date().and_time(time)))
    }

    /// Build a race time from a millisecond offset past the anchor
    pub fn from_millis(millis: i64) -> Self {
        Self(anchor() + TimeDelta::milliseconds(millis))
    }

    /// Parse a `"MM:SS"` string
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || ChartError::InvalidTime {
            input: input.to_string(),
        };

        let (minutes, seconds) = input.trim().split_once(':').ok_or_else(invalid)?;
        let minutes = parse_component(minutes).ok_or_else(invalid)?;
        let seconds = parse_component(seconds).ok_or_else(invalid)?;

        Self::from_min_sec(minutes, seconds).ok_or_else(invalid)
    }

    /// Milliseconds past the anchor
    pub fn millis(&self) -> i64 {
        (self.0 - anchor()).num_milliseconds()
    }

    /// The anchored timestamp
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Format as `MM:SS`
    pub fn format(&self) -> String {
        self.0.format(RACE_TIME_FORMAT).to_string()
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RACE_TIME_FORMAT))
    }
}

/// One or two ASCII digits
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// One entry of the published dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    /// Elapsed time as `"MM:SS"`
    pub time: String,
    /// Rank among the fastest climbs
    pub place: u32,
    /// Elapsed time in seconds (unused, the chart derives time from `time`)
    #[serde(default)]
    pub seconds: u32,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    /// Doping allegation note, empty when there is none
    #[serde(default)]
    pub doping: String,
    /// Source link for the allegation (unused)
    #[serde(default, rename = "URL")]
    pub url: String,
}

/// A normalised ranked performance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Place in the ranking; unique within a dataset and used as marker key
    pub rank: u32,
    pub year: i32,
    pub time: RaceTime,
    pub name: String,
    pub nationality: String,
    /// Allegation note, empty when there is none
    pub doping: String,
}

impl Record {
    /// Normalise a single raw record
    pub fn from_raw(raw: RawRecord) -> Result<Self> {
        let time = RaceTime::parse(&raw.time)?;
        Ok(Self {
            rank: raw.place,
            year: raw.year,
            time,
            name: raw.name,
            nationality: raw.nationality,
            doping: raw.doping,
        })
    }

    /// Whether the rider has a doping allegation
    ///
    /// Any non-empty note counts, whitespace included.
    pub fn has_allegation(&self) -> bool {
        !self.doping.is_empty()
    }
}

/// Turn the raw dataset into normalised records
///
/// Fails on the first malformed time or on a repeated place.
pub fn normalize(raw: Vec<RawRecord>) -> Result<Vec<Record>> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for entry in raw {
        if !seen.insert(entry.place) {
            return Err(ChartError::DuplicateRank(entry.place));
        }
        records.push(Record::from_raw(entry)?);
    }

    Ok(records)
}
