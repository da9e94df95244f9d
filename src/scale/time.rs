//! Time scale for race times
//!
//! Domain values are [`RaceTime`]s; internally the scale works on
//! milliseconds past the anchor date. Tick intervals come from a fixed
//! ladder so labels land on whole seconds, quarter minutes, minutes and so
//! on, rather than on arbitrary 1-2-5 multiples of a millisecond.

use super::{lerp, ContinuousScale, Increment, DEFAULT_TICK_COUNT};
use crate::types::RaceTime;

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Candidate tick intervals in milliseconds, ascending
pub const TICK_INTERVALS: [i64; 13] = [
    SECOND,
    5 * SECOND,
    15 * SECOND,
    30 * SECOND,
    MINUTE,
    5 * MINUTE,
    15 * MINUTE,
    30 * MINUTE,
    HOUR,
    3 * HOUR,
    6 * HOUR,
    12 * HOUR,
    DAY,
];

/// Widening applied to a single-valued extent
const DEGENERATE_PAD: i64 = MINUTE;

/// Continuous mapping from race times to a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    /// Domain in milliseconds past the anchor
    domain: (i64, i64),
    range: (f64, f64),
}

impl TimeScale {
    /// Create a scale with an explicit domain and range
    pub fn new(domain: (RaceTime, RaceTime), range: (f64, f64)) -> Self {
        Self {
            domain: (domain.0.millis(), domain.1.millis()),
            range,
        }
    }

    /// Create a niced scale from a data extent
    pub fn from_extent(extent: (RaceTime, RaceTime), range: (f64, f64)) -> Self {
        let (min, max) = (extent.0.millis(), extent.1.millis());
        let domain = if min == max {
            (min - DEGENERATE_PAD, max + DEGENERATE_PAD)
        } else {
            (min, max)
        };
        Self { domain, range }.nice(DEFAULT_TICK_COUNT)
    }

    /// Round the domain outward to the interval chosen for `count` ticks
    pub fn nice(mut self, count: usize) -> Self {
        let (start, stop) = self.domain;
        if let Some(interval) = tick_interval(start, stop, count) {
            self.domain = (floor_to(start, interval), ceil_to(stop, interval));
        }
        self
    }

    /// Domain `[start, end]`
    pub fn domain(&self) -> (RaceTime, RaceTime) {
        (
            RaceTime::from_millis(self.domain.0),
            RaceTime::from_millis(self.domain.1),
        )
    }

    /// Map a millisecond offset to a pixel offset
    pub fn apply_millis(&self, millis: f64) -> f64 {
        let (d0, d1) = (self.domain.0 as f64, self.domain.1 as f64);
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return lerp(r0, r1, 0.5);
        }
        lerp(r0, r1, (millis - d0) / span)
    }
}

impl ContinuousScale for TimeScale {
    type Value = RaceTime;

    fn apply(&self, value: RaceTime) -> f64 {
        self.apply_millis(value.millis() as f64)
    }

    fn invert(&self, pixel: f64) -> RaceTime {
        let (d0, d1) = (self.domain.0 as f64, self.domain.1 as f64);
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (pixel - r0) / span };
        RaceTime::from_millis(lerp(d0, d1, t).round() as i64)
    }

    fn ticks(&self, count: usize) -> Vec<RaceTime> {
        let (start, stop) = self.domain;
        if start == stop {
            return vec![RaceTime::from_millis(start)];
        }
        let Some(interval) = tick_interval(start, stop, count) else {
            return Vec::new();
        };

        let first = ceil_to(start, interval) / interval;
        let last = floor_to(stop, interval) / interval;
        (first..=last)
            .map(|i| RaceTime::from_millis(i * interval))
            .collect()
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Pick the tick interval, in milliseconds, for `count` ticks over a span
///
/// The ladder entry closest to `span / count` by ratio wins. Spans finer
/// than the first rung use a whole-millisecond 1-2-5 step; spans coarser
/// than the last rung use a whole number of days.
pub fn tick_interval(start: i64, stop: i64, count: usize) -> Option<i64> {
    if count == 0 || stop <= start {
        return None;
    }
    let target = (stop - start) as f64 / count as f64;
    let i = TICK_INTERVALS.partition_point(|&step| (step as f64) <= target);

    if i == 0 {
        let step = Increment::for_span(start as f64, stop as f64, count)?.step();
        return Some((step.round() as i64).max(1));
    }
    if i == TICK_INTERVALS.len() {
        let days = Increment::for_span(start as f64 / DAY as f64, stop as f64 / DAY as f64, count)?
            .step();
        return Some((days.round() as i64).max(1) * DAY);
    }

    let below = TICK_INTERVALS[i - 1];
    let above = TICK_INTERVALS[i];
    Some(if target / (below as f64) < (above as f64) / target {
        below
    } else {
        above
    })
}

fn floor_to(value: i64, step: i64) -> i64 {
    value.div_euclid(step) * step
}

fn ceil_to(value: i64, step: i64) -> i64 {
    let floored = floor_to(value, step);
    if floored == value {
        value
    } else {
        floored + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> RaceTime {
        RaceTime::parse(s).unwrap()
    }

    #[test]
    fn test_tick_interval_ladder() {
        // 180s over 10 ticks -> 18s, closer to 15s than 30s
        assert_eq!(tick_interval(0, 180 * SECOND, 10), Some(15 * SECOND));
        // 300s -> 30s exactly
        assert_eq!(tick_interval(0, 300 * SECOND, 10), Some(30 * SECOND));
        // 40 minutes -> 4 min, closer to 5 min than 1 min
        assert_eq!(tick_interval(0, 40 * MINUTE, 10), Some(5 * MINUTE));
        // sub-second span falls back to whole milliseconds
        assert_eq!(tick_interval(0, 100, 10), Some(10));
        assert_eq!(tick_interval(0, 3, 10), Some(1));
        assert_eq!(tick_interval(5, 5, 10), None);
    }

    #[test]
    fn test_from_extent_is_niced() {
        let scale = TimeScale::from_extent((t("36:50"), t("39:50")), (0.0, 420.0));
        assert_eq!(scale.domain(), (t("36:45"), t("40:00")));
    }

    #[test]
    fn test_ticks_are_quarter_minutes() {
        let scale = TimeScale::from_extent((t("36:50"), t("39:50")), (0.0, 420.0));
        let labels: Vec<String> = scale.ticks(10).iter().map(|t| t.format()).collect();
        assert_eq!(labels.first().map(String::as_str), Some("36:45"));
        assert_eq!(labels.last().map(String::as_str), Some("40:00"));
        assert!(labels.contains(&"37:00".to_string()));
        assert!(labels.contains(&"38:15".to_string()));
        assert_eq!(labels.len(), 14);
    }

    #[test]
    fn test_apply_and_invert() {
        let scale = TimeScale::new((t("36:00"), t("40:00")), (0.0, 420.0));
        assert_eq!(scale.apply(t("36:00")), 0.0);
        assert_eq!(scale.apply(t("40:00")), 420.0);
        assert!((scale.apply(t("38:00")) - 210.0).abs() < 1e-9);
        assert_eq!(scale.invert(210.0), t("38:00"));
    }

    #[test]
    fn test_degenerate_extent_is_widened() {
        let scale = TimeScale::from_extent((t("37:00"), t("37:00")), (0.0, 420.0));
        let (d0, d1) = scale.domain();
        assert!(d0 < t("37:00") && d1 > t("37:00"));
        assert!((scale.apply(t("37:00")) - 210.0).abs() < 1e-9);
        assert!(scale.ticks(10).len() > 1);
    }

    #[test]
    fn test_zero_span_domain() {
        let scale = TimeScale::new((t("37:00"), t("37:00")), (0.0, 420.0));
        assert_eq!(scale.apply(t("37:00")), 210.0);
        assert_eq!(scale.ticks(10), vec![t("37:00")]);
    }
}
