//! Linear scale for numeric domains

use super::{lerp, ContinuousScale, DEFAULT_TICK_COUNT};

/// Continuous linear mapping from a numeric domain to a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale with an explicit domain and range
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Create a niced scale from a data extent
    ///
    /// A single-valued extent is widened by one unit on each side so the
    /// axis still has a span to lay ticks on.
    pub fn from_extent(extent: (f64, f64), range: (f64, f64)) -> Self {
        let (min, max) = extent;
        let domain = if min == max {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        };
        Self::new(domain, range).nice(DEFAULT_TICK_COUNT)
    }

    /// Round the domain outward to tick boundaries
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = super::nice(self.domain.0, self.domain.1, count);
        self
    }

    /// Domain `[start, end]`
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

impl ContinuousScale for LinearScale {
    type Value = f64;

    fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return lerp(r0, r1, 0.5);
        }
        lerp(r0, r1, (value - d0) / span)
    }

    fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return lerp(d0, d1, 0.5);
        }
        lerp(d0, d1, (pixel - r0) / span)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        super::ticks(self.domain.0, self.domain.1, count)
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }
}
