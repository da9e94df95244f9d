//! Continuous scales mapping data values onto pixel offsets
//!
//! Both chart axes are driven by a continuous scale built from the extent of
//! the loaded records:
//!
//! - [`LinearScale`] - numeric domain (years) onto horizontal pixels
//! - [`TimeScale`] - race times onto vertical pixels
//!
//! Scales are "niced": their domain is rounded outward to the nearest tick
//! boundary so the first and last ticks sit on the plot edges.
//!
//! # Tick Steps
//!
//! Numeric tick steps follow the 1-2-5 rule: the raw step
//! `span / count` is rounded to 1, 2, 5 or 10 times a power of ten,
//! whichever is closest on a log scale. Time scales pick from a ladder of
//! calendar-friendly intervals instead (see [`time`]).

pub mod linear;
pub mod time;

pub use linear::LinearScale;
pub use time::TimeScale;

/// Default number of ticks requested from a scale
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Maximum number of refinement passes when nicing a linear domain
const MAX_NICE_ITERATIONS: usize = 10;

/// Shared behaviour of continuous, invertible scales
pub trait ContinuousScale {
    /// Domain value type
    type Value: Copy;

    /// Map a domain value to a pixel offset
    fn apply(&self, value: Self::Value) -> f64;

    /// Map a pixel offset back to a domain value
    fn invert(&self, pixel: f64) -> Self::Value;

    /// Roughly `count` round values spanning the domain, ascending
    fn ticks(&self, count: usize) -> Vec<Self::Value>;

    /// Pixel range `[start, end]`
    fn range(&self) -> (f64, f64);
}

/// Compute the `[min, max]` extent of a sequence
///
/// Values that do not compare with themselves (NaN) are skipped. Returns
/// `None` when no comparable value remains.
pub fn extent<T, I>(values: I) -> Option<(T, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut result: Option<(T, T)> = None;
    for value in values {
        if value.partial_cmp(&value).is_none() {
            continue;
        }
        result = Some(match result {
            None => (value, value),
            Some((min, max)) => (
                if value < min { value } else { min },
                if value > max { value } else { max },
            ),
        });
    }
    result
}

/// A 1-2-5 tick step
///
/// Steps below one are kept as their reciprocal so tick values can be
/// produced by division, which avoids accumulating float error on values
/// like `0.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Increment {
    /// Ticks are `i * step`
    Step(f64),
    /// Ticks are `i / inverse`
    Inverse(f64),
}

impl Increment {
    /// Compute the 1-2-5 increment for `count` ticks over `[start, stop]`
    ///
    /// Returns `None` when the span is empty or not finite.
    pub fn for_span(start: f64, stop: f64, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let step = (stop - start) / count as f64;
        if !(step > 0.0) || !step.is_finite() {
            return None;
        }

        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        Some(if power < 0.0 {
            Increment::Inverse(10f64.powf(-power) / factor)
        } else {
            Increment::Step(factor * 10f64.powf(power))
        })
    }

    /// The step as a plain value
    pub fn step(&self) -> f64 {
        match *self {
            Increment::Step(step) => step,
            Increment::Inverse(inverse) => 1.0 / inverse,
        }
    }

    /// Value of the `i`-th multiple
    fn value(&self, i: f64) -> f64 {
        match *self {
            Increment::Step(step) => i * step,
            Increment::Inverse(inverse) => i / inverse,
        }
    }

    /// Round `[start, stop]` outward to multiples of this increment
    fn nice(&self, start: f64, stop: f64) -> (f64, f64) {
        match *self {
            Increment::Step(step) => ((start / step).floor() * step, (stop / step).ceil() * step),
            Increment::Inverse(inverse) => {
                ((start * inverse).floor() / inverse, (stop * inverse).ceil() / inverse)
            }
        }
    }

    /// Multiples of this increment inside `[start, stop]`
    fn multiples(&self, start: f64, stop: f64) -> Vec<f64> {
        let (mut i0, mut i1) = match *self {
            Increment::Step(step) => ((start / step).round(), (stop / step).round()),
            Increment::Inverse(inverse) => ((start * inverse).round(), (stop * inverse).round()),
        };
        if self.value(i0) < start {
            i0 += 1.0;
        }
        if self.value(i1) > stop {
            i1 -= 1.0;
        }
        if i1 < i0 {
            return Vec::new();
        }

        let n = (i1 - i0) as usize + 1;
        (0..n).map(|k| self.value(i0 + k as f64)).collect()
    }
}

/// Linear tick values for `[start, stop]`
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let mut values = match Increment::for_span(lo, hi, count) {
        Some(inc) => inc.multiples(lo, hi),
        None => Vec::new(),
    };
    if start > stop {
        values.reverse();
    }
    values
}

/// Extend `[start, stop]` outward to round tick boundaries
///
/// The increment is recomputed on the widened domain until it stops
/// changing.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let (mut lo, mut hi) = (start, stop);
    let mut previous: Option<Increment> = None;

    for _ in 0..MAX_NICE_ITERATIONS {
        let Some(inc) = Increment::for_span(lo, hi, count) else {
            break;
        };
        if previous == Some(inc) {
            break;
        }
        (lo, hi) = inc.nice(lo, hi);
        previous = Some(inc);
    }

    (lo, hi)
}

/// Linear interpolation of `t` between `a` and `b`
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
