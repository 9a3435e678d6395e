// src/types.rs
/// A point where the signal's constant level changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub time: f64,
    pub value: f64,
}

impl Breakpoint {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for Breakpoint {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

/// Piecewise-constant series sampled at a fixed period.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledSeries {
    pub times: Vec<f64>,
    pub values: Vec<f64>, // same length as `times`
}

impl SampledSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn push(&mut self, time: f64, value: f64) {
        self.times.push(time);
        self.values.push(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Last sample time, or 0 for an empty series.
    pub fn end_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }
}

/// Staircase temperature profile parameters. All fields are whole numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RampSpec {
    pub width: i64,
    pub low_temp: i64,
    pub high_temp: i64,
    pub step: i64,
    pub max_interval: i64,
}
