use log::debug;
use crate::profile::error::ProfileError;
use crate::types::{Breakpoint, SampledSeries};
/// Upper bound on the samples a single expansion may produce.
pub const MAX_SERIES_SAMPLES: usize = isize::MAX as usize / (2 * std::mem::size_of::<f64>());
/// Samples reserved up front; larger series grow as they fill.
const RESERVE_LIMIT: usize = 1 << 20;
/// Offset used by the variant of the generator that nudges every sample time.
pub const NUDGED_SAMPLE_OFFSET: f64 = 0.01;
/// Turns a breakpoint table into a piecewise-constant series.
///
/// Breakpoint `i` owns the half-open span `[time[i-1], time[i])` (the first one
/// starts at zero) and every sample in that span carries `value[i]`. Sample
/// times follow range semantics: `lower + k * period` for
/// `k in 0..ceil((upper - lower) / period)`, so a reversed or empty span simply
/// yields no samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesExpander {
    sample_offset: f64,
}
impl SeriesExpander {
    pub fn new() -> Self {
        Self::default()
    }
    /// Expander that adds `sample_offset` to every generated sample time.
    pub fn with_sample_offset(sample_offset: f64) -> Self {
        Self { sample_offset }
    }
    /// Expander reproducing the 0.01 nudged sample times.
    pub fn nudged() -> Self {
        Self::with_sample_offset(NUDGED_SAMPLE_OFFSET)
    }
    pub fn sample_offset(&self) -> f64 {
        self.sample_offset
    }
    pub fn expand(
        &self,
        breakpoints: &[Breakpoint],
        frequency_hz: u32,
    ) -> Result<SampledSeries, ProfileError> {
        let period = period_for(frequency_hz)?;
        let total = total_samples(breakpoints, period)?;
        let mut series = SampledSeries::with_capacity(total.min(RESERVE_LIMIT));
        for (lower, breakpoint) in segments(breakpoints) {
            let count = segment_len(lower, breakpoint.time, period).unwrap_or_default();
            for k in 0..count {
                series.push(
                    lower + k as f64 * period + self.sample_offset,
                    breakpoint.value,
                );
            }
        }
        debug!(
            "expanded {} breakpoints at {} Hz into {} samples",
            breakpoints.len(),
            frequency_hz,
            series.len()
        );
        Ok(series)
    }
    /// Number of samples `expand` would produce, without materializing them.
    pub fn sample_count(
        &self,
        breakpoints: &[Breakpoint],
        frequency_hz: u32,
    ) -> Result<usize, ProfileError> {
        let period = period_for(frequency_hz)?;
        total_samples(breakpoints, period)
    }
}
fn period_for(frequency_hz: u32) -> Result<f64, ProfileError> {
    if frequency_hz == 0 {
        return Err(ProfileError::invalid_frequency("0"));
    }
    Ok(1.0 / frequency_hz as f64)
}
/// Pairs each breakpoint with the lower bound of its span.
fn segments(breakpoints: &[Breakpoint]) -> impl Iterator<Item = (f64, &Breakpoint)> {
    let lowers = std::iter::once(0.0).chain(breakpoints.iter().map(|b| b.time));
    lowers.zip(breakpoints.iter())
}
fn total_samples(breakpoints: &[Breakpoint], period: f64) -> Result<usize, ProfileError> {
    let mut total: usize = 0;
    for (lower, b) in segments(breakpoints) {
        total = segment_len(lower, b.time, period)
            .and_then(|count| total.checked_add(count))
            .filter(|total| *total <= MAX_SERIES_SAMPLES)
            .ok_or(ProfileError::SeriesTooLarge {
                limit: MAX_SERIES_SAMPLES,
            })?;
    }
    Ok(total)
}
/// `None` when the span holds more samples than can be addressed.
fn segment_len(lower: f64, upper: f64, period: f64) -> Option<usize> {
    let steps = ((upper - lower) / period).ceil();
    if !steps.is_finite() || steps <= 0.0 {
        Some(0)
    } else if steps > MAX_SERIES_SAMPLES as f64 {
        None
    } else {
        Some(steps as usize)
    }
}
