//! Breakpoint tables to piecewise-constant sampled series.
//!
//! A table of `(time, value)` breakpoints is expanded at a fixed sample rate
//! by [`SeriesExpander`]; [`RampProfileGenerator`] fills such a table with a
//! staircase temperature profile. Tables and series travel as two-column
//! tab-separated files (see [`profile::tsv`]).
pub mod profile;
pub mod settings;
pub mod types;
pub use profile::{ProfileError, RampProfileGenerator, SeriesExpander};
pub use settings::Settings;
pub use types::{Breakpoint, RampSpec, SampledSeries};
