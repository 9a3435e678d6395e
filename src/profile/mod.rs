// src/profile/mod.rs
pub mod error;
pub mod expander;
pub mod plot;
pub mod ramp;
pub mod session;
pub mod source;
pub mod table;
pub mod tsv;
pub use error::ProfileError;
pub use expander::{SeriesExpander, NUDGED_SAMPLE_OFFSET};
pub use plot::{render_series_png, PlotSink, PlotStyle, PngPlot, RecordingPlot};
pub use ramp::{RampForm, RampProfileGenerator};
pub use session::ProfileSession;
pub use source::{ManualTable, TableSource, DEFAULT_TABLE_ROWS};
pub use table::{
    parse_frequency, parse_table, CellDiagnostic, Column, DiagnosticKind, TableParse, Truncation,
};
pub use tsv::ExportKind;
