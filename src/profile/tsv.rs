//! Tab-separated wire format shared by breakpoint tables and sampled series.
//!
//! Two columns (time, value), no header, one row per point, every number
//! written with three decimals. Reading accepts any float text, skips blank
//! lines and `#` comments.
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use log::info;
use crate::profile::error::ProfileError;
use crate::types::{Breakpoint, SampledSeries};
/// Which of the two exports a file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    /// "Save": the raw breakpoint table.
    Table,
    /// "Generate": the expanded series.
    Series,
}
impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Table => "tsv",
            ExportKind::Series => "dat",
        }
    }
    /// Adds this kind's extension when `path` has none.
    pub fn apply_to(self, path: &Path) -> PathBuf {
        if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(self.extension())
        }
    }
}
pub fn write_pairs<W, I>(writer: W, pairs: I) -> Result<(), ProfileError>
where
    W: Write,
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for (time, value) in pairs {
        out.write_record([format!("{time:.3}"), format!("{value:.3}")])?;
    }
    out.flush()?;
    Ok(())
}
pub fn read_pairs<R: Read>(reader: R) -> Result<Vec<(f64, f64)>, ProfileError> {
    let mut input = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut pairs = Vec::new();
    for record in input.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 2 {
            return Err(ProfileError::MalformedTsv {
                line,
                reason: format!("expected 2 columns, found {}", record.len()),
            });
        }
        let number = |idx: usize| -> Result<f64, ProfileError> {
            let value = record[idx]
                .parse::<f64>()
                .map_err(|e| ProfileError::MalformedTsv {
                    line,
                    reason: format!("{:?}: {e}", &record[idx]),
                })?;
            if !value.is_finite() {
                return Err(ProfileError::MalformedTsv {
                    line,
                    reason: format!("{:?} is not a finite number", &record[idx]),
                });
            }
            Ok(value)
        };
        pairs.push((number(0)?, number(1)?));
    }
    Ok(pairs)
}
pub fn write_breakpoints<W: Write>(
    writer: W,
    breakpoints: &[Breakpoint],
) -> Result<(), ProfileError> {
    write_pairs(writer, breakpoints.iter().map(|b| (b.time, b.value)))
}
pub fn read_breakpoints<R: Read>(reader: R) -> Result<Vec<Breakpoint>, ProfileError> {
    Ok(read_pairs(reader)?.into_iter().map(Breakpoint::from).collect())
}
pub fn write_series<W: Write>(writer: W, series: &SampledSeries) -> Result<(), ProfileError> {
    write_pairs(writer, series.iter())
}
pub fn read_series<R: Read>(reader: R) -> Result<SampledSeries, ProfileError> {
    let pairs = read_pairs(reader)?;
    let mut series = SampledSeries::with_capacity(pairs.len());
    for (time, value) in pairs {
        series.push(time, value);
    }
    Ok(series)
}
pub fn save_table(path: &Path, breakpoints: &[Breakpoint]) -> Result<(), ProfileError> {
    write_breakpoints(BufWriter::new(File::create(path)?), breakpoints)?;
    info!("saved {} breakpoints to {}", breakpoints.len(), path.display());
    Ok(())
}
pub fn save_series(path: &Path, series: &SampledSeries) -> Result<(), ProfileError> {
    write_series(BufWriter::new(File::create(path)?), series)?;
    info!("saved {} samples to {}", series.len(), path.display());
    Ok(())
}
pub fn load_table(path: &Path) -> Result<Vec<Breakpoint>, ProfileError> {
    let breakpoints = read_breakpoints(BufReader::new(File::open(path)?))?;
    info!("loaded {} breakpoints from {}", breakpoints.len(), path.display());
    Ok(breakpoints)
}
