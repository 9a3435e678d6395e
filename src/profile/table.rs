use std::fmt;
use log::warn;
use crate::profile::error::ProfileError;
use crate::types::Breakpoint;
/// Parses the frequency text box: a positive whole number of hertz.
pub fn parse_frequency(text: &str) -> Result<u32, ProfileError> {
    match text.trim().parse::<u32>() {
        Ok(hz) if hz > 0 => Ok(hz),
        _ => Err(ProfileError::invalid_frequency(text)),
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Time,
    Value,
}
impl Column {
    pub const ALL: [Column; 2] = [Column::Time, Column::Value];
    pub fn index(self) -> usize {
        match self {
            Column::Time => 0,
            Column::Value => 1,
        }
    }
}
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Time => f.write_str("time"),
            Column::Value => f.write_str("value"),
        }
    }
}
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    EmptyCell,
    NotInteger(String),
    /// A non-blank row after the point where collection stopped.
    Discarded,
}
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellDiagnostic {
    pub row: usize,
    pub column: Option<Column>,
    pub kind: DiagnosticKind,
}
impl fmt::Display for CellDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row + 1;
        match (&self.kind, self.column) {
            (DiagnosticKind::EmptyCell, Some(col)) => write!(f, "row {row}: {col} is empty"),
            (DiagnosticKind::NotInteger(text), Some(col)) => {
                write!(f, "row {row}: {col} {text:?} is not an integer")
            }
            (DiagnosticKind::Discarded, _) => write!(f, "row {row}: discarded"),
            (kind, None) => write!(f, "row {row}: {kind:?}"),
        }
    }
}
/// Data was dropped from the table: collection stopped at `row` and
/// `discarded_rows` non-blank rows were ignored (the stopping row included).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncation {
    pub row: usize,
    pub discarded_rows: usize,
}
/// Validated prefix of a table plus what stopped the scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableParse {
    pub breakpoints: Vec<Breakpoint>,
    pub diagnostics: Vec<CellDiagnostic>,
}
impl TableParse {
    /// Number of leading rows that parsed cleanly.
    pub fn valid_rows(&self) -> usize {
        self.breakpoints.len()
    }
    /// `None` when collection only stopped at blank rows.
    pub fn truncation(&self) -> Option<Truncation> {
        let stop = self.diagnostics.first()?;
        let stop_row_has_data = self
            .diagnostics
            .iter()
            .any(|d| d.row == stop.row && matches!(d.kind, DiagnosticKind::NotInteger(_)))
            || self
                .diagnostics
                .iter()
                .filter(|d| d.row == stop.row)
                .count()
                < Column::ALL.len();
        let later = self
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Discarded)
            .count();
        let discarded_rows = later + usize::from(stop_row_has_data);
        (discarded_rows > 0).then_some(Truncation {
            row: stop.row,
            discarded_rows,
        })
    }
    pub fn into_breakpoints(self) -> Vec<Breakpoint> {
        self.breakpoints
    }
}
/// Collects breakpoints row by row, stopping at the first row with an empty or
/// non-integer cell. Every later row is discarded, never an error.
pub fn parse_table<'a, I>(rows: I) -> TableParse
where
    I: IntoIterator<Item = [Option<&'a str>; 2]>,
{
    let mut parse = TableParse::default();
    let mut rows = rows.into_iter().enumerate();
    for (row, cells) in rows.by_ref() {
        let problems: Vec<CellDiagnostic> = Column::ALL
            .iter()
            .filter_map(|&column| {
                cell_problem(cells[column.index()]).map(|kind| CellDiagnostic {
                    row,
                    column: Some(column),
                    kind,
                })
            })
            .collect();
        if problems.is_empty() {
            let time = parse_cell(cells[0]);
            let value = parse_cell(cells[1]);
            parse.breakpoints.push(Breakpoint::new(time, value));
        } else {
            parse.diagnostics.extend(problems);
            break;
        }
    }
    for (row, cells) in rows {
        if cells.iter().any(|c| !is_blank(*c)) {
            parse.diagnostics.push(CellDiagnostic {
                row,
                column: None,
                kind: DiagnosticKind::Discarded,
            });
        }
    }
    if let Some(truncation) = parse.truncation() {
        warn!(
            "table truncated at row {}: {} row(s) ignored",
            truncation.row + 1,
            truncation.discarded_rows
        );
    }
    parse
}
fn is_blank(cell: Option<&str>) -> bool {
    cell.map_or(true, |text| text.trim().is_empty())
}
fn cell_problem(cell: Option<&str>) -> Option<DiagnosticKind> {
    if is_blank(cell) {
        return Some(DiagnosticKind::EmptyCell);
    }
    let text = cell.unwrap_or_default();
    match text.trim().parse::<i64>() {
        Ok(_) => None,
        Err(_) => Some(DiagnosticKind::NotInteger(text.to_owned())),
    }
}
fn parse_cell(cell: Option<&str>) -> f64 {
    cell.and_then(|text| text.trim().parse::<i64>().ok())
        .unwrap_or_default() as f64
}
