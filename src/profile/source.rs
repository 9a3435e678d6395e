use log::warn;
use crate::profile::table::{parse_table, TableParse};
use crate::types::Breakpoint;
/// Row count of the breakpoint grid the editor exposes.
pub const DEFAULT_TABLE_ROWS: usize = 50;
/// Something holding a two-column grid of editable text cells.
pub trait TableSource {
    fn row_count(&self) -> usize;
    fn cell(&self, row: usize, col: usize) -> Option<&str>;
    fn set_cell(&mut self, row: usize, col: usize, text: String);
    fn clear(&mut self);
    /// Scans the grid top to bottom into a validated breakpoint prefix.
    fn collect(&self) -> TableParse {
        parse_table((0..self.row_count()).map(|row| [self.cell(row, 0), self.cell(row, 1)]))
    }
    /// Replaces the grid contents with `breakpoints`, truncated to whole numbers.
    /// Returns how many rows were written.
    fn fill_breakpoints(&mut self, breakpoints: &[Breakpoint]) -> usize {
        self.clear();
        let capacity = self.row_count();
        if breakpoints.len() > capacity {
            warn!(
                "table holds {} rows; dropping {} breakpoints",
                capacity,
                breakpoints.len() - capacity
            );
        }
        let mut written = 0;
        for (row, bp) in breakpoints.iter().take(capacity).enumerate() {
            self.set_cell(row, 0, (bp.time.trunc() as i64).to_string());
            self.set_cell(row, 1, (bp.value.trunc() as i64).to_string());
            written += 1;
        }
        written
    }
}
/// In-memory grid, useful for tests and headless use.
#[derive(Clone, Debug)]
pub struct ManualTable {
    cells: Vec<[Option<String>; 2]>, // rows x (time, value)
}
impl ManualTable {
    pub fn with_rows(rows: usize) -> Self {
        Self {
            cells: vec![[None, None]; rows],
        }
    }
    /// Grid pre-filled from text rows; `rows` may be shorter than the capacity.
    pub fn from_rows<'a>(
        capacity: usize,
        rows: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut table = Self::with_rows(capacity);
        for (row, (time, value)) in rows.into_iter().take(capacity).enumerate() {
            table.set_cell(row, 0, time.to_owned());
            table.set_cell(row, 1, value.to_owned());
        }
        table
    }
}
impl Default for ManualTable {
    fn default() -> Self {
        Self::with_rows(DEFAULT_TABLE_ROWS)
    }
}
impl TableSource for ManualTable {
    fn row_count(&self) -> usize {
        self.cells.len()
    }
    fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col)?.as_deref()
    }
    fn set_cell(&mut self, row: usize, col: usize, text: String) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = Some(text);
        }
    }
    fn clear(&mut self) {
        for row in &mut self.cells {
            *row = [None, None];
        }
    }
}
