use std::path::{Path, PathBuf};
use log::debug;
use crate::profile::error::ProfileError;
use crate::profile::plot::PlotSink;
use crate::profile::ramp::{RampForm, RampProfileGenerator};
use crate::profile::source::TableSource;
use crate::profile::table::{parse_frequency, TableParse};
use crate::profile::tsv::{self, ExportKind};
use crate::settings::Settings;
use crate::types::SampledSeries;
/// Ties a breakpoint table and the frequency text box to the export and plot
/// actions. Every action recomputes from the current table contents.
pub struct ProfileSession<T: TableSource> {
    table: T,
    frequency: String,
    settings: Settings,
}
impl<T: TableSource> ProfileSession<T> {
    pub fn new(table: T, settings: Settings) -> Self {
        let frequency = settings
            .last_frequency
            .map(|hz| hz.to_string())
            .unwrap_or_default();
        Self {
            table,
            frequency,
            settings,
        }
    }
    pub fn table(&self) -> &T {
        &self.table
    }
    pub fn table_mut(&mut self) -> &mut T {
        &mut self.table
    }
    pub fn frequency_text(&self) -> &str {
        &self.frequency
    }
    pub fn set_frequency_text(&mut self, text: impl Into<String>) {
        self.frequency = text.into();
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
    pub fn into_settings(self) -> Settings {
        self.settings
    }
    pub fn collect(&self) -> TableParse {
        self.table.collect()
    }
    pub fn expand(&self) -> Result<SampledSeries, ProfileError> {
        let frequency_hz = parse_frequency(&self.frequency)?;
        let breakpoints = self.collect().into_breakpoints();
        self.settings.expander().expand(&breakpoints, frequency_hz)
    }
    pub fn replot<P: PlotSink>(&self, sink: &mut P) -> Result<(), ProfileError> {
        debug!("Replot");
        let series = self.expand()?;
        sink.plot(&series)
    }
    /// "Save": writes the raw breakpoints. Returns the path actually written.
    pub fn save_table(&mut self, path: &Path) -> Result<PathBuf, ProfileError> {
        let target = ExportKind::Table.apply_to(path);
        debug!("{}", target.display());
        tsv::save_table(&target, &self.collect().into_breakpoints())?;
        self.settings.remember_save(&target);
        Ok(target)
    }
    /// "Generate": expands the table and writes the sampled series.
    pub fn generate(&mut self, path: &Path) -> Result<PathBuf, ProfileError> {
        let frequency_hz = parse_frequency(&self.frequency)?;
        let series = self
            .settings
            .expander()
            .expand(&self.collect().into_breakpoints(), frequency_hz)?;
        let target = ExportKind::Series.apply_to(path);
        debug!("{}", target.display());
        tsv::save_series(&target, &series)?;
        self.settings.remember_save(&target);
        self.settings.remember_frequency(frequency_hz);
        Ok(target)
    }
    /// Replaces the table contents with a saved table. Returns the rows written.
    pub fn open(&mut self, path: &Path) -> Result<usize, ProfileError> {
        let breakpoints = tsv::load_table(path)?;
        self.settings.remember_open(path);
        Ok(self.table.fill_breakpoints(&breakpoints))
    }
    /// Overwrites the table with a generated ramp. Returns the rows written.
    pub fn quick_fill(&mut self, form: &RampForm) -> Result<usize, ProfileError> {
        let breakpoints = RampProfileGenerator::from_form(form)?.generate();
        Ok(self.table.fill_breakpoints(&breakpoints))
    }
}
