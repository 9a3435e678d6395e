// src/main.rs
//! # stepgen
//!
//! Command-line front end for breakpoint tables.
//!
//! ```bash
//! # Generate: expand a table at 100 Hz into table.dat
//! stepgen expand table.tsv -f 100
//!
//! # Quick fill: write a staircase ramp as a table
//! stepgen ramp --width 60 --low 20 --high 80 --step 10 --max-interval 30 -f 100 -o ramp.tsv
//!
//! # Plot the expanded series
//! stepgen plot table.tsv -f 100 -o table.png
//! ```
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use stepgen::profile::{
    ManualTable, PngPlot, ProfileSession, RampForm, TableSource, DEFAULT_TABLE_ROWS,
};
use stepgen::Settings;
#[derive(Parser)]
#[command(name = "stepgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Settings file remembering folders and the last frequency
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Rows available in the breakpoint table
    #[arg(long, global = true, default_value_t = DEFAULT_TABLE_ROWS)]
    rows: usize,
    #[command(subcommand)]
    command: Commands,
}
#[derive(Subcommand)]
enum Commands {
    /// Expand a breakpoint table into a sampled series (.dat)
    Expand {
        /// Breakpoint table (.tsv)
        #[arg(value_name = "TABLE")]
        table: PathBuf,
        /// Sample frequency in Hz (defaults to the last one used)
        #[arg(short, long)]
        frequency: Option<String>,
        /// Offset added to every sample time
        #[arg(long)]
        offset: Option<f64>,
        /// Output path (defaults to TABLE with a .dat extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fill a breakpoint table with a staircase temperature ramp (.tsv)
    Ramp {
        #[arg(long)]
        width: Option<String>,
        #[arg(long)]
        low: Option<String>,
        #[arg(long)]
        high: Option<String>,
        #[arg(long)]
        step: Option<String>,
        #[arg(long)]
        max_interval: Option<String>,
        /// Sample frequency in Hz; must be filled in unless --skip-frequency-check
        #[arg(short, long)]
        frequency: Option<String>,
        /// Validate the ramp fields without requiring a frequency
        #[arg(long)]
        skip_frequency_check: bool,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Render the expanded series to a PNG
    Plot {
        #[arg(value_name = "TABLE")]
        table: PathBuf,
        #[arg(short, long)]
        frequency: Option<String>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Summarize a breakpoint table
    Inspect {
        #[arg(value_name = "TABLE")]
        table: PathBuf,
        #[arg(short, long)]
        frequency: Option<String>,
    },
}
fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?,
        None => Settings::default(),
    };
    let mut session = ProfileSession::new(ManualTable::with_rows(cli.rows), settings);
    match cli.command {
        Commands::Expand {
            table,
            frequency,
            offset,
            output,
        } => {
            if let Some(offset) = offset {
                session.settings_mut().sample_offset = offset;
            }
            apply_frequency(&mut session, frequency);
            open_table(&mut session, &table)?;
            let output = output.unwrap_or_else(|| default_series_path(&table));
            let written = session
                .generate(&output)
                .with_context(|| format!("Failed to generate {}", output.display()))?;
            println!("{}", written.display());
        }
        Commands::Ramp {
            width,
            low,
            high,
            step,
            max_interval,
            frequency,
            skip_frequency_check,
            output,
        } => {
            let form = RampForm {
                width: width.unwrap_or_default(),
                low_temp: low.unwrap_or_default(),
                high_temp: high.unwrap_or_default(),
                step: step.unwrap_or_default(),
                max_interval: max_interval.unwrap_or_default(),
                frequency: frequency
                    .unwrap_or_else(|| session.frequency_text().to_owned()),
                require_frequency: !skip_frequency_check,
            };
            let rows = session.quick_fill(&form)?;
            info!("ramp filled {rows} rows");
            let written = session
                .save_table(&output)
                .with_context(|| format!("Failed to save {}", output.display()))?;
            println!("{}", written.display());
        }
        Commands::Plot {
            table,
            frequency,
            output,
        } => {
            apply_frequency(&mut session, frequency);
            open_table(&mut session, &table)?;
            let mut sink = PngPlot::new(&output);
            session
                .replot(&mut sink)
                .with_context(|| format!("Failed to plot {}", output.display()))?;
            println!("{}", sink.path().display());
        }
        Commands::Inspect { table, frequency } => {
            apply_frequency(&mut session, frequency);
            open_table(&mut session, &table)?;
            inspect(&session);
        }
    }
    if let Some(path) = &cli.settings {
        session
            .settings()
            .save(path)
            .with_context(|| format!("Failed to write settings: {}", path.display()))?;
    }
    Ok(())
}
fn default_series_path(table: &Path) -> PathBuf {
    let output = table.with_extension("dat");
    if output == table {
        table.with_extension("expanded.dat")
    } else {
        output
    }
}
fn apply_frequency<T: TableSource>(session: &mut ProfileSession<T>, frequency: Option<String>) {
    if let Some(text) = frequency {
        session.set_frequency_text(text);
    }
}
fn open_table<T: TableSource>(session: &mut ProfileSession<T>, table: &Path) -> Result<()> {
    let rows = session
        .open(table)
        .with_context(|| format!("Failed to open table: {}", table.display()))?;
    info!("{} rows loaded from {}", rows, table.display());
    Ok(())
}
fn inspect<T: TableSource>(session: &ProfileSession<T>) {
    let parse = session.collect();
    println!("rows: {}", parse.valid_rows());
    if let Some(truncation) = parse.truncation() {
        println!(
            "truncated at row {} ({} rows ignored)",
            truncation.row + 1,
            truncation.discarded_rows
        );
    }
    let end = parse.breakpoints.last().map_or(0.0, |b| b.time);
    println!("duration: {end:.3}");
    match session.expand() {
        Ok(series) => println!("samples: {}", series.len()),
        Err(e) => warn!("{e}"),
    }
}
