use std::fs;
use tempfile::tempdir;
use stepgen::profile::tsv::{self, ExportKind};
use stepgen::profile::{ManualTable, ProfileSession, RampForm, TableSource};
use stepgen::{Breakpoint, Settings};
fn session_with(rows: &[(&str, &str)], frequency: &str) -> ProfileSession<ManualTable> {
    let table = ManualTable::from_rows(50, rows.iter().copied());
    let mut session = ProfileSession::new(table, Settings::default());
    session.set_frequency_text(frequency);
    session
}
#[test]
fn generate_writes_dat_file_and_remembers_frequency() {
    let dir = tempdir().unwrap();
    let mut session = session_with(&[("10", "5"), ("20", "8")], "2");
    let written = session.generate(&dir.path().join("curve")).unwrap();
    assert_eq!(written.extension().unwrap(), ExportKind::Series.extension());
    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 40);
    assert_eq!(lines[0], "0.000\t5.000");
    assert_eq!(lines[20], "10.000\t8.000");
    assert_eq!(lines[39], "19.500\t8.000");
    assert_eq!(session.settings().last_frequency, Some(2));
    assert_eq!(session.settings().last_save_dir.as_deref(), Some(dir.path()));
}
#[test]
fn generate_without_frequency_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut session = session_with(&[("10", "5")], "");
    assert!(session.generate(&dir.path().join("curve.dat")).is_err());
    assert!(!dir.path().join("curve.dat").exists());
}
#[test]
fn saved_table_opens_into_a_fresh_session() {
    let dir = tempdir().unwrap();
    let mut source = session_with(&[("1", "0"), ("2", "2"), ("3", "0"), ("4", "4")], "10");
    let saved = source.save_table(&dir.path().join("steps")).unwrap();
    assert_eq!(saved.extension().unwrap(), "tsv");
    let mut target = session_with(&[("100", "100")], "10");
    assert_eq!(target.open(&saved).unwrap(), 4);
    assert_eq!(target.collect().breakpoints, source.collect().breakpoints);
    assert_eq!(target.settings().last_open_dir.as_deref(), Some(dir.path()));
}
#[test]
fn opening_fractional_table_truncates_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("frac.tsv");
    fs::write(&path, "1.700\t2.900\n3.200\t-1.500\n").unwrap();
    let mut session = session_with(&[], "1");
    session.open(&path).unwrap();
    assert_eq!(session.table().cell(0, 0), Some("1"));
    assert_eq!(session.table().cell(1, 1), Some("-1"));
}
#[test]
fn series_round_trips_within_rounding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("series.dat");
    let series = stepgen::SeriesExpander::nudged()
        .expand(&[Breakpoint::new(1.0, 2.345), Breakpoint::new(2.0, -7.0)], 3)
        .unwrap();
    tsv::save_series(&path, &series).unwrap();
    let back = tsv::read_series(fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(back.len(), series.len());
    for ((t0, v0), (t1, v1)) in series.iter().zip(back.iter()) {
        assert!((t0 - t1).abs() <= 5e-4);
        assert!((v0 - v1).abs() <= 5e-4);
    }
}
#[test]
fn quick_fill_then_save_produces_ramp_table() {
    let dir = tempdir().unwrap();
    let mut session = session_with(&[], "50");
    let form = RampForm {
        width: "30".into(),
        low_temp: "20".into(),
        high_temp: "60".into(),
        step: "20".into(),
        max_interval: "30".into(),
        frequency: session.frequency_text().to_owned(),
        require_frequency: true,
    };
    assert_eq!(session.quick_fill(&form).unwrap(), 4);
    let saved = session.save_table(&dir.path().join("ramp.tsv")).unwrap();
    let text = fs::read_to_string(saved).unwrap();
    assert_eq!(
        text,
        "30.000\t20.000\n60.000\t40.000\n90.000\t30.000\n120.000\t60.000\n"
    );
}
#[test]
fn settings_survive_a_save_load_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = Settings {
        last_frequency: Some(100),
        sample_offset: 0.01,
        last_save_dir: Some(dir.path().to_path_buf()),
        ..Settings::default()
    };
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), settings);
    assert_eq!(
        Settings::load(&dir.path().join("missing.json")).unwrap(),
        Settings::default()
    );
}
