use std::io::Cursor;
use std::path::{Path, PathBuf};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::profile::error::ProfileError;
use crate::types::SampledSeries;
/// Consumer of freshly expanded series, re-invoked on every table change.
pub trait PlotSink {
    fn plot(&mut self, series: &SampledSeries) -> Result<(), ProfileError>;
}
/// Keeps the last series it was handed.
#[derive(Debug, Default)]
pub struct RecordingPlot {
    pub last: Option<SampledSeries>,
    pub redraws: usize,
}
impl PlotSink for RecordingPlot {
    fn plot(&mut self, series: &SampledSeries) -> Result<(), ProfileError> {
        self.last = Some(series.clone());
        self.redraws += 1;
        Ok(())
    }
}
/// Writes every plotted series to a PNG file, overwriting the previous one.
#[derive(Clone, Debug)]
pub struct PngPlot {
    pub path: PathBuf,
    pub style: PlotStyle,
}
impl PngPlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            style: PlotStyle::default(),
        }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl PlotSink for PngPlot {
    fn plot(&mut self, series: &SampledSeries) -> Result<(), ProfileError> {
        let png = render_series_png(series, &self.style)?;
        std::fs::write(&self.path, png)?;
        log::info!("plot written to {}", self.path.display());
        Ok(())
    }
}
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub line: RGBColor,
    pub caption: String,
    /// Caption and axis labels; needs a system font.
    pub annotate: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            background: RGBColor(10, 10, 10),
            line: YELLOW,
            caption: "Profile".to_owned(),
            annotate: true,
        }
    }
}
/// Renders the series as a single continuous curve.
pub fn render_series_png(
    series: &SampledSeries,
    style: &PlotStyle,
) -> Result<Vec<u8>, ProfileError> {
    if series.is_empty() {
        return Err(ProfileError::Plot("series has no samples".into()));
    }
    let x_max = series.end_time().max(series.times[0] + 1e-3);
    let x_min = series.times[0].min(0.0);
    let y_min = series.values.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = series.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_max - y_min) * 0.1).max(1.0);
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if style.annotate {
            builder
                .caption(&style.caption, ("sans-serif", 20).into_font().color(&WHITE))
                .set_label_area_size(LabelAreaPosition::Left, 45)
                .set_label_area_size(LabelAreaPosition::Bottom, 40);
        }
        let mut chart = builder.build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))?;
        if style.annotate {
            chart
                .configure_mesh()
                .light_line_style(&WHITE.mix(0.1))
                .draw()?;
        }
        chart.draw_series(LineSeries::new(series.iter(), &style.line))?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ProfileError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ProfileError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_series_cannot_be_rendered() {
        let err = render_series_png(&SampledSeries::default(), &PlotStyle::default()).unwrap_err();
        assert!(matches!(err, ProfileError::Plot(_)));
    }
    #[test]
    fn renders_png_bytes() {
        let mut series = SampledSeries::default();
        for k in 0..20 {
            series.push(k as f64 * 0.5, if k < 10 { 5.0 } else { 8.0 });
        }
        let style = PlotStyle {
            annotate: false,
            ..PlotStyle::default()
        };
        let png = render_series_png(&series, &style).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
    #[test]
    fn recording_sink_keeps_latest_series() {
        let mut sink = RecordingPlot::default();
        let mut series = SampledSeries::default();
        series.push(0.0, 1.0);
        sink.plot(&series).unwrap();
        series.push(1.0, 2.0);
        sink.plot(&series).unwrap();
        assert_eq!(sink.redraws, 2);
        assert_eq!(sink.last.unwrap().len(), 2);
    }
}
