use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Specify frequency (got {input:?}, expected a positive integer in Hz)")]
    InvalidFrequency { input: String },
    #[error("Specify all fields and frequency ({field} is missing or not an integer)")]
    IncompleteRampSpec { field: &'static str },
    #[error("series would exceed {limit} samples")]
    SeriesTooLarge { limit: usize },
    #[error("malformed TSV at line {line}: {reason}")]
    MalformedTsv { line: u64, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl ProfileError {
    pub(crate) fn invalid_frequency(input: impl Into<String>) -> Self {
        ProfileError::InvalidFrequency {
            input: input.into(),
        }
    }
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ProfileError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ProfileError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for ProfileError {
    fn from(value: image::ImageError) -> Self {
        ProfileError::Plot(value.to_string())
    }
}
