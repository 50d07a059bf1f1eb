// Domain errors for chart data shaping
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// One of the anomaly-detection groups does not line up with the observed
    /// series, either in series count or in per-series point count.
    #[error(
        "misaligned anomaly series: {group} at index {index} has {found} entries, expected {expected}"
    )]
    MisalignedAnomalySeries {
        group: &'static str,
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("anomaly series at index {index} is missing the '{label}' label")]
    MissingLabel { index: usize, label: &'static str },

    #[error("color palette must contain at least one color")]
    EmptyPalette,
}
