// Chart data service - Use case for shaping query-range responses into chart data
use crate::domain::aligner::{build_chart_matrix, ChartMatrix, ChartOptions};
use crate::domain::anomaly::{build_anomaly_bands, AnomalyBands};
use crate::domain::error::ChartError;
use crate::domain::palette::Palette;
use crate::domain::series::QueryRangeResponse;

#[derive(Clone, Default)]
pub struct ChartDataService {
    palette: Palette,
}

impl ChartDataService {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn chart_matrix(&self, response: &QueryRangeResponse, options: &ChartOptions) -> ChartMatrix {
        let matrix = build_chart_matrix(response, options);

        if !matrix.is_rectangular() {
            tracing::error!("Chart matrix rows do not match axis length {}", matrix.axis.len());
        }

        tracing::debug!(
            "Built chart matrix: {} series, {} timestamps, stacked={}, fill_spans={}",
            matrix.rows.len(),
            matrix.axis.len(),
            options.stacked_bar_chart && options.hidden_series.is_none(),
            options.fill_spans
        );

        matrix
    }

    pub fn anomaly_bands(&self, response: &QueryRangeResponse) -> Result<AnomalyBands, ChartError> {
        match build_anomaly_bands(response, &self.palette) {
            Ok(bands) => {
                if bands.len() > self.palette.len() {
                    tracing::debug!(
                        "{} anomaly bands share a palette of {} colors",
                        bands.len(),
                        self.palette.len()
                    );
                }
                tracing::debug!("Built {} anomaly bands", bands.len());
                Ok(bands)
            }
            Err(e) => {
                tracing::warn!("Rejecting anomaly response: {}", e);
                Err(e)
            }
        }
    }
}
