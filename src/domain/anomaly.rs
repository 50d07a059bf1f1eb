// Anomaly-band overlays - bundles observed/predicted/bound series per service
use super::error::ChartError;
use super::palette::Palette;
use super::series::{AnomalySeries, QueryRangeResponse};
use super::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const SERVICE_NAME_LABEL: &str = "service_name";

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnomalyBand {
    #[serde(skip)]
    pub name: String,
    /// timestamps, observed, predicted, upper bound, lower bound;
    /// unparseable points are `NoData` and serialise as `null`
    pub data: [Vec<Value>; 5],
    pub color: String,
}

#[cfg(test)]
impl AnomalyBand {
    pub fn timestamps(&self) -> &[Value] {
        &self.data[0]
    }

    pub fn observed(&self) -> &[Value] {
        &self.data[1]
    }

    pub fn predicted(&self) -> &[Value] {
        &self.data[2]
    }

    pub fn upper_bound(&self) -> &[Value] {
        &self.data[3]
    }

    pub fn lower_bound(&self) -> &[Value] {
        &self.data[4]
    }
}

/// Bands keyed by service name, in first-seen order. Serialises as a JSON
/// object `{ name: { data, color } }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnomalyBands {
    bands: Vec<AnomalyBand>,
}

impl AnomalyBands {
    /// Insert a band; a band with the same name is replaced in place.
    fn insert(&mut self, band: AnomalyBand) {
        match self.bands.iter_mut().find(|b| b.name == band.name) {
            Some(existing) => *existing = band,
            None => self.bands.push(band),
        }
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }
}

#[cfg(test)]
impl AnomalyBands {
    pub fn get(&self, name: &str) -> Option<&AnomalyBand> {
        self.bands.iter().find(|b| b.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().map(|b| b.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Serialize for AnomalyBands {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bands.len()))?;
        for band in &self.bands {
            map.serialize_entry(&band.name, band)?;
        }
        map.end()
    }
}

fn check_group(
    group: &'static str,
    list: &[AnomalySeries],
    observed: &[AnomalySeries],
) -> Result<(), ChartError> {
    if list.len() < observed.len() {
        return Err(ChartError::MisalignedAnomalySeries {
            group,
            index: list.len(),
            expected: observed.len(),
            found: list.len(),
        });
    }

    for (index, (entry, obs)) in list.iter().zip(observed).enumerate() {
        if entry.values.len() != obs.values.len() {
            return Err(ChartError::MisalignedAnomalySeries {
                group,
                index,
                expected: obs.values.len(),
                found: entry.values.len(),
            });
        }
    }

    Ok(())
}

fn timestamps_of(series: &AnomalySeries) -> Vec<Value> {
    series.values.iter().map(|p| p.timestamp.to_value()).collect()
}

fn values_of(series: &AnomalySeries) -> Vec<Value> {
    series.values.iter().map(|p| p.value.to_value()).collect()
}

/// Build one band per observed series. The four groups are matched by
/// position and must already be aligned by the producer.
pub fn build_anomaly_bands(
    response: &QueryRangeResponse,
    palette: &Palette,
) -> Result<AnomalyBands, ChartError> {
    let Some(result) = response.anomaly_result() else {
        return Ok(AnomalyBands::default());
    };

    let observed = &result.series;
    check_group("predictedSeries", &result.predicted_series, observed)?;
    check_group("upperBoundSeries", &result.upper_bound_series, observed)?;
    check_group("lowerBoundSeries", &result.lower_bound_series, observed)?;

    let mut bands = AnomalyBands::default();

    for (index, series) in observed.iter().enumerate() {
        let name = series
            .labels
            .get(SERVICE_NAME_LABEL)
            .ok_or(ChartError::MissingLabel {
                index,
                label: SERVICE_NAME_LABEL,
            })?
            .clone();

        bands.insert(AnomalyBand {
            name,
            data: [
                timestamps_of(series),
                values_of(series),
                values_of(&result.predicted_series[index]),
                values_of(&result.upper_bound_series[index]),
                values_of(&result.lower_bound_series[index]),
            ],
            color: palette.color(index).to_string(),
        });
    }

    Ok(bands)
}
