// Time-series alignment - merges independently sampled series onto one shared axis
use super::series::{QueryRangeResponse, RawSeries};
use super::value::Value;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Caller-level chart flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Carried for the chart consumer; gaps are always filled with `NoData`.
    #[serde(default)]
    pub fill_spans: bool,
    #[serde(default, alias = "stacked")]
    pub stacked_bar_chart: bool,
    /// Per-series visibility overrides. When present, stacking is skipped;
    /// an explicit `null` counts as present.
    #[serde(default, alias = "hiddenGraph", deserialize_with = "supplied_map")]
    pub hidden_series: Option<HashMap<String, bool>>,
}

// Only called when the key exists, so absent stays `None` via `default`.
fn supplied_map<'de, D>(deserializer: D) -> Result<Option<HashMap<String, bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<HashMap<String, bool>>::deserialize(deserializer)?;
    Ok(Some(map.unwrap_or_default()))
}

/// Columnar chart data: the shared x-axis followed by one value row per
/// series. Serialises as `[[axis..], [row0..], [row1..], ..]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartMatrix {
    pub axis: Vec<f64>,
    pub rows: Vec<Vec<Value>>,
}

impl ChartMatrix {
    /// Number of rows including the axis row.
    pub fn height(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| r.len() == self.axis.len())
    }
}

impl Serialize for ChartMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height()))?;
        seq.serialize_element(&self.axis)?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

fn cmp_ts(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

// Folds -0.0 into 0.0 so both land on the same axis slot.
fn normalize_ts(t: f64) -> f64 {
    t + 0.0
}

/// Sorted union of every finite timestamp across all series.
pub fn compute_aligned_axis(series_list: &[RawSeries]) -> Vec<f64> {
    let mut axis: Vec<f64> = series_list
        .iter()
        .flat_map(|s| s.values.iter().map(|(t, _)| *t))
        .filter(|t| t.is_finite())
        .map(normalize_ts)
        .collect();

    axis.sort_by(cmp_ts);
    axis.dedup();
    axis
}

/// One value row per series, each exactly `axis.len()` long and positionally
/// aligned to `axis`. Timestamps a series lacks hold `Value::NoData`; if a
/// series repeats a timestamp the first sample wins.
pub fn fill_and_align(axis: &[f64], series_list: &[RawSeries]) -> Vec<Vec<Value>> {
    series_list
        .iter()
        .map(|series| {
            let mut row = vec![Value::NoData; axis.len()];
            let mut seen = vec![false; axis.len()];

            for (t, raw) in &series.values {
                let t = normalize_ts(*t);
                if let Ok(idx) = axis.binary_search_by(|probe| cmp_ts(probe, &t)) {
                    if !seen[idx] {
                        seen[idx] = true;
                        row[idx] = raw.to_value();
                    }
                }
            }

            row
        })
        .collect()
}

/// Cumulative layering: row `i` of the result is the sum of rows `i..N` of
/// the input at each column. The input is left untouched.
pub fn compute_stacked_series(rows: &[Vec<Value>]) -> Vec<Vec<Value>> {
    let mut stacked = rows.to_vec();

    for i in (0..stacked.len().saturating_sub(1)).rev() {
        let (head, tail) = stacked.split_at_mut(i + 1);
        let (current, above) = (&mut head[i], &tail[0]);
        for (cell, add) in current.iter_mut().zip(above.iter()) {
            *cell = *cell + *add;
        }
    }

    stacked
}

/// Build the columnar chart matrix for a query-range response.
pub fn build_chart_matrix(response: &QueryRangeResponse, options: &ChartOptions) -> ChartMatrix {
    let series_list = response.series();
    let axis = compute_aligned_axis(series_list);
    let aligned = fill_and_align(&axis, series_list);

    let rows = if options.stacked_bar_chart && options.hidden_series.is_none() {
        compute_stacked_series(&aligned)
    } else {
        aligned
    };

    ChartMatrix { axis, rows }
}
