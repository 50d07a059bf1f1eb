// Query-range response domain models
use super::value::Value;
use serde::Deserialize;
use std::collections::HashMap;

/// Raw sample as delivered by the metrics API: usually a numeric string,
/// sometimes a bare number, occasionally null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl RawValue {
    pub fn to_value(&self) -> Value {
        match self {
            RawValue::Number(n) => Value::from_f64(*n),
            RawValue::Text(s) => Value::parse(s),
            RawValue::Null => Value::NoData,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub values: Vec<(f64, RawValue)>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

#[cfg(test)]
impl RawSeries {
    pub fn new(values: Vec<(f64, RawValue)>) -> Self {
        Self {
            values,
            labels: HashMap::new(),
        }
    }
}

/// Top-level query-range payload. Every level is optional; absent levels
/// degrade to empty output rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRangeResponse {
    #[serde(default)]
    pub data: Option<QueryRangeData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRangeData {
    #[serde(default)]
    pub result: Option<Vec<RawSeries>>,
    #[serde(default)]
    pub new_result: Option<AnomalyEnvelope>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnomalyEnvelope {
    #[serde(default)]
    pub data: Option<AnomalyData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnomalyData {
    #[serde(default)]
    pub result: Option<Vec<AnomalyResult>>,
}

/// The four parallel series groups of one anomaly-detection result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyResult {
    #[serde(default)]
    pub series: Vec<AnomalySeries>,
    #[serde(default)]
    pub predicted_series: Vec<AnomalySeries>,
    #[serde(default)]
    pub upper_bound_series: Vec<AnomalySeries>,
    #[serde(default)]
    pub lower_bound_series: Vec<AnomalySeries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnomalySeries {
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub values: Vec<AnomalyPoint>,
}

/// Anomaly samples share the raw encoding of query-range samples, so a
/// string or null point degrades to `NoData` instead of rejecting the payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnomalyPoint {
    #[serde(default)]
    pub timestamp: RawValue,
    #[serde(default)]
    pub value: RawValue,
}

impl QueryRangeResponse {
    /// Series list of the plain query-range result; empty when absent.
    pub fn series(&self) -> &[RawSeries] {
        self.data
            .as_ref()
            .and_then(|d| d.result.as_deref())
            .unwrap_or(&[])
    }

    /// First anomaly-detection result, if the nested path is present.
    pub fn anomaly_result(&self) -> Option<&AnomalyResult> {
        self.data
            .as_ref()?
            .new_result
            .as_ref()?
            .data
            .as_ref()?
            .result
            .as_ref()?
            .first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_query_range() {
        let json = r#"{
            "data": {
                "result": [
                    {"values": [[1, "10"], [2, 20], [3, null]], "labels": {"service_name": "api"}}
                ]
            }
        }"#;
        let response: QueryRangeResponse = serde_json::from_str(json).unwrap();
        let series = response.series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].values[0], (1.0, RawValue::Text("10".to_string())));
        assert_eq!(series[0].values[1], (2.0, RawValue::Number(20.0)));
        assert_eq!(series[0].values[2], (3.0, RawValue::Null));
        assert_eq!(series[0].labels["service_name"], "api");
    }

    #[test]
    fn test_missing_levels_degrade_to_empty() {
        let empty: QueryRangeResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.series().is_empty());
        assert!(empty.anomaly_result().is_none());

        let null_result: QueryRangeResponse =
            serde_json::from_str(r#"{"data": {"result": null}}"#).unwrap();
        assert!(null_result.series().is_empty());
    }

    #[test]
    fn test_deserialize_anomaly_result() {
        let json = r#"{
            "data": {
                "newResult": {
                    "data": {
                        "result": [{
                            "series": [{"labels": {"service_name": "api"}, "values": [{"timestamp": 1, "value": 2.0}]}],
                            "predictedSeries": [{"values": [{"timestamp": 1, "value": 2.5}]}],
                            "upperBoundSeries": [{"values": [{"timestamp": 1, "value": 3.0}]}],
                            "lowerBoundSeries": [{"values": [{"timestamp": 1, "value": 1.0}]}]
                        }]
                    }
                }
            }
        }"#;
        let response: QueryRangeResponse = serde_json::from_str(json).unwrap();
        let result = response.anomaly_result().unwrap();
        assert_eq!(result.series.len(), 1);
        assert_eq!(result.predicted_series[0].values[0].value, RawValue::Number(2.5));
        assert_eq!(result.lower_bound_series[0].values[0].timestamp, RawValue::Number(1.0));
    }

    #[test]
    fn test_anomaly_points_accept_strings_and_nulls() {
        let json = r#"{
            "data": {
                "result": [{"values": [[1, "4"]]}],
                "newResult": {
                    "data": {
                        "result": [{
                            "series": [{"values": [{"timestamp": "1", "value": "2.5"}, {"timestamp": 2, "value": null}, {"timestamp": 3}]}]
                        }]
                    }
                }
            }
        }"#;
        let response: QueryRangeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.series().len(), 1);

        let points = &response.anomaly_result().unwrap().series[0].values;
        assert_eq!(points[0].timestamp.to_value(), Value::Number(1.0));
        assert_eq!(points[0].value.to_value(), Value::Number(2.5));
        assert_eq!(points[1].value, RawValue::Null);
        assert_eq!(points[2].value, RawValue::Null);
    }

    #[test]
    fn test_raw_value_to_value() {
        assert_eq!(RawValue::from("1.5").to_value(), Value::Number(1.5));
        assert_eq!(RawValue::from("n/a").to_value(), Value::NoData);
        assert_eq!(RawValue::from(f64::NAN).to_value(), Value::NoData);
        assert_eq!(RawValue::Null.to_value(), Value::NoData);
    }
}
