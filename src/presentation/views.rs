// Response views derived from a dataset snapshot
use crate::domain::air_quality::{classify, color_token, gauge_fraction, style_token, AqiStatus};
use crate::domain::dataset::Dataset;
use crate::domain::location::LocationReading;
use crate::domain::telemetry::TimeSeriesPoint;
use serde::Serialize;

/// Classification and presentation tokens for a single AQI value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AqiLookup {
    pub aqi: f64,
    pub status: AqiStatus,
    pub color: &'static str,
    pub style_class: &'static str,
    pub gauge_fraction: f64,
}

impl AqiLookup {
    pub fn new(aqi: f64) -> Self {
        Self {
            aqi,
            status: classify(aqi),
            color: color_token(aqi),
            style_class: style_token(aqi),
            gauge_fraction: gauge_fraction(aqi),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLocation {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub lookup: AqiLookup,
}

impl From<&LocationReading> for RankedLocation {
    fn from(location: &LocationReading) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
            lookup: AqiLookup::new(location.aqi()),
        }
    }
}

/// Locations ranked worst first, with the extremes and newest trend point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub ranked: Vec<RankedLocation>,
    pub highest: Option<RankedLocation>,
    pub lowest: Option<RankedLocation>,
    pub latest: Option<TimeSeriesPoint>,
    pub refresh_interval_secs: u64,
}

impl DashboardSummary {
    pub fn new(dataset: &Dataset, refresh_interval_secs: u64) -> Self {
        Self {
            ranked: dataset.ranked_by_aqi().into_iter().map(RankedLocation::from).collect(),
            highest: dataset.highest_aqi().map(RankedLocation::from),
            lowest: dataset.lowest_aqi().map(RankedLocation::from),
            latest: dataset.latest_point().cloned(),
            refresh_interval_secs,
        }
    }
}
