// Dataset domain model - one complete snapshot of the simulated feed
use super::location::LocationReading;
use super::telemetry::{PollutantComparison, TimeSeriesPoint};
use serde::{Deserialize, Serialize};

/// Number of hourly points in the rolling trend
pub const TREND_LENGTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub locations: Vec<LocationReading>,
    /// Oldest first
    pub aqi_trend: Vec<TimeSeriesPoint>,
    /// Aligned 1:1 with `locations`
    pub pollutant_data: Vec<PollutantComparison>,
}

impl Dataset {
    /// Assemble a dataset, deriving the pollutant comparison from `locations`
    pub fn new(locations: Vec<LocationReading>, aqi_trend: Vec<TimeSeriesPoint>) -> Self {
        let pollutant_data = locations.iter().map(LocationReading::to_comparison).collect();
        Self {
            locations,
            aqi_trend,
            pollutant_data,
        }
    }

    pub fn latest_point(&self) -> Option<&TimeSeriesPoint> {
        self.aqi_trend.last()
    }

    /// Locations ordered from worst to best AQI
    pub fn ranked_by_aqi(&self) -> Vec<&LocationReading> {
        let mut ranked: Vec<&LocationReading> = self.locations.iter().collect();
        ranked.sort_by(|a, b| b.aqi().total_cmp(&a.aqi()));
        ranked
    }

    pub fn highest_aqi(&self) -> Option<&LocationReading> {
        self.locations.iter().max_by(|a, b| a.aqi().total_cmp(&b.aqi()))
    }

    pub fn lowest_aqi(&self) -> Option<&LocationReading> {
        self.locations.iter().min_by(|a, b| a.aqi().total_cmp(&b.aqi()))
    }
}
