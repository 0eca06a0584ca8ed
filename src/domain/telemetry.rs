// Telemetry data domain models
use serde::{Deserialize, Serialize};

/// The environmental fields sampled for a location or a trend point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub aqi: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
}

/// Drift fraction for fields with no slower or noisier behaviour
pub const DEFAULT_CHANGE_FRACTION: f64 = 0.1;

/// Domain bounds, drift fraction and display precision for one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldProfile {
    pub min: f64,
    pub max: f64,
    pub fraction: f64,
    pub precision: i32,
}

impl FieldProfile {
    pub const fn new(min: f64, max: f64, fraction: f64, precision: i32) -> Self {
        Self {
            min,
            max,
            fraction,
            precision,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Round to the configured number of decimals
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision);
        (value * scale).round() / scale
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementProfile {
    pub aqi: FieldProfile,
    pub temperature: FieldProfile,
    pub humidity: FieldProfile,
    pub pm25: FieldProfile,
    pub pm10: FieldProfile,
    pub o3: FieldProfile,
    pub no2: FieldProfile,
}

impl MeasurementProfile {
    /// Apply `f` to every (profile, value) pair, producing new measurements
    pub fn map(&self, current: &Measurements, mut f: impl FnMut(&FieldProfile, f64) -> f64) -> Measurements {
        Measurements {
            aqi: f(&self.aqi, current.aqi),
            temperature: f(&self.temperature, current.temperature),
            humidity: f(&self.humidity, current.humidity),
            pm25: f(&self.pm25, current.pm25),
            pm10: f(&self.pm10, current.pm10),
            o3: f(&self.o3, current.o3),
            no2: f(&self.no2, current.no2),
        }
    }

    /// True when every field lies inside its bounds
    pub fn contains(&self, m: &Measurements) -> bool {
        self.aqi.contains(m.aqi)
            && self.temperature.contains(m.temperature)
            && self.humidity.contains(m.humidity)
            && self.pm25.contains(m.pm25)
            && self.pm10.contains(m.pm10)
            && self.o3.contains(m.o3)
            && self.no2.contains(m.no2)
    }
}

/// Bounds for per-location readings
pub const LOCATION_PROFILE: MeasurementProfile = MeasurementProfile {
    aqi: FieldProfile::new(0.0, 500.0, 0.08, 0),
    temperature: FieldProfile::new(15.0, 45.0, 0.05, 1),
    humidity: FieldProfile::new(20.0, 80.0, 0.05, 0),
    pm25: FieldProfile::new(5.0, 300.0, 0.08, 0),
    pm10: FieldProfile::new(10.0, 500.0, 0.08, 0),
    o3: FieldProfile::new(10.0, 300.0, 0.08, 0),
    no2: FieldProfile::new(20.0, 200.0, 0.08, 0),
};

/// Range a location's base AQI is drawn from before its offset is applied
pub const LOCATION_BASE_AQI: (i64, i64) = (20, 400);

/// Bounds for trend points. Pollutant bounds intentionally differ from
/// LOCATION_PROFILE.
pub const TREND_PROFILE: MeasurementProfile = MeasurementProfile {
    aqi: FieldProfile::new(30.0, 350.0, DEFAULT_CHANGE_FRACTION, 0),
    temperature: FieldProfile::new(15.0, 45.0, 0.05, 1),
    humidity: FieldProfile::new(20.0, 80.0, 0.05, 0),
    pm25: FieldProfile::new(5.0, 250.0, 0.08, 0),
    pm10: FieldProfile::new(15.0, 450.0, 0.08, 0),
    o3: FieldProfile::new(10.0, 250.0, 0.08, 0),
    no2: FieldProfile::new(20.0, 180.0, 0.08, 0),
};

/// One hourly sample of the rolling trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub time: String,
    #[serde(flatten)]
    pub measurements: Measurements,
}

impl TimeSeriesPoint {
    pub fn new(time: String, measurements: Measurements) -> Self {
        Self { time, measurements }
    }
}

/// Pollutant concentrations for one location, as charted side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantComparison {
    pub name: String,
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
}
