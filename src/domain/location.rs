// Location domain model
use super::air_quality::{classify, AqiStatus};
use super::telemetry::{Measurements, PollutantComparison};
use serde::{Deserialize, Serialize};

/// Fixed identity of a monitored zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationSeed {
    pub id: &'static str,
    pub name: &'static str,
    /// Added to the sampled base AQI so zones diverge visibly
    pub aqi_offset: f64,
}

pub const LOCATION_SEEDS: [LocationSeed; 3] = [
    LocationSeed {
        id: "cp",
        name: "Connaught Place",
        aqi_offset: 0.0,
    },
    LocationSeed {
        id: "ig",
        name: "India Gate",
        aqi_offset: -30.0,
    },
    LocationSeed {
        id: "dwarka",
        name: "Dwarka",
        aqi_offset: 50.0,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReading {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub status: AqiStatus,
}

impl LocationReading {
    /// Build a reading whose status is derived from `measurements.aqi`
    pub fn new(id: String, name: String, measurements: Measurements) -> Self {
        let status = classify(measurements.aqi);
        Self {
            id,
            name,
            measurements,
            status,
        }
    }

    /// Same identity, new values, status reclassified
    pub fn with_measurements(&self, measurements: Measurements) -> Self {
        Self::new(self.id.clone(), self.name.clone(), measurements)
    }

    pub fn aqi(&self) -> f64 {
        self.measurements.aqi
    }

    pub fn to_comparison(&self) -> PollutantComparison {
        PollutantComparison {
            name: self.name.clone(),
            pm25: self.measurements.pm25,
            pm10: self.measurements.pm10,
            o3: self.measurements.o3,
            no2: self.measurements.no2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(aqi: f64) -> Measurements {
        Measurements {
            aqi,
            temperature: 25.0,
            humidity: 50.0,
            pm25: 40.0,
            pm10: 80.0,
            o3: 20.0,
            no2: 30.0,
        }
    }

    #[test]
    fn test_status_follows_aqi() {
        let reading = LocationReading::new("cp".to_string(), "Connaught Place".to_string(), sample(45.0));
        assert_eq!(reading.status, AqiStatus::Good);

        let updated = reading.with_measurements(sample(320.0));
        assert_eq!(updated.id, "cp");
        assert_eq!(updated.status, AqiStatus::VeryPoor);
        assert_eq!(reading.status, AqiStatus::Good);
    }

    #[test]
    fn test_reading_wire_shape() {
        let reading = LocationReading::new("ig".to_string(), "India Gate".to_string(), sample(150.0));
        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(value["id"], "ig");
        assert_eq!(value["pm25"], 40.0);
        assert_eq!(value["status"], "Moderately Polluted");
    }

    #[test]
    fn test_to_comparison() {
        let reading = LocationReading::new("dwarka".to_string(), "Dwarka".to_string(), sample(90.0));
        let comparison = reading.to_comparison();
        assert_eq!(comparison.name, "Dwarka");
        assert_eq!(comparison.pm10, 80.0);
        assert_eq!(comparison.no2, 30.0);
    }
}
