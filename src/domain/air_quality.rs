// Air quality classification - AQI bands and their presentation tokens
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper AQI value for the gauge scale
pub const AQI_SCALE_MAX: f64 = 500.0;

/// Inclusive upper edges of the first five bands; anything above is Severe
const BAND_UPPER_EDGES: [f64; 5] = [50.0, 100.0, 200.0, 300.0, 400.0];

/// Status category for an AQI value, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiStatus {
    Good,
    Satisfactory,
    #[serde(rename = "Moderately Polluted")]
    ModeratelyPolluted,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl AqiStatus {
    pub const ALL: [AqiStatus; 6] = [
        AqiStatus::Good,
        AqiStatus::Satisfactory,
        AqiStatus::ModeratelyPolluted,
        AqiStatus::Poor,
        AqiStatus::VeryPoor,
        AqiStatus::Severe,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AqiStatus::Good => "Good",
            AqiStatus::Satisfactory => "Satisfactory",
            AqiStatus::ModeratelyPolluted => "Moderately Polluted",
            AqiStatus::Poor => "Poor",
            AqiStatus::VeryPoor => "Very Poor",
            AqiStatus::Severe => "Severe",
        }
    }

    /// Display color used by gauges and badges
    pub fn color(&self) -> &'static str {
        match self {
            AqiStatus::Good => "#00E400",
            AqiStatus::Satisfactory => "#FFFF00",
            AqiStatus::ModeratelyPolluted => "#FF7E00",
            AqiStatus::Poor => "#FF0000",
            AqiStatus::VeryPoor => "#99004C",
            AqiStatus::Severe => "#7E0023",
        }
    }

    /// Style class token for cards
    pub fn style_class(&self) -> &'static str {
        match self {
            AqiStatus::Good => "aqi-good",
            AqiStatus::Satisfactory => "aqi-satisfactory",
            AqiStatus::ModeratelyPolluted => "aqi-moderate",
            AqiStatus::Poor => "aqi-poor",
            AqiStatus::VeryPoor => "aqi-very-poor",
            AqiStatus::Severe => "aqi-severe",
        }
    }
}

impl fmt::Display for AqiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an AQI value into its band.
///
/// Total over every input: values above 400 (including out-of-scale values
/// and NaN) fall through to `Severe`.
pub fn classify(aqi: f64) -> AqiStatus {
    BAND_UPPER_EDGES
        .iter()
        .position(|edge| aqi <= *edge)
        .map(|idx| AqiStatus::ALL[idx])
        .unwrap_or(AqiStatus::Severe)
}

pub fn color_token(aqi: f64) -> &'static str {
    classify(aqi).color()
}

pub fn style_token(aqi: f64) -> &'static str {
    classify(aqi).style_class()
}

/// Fraction of the gauge arc to fill, in [0, 1]. NaN fills the gauge, in
/// line with `classify` placing it in the Severe band.
pub fn gauge_fraction(aqi: f64) -> f64 {
    if aqi.is_nan() {
        return 1.0;
    }
    aqi.clamp(0.0, AQI_SCALE_MAX) / AQI_SCALE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_band_edges() {
        assert_eq!(classify(0.0), AqiStatus::Good);
        assert_eq!(classify(50.0), AqiStatus::Good);
        assert_eq!(classify(50.5), AqiStatus::Satisfactory);
        assert_eq!(classify(100.0), AqiStatus::Satisfactory);
        assert_eq!(classify(101.0), AqiStatus::ModeratelyPolluted);
        assert_eq!(classify(200.0), AqiStatus::ModeratelyPolluted);
        assert_eq!(classify(250.0), AqiStatus::Poor);
        assert_eq!(classify(300.0), AqiStatus::Poor);
        assert_eq!(classify(400.0), AqiStatus::VeryPoor);
        assert_eq!(classify(401.0), AqiStatus::Severe);
        assert_eq!(classify(500.0), AqiStatus::Severe);
    }

    #[test]
    fn test_classify_out_of_range() {
        assert_eq!(classify(-10.0), AqiStatus::Good);
        assert_eq!(classify(9_999.0), AqiStatus::Severe);
        assert_eq!(classify(f64::NAN), AqiStatus::Severe);
    }

    #[test]
    fn test_classify_is_monotone() {
        let mut previous = classify(0.0);
        for tenth in 0..=5000 {
            let status = classify(f64::from(tenth) / 10.0);
            assert!(status >= previous, "severity dropped at {}", tenth);
            previous = status;
        }
    }

    #[test]
    fn test_tokens_share_band_edges() {
        for aqi in [0.0, 50.0, 51.0, 100.0, 101.0, 200.0, 201.0, 300.0, 301.0, 400.0, 401.0, 500.0] {
            let status = classify(aqi);
            assert_eq!(color_token(aqi), status.color());
            assert_eq!(style_token(aqi), status.style_class());
        }
        assert_eq!(color_token(42.0), "#00E400");
        assert_eq!(style_token(150.0), "aqi-moderate");
        assert_eq!(color_token(450.0), "#7E0023");
    }

    #[test]
    fn test_status_serializes_to_label() {
        let json = serde_json::to_string(&AqiStatus::ModeratelyPolluted).unwrap();
        assert_eq!(json, "\"Moderately Polluted\"");
        assert_eq!(AqiStatus::VeryPoor.to_string(), "Very Poor");
    }

    #[test]
    fn test_gauge_fraction_clamps() {
        assert_eq!(gauge_fraction(250.0), 0.5);
        assert_eq!(gauge_fraction(-5.0), 0.0);
        assert_eq!(gauge_fraction(800.0), 1.0);
    }

    #[test]
    fn test_nan_lands_in_top_band_everywhere() {
        assert_eq!(classify(f64::NAN), AqiStatus::Severe);
        assert_eq!(color_token(f64::NAN), AqiStatus::Severe.color());
        assert_eq!(style_token(f64::NAN), AqiStatus::Severe.style_class());
        assert_eq!(gauge_fraction(f64::NAN), 1.0);
    }
}
