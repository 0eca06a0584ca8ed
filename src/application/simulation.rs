// Simulation engine - Synthetic AQI datasets that drift in small bounded steps
use crate::application::random_source::RandomSource;
use crate::domain::dataset::{Dataset, TREND_LENGTH};
use crate::domain::location::{LocationReading, LocationSeed, LOCATION_SEEDS};
use crate::domain::telemetry::{
    FieldProfile, Measurements, MeasurementProfile, TimeSeriesPoint, LOCATION_BASE_AQI,
    LOCATION_PROFILE, TREND_PROFILE,
};
use chrono::{DateTime, Duration, TimeZone};
use std::fmt::Display;

/// Smallest perturbation magnitude a step may use
const MIN_STEP_MAGNITUDE: f64 = 5.0;

/// Uniform integer over the inclusive interval [min, max]
pub fn sample_range<R: RandomSource + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let span = (max - min + 1) as f64;
    let draw = (rng.next_unit() * span).floor() as i64 + min;
    draw.min(max)
}

/// Move `current` by a symmetric random perturbation and clamp to [min, max].
///
/// The perturbation is uniform in `[-m, m]` where `m = max(5, current * fraction)`,
/// so values near zero still move visibly.
pub fn step<R: RandomSource + ?Sized>(rng: &mut R, current: f64, min: f64, max: f64, fraction: f64) -> f64 {
    let magnitude = (current * fraction).max(MIN_STEP_MAGNITUDE);
    let change = (rng.next_unit() - 0.5) * 2.0 * magnitude;
    (current + change).max(min).min(max)
}

/// Label shown on trend charts, e.g. `03:07 PM`, in the zone of `at`
pub fn time_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%I:%M %p").to_string()
}

/// Build a fresh dataset: three seeded locations and a 24 hour trend ending at `now`.
///
/// Trend points are spaced one elapsed hour apart, so labels follow the
/// zone's clock across offset changes.
pub fn generate<R, Tz>(rng: &mut R, now: DateTime<Tz>) -> Dataset
where
    R: RandomSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let locations = LOCATION_SEEDS
        .iter()
        .map(|seed| generate_location(rng, seed))
        .collect();

    let aqi_trend = (0..TREND_LENGTH as i64)
        .rev()
        .map(|hours_ago| {
            let at = now.clone() - Duration::hours(hours_ago);
            TimeSeriesPoint::new(time_label(&at), sample_measurements(rng, &TREND_PROFILE, None))
        })
        .collect();

    Dataset::new(locations, aqi_trend)
}

/// Produce the next dataset from `previous` without modifying it.
///
/// Every location field drifts by one step and the status is reclassified from
/// the new AQI. The trend drops its oldest point and gains one stepped from the
/// previous newest point, labelled with `now`.
///
/// # Panics
///
/// Panics if `previous` has an empty trend, which only happens when a dataset
/// was not built by [`generate`].
pub fn advance<R, Tz>(previous: &Dataset, rng: &mut R, now: DateTime<Tz>) -> Dataset
where
    R: RandomSource + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(newest) = previous.latest_point() else {
        panic!("advance requires a dataset with at least one trend point");
    };

    let locations = previous
        .locations
        .iter()
        .map(|location| location.with_measurements(drift(rng, &LOCATION_PROFILE, &location.measurements)))
        .collect();

    let next_point = TimeSeriesPoint::new(time_label(&now), drift(rng, &TREND_PROFILE, &newest.measurements));
    let aqi_trend = previous
        .aqi_trend
        .iter()
        .skip(1)
        .cloned()
        .chain(std::iter::once(next_point))
        .collect();

    Dataset::new(locations, aqi_trend)
}

fn generate_location<R: RandomSource + ?Sized>(rng: &mut R, seed: &LocationSeed) -> LocationReading {
    let (base_min, base_max) = LOCATION_BASE_AQI;
    let base = sample_range(rng, base_min, base_max) as f64;
    let aqi = (base + seed.aqi_offset).clamp(LOCATION_PROFILE.aqi.min, LOCATION_PROFILE.aqi.max);
    let measurements = sample_measurements(rng, &LOCATION_PROFILE, Some(aqi));
    LocationReading::new(seed.id.to_string(), seed.name.to_string(), measurements)
}

/// Sample every field from its bounds, or take `aqi` as given
fn sample_measurements<R: RandomSource + ?Sized>(
    rng: &mut R,
    profile: &MeasurementProfile,
    aqi: Option<f64>,
) -> Measurements {
    let aqi = aqi.unwrap_or_else(|| sample_field(rng, &profile.aqi));
    Measurements {
        aqi,
        temperature: sample_field(rng, &profile.temperature),
        humidity: sample_field(rng, &profile.humidity),
        pm25: sample_field(rng, &profile.pm25),
        pm10: sample_field(rng, &profile.pm10),
        o3: sample_field(rng, &profile.o3),
        no2: sample_field(rng, &profile.no2),
    }
}

fn sample_field<R: RandomSource + ?Sized>(rng: &mut R, field: &FieldProfile) -> f64 {
    sample_range(rng, field.min as i64, field.max as i64) as f64
}

fn drift<R: RandomSource + ?Sized>(rng: &mut R, profile: &MeasurementProfile, current: &Measurements) -> Measurements {
    let next = profile.map(current, |field, value| {
        field.round(step(rng, value, field.min, field.max, field.fraction))
    });
    debug_assert!(profile.contains(&next), "drift escaped its bounds: {:?}", next);
    next
}
