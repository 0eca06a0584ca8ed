// Domain layer - Pure values shared by the engine and its consumers
pub mod air_quality;
pub mod dataset;
pub mod location;
pub mod telemetry;
