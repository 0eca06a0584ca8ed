// Application layer - Simulation engine and the driver that refreshes it
pub mod dataset_store;
pub mod random_source;
pub mod refresh_service;
pub mod simulation;
