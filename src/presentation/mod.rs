// Presentation layer - HTTP surface over the held dataset
pub mod app_state;
pub mod handlers;
pub mod views;
