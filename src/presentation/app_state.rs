// Application state for HTTP handlers
use crate::application::dataset_store::DatasetStore;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DatasetStore>,
    pub refresh_interval: Duration,
}
