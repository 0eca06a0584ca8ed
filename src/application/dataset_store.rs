// Store trait for the currently held dataset
use crate::domain::dataset::Dataset;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

/// Holds exactly one current dataset snapshot.
///
/// Snapshots are handed out as `Arc<Dataset>` and replaced wholesale, never
/// mutated in place, so a reader keeps a consistent view for as long as it
/// holds one.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// The current snapshot, if one has been stored
    async fn current(&self) -> Option<Arc<Dataset>>;

    /// Replace the held snapshot and return it
    async fn replace(&self, dataset: Dataset) -> Arc<Dataset>;

    /// Subscribe to every future replacement
    fn subscribe(&self) -> watch::Receiver<Option<Arc<Dataset>>>;
}
