// In-memory dataset store backed by a watch channel
use crate::application::dataset_store::DatasetStore;
use crate::domain::dataset::Dataset;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug)]
pub struct InMemoryDatasetStore {
    sender: watch::Sender<Option<Arc<Dataset>>>,
}

impl InMemoryDatasetStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }
}

impl Default for InMemoryDatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn current(&self) -> Option<Arc<Dataset>> {
        self.sender.borrow().clone()
    }

    async fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        self.sender.send_replace(Some(dataset.clone()));
        dataset
    }

    fn subscribe(&self) -> watch::Receiver<Option<Arc<Dataset>>> {
        self.sender.subscribe()
    }
}
