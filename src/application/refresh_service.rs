// Refresh service - Drives the simulation on a fixed wall-clock cadence
use crate::application::dataset_store::DatasetStore;
use crate::application::random_source::RandomSource;
use crate::application::simulation::{advance, generate};
use crate::domain::dataset::Dataset;
use anyhow::Context;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub type SharedRandomSource = Arc<Mutex<Box<dyn RandomSource + Send>>>;

#[derive(Clone)]
pub struct RefreshService {
    store: Arc<dyn DatasetStore>,
    rng: SharedRandomSource,
    period: Duration,
}

impl RefreshService {
    pub fn new(store: Arc<dyn DatasetStore>, rng: Box<dyn RandomSource + Send>, period: Duration) -> Self {
        Self {
            store,
            rng: Arc::new(Mutex::new(rng)),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Generate the session's first dataset and hold it
    pub async fn initialize(&self) -> Arc<Dataset> {
        let dataset = {
            let mut rng = self.rng.lock().await;
            generate(&mut **rng, Local::now())
        };
        let dataset = self.store.replace(dataset).await;

        tracing::info!(
            locations = dataset.locations.len(),
            trend_points = dataset.aqi_trend.len(),
            "Generated initial dataset"
        );
        dataset
    }

    /// Advance the held dataset by one simulation step
    pub async fn tick(&self) -> anyhow::Result<Arc<Dataset>> {
        let previous = self
            .store
            .current()
            .await
            .context("No dataset held yet, initialize must run before tick")?;

        let next = {
            let mut rng = self.rng.lock().await;
            advance(&previous, &mut **rng, Local::now())
        };
        let next = self.store.replace(next).await;

        for location in &next.locations {
            tracing::debug!(
                location = %location.id,
                aqi = location.aqi(),
                status = %location.status,
                "Location drifted"
            );
        }
        Ok(next)
    }

    /// Spawn the periodic refresh task. The first refresh happens one period
    /// after the call.
    pub fn start(&self) -> RefreshHandle {
        let service = self.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(service.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                match service.tick().await {
                    Ok(dataset) => {
                        let newest = dataset.latest_point().map(|p| p.time.as_str()).unwrap_or("-");
                        tracing::info!(newest = newest, "Refreshed dataset");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping refresh");
                    }
                }
            }
        });

        tracing::info!(period_secs = self.period.as_secs(), "Started refresh timer");
        RefreshHandle { task }
    }
}

/// Handle to the running refresh timer
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancel the timer. No refresh is in flight between ticks, so nothing is lost.
    pub fn stop(self) {
        self.task.abort();
        tracing::info!("Stopped refresh timer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::random_source::seeded_source;
    use crate::domain::dataset::TREND_LENGTH;
    use crate::infrastructure::memory_store::InMemoryDatasetStore;

    fn service(period: Duration) -> (RefreshService, Arc<InMemoryDatasetStore>) {
        let store = Arc::new(InMemoryDatasetStore::new());
        let service = RefreshService::new(store.clone(), Box::new(seeded_source(Some(21))), period);
        (service, store)
    }

    #[tokio::test]
    async fn test_tick_requires_initialize() {
        let (service, _store) = service(Duration::from_secs(30));
        assert!(service.tick().await.is_err());
    }

    #[tokio::test]
    async fn test_tick_replaces_snapshot() {
        let (service, store) = service(Duration::from_secs(30));
        let first = service.initialize().await;
        let second = service.tick().await.unwrap();

        let held = store.current().await.unwrap();
        assert!(Arc::ptr_eq(&held, &second));
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.aqi_trend.len(), TREND_LENGTH);
        assert_eq!(&second.aqi_trend[..TREND_LENGTH - 1], &first.aqi_trend[1..]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_refreshes_until_stopped() {
        let (service, store) = service(Duration::from_secs(30));
        let initial = service.initialize().await;
        let mut updates = store.subscribe();
        updates.borrow_and_update();

        let handle = service.start();
        assert!(handle.is_running());

        updates.changed().await.unwrap();
        let refreshed = updates.borrow_and_update().clone().unwrap();
        assert!(!Arc::ptr_eq(&initial, &refreshed));

        handle.stop();
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(!updates.has_changed().unwrap());
    }
}
