use super::store::CatalogStore;
use crate::catalog::load_file;
use crate::error::LoadError;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

/// Fixed reload cadence for the served catalog.
pub const RELOAD_PERIOD: Duration = Duration::from_secs(2);

/// Periodically reloads the source file and publishes good catalogs.
///
/// A failed tick leaves the current snapshot in place; the error is logged
/// and the next tick tries again.
pub struct ReloadScheduler {
    source: PathBuf,
    store: Arc<CatalogStore>,
    period: Duration,
}

impl ReloadScheduler {
    pub fn new(source: impl Into<PathBuf>, store: Arc<CatalogStore>) -> Self {
        Self {
            source: source.into(),
            store,
            period: RELOAD_PERIOD,
        }
    }

    /// Override the reload period
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Run one reload: load the source and, on success, publish it.
    ///
    /// Returns the generation of the newly published snapshot.
    pub async fn tick(&self) -> Result<u64, LoadError> {
        let library = load_file(&self.source).await?;
        let packages = library.package_count();
        let generation = self.store.publish(library);
        info!(
            path = %self.source.display(),
            generation,
            packages,
            "catalog reloaded"
        );
        Ok(generation)
    }

    /// Start the reload loop on the current tokio runtime.
    ///
    /// The first reload happens one period from now; the startup load is
    /// expected to have been published already.
    pub fn spawn(self) -> ReloadHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.period, self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            info!(
                path = %self.source.display(),
                period_ms = self.period.as_millis() as u64,
                "catalog reload task started"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(err) = self.tick().await {
                            warn!(
                                path = %self.source.display(),
                                generation = self.store.generation(),
                                error = %err,
                                "catalog reload failed; keeping previous snapshot"
                            );
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        // A dropped sender counts as a shutdown request too.
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            info!("catalog reload task stopped");
        });

        ReloadHandle { shutdown_tx, task }
    }
}

/// Owner-side handle of a running reload task.
pub struct ReloadHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ReloadHandle {
    /// Signal the task to stop and wait for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(err) = self.task.await {
            warn!(error = %err, "catalog reload task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
