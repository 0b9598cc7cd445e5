use crate::error::{Error, Result};
use common::Job;
use repository::JobRepository;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(Arc<Vec<Job>>),
}

/// Process-wide view of the job collection.
#[derive(Debug, Clone)]
pub struct Session {
    pub load: LoadState,
    pub show_advisory: bool,
}

/// Shared application state
///
/// The loader task is the only writer of `load`; both the loader and the
/// advisory timer may clear `show_advisory`, whichever gets there first.
#[derive(Clone)]
pub struct AppState {
    session: Arc<RwLock<Session>>,
    shutdown: CancellationToken,
    /// Cancelled once the load resolves (or on shutdown).
    settled: CancellationToken,
}

impl AppState {
    fn from_session(session: Session) -> Self {
        let shutdown = CancellationToken::new();
        let settled = shutdown.child_token();
        Self {
            session: Arc::new(RwLock::new(session)),
            shutdown,
            settled,
        }
    }

    /// Starts the one-shot load and the advisory timer.
    pub fn start(repository: JobRepository, advisory_window: Duration) -> Self {
        let state = Self::from_session(Session {
            load: LoadState::Loading,
            show_advisory: true,
        });
        state.spawn_loader(repository);
        state.spawn_advisory_timer(advisory_window);
        state
    }

    /// Builds a state whose load has already finished, with no background
    /// tasks. Used when the collection comes from somewhere other than
    /// [`JobRepository`], and in tests.
    pub fn resolved(load: LoadState) -> Self {
        let state = Self::from_session(Session {
            load,
            show_advisory: false,
        });
        state.settled.cancel();
        state
    }

    /// Builds a state that has already loaded `jobs`; see [`AppState::resolved`].
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self::resolved(LoadState::Loaded(Arc::new(jobs)))
    }

    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// The loaded collection, or the reason it is not available.
    pub async fn jobs(&self) -> Result<Arc<Vec<Job>>> {
        match &self.session.read().await.load {
            LoadState::Loading => Err(Error::Loading),
            LoadState::Failed(message) => Err(Error::LoadFailed(message.clone())),
            LoadState::Loaded(jobs) => Ok(Arc::clone(jobs)),
        }
    }

    /// Resolves once the load has finished, successfully or not.
    pub async fn settled(&self) {
        self.settled.cancelled().await
    }

    /// Abandons an in-flight load; its result will be discarded.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn spawn_loader(&self, repository: JobRepository) {
        let state = self.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                result = repository.load() => result,
                _ = state.shutdown.cancelled() => {
                    tracing::debug!("Shutting down before job listings arrived, discarding load");
                    return;
                }
            };

            let load = match outcome {
                Ok(jobs) => {
                    tracing::info!(count = jobs.len(), "Job listings loaded");
                    LoadState::Loaded(Arc::new(jobs))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load job listings");
                    LoadState::Failed(e.to_string())
                }
            };

            {
                let mut session = state.session.write().await;
                session.load = load;
                session.show_advisory = false;
            }
            state.settled.cancel();
        });
    }

    fn spawn_advisory_timer(&self, window: Duration) {
        let state = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(window) => {
                    state.session.write().await.show_advisory = false;
                    tracing::debug!(?window, "Advisory window elapsed");
                }
                _ = state.settled.cancelled() => {
                    tracing::debug!("Load settled before the advisory window elapsed");
                }
            }
        });
    }
}
