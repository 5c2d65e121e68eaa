use crate::config::Settings;
use crate::scheduler::RefreshScheduler;
use crate::store::NewsletterStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Shared application state: the newsletter store and its refresh task.
pub struct AppState {
    pub store: Arc<NewsletterStore>,
    pub scheduler: JoinHandle<()>,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    ///
    /// Generates the first edition immediately and spawns a background
    /// `RefreshScheduler` that replaces it every `refresh_interval` until
    /// `shutdown_token` is cancelled.
    #[must_use]
    pub fn from_settings(settings: &Settings, shutdown_token: CancellationToken) -> Self {
        let store = Arc::new(NewsletterStore::from_entropy());
        let scheduler =
            RefreshScheduler::new(store.clone(), settings.refresh_interval).spawn(shutdown_token);

        Self { store, scheduler }
    }
}
