//! Permission tree fetcher
//!
//! Holds the current tree snapshot and its loading/error state. Each fetch
//! takes a generation token under the state lock; when it completes, the
//! result is applied only if no newer fetch has started since. A slow stale
//! response therefore never overwrites a newer tree.
//!
//! A fetch that is dropped before it completes (aborted task, lost `select!`)
//! clears the loading flag it set, unless a newer fetch has taken over.
//!
//! Failures keep the previous tree. A fetch for a different user than the
//! current snapshot's owner drops the old snapshot immediately, so one
//! user's grants are never evaluated for another.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use navgate_common::{PlatformClass, Tree};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::error::FetchError;
use super::source::{TreeSource, UserContext};
use crate::constants::DEFAULT_FETCH_TIMEOUT_SECS;

/// An applied tree and where it came from
#[derive(Debug, Clone)]
pub struct TreeSnapshot {
    pub tree: Tree,
    pub username: String,
    pub platform: PlatformClass,
    pub fetched_at: DateTime<Utc>,
}

/// Point-in-time view of the fetcher for rendering
#[derive(Debug, Clone, Default)]
pub struct FetchStatus {
    /// True from the start of the latest fetch until it completes
    pub loading: bool,
    pub snapshot: Option<TreeSnapshot>,
    /// Error from the latest completed fetch, cleared by the next success
    pub error: Option<FetchError>,
}

impl FetchStatus {
    /// The current tree, if one has been applied
    pub fn tree(&self) -> Option<&Tree> {
        self.snapshot.as_ref().map(|s| &s.tree)
    }
}

#[derive(Debug, Default)]
struct FetchState {
    status: FetchStatus,
    /// Token of the most recently started fetch
    latest: u64,
}

impl FetchState {
    fn stop_loading(&mut self, token: u64) {
        if self.latest == token {
            self.status.loading = false;
        }
    }
}

/// Clears the loading flag if its fetch is dropped before completing
struct LoadingGuard {
    state: Arc<RwLock<FetchState>>,
    token: u64,
    armed: bool,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let token = self.token;
        match self.state.try_write() {
            Ok(mut state) => state.stop_loading(token),
            Err(_) => {
                // Lock is busy; finish the reset on the runtime if there is one
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    let state = self.state.clone();
                    handle.spawn(async move {
                        state.write().await.stop_loading(token);
                    });
                }
            }
        }
    }
}

/// Fetches and owns the permission tree
#[derive(Clone)]
pub struct TreeFetcher {
    source: Arc<dyn TreeSource>,
    state: Arc<RwLock<FetchState>>,
    timeout: Duration,
}

impl TreeFetcher {
    /// Create a fetcher with the default timeout
    pub fn new(source: Arc<dyn TreeSource>) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(FetchState::default())),
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    /// Bound the whole fetch, connection included
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the tree for `user` and apply it if still current
    ///
    /// Returns [`FetchError::Superseded`] when a newer fetch started before
    /// this one completed; nothing is applied in that case.
    pub async fn fetch(
        &self,
        user: &UserContext,
        platform: PlatformClass,
    ) -> Result<Tree, FetchError> {
        let token = {
            let mut state = self.state.write().await;
            state.latest += 1;
            state.status.loading = true;

            let user_changed = state
                .status
                .snapshot
                .as_ref()
                .is_some_and(|s| s.username != user.username);
            if user_changed {
                state.status.snapshot = None;
                state.status.error = None;
            }
            state.latest
        };
        let mut guard = LoadingGuard {
            state: self.state.clone(),
            token,
            armed: true,
        };

        debug!(user = %user.username, %platform, token, "fetching permission tree");

        let result = match tokio::time::timeout(
            self.timeout,
            self.source.fetch_tree(user, platform),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        };

        let mut state = self.state.write().await;
        guard.armed = false;
        if state.latest != token {
            debug!(user = %user.username, token, latest = state.latest, "discarding stale tree response");
            return Err(FetchError::Superseded);
        }
        state.stop_loading(token);

        match result {
            Ok(tree) => {
                info!(user = %user.username, %platform, nodes = tree.len(), "permission tree applied");
                state.status.snapshot = Some(TreeSnapshot {
                    tree: tree.clone(),
                    username: user.username.clone(),
                    platform,
                    fetched_at: Utc::now(),
                });
                state.status.error = None;
                Ok(tree)
            }
            Err(err) => {
                warn!(user = %user.username, error = %err, "permission tree fetch failed");
                state.status.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Drop the tree on logout; any fetch in flight is discarded on arrival
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.latest += 1;
        state.status = FetchStatus::default();
    }

    /// Snapshot of the current loading, tree and error state
    pub async fn status(&self) -> FetchStatus {
        self.state.read().await.status.clone()
    }

    /// The current tree, if any
    pub async fn tree(&self) -> Option<Tree> {
        self.state.read().await.status.tree().cloned()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.status.loading
    }
}
