use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::metrics::WORKSPACES_ACTIVE;
use crate::services::workspace::ProblemWorkspace;

/// Editor workspaces keyed by user id. A user's workspace is created from the
/// seed on first touch and lives until reset or process exit.
#[derive(Debug, Default)]
pub struct WorkspaceStore {
    inner: RwLock<HashMap<String, ProblemWorkspace>>,
}

impl WorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` against the user's workspace without taking the write lock
    /// when the workspace already exists.
    pub async fn read<R>(&self, user_id: &str, f: impl FnOnce(&ProblemWorkspace) -> R) -> R {
        {
            let workspaces = self.inner.read().await;
            if let Some(workspace) = workspaces.get(user_id) {
                return f(workspace);
            }
        }

        self.write(user_id, |workspace| f(workspace)).await
    }

    pub async fn write<R>(
        &self,
        user_id: &str,
        f: impl FnOnce(&mut ProblemWorkspace) -> R,
    ) -> R {
        let mut workspaces = self.inner.write().await;
        let workspace = workspaces.entry(user_id.to_string()).or_insert_with(|| {
            tracing::info!("Creating editor workspace for user {}", user_id);
            WORKSPACES_ACTIVE.inc();
            ProblemWorkspace::seeded()
        });
        f(workspace)
    }

    /// Puts the user's workspace back to the seed state.
    pub async fn reset(&self, user_id: &str) -> ProblemWorkspace {
        let mut workspaces = self.inner.write().await;
        let fresh = ProblemWorkspace::seeded();
        if workspaces
            .insert(user_id.to_string(), fresh.clone())
            .is_none()
        {
            WORKSPACES_ACTIVE.inc();
        }
        tracing::info!("Reset editor workspace for user {}", user_id);
        fresh
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
