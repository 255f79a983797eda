//! Remote drawing store contract.
//!
//! The editor core only depends on the scene type crossing this
//! boundary; transport and authentication belong to the host
//! implementation.

use super::{BoxFuture, StorageError, StorageResult};
use crate::scene::Scene;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

/// Listing entry for a drawing held in the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEntry {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Contract implemented by cloud persistence collaborators.
pub trait RemoteStore: Send + Sync {
    /// Store a named scene, returning the new drawing's id.
    fn create(&self, name: &str, scene: &Scene) -> BoxFuture<'_, StorageResult<String>>;

    /// List all stored drawings.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<RemoteEntry>>>;

    /// Fetch a stored scene by id.
    fn read(&self, id: &str) -> BoxFuture<'_, StorageResult<Scene>>;
}

/// In-memory remote store used in tests and offline sessions.
#[derive(Default)]
pub struct MemoryRemoteStore {
    drawings: RwLock<Vec<(RemoteEntry, Scene)>>,
}

impl MemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RemoteStore for MemoryRemoteStore {
    fn create(&self, name: &str, scene: &Scene) -> BoxFuture<'_, StorageResult<String>> {
        let entry = RemoteEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        let scene = scene.clone();
        Box::pin(async move {
            let id = entry.id.clone();
            let mut drawings = self
                .drawings
                .write()
                .map_err(|e| StorageError::Io(format!("lock poisoned: {e}")))?;
            drawings.push((entry, scene));
            log::debug!("stored remote drawing {id}");
            Ok(id)
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<RemoteEntry>>> {
        Box::pin(async move {
            let drawings = self
                .drawings
                .read()
                .map_err(|e| StorageError::Io(format!("lock poisoned: {e}")))?;
            Ok(drawings.iter().map(|(entry, _)| entry.clone()).collect())
        })
    }

    fn read(&self, id: &str) -> BoxFuture<'_, StorageResult<Scene>> {
        let id = id.to_string();
        Box::pin(async move {
            let drawings = self
                .drawings
                .read()
                .map_err(|e| StorageError::Io(format!("lock poisoned: {e}")))?;
            drawings
                .iter()
                .find(|(entry, _)| entry.id == id)
                .map(|(_, scene)| scene.clone())
                .ok_or(StorageError::NotFound(id))
        })
    }
}
