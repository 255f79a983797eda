//! In-memory storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::scene::Scene;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    scenes: RwLock<HashMap<String, Scene>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, scene: &Scene) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let scene = scene.clone();
        Box::pin(async move {
            let mut scenes = self
                .scenes
                .write()
                .map_err(|e| StorageError::Io(format!("lock poisoned: {e}")))?;
            scenes.insert(id, scene);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Scene>> {
        let id = id.to_string();
        Box::pin(async move {
            let scenes = self
                .scenes
                .read()
                .map_err(|e| StorageError::Io(format!("lock poisoned: {e}")))?;
            scenes
                .get(&id)
                .cloned()
                .ok_or(StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut scenes = self
                .scenes
                .write()
                .map_err(|e| StorageError::Io(format!("lock poisoned: {e}")))?;
            scenes.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let scenes = self
                .scenes
                .read()
                .map_err(|e| StorageError::Io(format!("lock poisoned: {e}")))?;
            Ok(scenes.keys().cloned().collect())
        })
    }
}
