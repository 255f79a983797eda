//! File-based storage implementation.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::scene::Scene;
use std::fs;
use std::path::PathBuf;

/// Scene storage backed by JSON files in a directory, one file per
/// drawing in the interchange format.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `base_path`, creating the
    /// directory if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        fs::create_dir_all(&base_path)
            .map_err(|e| StorageError::Io(format!("failed to create {}: {e}", base_path.display())))?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// File path for a drawing id, with unsafe characters replaced.
    fn scene_path(&self, id: &str) -> PathBuf {
        let safe: String = id
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{safe}.json"))
    }
}

impl Storage for FileStorage {
    fn save(&self, id: &str, scene: &Scene) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.scene_path(id);
        let json = scene.to_json();
        Box::pin(async move {
            let json = json.map_err(|e| StorageError::Serialization(e.to_string()))?;
            log::debug!("writing scene to {}", path.display());
            fs::write(&path, json)
                .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", path.display())))
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Scene>> {
        let path = self.scene_path(id);
        let id = id.to_string();
        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(id));
            }
            let json = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("failed to read {}: {e}", path.display())))?;
            Scene::from_json(&json).map_err(|e| StorageError::Serialization(e.to_string()))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.scene_path(id);
        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::Io(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        let base = self.base_path.clone();
        Box::pin(async move {
            let entries = fs::read_dir(&base)
                .map_err(|e| StorageError::Io(format!("failed to read {}: {e}", base.display())))?;
            let mut ids = Vec::new();
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        ids.push(stem.to_string());
                    }
                }
            }
            Ok(ids)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Shape, ShapeStyle};
    use crate::storage::block_on;
    use kurbo::Point;
    use tempfile::tempdir;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(Shape::Circle(Circle::new(
            Point::new(40.0, 40.0),
            15.0,
            &ShapeStyle::default(),
        )));
        scene
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let scene = sample_scene();

        block_on(storage.save("floor-plan", &scene)).unwrap();
        let loaded = block_on(storage.load("floor-plan")).unwrap();
        assert_eq!(scene, loaded);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let result = block_on(storage.load("missing"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file_is_a_format_error() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        fs::write(dir.path().join("bad.json"), "{ not a scene").unwrap();

        let result = block_on(storage.load("bad"));
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_list_and_delete() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let scene = sample_scene();

        block_on(storage.save("one", &scene)).unwrap();
        block_on(storage.save("two", &scene)).unwrap();
        let mut ids = block_on(storage.list()).unwrap();
        ids.sort();
        assert_eq!(ids, vec!["one".to_string(), "two".to_string()]);

        block_on(storage.delete("one")).unwrap();
        assert_eq!(block_on(storage.list()).unwrap(), vec!["two".to_string()]);
        // Deleting a missing id is not an error.
        block_on(storage.delete("one")).unwrap();
    }

    #[test]
    fn test_id_sanitization() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let scene = sample_scene();

        block_on(storage.save("kitchen/plan: v2", &scene)).unwrap();
        let loaded = block_on(storage.load("kitchen/plan: v2")).unwrap();
        assert_eq!(scene, loaded);
    }
}
