//! Snapshot-based undo/redo.

use crate::scene::Scene;

/// Maximum number of snapshots retained; the oldest are dropped first.
const MAX_SNAPSHOTS: usize = 50;

/// Undo/redo history over full scene snapshots.
///
/// Holds an ordered list of deep scene copies plus a cursor; the
/// snapshot at the cursor is the committed baseline of the live scene.
/// Every snapshot handed out is itself a deep copy, so later mutation
/// of the live scene never reaches back into history.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Scene>,
    cursor: usize,
}

impl History {
    /// Start history with the given scene as the sole baseline.
    pub fn new(initial: &Scene) -> Self {
        Self {
            snapshots: vec![initial.clone()],
            cursor: 0,
        }
    }

    /// Commit the scene as the new baseline.
    ///
    /// Snapshots beyond the cursor (an orphaned redo branch) are
    /// discarded first, then a deep copy is appended and the cursor
    /// advances to it.
    pub fn commit(&mut self, scene: &Scene) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(scene.clone());
        self.cursor = self.snapshots.len() - 1;

        if self.snapshots.len() > MAX_SNAPSHOTS {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back one snapshot, returning a deep copy to install as the
    /// live scene. No-op (None) at the oldest snapshot.
    pub fn undo(&mut self) -> Option<Scene> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.snapshots[self.cursor].clone())
    }

    /// Step forward one snapshot, returning a deep copy to install as
    /// the live scene. No-op (None) at the newest snapshot.
    pub fn redo(&mut self) -> Option<Scene> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.snapshots[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Drop everything and restart from a single snapshot of `scene`.
    /// Used when a new scene is loaded.
    pub fn reset(&mut self, scene: &Scene) {
        self.snapshots.clear();
        self.snapshots.push(scene.clone());
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, Shape, ShapeStyle};
    use kurbo::Point;

    fn scene_with(n: usize) -> Scene {
        let mut scene = Scene::new();
        for i in 0..n {
            scene.push(Shape::Rectangle(Rectangle::new(
                Point::new(i as f64 * 10.0, 0.0),
                20.0,
                20.0,
                &ShapeStyle::default(),
            )));
        }
        scene
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let empty = Scene::new();
        let mut history = History::new(&empty);

        let one = scene_with(1);
        history.commit(&one);
        let two = scene_with(2);
        history.commit(&two);

        let back = history.undo().unwrap();
        assert_eq!(back, one);
        let forward = history.redo().unwrap();
        assert_eq!(forward, two);
    }

    #[test]
    fn test_undo_beyond_range_is_noop() {
        let mut history = History::new(&Scene::new());
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_commit_truncates_redo_branch() {
        let mut history = History::new(&Scene::new());
        history.commit(&scene_with(1));
        history.commit(&scene_with(2));

        history.undo().unwrap();
        assert!(history.can_redo());

        let replacement = scene_with(3);
        history.commit(&replacement);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());

        // The new branch is intact.
        let back = history.undo().unwrap();
        assert_eq!(back, scene_with(1));
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let mut live = scene_with(1);
        let mut history = History::new(&live);
        let id = live.iter().next().unwrap().id();

        // Mutate the live scene after committing it.
        if let Some(Shape::Rectangle(rect)) = live.get_mut(id) {
            rect.width = 999.0;
        }

        // The stored snapshot must be unaffected.
        history.commit(&live);
        let restored = history.undo().unwrap();
        let Some(Shape::Rectangle(rect)) = restored.get(id) else {
            panic!("shape missing from snapshot");
        };
        assert!((rect.width - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_depth_is_bounded() {
        let mut history = History::new(&Scene::new());
        for i in 0..200 {
            history.commit(&scene_with(i % 5));
        }
        // Undo all the way back; must terminate well before 200 steps.
        let mut steps = 0;
        while history.undo().is_some() {
            steps += 1;
        }
        assert!(steps < MAX_SNAPSHOTS);
    }

    #[test]
    fn test_reset_discards_history() {
        let mut history = History::new(&Scene::new());
        history.commit(&scene_with(1));
        history.commit(&scene_with(2));

        history.reset(&scene_with(4));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
