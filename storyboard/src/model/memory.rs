use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{
    ListenerRegistry, StoryboardController, StoryboardEvent, StoryboardModel, Subscription,
};
use crate::scene::{IdeaId, Scene, SceneIndex, SceneTag};

/// Index for a scene placed between `prev` and `next`.
///
/// With no predecessor a positive successor index is halved, so keys stay
/// positive for as long as possible.
pub fn index_between(prev: Option<SceneIndex>, next: Option<SceneIndex>) -> SceneIndex {
    let value = match (prev.map(SceneIndex::value), next.map(SceneIndex::value)) {
        (Some(a), Some(b)) => (a + b) / 2.0,
        (Some(a), None) => a + 1.0,
        (None, Some(b)) if b > 0.0 => b / 2.0,
        (None, Some(b)) => b - 1.0,
        (None, None) => 1.0,
    };
    SceneIndex(value)
}

/// Storyboard held in memory, acting as both model and controller.
///
/// Scenes are kept sorted by index. Every mutation is published to
/// subscribers as it happens.
#[derive(Debug, Default)]
pub struct MemoryStoryboard {
    scenes: RefCell<Vec<Scene>>,
    titles: RefCell<HashMap<IdeaId, String>>,
    input_enabled: Cell<bool>,
    listeners: ListenerRegistry,
}

impl MemoryStoryboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with `scenes`; their titles become the idea titles.
    pub fn with_scenes(scenes: Vec<Scene>) -> Self {
        let storyboard = Self::new();
        {
            let mut titles = storyboard.titles.borrow_mut();
            for scene in &scenes {
                titles.insert(scene.idea_id, scene.title.clone());
            }
        }
        let mut scenes = scenes;
        scenes.sort_by(|a, b| a.index.value().total_cmp(&b.index.value()));
        *storyboard.scenes.borrow_mut() = scenes;
        storyboard
    }

    pub fn idea_title(&self, idea_id: IdeaId) -> String {
        self.titles
            .borrow()
            .get(&idea_id)
            .cloned()
            .unwrap_or_else(|| format!("Idea {idea_id}"))
    }

    /// Rename an idea and refresh every scene that shows it.
    pub fn set_idea_title(&self, idea_id: IdeaId, title: impl Into<String>) {
        let title = title.into();
        self.titles.borrow_mut().insert(idea_id, title.clone());

        let updated: Vec<Scene> = {
            let mut scenes = self.scenes.borrow_mut();
            scenes
                .iter_mut()
                .filter(|scene| scene.idea_id == idea_id)
                .map(|scene| {
                    scene.title = title.clone();
                    scene.clone()
                })
                .collect()
        };
        for scene in updated {
            self.listeners
                .dispatch(&StoryboardEvent::SceneContentUpdated(scene));
        }
    }

    /// Insert a fully specified scene and announce it.
    pub fn insert_scene(&self, scene: Scene) {
        self.insert_sorted(scene.clone());
        log::debug!(
            "[memory] added idea {} at {} ({:?})",
            scene.idea_id,
            scene.index,
            scene.title
        );
        self.listeners.dispatch(&StoryboardEvent::SceneAdded(scene));
    }

    /// Publish `event` as-is, without touching the stored scenes.
    pub fn dispatch(&self, event: StoryboardEvent) {
        self.listeners.dispatch(&event);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn insert_sorted(&self, scene: Scene) {
        let mut scenes = self.scenes.borrow_mut();
        let position = scenes
            .iter()
            .position(|existing| existing.index > scene.index)
            .unwrap_or(scenes.len());
        scenes.insert(position, scene);
    }

    fn take_scene(&self, tag: SceneTag) -> Option<Scene> {
        let mut scenes = self.scenes.borrow_mut();
        let position = scenes.iter().position(|scene| scene.tag() == tag)?;
        Some(scenes.remove(position))
    }
}

impl StoryboardModel for MemoryStoryboard {
    fn scenes(&self) -> Vec<Scene> {
        self.scenes.borrow().clone()
    }

    fn input_enabled(&self) -> bool {
        self.input_enabled.get()
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.input_enabled.set(enabled);
        self.listeners
            .dispatch(&StoryboardEvent::InputEnabled(enabled));
    }

    fn subscribe(&self) -> Subscription {
        self.listeners.subscribe()
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.listeners.unsubscribe(subscription);
    }
}

impl StoryboardController for MemoryStoryboard {
    fn add_scene(&self, idea_id: IdeaId) {
        let last = self.scenes.borrow().last().map(|scene| scene.index);
        let index = index_between(last, None);
        self.insert_scene(Scene {
            idea_id,
            title: self.idea_title(idea_id),
            index,
        });
    }

    fn remove_scene(&self, scene: &Scene) {
        let Some(removed) = self.take_scene(scene.tag()) else {
            log::debug!(
                "[memory] remove ignored, no scene {} at {}",
                scene.idea_id,
                scene.index
            );
            return;
        };
        self.listeners
            .dispatch(&StoryboardEvent::SceneRemoved(removed));
    }

    fn move_scene_after(&self, scene: &Scene, after: Option<&Scene>) {
        let Some(moving) = self.take_scene(scene.tag()) else {
            return;
        };

        let neighbours = {
            let scenes = self.scenes.borrow();
            match after {
                Some(after) => scenes
                    .iter()
                    .position(|s| s.tag() == after.tag())
                    .map(|position| {
                        (
                            Some(scenes[position].index),
                            scenes.get(position + 1).map(|s| s.index),
                        )
                    }),
                None => Some((None, scenes.first().map(|s| s.index))),
            }
        };

        let Some((prev, next)) = neighbours else {
            log::debug!("[memory] move ignored, anchor scene not found");
            self.insert_sorted(moving);
            return;
        };

        let moved = Scene {
            index: index_between(prev, next),
            ..moving.clone()
        };
        self.listeners
            .dispatch(&StoryboardEvent::SceneRemoved(moving));
        self.insert_scene(moved);
    }

    fn remove_scenes_for_idea_id(&self, idea_id: IdeaId) {
        let removed: Vec<Scene> = {
            let mut scenes = self.scenes.borrow_mut();
            let (removed, kept): (Vec<Scene>, Vec<Scene>) = scenes
                .drain(..)
                .partition(|scene| scene.idea_id == idea_id);
            *scenes = kept;
            removed
        };
        for scene in removed {
            self.listeners
                .dispatch(&StoryboardEvent::SceneRemoved(scene));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_between_neighbours_is_midpoint() {
        let index = index_between(Some(SceneIndex(1.0)), Some(SceneIndex(2.0)));
        assert_eq!(index, SceneIndex(1.5));
    }

    #[test]
    fn index_before_first_positive_is_halved() {
        assert_eq!(index_between(None, Some(SceneIndex(3.0))), SceneIndex(1.5));
        assert_eq!(index_between(None, Some(SceneIndex(0.0))), SceneIndex(-1.0));
    }

    #[test]
    fn index_after_last_adds_one() {
        assert_eq!(index_between(Some(SceneIndex(5.0)), None), SceneIndex(6.0));
        assert_eq!(index_between(None, None), SceneIndex(1.0));
    }
}
