use super::SceneListView;
use crate::element::{ItemArena, ItemId};
use crate::focus::Geometry;
use crate::model::{StoryboardController, StoryboardEvent, StoryboardModel};
use crate::scene::{Scene, SceneIndex, SceneTag};

impl<M, C, G> SceneListView<M, C, G>
where
    M: StoryboardModel + Clone,
    C: StoryboardController,
    G: Geometry,
{
    /// Apply one model event to the rendered items. No-op while hidden.
    pub fn apply_event(&mut self, event: StoryboardEvent) {
        if !self.visible {
            log::trace!("[storyboard] ignoring {} while hidden", event.name());
            return;
        }

        match event {
            StoryboardEvent::SceneAdded(scene) => self.scene_added(&scene),
            StoryboardEvent::SceneRemoved(scene) => self.scene_removed(&scene),
            StoryboardEvent::SceneContentUpdated(scene) => self.scene_content_updated(&scene),
            StoryboardEvent::InputEnabled(_) => {}
        }
    }

    /// Discard all items and rebuild them in snapshot order.
    pub(super) fn render_all(&mut self) {
        self.items.clear();
        self.focus.blur();

        let scenes = self.model.scenes();
        for scene in &scenes {
            self.items.push(self.template.instantiate(scene));
        }
        log::debug!("[storyboard] rendered {} scenes", self.items.len());
    }

    fn scene_added(&mut self, scene: &Scene) {
        let position = insertion_point(&self.items, scene.index);
        let id = self.items.insert(position, self.template.instantiate(scene));
        log::debug!(
            "[storyboard] added idea {} at index {} (position {})",
            scene.idea_id,
            scene.index,
            position
        );

        // Only once the item is in place and tagged. Reorders arrive as
        // remove + add, so the moved scene keeps focus.
        self.focus.focus(id);
        self.geometry.scroll_into_focus(self.items.order(), id);
    }

    fn scene_removed(&mut self, scene: &Scene) {
        let Some(id) = find_tagged(&self.items, scene.tag()) else {
            log::trace!(
                "[storyboard] no item for removed idea {} at {}",
                scene.idea_id,
                scene.index
            );
            return;
        };

        self.items.remove(id);
        if self.focus.focused() == Some(id) {
            self.focus.blur();
        }
        log::debug!("[storyboard] removed idea {} at {}", scene.idea_id, scene.index);
    }

    fn scene_content_updated(&mut self, scene: &Scene) {
        let Some(id) = find_tagged(&self.items, scene.tag()) else {
            log::trace!(
                "[storyboard] no item for updated idea {} at {}",
                scene.idea_id,
                scene.index
            );
            return;
        };

        if let Some(item) = self.items.get_mut(id) {
            item.set_title(&scene.title);
        }
    }
}

/// Position before the first item whose index is strictly greater than
/// `index`, or the end. Equal indices therefore insert after existing ones.
fn insertion_point(items: &ItemArena, index: SceneIndex) -> usize {
    items
        .iter()
        .position(|(_, item)| item.tag().index > index)
        .unwrap_or(items.len())
}

/// First item in document order carrying `tag`.
fn find_tagged(items: &ItemArena, tag: SceneTag) -> Option<ItemId> {
    items
        .iter()
        .find(|(_, item)| item.matches(tag))
        .map(|(id, _)| id)
}
