use super::SceneListView;
use crate::element::ItemId;
use crate::event::{Control, Gesture, Key, Modifiers};
use crate::focus::Geometry;
use crate::model::{StoryboardController, StoryboardModel};
use crate::scene::Scene;

/// What a gesture ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Focus moved to this item.
    FocusMoved(ItemId),
    /// A command went to the controller.
    CommandSent,
    /// Nothing happened: no focus, a boundary, or an unrelated key.
    Ignored,
}

impl<M, C, G> SceneListView<M, C, G>
where
    M: StoryboardModel + Clone,
    C: StoryboardController,
    G: Geometry,
{
    pub fn handle_gesture(&mut self, gesture: Gesture) -> GestureOutcome {
        match gesture {
            Gesture::Key { key, modifiers } => self.handle_key(key, modifiers),
            Gesture::Click { control } => self.handle_click(control),
        }
    }

    /// Arrows move focus; Ctrl/Meta + Left/Right reorder the focused scene.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> GestureOutcome {
        let Some(focused) = self.active_item() else {
            return GestureOutcome::Ignored;
        };

        if modifiers.none() {
            let order = self.items.order();
            let target = match key {
                Key::Left => self.geometry.prev(order, focused),
                Key::Right => self.geometry.next(order, focused),
                Key::Up => self.geometry.grid_up(order, focused),
                Key::Down => self.geometry.grid_down(order, focused),
                _ => return GestureOutcome::Ignored,
            };

            return match target.filter(|&id| self.items.contains(id)) {
                Some(target) => {
                    self.focus.focus(target);
                    log::trace!("[storyboard] {:?} moved focus {} -> {}", key, focused, target);
                    GestureOutcome::FocusMoved(target)
                }
                None => GestureOutcome::Ignored,
            };
        }

        if modifiers.reorder() {
            return match key {
                Key::Left => self.move_left(focused),
                Key::Right => self.move_right(focused),
                _ => GestureOutcome::Ignored,
            };
        }

        GestureOutcome::Ignored
    }

    /// Clicks on the scene controls act on the focused scene.
    pub fn handle_click(&mut self, control: Control) -> GestureOutcome {
        let Some(focused) = self.active_item() else {
            log::trace!("[storyboard] {:?} clicked with nothing focused", control);
            return GestureOutcome::Ignored;
        };

        match control {
            Control::RemoveScene => {
                let Some(scene) = self.scene_of(focused) else {
                    return GestureOutcome::Ignored;
                };
                log::debug!("[storyboard] remove scene {} at {}", scene.idea_id, scene.index);
                self.controller.remove_scene(&scene);
                GestureOutcome::CommandSent
            }
            Control::MoveSceneLeft => self.move_left(focused),
            Control::MoveSceneRight => self.move_right(focused),
        }
    }

    fn move_right(&self, focused: ItemId) -> GestureOutcome {
        let Some(next) = self.geometry.next(self.items.order(), focused) else {
            return GestureOutcome::Ignored;
        };
        let (Some(moving), Some(after)) = (self.scene_of(focused), self.scene_of(next)) else {
            return GestureOutcome::Ignored;
        };

        log::debug!(
            "[storyboard] move {} at {} after {} at {}",
            moving.idea_id,
            moving.index,
            after.idea_id,
            after.index
        );
        self.controller.move_scene_after(&moving, Some(&after));
        GestureOutcome::CommandSent
    }

    /// Moving left means "after the item two back", or to the start when the
    /// focused item is second.
    fn move_left(&self, focused: ItemId) -> GestureOutcome {
        let order = self.items.order();
        let Some(prev) = self.geometry.prev(order, focused) else {
            return GestureOutcome::Ignored;
        };
        let Some(moving) = self.scene_of(focused) else {
            return GestureOutcome::Ignored;
        };
        let after = self
            .geometry
            .prev(order, prev)
            .and_then(|id| self.scene_of(id));

        log::debug!(
            "[storyboard] move {} at {} after {:?}",
            moving.idea_id,
            moving.index,
            after.as_ref().map(|scene| scene.index)
        );
        self.controller.move_scene_after(&moving, after.as_ref());
        GestureOutcome::CommandSent
    }

    /// Focused item, provided the view is shown and the item still exists.
    fn active_item(&self) -> Option<ItemId> {
        if !self.visible {
            return None;
        }
        self.focused()
    }

    fn scene_of(&self, id: ItemId) -> Option<Scene> {
        self.items.get(id).map(|item| item.scene())
    }
}
