//! Interfaces to the storyboard model, its controller and the map model.

mod memory;
mod subscription;

use std::rc::Rc;

pub use memory::{index_between, MemoryStoryboard};
pub use subscription::{Listener, ListenerRegistry, Subscription, SubscriptionId};

use crate::scene::{IdeaId, Scene};

/// Notifications published by a storyboard model.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryboardEvent {
    SceneAdded(Scene),
    SceneRemoved(Scene),
    SceneContentUpdated(Scene),
    InputEnabled(bool),
}

impl StoryboardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            StoryboardEvent::SceneAdded(_) => "storyboardSceneAdded",
            StoryboardEvent::SceneRemoved(_) => "storyboardSceneRemoved",
            StoryboardEvent::SceneContentUpdated(_) => "storyboardSceneContentUpdated",
            StoryboardEvent::InputEnabled(_) => "inputEnabled",
        }
    }
}

/// Read side of a storyboard: snapshot, input capture flag and change feed.
///
/// Methods take `&self`; implementations are single-threaded and use interior
/// mutability, so the same model can be shared by several widgets.
pub trait StoryboardModel {
    /// Current scenes, in storyboard order.
    fn scenes(&self) -> Vec<Scene>;

    /// Whether the storyboard view currently owns input.
    fn input_enabled(&self) -> bool;

    fn set_input_enabled(&self, enabled: bool);

    /// Start receiving [`StoryboardEvent`]s.
    fn subscribe(&self) -> Subscription;

    /// Stop the feed behind `subscription`.
    fn unsubscribe(&self, subscription: Subscription);
}

/// Commands the storyboard widgets send outward. Fire and forget.
pub trait StoryboardController {
    fn add_scene(&self, idea_id: IdeaId);

    fn remove_scene(&self, scene: &Scene);

    /// Move `scene` right after `after`, or to the very start when `None`.
    fn move_scene_after(&self, scene: &Scene, after: Option<&Scene>);

    fn remove_scenes_for_idea_id(&self, idea_id: IdeaId);
}

/// The mind map the storyboard is built from.
pub trait MapModel {
    fn selected_node_id(&self) -> IdeaId;

    fn input_enabled(&self) -> bool;
}

impl<T: StoryboardModel + ?Sized> StoryboardModel for Rc<T> {
    fn scenes(&self) -> Vec<Scene> {
        (**self).scenes()
    }

    fn input_enabled(&self) -> bool {
        (**self).input_enabled()
    }

    fn set_input_enabled(&self, enabled: bool) {
        (**self).set_input_enabled(enabled)
    }

    fn subscribe(&self) -> Subscription {
        (**self).subscribe()
    }

    fn unsubscribe(&self, subscription: Subscription) {
        (**self).unsubscribe(subscription)
    }
}

impl<T: StoryboardController + ?Sized> StoryboardController for Rc<T> {
    fn add_scene(&self, idea_id: IdeaId) {
        (**self).add_scene(idea_id)
    }

    fn remove_scene(&self, scene: &Scene) {
        (**self).remove_scene(scene)
    }

    fn move_scene_after(&self, scene: &Scene, after: Option<&Scene>) {
        (**self).move_scene_after(scene, after)
    }

    fn remove_scenes_for_idea_id(&self, idea_id: IdeaId) {
        (**self).remove_scenes_for_idea_id(idea_id)
    }
}

impl<T: MapModel + ?Sized> MapModel for Rc<T> {
    fn selected_node_id(&self) -> IdeaId {
        (**self).selected_node_id()
    }

    fn input_enabled(&self) -> bool {
        (**self).input_enabled()
    }
}
