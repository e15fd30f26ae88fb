//! Storyboard menu: add a scene, or drop all scenes of an idea.

use crate::model::{Listener, MapModel, StoryboardController, StoryboardEvent, StoryboardModel};

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    AddScene,
    RemoveScenesForIdea,
}

impl MenuAction {
    pub fn role(self) -> &'static str {
        match self {
            MenuAction::AddScene => "storyboard-add-scene",
            MenuAction::RemoveScenesForIdea => "storyboard-remove-scenes-for-idea-id",
        }
    }
}

/// Shown while the storyboard owns input; forwards clicks to the controller.
pub struct StoryboardMenu<M, C, P>
where
    M: StoryboardModel,
    C: StoryboardController,
    P: MapModel,
{
    controller: C,
    map: P,
    visible: bool,
    listener: Listener<M>,
}

impl<M, C, P> StoryboardMenu<M, C, P>
where
    M: StoryboardModel,
    C: StoryboardController,
    P: MapModel,
{
    pub fn new(model: M, controller: C, map: P) -> Self {
        let visible = model.input_enabled();
        Self {
            controller,
            map,
            visible,
            listener: Listener::attach(model),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn process_model_events(&mut self) {
        for event in self.listener.drain() {
            if let StoryboardEvent::InputEnabled(enabled) = event {
                log::trace!("[menu] visible: {}", enabled);
                self.visible = enabled;
            }
        }
    }

    /// Returns true if the click reached the controller.
    pub fn click(&mut self, action: MenuAction) -> bool {
        self.process_model_events();
        if !self.visible {
            log::trace!("[menu] {:?} ignored while hidden", action);
            return false;
        }

        let idea_id = self.map.selected_node_id();
        log::debug!("[menu] {:?} for idea {}", action, idea_id);
        match action {
            MenuAction::AddScene => self.controller.add_scene(idea_id),
            MenuAction::RemoveScenesForIdea => self.controller.remove_scenes_for_idea_id(idea_id),
        }
        true
    }
}
