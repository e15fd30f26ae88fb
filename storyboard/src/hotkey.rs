//! Global add-scene hotkey.

use crate::event::{Key, Modifiers};
use crate::model::{Listener, MapModel, StoryboardController, StoryboardEvent, StoryboardModel};

/// Adds a scene for the selected map node when the hotkey is pressed.
///
/// Active only after the storyboard model has announced that input is
/// enabled, and only while the map itself accepts input.
pub struct AddSceneHotkey<M, C, P>
where
    M: StoryboardModel,
    C: StoryboardController,
    P: MapModel,
{
    hotkey: char,
    controller: C,
    map: P,
    enabled: bool,
    listener: Listener<M>,
}

impl<M, C, P> AddSceneHotkey<M, C, P>
where
    M: StoryboardModel,
    C: StoryboardController,
    P: MapModel,
{
    pub fn new(model: M, controller: C, map: P, hotkey: char) -> Self {
        Self {
            hotkey,
            controller,
            map,
            enabled: false,
            listener: Listener::attach(model),
        }
    }

    pub fn hotkey(&self) -> char {
        self.hotkey
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Track input-enabled announcements from the storyboard model.
    pub fn process_model_events(&mut self) {
        for event in self.listener.drain() {
            if let StoryboardEvent::InputEnabled(enabled) = event {
                log::trace!("[hotkey] input enabled: {}", enabled);
                self.enabled = enabled;
            }
        }
    }

    /// Handle a typed character. Returns true if a scene was requested.
    pub fn handle_keypress(&mut self, c: char) -> bool {
        self.process_model_events();
        if c != self.hotkey || !self.enabled || !self.map.input_enabled() {
            return false;
        }

        let idea_id = self.map.selected_node_id();
        log::debug!("[hotkey] add scene for idea {}", idea_id);
        self.controller.add_scene(idea_id);
        true
    }

    /// Key-event form of [`Self::handle_keypress`]; Ctrl/Alt/Meta chords never match.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt && !modifiers.meta => {
                self.handle_keypress(c)
            }
            _ => false,
        }
    }
}
