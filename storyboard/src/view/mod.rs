//! The scene list view.
//!
//! [`SceneListView`] binds to a storyboard model while its host container is
//! shown, keeps one rendered item per scene in index order, and turns key
//! presses and control clicks into focus moves or controller commands.

mod gesture;
mod sync;

pub use gesture::GestureOutcome;

use crate::element::{ItemArena, ItemId, Node, RenderedItem, Template, LIST_ROLE};
use crate::event::HostSignal;
use crate::focus::{FocusState, Geometry};
use crate::model::{Listener, StoryboardController, StoryboardModel};
use crate::scene::Scene;

pub struct SceneListView<M, C, G>
where
    M: StoryboardModel + Clone,
    C: StoryboardController,
    G: Geometry,
{
    model: M,
    controller: C,
    geometry: G,
    template: Template,
    items: ItemArena,
    focus: FocusState,
    visible: bool,
    /// Present exactly while shown. Dropping it unsubscribes.
    listener: Option<Listener<M>>,
}

impl<M, C, G> SceneListView<M, C, G>
where
    M: StoryboardModel + Clone,
    C: StoryboardController,
    G: Geometry,
{
    /// A hidden, empty view using the default scene template.
    pub fn new(model: M, controller: C, geometry: G) -> Self {
        Self {
            model,
            controller,
            geometry,
            template: Template::default(),
            items: ItemArena::new(),
            focus: FocusState::new(),
            visible: false,
            listener: None,
        }
    }

    /// Replace the prototype cloned for each scene. Takes effect on the next
    /// render.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub fn handle_signal(&mut self, signal: HostSignal) {
        match signal {
            HostSignal::Show => self.show(),
            HostSignal::Hide => self.hide(),
        }
    }

    /// Rebuild from the model snapshot, take input and start listening.
    pub fn show(&mut self) {
        log::debug!("[storyboard] show");
        self.visible = true;
        self.render_all();
        self.model.set_input_enabled(true);

        match &self.listener {
            // Already listening: anything queued predates the snapshot just rendered
            Some(listener) => {
                let stale = listener.drain();
                log::trace!("[storyboard] discarded {} queued events", stale.len());
            }
            None => {
                let listener = Listener::attach(self.model.clone());
                log::debug!("[storyboard] subscribed {:?}", listener.id());
                self.listener = Some(listener);
            }
        }
    }

    /// Release input and stop listening. Rendered items stay until the next
    /// show rebuilds them.
    pub fn hide(&mut self) {
        log::debug!("[storyboard] hide");
        self.visible = false;
        self.model.set_input_enabled(false);

        if let Some(listener) = self.listener.take() {
            log::debug!("[storyboard] unsubscribed {:?}", listener.id());
        }
    }

    /// Apply every model event received since the last call.
    /// Returns the number of events processed.
    pub fn process_model_events(&mut self) -> usize {
        let events = match &self.listener {
            Some(listener) => listener.drain(),
            None => return 0,
        };
        let count = events.len();
        for event in events {
            self.apply_event(event);
        }
        count
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn items(&self) -> &ItemArena {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&RenderedItem> {
        self.items.get(id)
    }

    /// Displayed scenes in document order, rebuilt from tags and titles.
    pub fn scenes(&self) -> Vec<Scene> {
        self.items.iter().map(|(_, item)| item.scene()).collect()
    }

    /// Container node holding clones of the live item nodes, in order.
    pub fn document(&self) -> Node {
        Node::box_()
            .role(LIST_ROLE)
            .children(self.items.iter().map(|(_, item)| item.node().clone()))
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// The focused item, if it is still rendered.
    pub fn focused(&self) -> Option<ItemId> {
        self.focus
            .focused()
            .filter(|&id| self.items.contains(id))
    }

    /// Focus a live item. Returns true if focus changed.
    pub fn focus(&mut self, id: ItemId) -> bool {
        if !self.items.contains(id) {
            return false;
        }
        self.focus.focus(id)
    }

    /// Focus the item at `position` in document order.
    pub fn focus_at(&mut self, position: usize) -> Option<ItemId> {
        let id = self.items.order().get(position).copied()?;
        self.focus.focus(id);
        Some(id)
    }

    pub fn blur(&mut self) -> bool {
        self.focus.blur()
    }
}
