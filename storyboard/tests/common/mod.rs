#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use storyboard::{
    Geometry, IdeaId, ItemId, MapModel, MemoryStoryboard, Scene, SceneListView,
    StoryboardController, StoryboardModel, Subscription,
};

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddScene(IdeaId),
    RemoveScene(Scene),
    MoveSceneAfter(Scene, Option<Scene>),
    RemoveScenesForIdeaId(IdeaId),
}

/// Records every command instead of acting on it.
#[derive(Debug, Clone, Default)]
pub struct RecordingController {
    commands: Rc<RefCell<Vec<Command>>>,
}

impl RecordingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }
}

impl StoryboardController for RecordingController {
    fn add_scene(&self, idea_id: IdeaId) {
        self.commands.borrow_mut().push(Command::AddScene(idea_id));
    }

    fn remove_scene(&self, scene: &Scene) {
        self.commands
            .borrow_mut()
            .push(Command::RemoveScene(scene.clone()));
    }

    fn move_scene_after(&self, scene: &Scene, after: Option<&Scene>) {
        self.commands
            .borrow_mut()
            .push(Command::MoveSceneAfter(scene.clone(), after.cloned()));
    }

    fn remove_scenes_for_idea_id(&self, idea_id: IdeaId) {
        self.commands
            .borrow_mut()
            .push(Command::RemoveScenesForIdeaId(idea_id));
    }
}

// ============================================================================
// Model
// ============================================================================

/// In-memory storyboard that counts lifecycle calls.
#[derive(Debug, Default)]
pub struct CountingModel {
    pub inner: MemoryStoryboard,
    pub subscribes: Cell<usize>,
    pub unsubscribes: Cell<usize>,
    pub input_calls: RefCell<Vec<bool>>,
    snapshot: RefCell<Option<Vec<Scene>>>,
}

impl CountingModel {
    pub fn with_scenes(scenes: Vec<Scene>) -> Rc<Self> {
        Rc::new(Self {
            inner: MemoryStoryboard::with_scenes(scenes),
            ..Default::default()
        })
    }

    /// Serve `scenes` from `scenes()` verbatim, bypassing the inner order.
    pub fn set_snapshot(&self, scenes: Vec<Scene>) {
        *self.snapshot.borrow_mut() = Some(scenes);
    }

    pub fn listeners(&self) -> usize {
        self.inner.listener_count()
    }
}

impl StoryboardModel for CountingModel {
    fn scenes(&self) -> Vec<Scene> {
        match &*self.snapshot.borrow() {
            Some(scenes) => scenes.clone(),
            None => self.inner.scenes(),
        }
    }

    fn input_enabled(&self) -> bool {
        self.inner.input_enabled()
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.input_calls.borrow_mut().push(enabled);
        self.inner.set_input_enabled(enabled);
    }

    fn subscribe(&self) -> Subscription {
        self.subscribes.set(self.subscribes.get() + 1);
        self.inner.subscribe()
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.unsubscribes.set(self.unsubscribes.get() + 1);
        self.inner.unsubscribe(subscription);
    }
}

// ============================================================================
// Geometry
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Prev,
    Next,
    GridUp,
    GridDown,
}

/// Geometry double: in-order lookups follow document order, grid lookups
/// return whatever the test scripted. Every call is recorded.
#[derive(Debug, Default)]
pub struct RecordingGeometry {
    pub calls: RefCell<Vec<(Lookup, ItemId)>>,
    pub up: Option<ItemId>,
    pub down: Option<ItemId>,
    pub scrolled: Vec<ItemId>,
}

impl Geometry for RecordingGeometry {
    fn prev(&self, order: &[ItemId], from: ItemId) -> Option<ItemId> {
        self.calls.borrow_mut().push((Lookup::Prev, from));
        let position = order.iter().position(|&id| id == from)?;
        position.checked_sub(1).map(|p| order[p])
    }

    fn next(&self, order: &[ItemId], from: ItemId) -> Option<ItemId> {
        self.calls.borrow_mut().push((Lookup::Next, from));
        let position = order.iter().position(|&id| id == from)?;
        order.get(position + 1).copied()
    }

    fn grid_up(&self, _order: &[ItemId], from: ItemId) -> Option<ItemId> {
        self.calls.borrow_mut().push((Lookup::GridUp, from));
        self.up
    }

    fn grid_down(&self, _order: &[ItemId], from: ItemId) -> Option<ItemId> {
        self.calls.borrow_mut().push((Lookup::GridDown, from));
        self.down
    }

    fn scroll_into_focus(&mut self, order: &[ItemId], item: ItemId) {
        // The item must already be in place when this runs
        assert!(order.contains(&item));
        self.scrolled.push(item);
    }
}

// ============================================================================
// Map
// ============================================================================

#[derive(Debug, Default)]
pub struct FakeMap {
    pub selected: Cell<u64>,
    pub input_enabled: Cell<bool>,
}

impl FakeMap {
    pub fn new(selected: u64) -> Rc<Self> {
        Rc::new(Self {
            selected: Cell::new(selected),
            input_enabled: Cell::new(true),
        })
    }
}

impl MapModel for FakeMap {
    fn selected_node_id(&self) -> IdeaId {
        IdeaId(self.selected.get())
    }

    fn input_enabled(&self) -> bool {
        self.input_enabled.get()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub type TestView = SceneListView<Rc<CountingModel>, RecordingController, RecordingGeometry>;

pub fn two_scenes() -> Vec<Scene> {
    vec![
        Scene::new(12, "already in ted storyboard", 1.0),
        Scene::new(13, "in two storyboards", 2.0),
    ]
}

pub fn three_scenes() -> Vec<Scene> {
    vec![
        Scene::new(12, "already in ted storyboard", 1.0),
        Scene::new(15, "inside", 3.0),
        Scene::new(14, "inside", 5.0),
    ]
}

pub fn view_with(scenes: Vec<Scene>) -> (TestView, Rc<CountingModel>, RecordingController) {
    let model = CountingModel::with_scenes(scenes);
    let controller = RecordingController::new();
    let view = SceneListView::new(model.clone(), controller.clone(), RecordingGeometry::default());
    (view, model, controller)
}

/// `(idea, index)` of every rendered item, in document order.
pub fn tags(view: &TestView) -> Vec<(u64, f64)> {
    view.items()
        .iter()
        .map(|(_, item)| (item.tag().idea_id.0, item.tag().index.value()))
        .collect()
}

pub fn titles(view: &TestView) -> Vec<String> {
    view.items()
        .iter()
        .map(|(_, item)| item.title().to_string())
        .collect()
}
