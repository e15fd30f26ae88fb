pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod hotkey;
pub mod layout;
pub mod menu;
pub mod model;
pub mod scene;
pub mod view;

pub use config::StoryboardConfig;
pub use element::{ItemArena, ItemId, Node, RenderedItem, Template};
pub use error::{ConfigError, TemplateError};
pub use event::{Control, Gesture, HostSignal, Key, Modifiers};
pub use focus::{FocusState, Geometry, GridGeometry, NavDirection};
pub use hotkey::AddSceneHotkey;
pub use layout::{Rect, WrapLayout};
pub use menu::{MenuAction, StoryboardMenu};
pub use model::{
    Listener, ListenerRegistry, MapModel, MemoryStoryboard, StoryboardController,
    StoryboardEvent, StoryboardModel, Subscription, SubscriptionId,
};
pub use scene::{IdeaId, Scene, SceneIndex, SceneTag};
pub use view::{GestureOutcome, SceneListView};
