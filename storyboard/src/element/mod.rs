mod arena;
mod content;
mod item;
mod node;

pub use arena::{ItemArena, ItemId};
pub use content::Content;
pub use item::{RenderedItem, Template};
pub use node::Node;

/// Role of the container holding the live items.
pub const LIST_ROLE: &str = "scene-list";
/// Role of live scene items.
pub const SCENE_ROLE: &str = "scene";
/// Role of the prototype node.
pub const TEMPLATE_ROLE: &str = "scene-template";
/// Role of the title sub-node inside each item.
pub const TITLE_ROLE: &str = "scene-title";

pub const ATTR_IDEA_ID: &str = "idea-id";
pub const ATTR_INDEX: &str = "index";
