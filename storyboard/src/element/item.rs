use super::{Node, ATTR_IDEA_ID, ATTR_INDEX, SCENE_ROLE, TEMPLATE_ROLE, TITLE_ROLE};
use crate::error::TemplateError;
use crate::scene::{Scene, SceneTag};

/// Detached prototype cloned once per rendered scene. Never displayed.
#[derive(Debug, Clone)]
pub struct Template {
    node: Node,
}

impl Template {
    /// Wrap a prototype node. It must contain a `scene-title` node.
    pub fn new(node: Node) -> Result<Self, TemplateError> {
        if node.find_role(TITLE_ROLE).is_none() {
            return Err(TemplateError::MissingTitle {
                template: node.id.clone(),
            });
        }
        Ok(Self { node })
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Clone the prototype into a tagged, titled item for `scene`.
    pub fn instantiate(&self, scene: &Scene) -> RenderedItem {
        let mut node = self.node.clone_fresh();
        node.role = Some(SCENE_ROLE.to_string());
        node.set_attr(ATTR_IDEA_ID, scene.idea_id.to_string());
        node.set_attr(ATTR_INDEX, scene.index.to_string());

        let mut item = RenderedItem {
            tag: scene.tag(),
            node,
        };
        item.set_title(&scene.title);
        item
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            node: Node::box_()
                .role(TEMPLATE_ROLE)
                .child(Node::text("").role(TITLE_ROLE)),
        }
    }
}

/// One displayed scene: its tag plus the concrete view node.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem {
    tag: SceneTag,
    node: Node,
}

impl RenderedItem {
    pub fn tag(&self) -> SceneTag {
        self.tag
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Current title text as displayed.
    pub fn title(&self) -> &str {
        self.node
            .find_role(TITLE_ROLE)
            .map(Node::text_content)
            .unwrap_or_default()
    }

    pub fn set_title(&mut self, title: &str) {
        if let Some(title_node) = self.node.find_role_mut(TITLE_ROLE) {
            title_node.set_text(title);
        }
    }

    pub fn matches(&self, tag: SceneTag) -> bool {
        self.tag == tag
    }

    /// The scene this item currently shows, rebuilt from tag and title.
    pub fn scene(&self) -> Scene {
        self.tag.to_scene(self.title())
    }
}
