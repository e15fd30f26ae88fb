use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of the document the view renders into.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    // Identity
    pub id: String,
    /// Role marker hosts use to find nodes (`scene`, `scene-title`, ...).
    pub role: Option<String>,

    // Content
    pub content: Content,

    // Custom data attributes (`idea-id`, `index`, ...)
    pub data: HashMap<String, String>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: generate_id("node"),
            role: None,
            content: Content::None,
            data: HashMap::new(),
        }
    }
}

impl Node {
    // Constructors

    pub fn box_() -> Self {
        Self::default()
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::default()
        }
    }

    // Builder methods

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Accessors

    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Text of a text node, empty for anything else.
    pub fn text_content(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            _ => "",
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn child_nodes(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Find the first node with the given role, depth first, including `self`.
    pub fn find_role(&self, role: &str) -> Option<&Node> {
        if self.has_role(role) {
            return Some(self);
        }
        self.child_nodes().iter().find_map(|child| child.find_role(role))
    }

    pub fn find_role_mut(&mut self, role: &str) -> Option<&mut Node> {
        if self.has_role(role) {
            return Some(self);
        }
        if let Content::Children(children) = &mut self.content {
            for child in children {
                if let Some(found) = child.find_role_mut(role) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Collect every node with the given role in document order.
    pub fn find_all_role<'a>(&'a self, role: &str) -> Vec<&'a Node> {
        let mut result = Vec::new();
        collect_role(self, role, &mut result);
        result
    }

    /// Deep copy with fresh ids throughout.
    pub fn clone_fresh(&self) -> Node {
        let content = match &self.content {
            Content::Children(children) => {
                Content::Children(children.iter().map(Node::clone_fresh).collect())
            }
            other => other.clone(),
        };
        Node {
            id: generate_id("node"),
            role: self.role.clone(),
            content,
            data: self.data.clone(),
        }
    }
}

fn collect_role<'a>(node: &'a Node, role: &str, result: &mut Vec<&'a Node>) {
    if node.has_role(role) {
        result.push(node);
    }
    for child in node.child_nodes() {
        collect_role(child, role, result);
    }
}
