use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the idea a scene refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(pub u64);

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IdeaId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Fractional position of a scene within a storyboard.
///
/// Indices are compared numerically and are not unique: the same idea may
/// appear several times, and two scenes may even share an index.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneIndex(pub f64);

impl SceneIndex {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

// f64's Display already prints `1` for 1.0 and `1.5` for 1.5
impl fmt::Display for SceneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for SceneIndex {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// One entry of a storyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub idea_id: IdeaId,
    pub title: String,
    pub index: SceneIndex,
}

impl Scene {
    pub fn new(idea_id: u64, title: impl Into<String>, index: f64) -> Self {
        Self {
            idea_id: IdeaId(idea_id),
            title: title.into(),
            index: SceneIndex(index),
        }
    }

    /// The identity used to match rendered items against model events.
    pub fn tag(&self) -> SceneTag {
        SceneTag {
            idea_id: self.idea_id,
            index: self.index,
        }
    }
}

/// `(idea, index)` pair carried by every rendered item.
///
/// Titles are not part of the tag; events may carry stale text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTag {
    pub idea_id: IdeaId,
    pub index: SceneIndex,
}

impl SceneTag {
    pub fn new(idea_id: u64, index: f64) -> Self {
        Self {
            idea_id: IdeaId(idea_id),
            index: SceneIndex(index),
        }
    }

    /// Rebuild a scene from this tag and the currently displayed title.
    pub fn to_scene(self, title: impl Into<String>) -> Scene {
        Scene {
            idea_id: self.idea_id,
            title: title.into(),
            index: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_display_drops_trailing_zero() {
        assert_eq!(SceneIndex(1.0).to_string(), "1");
        assert_eq!(SceneIndex(1.5).to_string(), "1.5");
        assert_eq!(SceneIndex(-2.0).to_string(), "-2");
    }

    #[test]
    fn tag_ignores_title() {
        let a = Scene::new(12, "A", 1.0);
        let b = Scene::new(12, "something else", 1.0);
        assert_eq!(a.tag(), b.tag());
        assert_ne!(a, b);
    }
}
