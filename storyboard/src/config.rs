//! Storyboard configuration.

use crate::error::ConfigError;
use crate::layout::WrapLayout;

/// Layout and input settings shared by the storyboard widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryboardConfig {
    /// Character that adds a scene for the selected idea.
    pub add_scene_hotkey: char,

    /// Width of one rendered scene, in cells.
    pub item_width: u16,

    /// Height of one rendered scene, in cells.
    pub item_height: u16,

    /// Space between scenes, horizontally and vertically.
    pub gap: u16,

    /// Rows of scenes visible at once. Bring-into-view scrolls within this.
    pub viewport_rows: u16,
}

impl Default for StoryboardConfig {
    fn default() -> Self {
        Self {
            add_scene_hotkey: '+',
            item_width: 16,
            item_height: 3,
            gap: 1,
            viewport_rows: 10,
        }
    }
}

impl StoryboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scene_hotkey(mut self, key: char) -> Self {
        self.add_scene_hotkey = key;
        self
    }

    pub fn item_size(mut self, width: u16, height: u16) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn viewport_rows(mut self, rows: u16) -> Self {
        self.viewport_rows = rows;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_width == 0 {
            return Err(ConfigError::ZeroItemWidth);
        }
        if self.item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        if self.viewport_rows == 0 {
            return Err(ConfigError::ZeroViewportRows);
        }
        if self.add_scene_hotkey.is_control() || self.add_scene_hotkey.is_whitespace() {
            return Err(ConfigError::InvalidHotkey(self.add_scene_hotkey));
        }
        Ok(())
    }

    /// Wrap layout for a container of the given width.
    pub fn layout(&self, container_width: u16) -> WrapLayout {
        WrapLayout::new(container_width, self.item_width, self.item_height, self.gap)
    }
}
