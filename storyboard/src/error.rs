//! Error types.
//!
//! Event handling never fails; these cover construction of the view and its
//! configuration.

/// Errors building a [`crate::element::Template`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// The prototype has no node to receive the scene title.
    #[error("template '{template}' has no 'scene-title' node")]
    MissingTitle { template: String },
}

/// Errors validating a [`crate::config::StoryboardConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("item width must be at least 1")]
    ZeroItemWidth,

    #[error("item height must be at least 1")]
    ZeroItemHeight,

    #[error("viewport must show at least one row")]
    ZeroViewportRows,

    /// The hotkey must be a printable character.
    #[error("invalid add-scene hotkey: {0:?}")]
    InvalidHotkey(char),
}
