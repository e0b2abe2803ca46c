use thiserror::Error;

use super::tab::TabHandle;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given handle is not (or no longer) open.
    #[error("Tab not found: {0}")]
    NotFound(TabHandle),
    /// The page-view for a new tab could not be created.
    #[error("Failed to create page view: {0}")]
    ViewCreation(#[from] ViewError),
    /// The window already reached its closed state.
    #[error("Window is closed")]
    WindowClosed,
}

// === ViewError ===

/// Errors raised by the embedded page-view backend.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Page view build failed: {0}")]
    Build(String),
}

// === SettingsError ===

/// Errors related to settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    /// The settings key is not recognized.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value provided for a setting is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ShellError ===

/// Top-level errors of the browser shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Tab(#[from] TabError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    View(#[from] ViewError),
    /// Window or event loop construction failed.
    #[error("Platform error: {0}")]
    Platform(String),
}
