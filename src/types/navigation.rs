use serde::{Deserialize, Serialize};

/// The shared URL text field of the toolbar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlField {
    pub text: String,
    pub placeholder: String,
    /// Cursor position in characters.
    pub cursor: usize,
    pub focused: bool,
}

/// History commands forwarded to the active page-view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Back,
    Forward,
    Reload,
}
