use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::page_view::ViewId;

/// Handle of a tab's chrome element. Unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabHandle(pub Uuid);

impl TabHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A page favicon, referenced by the URL the page advertised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favicon {
    pub src: String,
}

impl Favicon {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.src.trim().is_empty()
    }
}

/// Highlight state of a tab's chrome element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabStyle {
    /// Darker background.
    Active,
    /// Default background with hover styling.
    #[default]
    Inactive,
}

/// The visual parts of one tab: favicon holder, title label, close control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabChrome {
    pub title: String,
    pub favicon: Option<Favicon>,
    pub style: TabStyle,
}

impl TabChrome {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            favicon: None,
            style: TabStyle::Inactive,
        }
    }
}

/// One open page session: a page-view paired with its chrome element.
#[derive(Debug)]
pub struct Tab<V> {
    pub handle: TabHandle,
    pub view_id: ViewId,
    pub view: V,
    pub chrome: TabChrome,
    /// Last URL the page-view reported. Empty until the first report.
    pub url: String,
}

impl<V> Tab<V> {
    pub fn is_active(&self) -> bool {
        self.chrome.style == TabStyle::Active
    }
}
