use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::ViewError;
use super::geometry::Rect;
use super::tab::Favicon;

/// Identity of one embedded page-view, allocated by the tab manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Commands the shell issues to an embedded page-view.
///
/// Releasing a page-view is dropping it.
pub trait PageView {
    /// Shows a lightweight loading page until the real navigation starts.
    fn show_placeholder(&mut self);
    fn load(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn set_visible(&mut self, visible: bool);
    fn set_bounds(&mut self, bounds: Rect);
    /// URL the engine currently shows, if it has one.
    fn current_url(&self) -> Option<String>;
}

/// Creates page-views for new tabs.
pub trait PageViewFactory {
    type View: PageView;

    fn create(&mut self, id: ViewId, bounds: Rect) -> Result<Self::View, ViewError>;
}

/// Asynchronous notifications a page-view delivers on the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum PageNotification {
    TitleChanged(String),
    /// URL reported by the engine itself.
    UrlChanged(String),
    IconChanged(Option<Favicon>),
    /// The page script saw its location change. It carries no URL because
    /// page content can post anything; the shell reads the URL back from
    /// the engine.
    LocationChanged,
}

/// Messages posted over IPC by the script injected into every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PageMessage {
    IconChanged { href: String },
    LocationChanged,
}

impl PageMessage {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn into_notification(self) -> Option<PageNotification> {
        match self {
            PageMessage::IconChanged { href } => {
                let icon = Favicon::new(href);
                Some(PageNotification::IconChanged((!icon.is_empty()).then_some(icon)))
            }
            PageMessage::LocationChanged => Some(PageNotification::LocationChanged),
        }
    }
}

/// Whether a page URL is worth reporting. Placeholder and inline documents
/// (`about:`, `data:`) are not.
pub fn is_reportable_url(url: &str) -> bool {
    !(url.is_empty() || url.starts_with("about:") || url.starts_with("data:"))
}
