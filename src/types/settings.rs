use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Top-level browser settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub chrome: ChromeSettings,
}

/// Navigation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Destination of new tabs. The URL field stays blank while a tab shows it.
    pub home_url: String,
    /// Query prefix for text that is neither a URL nor a bare domain.
    pub search_url: String,
    pub url_placeholder: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
            url_placeholder: "Search or enter address".to_string(),
        }
    }
}

/// Initial geometry and limits of the frameless main window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
    /// Height of the title bar plus toolbar drawn above the page content.
    pub chrome_height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "FoxBr".to_string(),
            x: 100,
            y: 100,
            width: 1024,
            height: 768,
            min_width: 480,
            min_height: 320,
            chrome_height: 100,
        }
    }
}

impl WindowSettings {
    pub fn geometry(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Window chrome behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChromeSettings {
    /// Pointer travel (Manhattan, px) before a title-bar press becomes a drag.
    pub drag_threshold: i32,
    /// Distance from a window edge (px) that arms a resize.
    pub resize_margin: i32,
    pub favicon_size: u32,
    pub devtools: bool,
}

impl Default for ChromeSettings {
    fn default() -> Self {
        Self {
            drag_threshold: 5,
            resize_margin: 6,
            favicon_size: 20,
            devtools: cfg!(debug_assertions),
        }
    }
}
