use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::navigation::UrlField;
use super::tab::{Favicon, TabHandle, TabStyle};

/// Mouse button as reported by the DOM `button` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i16", into = "i16")]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(i16),
}

impl From<i16> for PointerButton {
    fn from(code: i16) -> Self {
        match code {
            0 => PointerButton::Left,
            1 => PointerButton::Middle,
            2 => PointerButton::Right,
            n => PointerButton::Other(n),
        }
    }
}

impl From<PointerButton> for i16 {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Left => 0,
            PointerButton::Middle => 1,
            PointerButton::Right => 2,
            PointerButton::Other(n) => n,
        }
    }
}

/// A pointer event from the chrome surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(default = "default_button")]
    pub button: PointerButton,
    /// Left button held (meaningful for moves).
    #[serde(default)]
    pub left_held: bool,
    /// Window-local position.
    pub x: i32,
    pub y: i32,
    /// Global screen position.
    pub screen_x: i32,
    pub screen_y: i32,
    #[serde(default)]
    pub in_title_bar: bool,
    #[serde(default)]
    pub title_bar_width: i32,
}

fn default_button() -> PointerButton {
    PointerButton::Left
}

impl PointerEvent {
    pub fn local(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn global(&self) -> Point {
        Point::new(self.screen_x, self.screen_y)
    }
}

/// Messages posted by the chrome webview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ChromeMessage {
    Ready,
    NewTab,
    SwitchTab { id: TabHandle },
    CloseTab { id: TabHandle },
    TabAuxClick { id: TabHandle, button: PointerButton },
    Back,
    Forward,
    Reload,
    Submit { text: String },
    /// The URL field gained or lost keyboard focus.
    UrlFocus { focused: bool },
    Minimize,
    ToggleMaximize,
    CloseWindow,
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
}

impl ChromeMessage {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// One tab entry as drawn in the tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabEntry {
    pub id: TabHandle,
    pub title: String,
    pub favicon: Option<Favicon>,
    pub style: TabStyle,
}

/// Everything the chrome webview needs to redraw itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromeSnapshot {
    pub tabs: Vec<TabEntry>,
    pub url_field: UrlField,
    pub maximized: bool,
    pub favicon_size: u32,
}
