//! Shared test doubles: a page-view that records every command it receives.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use foxbr::app::App;
use foxbr::types::errors::ViewError;
use foxbr::types::geometry::Rect;
use foxbr::types::page_view::{PageView, PageViewFactory, ViewId};
use foxbr::types::settings::BrowserSettings;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Created(Rect),
    Placeholder,
    Load(String),
    Back,
    Forward,
    Reload,
    Visible(bool),
    Bounds(Rect),
    Released,
}

pub type CallLog = Rc<RefCell<Vec<(ViewId, ViewCall)>>>;

/// What each view's engine would answer for its current URL.
pub type Locations = Rc<RefCell<HashMap<ViewId, String>>>;

#[derive(Debug)]
pub struct MockPageView {
    id: ViewId,
    log: CallLog,
    locations: Locations,
}

impl MockPageView {
    fn record(&self, call: ViewCall) {
        self.log.borrow_mut().push((self.id, call));
    }
}

impl PageView for MockPageView {
    fn show_placeholder(&mut self) {
        self.record(ViewCall::Placeholder);
    }
    fn load(&mut self, url: &str) {
        self.record(ViewCall::Load(url.to_string()));
        self.locations.borrow_mut().insert(self.id, url.to_string());
    }
    fn back(&mut self) {
        self.record(ViewCall::Back);
    }
    fn forward(&mut self) {
        self.record(ViewCall::Forward);
    }
    fn reload(&mut self) {
        self.record(ViewCall::Reload);
    }
    fn set_visible(&mut self, visible: bool) {
        self.record(ViewCall::Visible(visible));
    }
    fn set_bounds(&mut self, bounds: Rect) {
        self.record(ViewCall::Bounds(bounds));
    }
    fn current_url(&self) -> Option<String> {
        self.locations.borrow().get(&self.id).cloned()
    }
}

impl Drop for MockPageView {
    fn drop(&mut self) {
        self.record(ViewCall::Released);
    }
}

#[derive(Default)]
pub struct MockFactory {
    pub log: CallLog,
    pub locations: Locations,
    /// When set, `create` fails.
    pub fail: bool,
}

impl MockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self, id: ViewId) -> Vec<ViewCall> {
        self.log
            .borrow()
            .iter()
            .filter(|(view, _)| *view == id)
            .map(|(_, call)| call.clone())
            .collect()
    }

    pub fn loads(&self) -> Vec<(ViewId, String)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|(view, call)| match call {
                ViewCall::Load(url) => Some((*view, url.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn released(&self, id: ViewId) -> bool {
        self.calls(id).contains(&ViewCall::Released)
    }

    /// Visibility from the most recent `set_visible` call.
    pub fn visible(&self, id: ViewId) -> Option<bool> {
        self.calls(id).iter().rev().find_map(|call| match call {
            ViewCall::Visible(v) => Some(*v),
            _ => None,
        })
    }

    /// Moves the engine of `id` to `url` without a shell-initiated load, the
    /// way a link click or a redirect would.
    pub fn set_location(&self, id: ViewId, url: &str) {
        self.locations.borrow_mut().insert(id, url.to_string());
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl PageViewFactory for MockFactory {
    type View = MockPageView;

    fn create(&mut self, id: ViewId, bounds: Rect) -> Result<MockPageView, ViewError> {
        if self.fail {
            return Err(ViewError::Build("mock failure".to_string()));
        }
        self.log.borrow_mut().push((id, ViewCall::Created(bounds)));
        Ok(MockPageView {
            id,
            log: Rc::clone(&self.log),
            locations: Rc::clone(&self.locations),
        })
    }
}

pub fn test_app() -> App<MockFactory> {
    App::new(BrowserSettings::default(), MockFactory::new())
}
