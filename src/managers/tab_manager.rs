use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::types::chrome::TabEntry;
use crate::types::errors::TabError;
use crate::types::geometry::Rect;
use crate::types::page_view::{PageView, PageViewFactory, ViewId};
use crate::types::tab::{Favicon, Tab, TabChrome, TabHandle, TabStyle};

/// Title shown until a page reports its own.
pub const PLACEHOLDER_TITLE: &str = "New Tab";

/// Result of closing a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Tabs remain; the given tab is active afterwards.
    Remaining { active: TabHandle },
    /// The last tab was closed.
    LastTabClosed,
}

/// Trait defining the tab-bar interface.
pub trait TabManagerTrait<V: PageView> {
    fn open<F>(&mut self, factory: &mut F) -> Result<TabHandle, TabError>
    where
        F: PageViewFactory<View = V>;
    fn switch_to(&mut self, handle: TabHandle) -> Result<&Tab<V>, TabError>;
    fn close(&mut self, handle: TabHandle) -> Result<CloseOutcome, TabError>;
    fn on_title_changed(&mut self, view: ViewId, title: &str) -> bool;
    fn on_icon_changed(&mut self, view: ViewId, icon: Option<Favicon>) -> bool;
    fn on_url_changed(&mut self, view: ViewId, url: &str) -> Option<bool>;
    fn get_tab(&self, handle: TabHandle) -> Option<&Tab<V>>;
    fn tab_for_view(&self, view: ViewId) -> Option<&Tab<V>>;
    fn get_active_tab(&self) -> Option<&Tab<V>>;
    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<V>>;
    fn tab_count(&self) -> usize;
    fn tab_order(&self) -> Vec<TabHandle>;
}

/// Owns the ordered tab collection and the content area's page-views.
///
/// Tabs are kept in insertion order, which is also the left-to-right order of
/// the tab strip. Page-views are resolved back to their tab through a
/// `ViewId -> TabHandle` index so notifications never touch the wrong tab.
pub struct TabManager<V> {
    tabs: IndexMap<TabHandle, Tab<V>>,
    views: HashMap<ViewId, TabHandle>,
    active: Option<TabHandle>,
    next_view_id: u64,
    content_bounds: Rect,
}

impl<V: PageView> TabManager<V> {
    pub fn new(content_bounds: Rect) -> Self {
        Self {
            tabs: IndexMap::new(),
            views: HashMap::new(),
            active: None,
            next_view_id: 1,
            content_bounds,
        }
    }

    /// Resizes the content area and every page-view in it.
    pub fn set_content_bounds(&mut self, bounds: Rect) {
        self.content_bounds = bounds;
        for tab in self.tabs.values_mut() {
            tab.view.set_bounds(bounds);
        }
    }

    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    /// Tab strip entries in display order.
    pub fn entries(&self) -> Vec<TabEntry> {
        self.tabs
            .values()
            .map(|tab| TabEntry {
                id: tab.handle,
                title: tab.chrome.title.clone(),
                favicon: tab.chrome.favicon.clone(),
                style: tab.chrome.style,
            })
            .collect()
    }

    /// Handle of the active tab, if any.
    pub fn active_handle(&self) -> Option<TabHandle> {
        self.active
    }

    /// Releases every tab. Page-views go first, then the chrome entries.
    pub fn close_all(&mut self) {
        for (_, tab) in self.tabs.drain(..) {
            drop(tab.view);
        }
        self.views.clear();
        self.active = None;
    }

    fn allocate_view_id(&mut self) -> ViewId {
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        id
    }

    pub fn tab_for_view_mut(&mut self, view: ViewId) -> Option<&mut Tab<V>> {
        let handle = self.views.get(&view)?;
        self.tabs.get_mut(handle)
    }

    /// Restyles every chrome element and shows only the active page-view.
    fn apply_active(&mut self, handle: TabHandle) {
        self.active = Some(handle);
        for tab in self.tabs.values_mut() {
            let active = tab.handle == handle;
            tab.chrome.style = if active { TabStyle::Active } else { TabStyle::Inactive };
            tab.view.set_visible(active);
        }
    }
}

impl<V: PageView> TabManagerTrait<V> for TabManager<V> {
    /// Creates a tab showing the placeholder page and makes it active.
    ///
    /// The caller is responsible for scheduling the real navigation; nothing
    /// has been loaded when this returns.
    fn open<F>(&mut self, factory: &mut F) -> Result<TabHandle, TabError>
    where
        F: PageViewFactory<View = V>,
    {
        let view_id = self.allocate_view_id();
        let mut view = factory.create(view_id, self.content_bounds)?;
        view.show_placeholder();

        let handle = TabHandle::new();
        self.tabs.insert(
            handle,
            Tab {
                handle,
                view_id,
                view,
                chrome: TabChrome::new(PLACEHOLDER_TITLE),
                url: String::new(),
            },
        );
        self.views.insert(view_id, handle);
        debug!(tab = %handle, view = %view_id, "opened tab");

        self.apply_active(handle);
        Ok(handle)
    }

    fn switch_to(&mut self, handle: TabHandle) -> Result<&Tab<V>, TabError> {
        if !self.tabs.contains_key(&handle) {
            return Err(TabError::NotFound(handle));
        }
        self.apply_active(handle);
        self.tabs.get(&handle).ok_or(TabError::NotFound(handle))
    }

    /// Closes a tab, releasing its page-view before its chrome entry.
    ///
    /// If the closed tab was active, the leftmost remaining tab becomes active.
    fn close(&mut self, handle: TabHandle) -> Result<CloseOutcome, TabError> {
        let tab = self
            .tabs
            .shift_remove(&handle)
            .ok_or(TabError::NotFound(handle))?;
        self.views.remove(&tab.view_id);

        let Tab { view, chrome, .. } = tab;
        drop(view);
        drop(chrome);
        debug!(tab = %handle, "closed tab");

        let next = match self.active {
            Some(active) if active != handle && self.tabs.contains_key(&active) => Some(active),
            _ => self.tabs.keys().next().copied(),
        };

        match next {
            Some(next) => {
                self.apply_active(next);
                Ok(CloseOutcome::Remaining { active: next })
            }
            None => {
                self.active = None;
                Ok(CloseOutcome::LastTabClosed)
            }
        }
    }

    /// Updates the title label of the tab owning `view`. Returns false for
    /// a view that no longer belongs to any tab.
    fn on_title_changed(&mut self, view: ViewId, title: &str) -> bool {
        let Some(tab) = self.tab_for_view_mut(view) else {
            debug!(view = %view, "title change for closed view ignored");
            return false;
        };
        tab.chrome.title = title.to_string();
        true
    }

    /// Updates the favicon of the tab owning `view`. An empty icon keeps the
    /// previous one.
    fn on_icon_changed(&mut self, view: ViewId, icon: Option<Favicon>) -> bool {
        let Some(tab) = self.tab_for_view_mut(view) else {
            debug!(view = %view, "icon change for closed view ignored");
            return false;
        };
        match icon {
            Some(icon) if !icon.is_empty() => {
                tab.chrome.favicon = Some(icon);
                true
            }
            _ => false,
        }
    }

    /// Records the URL reported by `view`. A new URL also becomes the tab's
    /// title, whether or not the tab is active; repeated reports of the same
    /// URL leave the title alone.
    ///
    /// Returns `Some(is_active)` when the view belongs to an open tab, so the
    /// caller knows whether the shared URL field must follow.
    fn on_url_changed(&mut self, view: ViewId, url: &str) -> Option<bool> {
        let active = self.active;
        let Some(tab) = self.tab_for_view_mut(view) else {
            debug!(view = %view, "url change for closed view ignored");
            return None;
        };
        if tab.url != url {
            tab.url = url.to_string();
            tab.chrome.title = url.to_string();
        }
        Some(active == Some(tab.handle))
    }

    fn get_tab(&self, handle: TabHandle) -> Option<&Tab<V>> {
        self.tabs.get(&handle)
    }

    fn tab_for_view(&self, view: ViewId) -> Option<&Tab<V>> {
        self.views.get(&view).and_then(|h| self.tabs.get(h))
    }

    fn get_active_tab(&self) -> Option<&Tab<V>> {
        self.active.and_then(|h| self.tabs.get(&h))
    }

    fn get_active_tab_mut(&mut self) -> Option<&mut Tab<V>> {
        let handle = self.active?;
        self.tabs.get_mut(&handle)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn tab_order(&self) -> Vec<TabHandle> {
        self.tabs.keys().copied().collect()
    }
}
