//! App Core for FoxBr.
//!
//! Central struct wiring the window chrome, the navigation toolbar and the tab
//! bar to one content area of page-views. Everything runs on the UI thread;
//! the only scheduling device is the deferred-task queue drained on the next
//! loop tick.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::managers::navigation_manager::{NavigationManager, NavigationManagerTrait};
use crate::managers::tab_manager::{CloseOutcome, TabManager, TabManagerTrait};
use crate::managers::window_manager::{WindowAction, WindowManager, WindowManagerTrait};
use crate::types::chrome::{ChromeMessage, ChromeSnapshot, PointerButton};
use crate::types::errors::TabError;
use crate::types::geometry::Rect;
use crate::types::navigation::NavCommand;
use crate::types::page_view::{is_reportable_url, PageNotification, PageView, PageViewFactory, ViewId};
use crate::types::settings::BrowserSettings;
use crate::types::tab::TabHandle;

/// Work queued for the next iteration of the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    Load { view: ViewId, url: String },
}

/// Lifecycle of the browser window. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Closed,
}

/// What the UI layer has to do after a chrome message was handled.
#[derive(Debug, Default, PartialEq)]
pub struct Dispatch {
    pub actions: Vec<WindowAction>,
    pub redraw: bool,
}

impl Dispatch {
    fn redraw() -> Self {
        Self {
            actions: Vec::new(),
            redraw: true,
        }
    }

    fn actions(actions: Vec<WindowAction>) -> Self {
        let redraw = actions
            .iter()
            .any(|a| matches!(a, WindowAction::Maximize | WindowAction::Restore));
        Self { actions, redraw }
    }
}

/// Central application struct holding the managers and the page-view factory.
pub struct App<F: PageViewFactory> {
    pub settings: BrowserSettings,
    pub tab_manager: TabManager<F::View>,
    pub navigation_manager: NavigationManager,
    pub window_manager: WindowManager,
    factory: F,
    deferred: VecDeque<DeferredTask>,
    state: ShellState,
}

impl<F: PageViewFactory> App<F> {
    pub fn new(settings: BrowserSettings, factory: F) -> Self {
        let window = &settings.window;
        let content = content_bounds(&settings, window.width, window.height);
        Self {
            tab_manager: TabManager::new(content),
            navigation_manager: NavigationManager::new(&settings.general),
            window_manager: WindowManager::new(&settings.window, &settings.chrome),
            factory,
            deferred: VecDeque::new(),
            state: ShellState::Running,
            settings,
        }
    }

    /// Opens the single startup tab, at `url` or the configured home page.
    pub fn startup(&mut self, url: Option<&str>) -> Result<TabHandle, TabError> {
        let url = url
            .and_then(|u| self.navigation_manager.resolve_input(u))
            .unwrap_or_else(|| self.navigation_manager.home_url().to_string());
        info!(%url, "starting shell");
        self.open_tab(&url)
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == ShellState::Closed
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Opens a tab and switches to it. The navigation to `url` is deferred to
    /// the next loop tick so the placeholder is painted first.
    pub fn open_tab(&mut self, url: &str) -> Result<TabHandle, TabError> {
        if self.is_closed() {
            return Err(TabError::WindowClosed);
        }
        let handle = self.tab_manager.open(&mut self.factory)?;
        self.navigation_manager.show_url("");

        if let Some(tab) = self.tab_manager.get_tab(handle) {
            self.deferred.push_back(DeferredTask::Load {
                view: tab.view_id,
                url: url.to_string(),
            });
        }
        Ok(handle)
    }

    pub fn switch_to(&mut self, handle: TabHandle) -> Result<(), TabError> {
        let tab = self.tab_manager.switch_to(handle)?;
        let url = tab.url.clone();
        self.navigation_manager.show_url(&url);
        Ok(())
    }

    /// Closes a tab. Closing the last one closes the window.
    pub fn close_tab(&mut self, handle: TabHandle) -> Result<CloseOutcome, TabError> {
        let outcome = self.tab_manager.close(handle)?;
        match outcome {
            CloseOutcome::Remaining { active } => {
                let url = self
                    .tab_manager
                    .get_tab(active)
                    .map(|t| t.url.clone())
                    .unwrap_or_default();
                self.navigation_manager.show_url(&url);
            }
            CloseOutcome::LastTabClosed => {
                self.enter_closed();
            }
        }
        Ok(outcome)
    }

    /// Releases every tab and enters the closed state. Returns false when the
    /// window was already closed.
    pub fn close_window(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.tab_manager.close_all();
        self.enter_closed();
        true
    }

    fn enter_closed(&mut self) {
        self.deferred.clear();
        self.state = ShellState::Closed;
        info!("window closed");
    }

    /// Applies a page-view notification. Returns true when the chrome needs
    /// redrawing. Notifications for closed tabs are ignored.
    pub fn on_page_notification(&mut self, view: ViewId, notification: PageNotification) -> bool {
        match notification {
            PageNotification::TitleChanged(title) => self.tab_manager.on_title_changed(view, &title),
            PageNotification::IconChanged(icon) => self.tab_manager.on_icon_changed(view, icon),
            PageNotification::UrlChanged(url) => self.apply_url(view, &url),
            PageNotification::LocationChanged => {
                let url = self
                    .tab_manager
                    .tab_for_view(view)
                    .and_then(|tab| tab.view.current_url())
                    .filter(|url| is_reportable_url(url));
                match url {
                    Some(url) => self.apply_url(view, &url),
                    None => false,
                }
            }
        }
    }

    fn apply_url(&mut self, view: ViewId, url: &str) -> bool {
        match self.tab_manager.on_url_changed(view, url) {
            Some(true) => {
                self.navigation_manager.show_url(url);
                true
            }
            Some(false) => true,
            None => false,
        }
    }

    pub fn submit(&mut self, text: &str) -> Option<String> {
        let view = self.tab_manager.get_active_tab_mut().map(|t| &mut t.view);
        let url = self.navigation_manager.submit(text, view);
        if let Some(url) = &url {
            debug!(%url, "submitted");
        }
        url
    }

    pub fn navigate(&mut self, command: NavCommand) -> bool {
        let view = self.tab_manager.get_active_tab_mut().map(|t| &mut t.view);
        self.navigation_manager.navigate(command, view)
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Runs the tasks queued before this tick. Loads for tabs closed in the
    /// meantime are dropped. Returns the number of tasks executed.
    pub fn run_deferred(&mut self) -> usize {
        let mut executed = 0;
        let tasks: Vec<DeferredTask> = self.deferred.drain(..).collect();
        for task in tasks {
            match task {
                DeferredTask::Load { view, url } => match self.tab_manager.tab_for_view_mut(view) {
                    Some(tab) => {
                        tab.view.load(&url);
                        executed += 1;
                    }
                    None => debug!(view = %view, "deferred load for closed tab dropped"),
                },
            }
        }
        executed
    }

    /// Re-lays out the content area for a new window size.
    pub fn layout(&mut self, width: i32, height: i32) {
        let bounds = content_bounds(&self.settings, width, height);
        self.tab_manager.set_content_bounds(bounds);
    }

    /// Handles a message from the chrome surface.
    pub fn handle_chrome_message(&mut self, message: ChromeMessage) -> Dispatch {
        if self.is_closed() {
            return Dispatch::default();
        }
        match message {
            ChromeMessage::Ready => Dispatch::redraw(),
            ChromeMessage::NewTab => {
                let home = self.navigation_manager.home_url().to_string();
                if let Err(e) = self.open_tab(&home) {
                    warn!(error = %e, "failed to open tab");
                }
                Dispatch::redraw()
            }
            ChromeMessage::SwitchTab { id } => {
                if let Err(e) = self.switch_to(id) {
                    debug!(error = %e, "switch ignored");
                }
                Dispatch::redraw()
            }
            ChromeMessage::CloseTab { id } => {
                if let Err(e) = self.close_tab(id) {
                    debug!(error = %e, "close ignored");
                }
                Dispatch::redraw()
            }
            ChromeMessage::TabAuxClick { id, button } => {
                if button == PointerButton::Middle {
                    if let Err(e) = self.close_tab(id) {
                        debug!(error = %e, "close ignored");
                    }
                }
                Dispatch::redraw()
            }
            ChromeMessage::Back => {
                self.navigate(NavCommand::Back);
                Dispatch::default()
            }
            ChromeMessage::Forward => {
                self.navigate(NavCommand::Forward);
                Dispatch::default()
            }
            ChromeMessage::Reload => {
                self.navigate(NavCommand::Reload);
                Dispatch::default()
            }
            ChromeMessage::Submit { text } => {
                self.submit(&text);
                Dispatch::redraw()
            }
            ChromeMessage::UrlFocus { focused } => {
                self.navigation_manager.set_focused(focused);
                Dispatch::default()
            }
            ChromeMessage::Minimize => Dispatch::actions(self.window_manager.minimize()),
            ChromeMessage::ToggleMaximize => Dispatch::actions(self.window_manager.toggle_maximized()),
            ChromeMessage::CloseWindow => {
                self.close_window();
                Dispatch::default()
            }
            ChromeMessage::PointerDown(event) => Dispatch::actions(self.window_manager.handle_pointer_down(&event)),
            ChromeMessage::PointerMove(event) => Dispatch::actions(self.window_manager.handle_pointer_move(&event)),
            ChromeMessage::PointerUp(event) => Dispatch::actions(self.window_manager.handle_pointer_up(&event)),
        }
    }

    /// State for redrawing the chrome surface.
    pub fn snapshot(&self) -> ChromeSnapshot {
        ChromeSnapshot {
            tabs: self.tab_manager.entries(),
            url_field: self.navigation_manager.url_field().clone(),
            maximized: self.window_manager.is_maximized(),
            favicon_size: self.settings.chrome.favicon_size,
        }
    }
}

/// Content area below the chrome, inset by the resize margin so the window
/// edges stay on the chrome surface.
fn content_bounds(settings: &BrowserSettings, width: i32, height: i32) -> Rect {
    let margin = settings.chrome.resize_margin.max(0);
    let top = settings.window.chrome_height.max(0);
    Rect::new(
        margin,
        top,
        width.saturating_sub(margin.saturating_mul(2)).max(0),
        height.saturating_sub(top).saturating_sub(margin).max(0),
    )
}
