//! Frameless browser window using `wry` + `tao`.
//!
//! Architecture:
//! - One full-window chrome webview draws the title bar, tab strip and
//!   toolbar. It is built first so the content webviews stack above it.
//! - One content webview per tab, positioned over the content area below the
//!   chrome and inset by the resize margin so the window edges stay grabbable.
//! - Every webview handler forwards to the event loop through the
//!   `EventLoopProxy`; all shell state lives in the loop closure.

use std::rc::Rc;

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{CursorIcon, Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::{WebView, WebViewBuilder};

use super::chrome_page::{chrome_html, render_script};
use super::page_view::{to_wry_rect, ViewHost, WryPageViewFactory};
use crate::app::App;
use crate::managers::window_manager::{WindowAction, WindowManagerTrait};
use crate::types::chrome::ChromeMessage;
use crate::types::errors::ShellError;
use crate::types::geometry::{CursorShape, Rect};
use crate::types::page_view::{PageNotification, ViewId};
use crate::types::settings::BrowserSettings;

#[derive(Debug)]
pub enum UserEvent {
    /// Raw IPC body from the chrome webview.
    Chrome(String),
    /// Notification from the page-view with the given id.
    Page(ViewId, PageNotification),
    /// A page asked for a new window.
    OpenTab(String),
    /// Drain the deferred-task queue.
    RunDeferred,
}

struct Shell {
    app: App<WryPageViewFactory>,
    window: Rc<Window>,
    chrome: WebView,
    proxy: EventLoopProxy<UserEvent>,
    deferred_scheduled: bool,
}

impl Shell {
    fn render(&self) {
        match render_script(&self.app.snapshot()) {
            Ok(script) => {
                if let Err(e) = self.chrome.evaluate_script(&script) {
                    warn!(error = %e, "chrome render failed");
                }
            }
            Err(e) => warn!(error = %e, "chrome snapshot serialization failed"),
        }
    }

    fn apply(&self, action: WindowAction) {
        debug!(?action, "window action");
        match action {
            WindowAction::Move(p) => self.window.set_outer_position(LogicalPosition::new(p.x, p.y)),
            WindowAction::Maximize => self.window.set_maximized(true),
            WindowAction::Restore => self.window.set_maximized(false),
            WindowAction::Minimize => self.window.set_minimized(true),
            WindowAction::SetGeometry(r) => {
                self.window.set_outer_position(LogicalPosition::new(r.x, r.y));
                self.window.set_inner_size(LogicalSize::new(r.width, r.height));
            }
            WindowAction::SetCursor(shape) => self.window.set_cursor_icon(cursor_icon(shape)),
        }
    }

    /// Window geometry in logical pixels.
    fn logical_geometry(&self) -> Rect {
        let scale = self.window.scale_factor();
        let position = self
            .window
            .outer_position()
            .map(|p| p.to_logical::<i32>(scale))
            .unwrap_or(LogicalPosition::new(0, 0));
        let size = self.window.inner_size().to_logical::<i32>(scale);
        Rect::new(position.x, position.y, size.width, size.height)
    }

    fn sync_geometry(&mut self) -> bool {
        let was_maximized = self.app.window_manager.is_maximized();
        let geometry = self.logical_geometry();
        self.app.window_manager.sync_geometry(geometry, self.window.is_maximized());
        was_maximized != self.app.window_manager.is_maximized()
    }

    fn relayout(&mut self) {
        let geometry = self.logical_geometry();
        let full = Rect::new(0, 0, geometry.width, geometry.height);
        if let Err(e) = self.chrome.set_bounds(to_wry_rect(full)) {
            warn!(error = %e, "chrome resize failed");
        }
        self.app.layout(geometry.width, geometry.height);
    }

    fn schedule_deferred(&mut self) {
        if self.app.has_deferred() && !self.deferred_scheduled {
            self.deferred_scheduled = self.proxy.send_event(UserEvent::RunDeferred).is_ok();
        }
    }

    fn handle_chrome(&mut self, body: &str) {
        let message = match ChromeMessage::parse(body) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "unrecognised chrome message");
                return;
            }
        };
        let dispatch = self.app.handle_chrome_message(message);
        for action in dispatch.actions {
            self.apply(action);
        }
        if dispatch.redraw && !self.app.is_closed() {
            self.render();
        }
    }
}

pub fn cursor_icon(shape: CursorShape) -> CursorIcon {
    match shape {
        CursorShape::Default => CursorIcon::Default,
        CursorShape::NResize => CursorIcon::NResize,
        CursorShape::SResize => CursorIcon::SResize,
        CursorShape::EResize => CursorIcon::EResize,
        CursorShape::WResize => CursorIcon::WResize,
        CursorShape::NeResize => CursorIcon::NeResize,
        CursorShape::NwResize => CursorIcon::NwResize,
        CursorShape::SeResize => CursorIcon::SeResize,
        CursorShape::SwResize => CursorIcon::SwResize,
    }
}

// ─── Main entry point ───

/// Builds the window and runs the event loop until the window is closed.
/// `start_url` overrides the home page for the startup tab.
pub fn run(settings: BrowserSettings, start_url: Option<String>) -> Result<(), ShellError> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let geometry = settings.window.geometry();
    let window = WindowBuilder::new()
        .with_title(settings.window.title.as_str())
        .with_decorations(false)
        .with_position(LogicalPosition::new(geometry.x, geometry.y))
        .with_inner_size(LogicalSize::new(geometry.width, geometry.height))
        .with_min_inner_size(LogicalSize::new(settings.window.min_width, settings.window.min_height))
        .build(&event_loop)
        .map_err(|e| ShellError::Platform(e.to_string()))?;
    let window = Rc::new(window);

    let host = ViewHost::new(&window)?;

    let chrome_proxy = proxy.clone();
    let chrome_builder = WebViewBuilder::new()
        .with_html(chrome_html(&settings))
        .with_bounds(to_wry_rect(Rect::new(0, 0, geometry.width, geometry.height)))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = chrome_proxy.send_event(UserEvent::Chrome(msg.body().clone()));
        })
        .with_devtools(settings.chrome.devtools);
    let chrome = host.build(chrome_builder)?;

    let factory = WryPageViewFactory::new(host, proxy.clone(), settings.chrome.devtools);
    let mut app = App::new(settings, factory);
    app.startup(start_url.as_deref())?;

    let mut shell = Shell {
        app,
        window,
        chrome,
        proxy,
        deferred_scheduled: false,
    };
    shell.sync_geometry();
    shell.relayout();
    shell.schedule_deferred();
    info!("event loop started");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                shell.app.close_window();
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                let changed = shell.sync_geometry();
                shell.relayout();
                if changed {
                    shell.render();
                }
            }

            Event::WindowEvent {
                event: WindowEvent::Moved(_),
                ..
            } => {
                if shell.sync_geometry() {
                    shell.render();
                }
            }

            Event::UserEvent(UserEvent::Chrome(body)) => shell.handle_chrome(&body),

            Event::UserEvent(UserEvent::Page(view, notification)) => {
                if shell.app.on_page_notification(view, notification) {
                    shell.render();
                }
            }

            Event::UserEvent(UserEvent::OpenTab(url)) => match shell.app.open_tab(&url) {
                Ok(_) => shell.render(),
                Err(e) => warn!(error = %e, %url, "popup tab not opened"),
            },

            Event::UserEvent(UserEvent::RunDeferred) => {
                shell.deferred_scheduled = false;
                shell.app.run_deferred();
            }

            _ => {}
        }

        if shell.app.is_closed() {
            *control_flow = ControlFlow::Exit;
            return;
        }
        shell.schedule_deferred();
    })
}
