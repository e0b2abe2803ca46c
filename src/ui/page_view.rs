//! `PageView` backed by a child `wry::WebView`.
//!
//! Every tab owns one webview laid out over the content area of the window.
//! Page notifications never touch shell state directly: handlers forward them
//! to the event loop through the `EventLoopProxy` tagged with the view's id.

#[cfg(not(target_os = "linux"))]
use std::rc::Rc;

use tao::event_loop::EventLoopProxy;
#[cfg(not(target_os = "linux"))]
use tao::window::Window;
use tracing::{debug, warn};
use wry::{WebView, WebViewBuilder};

use super::webview_app::UserEvent;
use crate::types::errors::ViewError;
use crate::types::geometry::Rect;
use crate::types::page_view::{is_reportable_url, PageMessage, PageNotification, PageView, PageViewFactory, ViewId};

pub const PLACEHOLDER_HTML: &str = "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head>\
<body style=\"font-family:sans-serif;color:#555;display:flex;align-items:center;justify-content:center;height:100vh;margin:0\">\
<h1>Loading...</h1></body></html>";

const PAGE_HOOKS_JS: &str = include_str!("../../resources/ui/page_hooks.js");

/// Container all webviews of the window are built into.
///
/// On Linux webviews live in a `gtk::Fixed` packed into the window's vbox, so
/// several of them can be stacked and positioned. Elsewhere they are native
/// children of the window.
#[derive(Clone)]
pub struct ViewHost {
    #[cfg(target_os = "linux")]
    fixed: gtk::Fixed,
    #[cfg(not(target_os = "linux"))]
    window: Rc<Window>,
}

impl ViewHost {
    #[cfg(target_os = "linux")]
    pub fn new(window: &std::rc::Rc<tao::window::Window>) -> Result<Self, ViewError> {
        use gtk::prelude::*;
        use tao::platform::unix::WindowExtUnix;

        let vbox = window
            .default_vbox()
            .ok_or_else(|| ViewError::Build("window has no GTK vbox".to_string()))?;
        let fixed = gtk::Fixed::new();
        vbox.pack_start(&fixed, true, true, 0);
        fixed.show_all();
        Ok(Self { fixed })
    }

    #[cfg(not(target_os = "linux"))]
    pub fn new(window: &Rc<Window>) -> Result<Self, ViewError> {
        Ok(Self { window: Rc::clone(window) })
    }

    pub fn build(&self, builder: WebViewBuilder<'_>) -> Result<WebView, ViewError> {
        #[cfg(target_os = "linux")]
        let webview = {
            use wry::WebViewBuilderExtUnix;
            builder.build_gtk(&self.fixed)
        };
        #[cfg(not(target_os = "linux"))]
        let webview = builder.build_as_child(&*self.window);

        webview.map_err(|e| ViewError::Build(e.to_string()))
    }
}

pub fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x as f64, rect.y as f64)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            rect.width.max(0) as f64,
            rect.height.max(0) as f64,
        )),
    }
}

pub struct WryPageView {
    id: ViewId,
    webview: WebView,
}

impl WryPageView {
    fn eval(&self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!(view = %self.id, error = %e, "script failed");
        }
    }
}

impl PageView for WryPageView {
    fn show_placeholder(&mut self) {
        if let Err(e) = self.webview.load_html(PLACEHOLDER_HTML) {
            warn!(view = %self.id, error = %e, "placeholder failed");
        }
    }

    fn load(&mut self, url: &str) {
        debug!(view = %self.id, %url, "load");
        if let Err(e) = self.webview.load_url(url) {
            warn!(view = %self.id, %url, error = %e, "load failed");
        }
    }

    fn back(&mut self) {
        self.eval("history.back()");
    }

    fn forward(&mut self) {
        self.eval("history.forward()");
    }

    fn reload(&mut self) {
        self.eval("location.reload()");
    }

    fn set_visible(&mut self, visible: bool) {
        if let Err(e) = self.webview.set_visible(visible) {
            warn!(view = %self.id, error = %e, "set_visible failed");
        }
    }

    fn set_bounds(&mut self, bounds: Rect) {
        if let Err(e) = self.webview.set_bounds(to_wry_rect(bounds)) {
            warn!(view = %self.id, error = %e, "set_bounds failed");
        }
    }

    fn current_url(&self) -> Option<String> {
        match self.webview.url() {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(view = %self.id, error = %e, "url lookup failed");
                None
            }
        }
    }
}

pub struct WryPageViewFactory {
    host: ViewHost,
    proxy: EventLoopProxy<UserEvent>,
    devtools: bool,
}

impl WryPageViewFactory {
    pub fn new(host: ViewHost, proxy: EventLoopProxy<UserEvent>, devtools: bool) -> Self {
        Self { host, proxy, devtools }
    }
}

impl PageViewFactory for WryPageViewFactory {
    type View = WryPageView;

    fn create(&mut self, id: ViewId, bounds: Rect) -> Result<WryPageView, ViewError> {
        let title_proxy = self.proxy.clone();
        let load_proxy = self.proxy.clone();
        let ipc_proxy = self.proxy.clone();
        let nw_proxy = self.proxy.clone();

        let builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(bounds))
            .with_initialization_script(PAGE_HOOKS_JS)
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::Page(id, PageNotification::TitleChanged(title)));
            })
            .with_on_page_load_handler(move |_event, url| {
                // Started reports the target early, Finished the final URL after redirects.
                if is_reportable_url(&url) {
                    debug!(view = %id, %url, "page load");
                    let _ = load_proxy.send_event(UserEvent::Page(id, PageNotification::UrlChanged(url)));
                }
            })
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                match PageMessage::parse(msg.body()) {
                    Ok(message) => {
                        if let Some(notification) = message.into_notification() {
                            let _ = ipc_proxy.send_event(UserEvent::Page(id, notification));
                        }
                    }
                    Err(e) => debug!(view = %id, error = %e, "unrecognised page message"),
                }
            })
            .with_new_window_req_handler(move |url, _features| {
                if url.starts_with("http://") || url.starts_with("https://") {
                    let _ = nw_proxy.send_event(UserEvent::OpenTab(url));
                }
                wry::NewWindowResponse::Deny
            })
            .with_devtools(self.devtools);

        let webview = self.host.build(builder)?;
        Ok(WryPageView { id, webview })
    }
}
