//! FoxBr UI layer.
//!
//! Uses `wry` for the webviews and `tao` for the frameless window:
//! - Windows: WebView2
//! - Linux: WebKitGTK, hosted in a `gtk::Fixed`
//! - macOS: WKWebView
//!
//! The chrome (tabs, toolbar, window buttons) is HTML/CSS/JS in its own
//! webview and talks to the shell over wry IPC.

pub mod chrome_page;
pub mod page_view;
pub mod webview_app;
