//! HTML document of the chrome surface: title bar with the tab strip and
//! window buttons, then the navigation toolbar.
//!
//! The document is static; all state arrives through `window.__foxbr_render`
//! with a serialized `ChromeSnapshot`.

use crate::types::chrome::ChromeSnapshot;
use crate::types::settings::BrowserSettings;

const CHROME_BODY: &str = include_str!("../../resources/ui/chrome.html");
const CHROME_CSS: &str = include_str!("../../resources/ui/chrome.css");
const CHROME_JS: &str = include_str!("../../resources/ui/chrome.js");

pub fn chrome_html(settings: &BrowserSettings) -> String {
    let vars = format!(
        ":root{{--chrome-height:{}px;--resize-margin:{}px;--favicon-size:{}px}}",
        settings.window.chrome_height, settings.chrome.resize_margin, settings.chrome.favicon_size
    );
    let mut html = String::with_capacity(CHROME_BODY.len() + CHROME_CSS.len() + CHROME_JS.len() + vars.len() + 256);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(&vars);
    html.push_str(CHROME_CSS);
    html.push_str("</style></head><body>");
    html.push_str(CHROME_BODY);
    html.push_str("<script>");
    html.push_str(CHROME_JS);
    html.push_str("</script></body></html>");
    html
}

/// Script that redraws the chrome from `snapshot`.
pub fn render_script(snapshot: &ChromeSnapshot) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(snapshot)?;
    Ok(format!("if(window.__foxbr_render)window.__foxbr_render({})", json))
}
