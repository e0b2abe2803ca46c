use crate::types::navigation::{NavCommand, UrlField};
use crate::types::page_view::PageView;
use crate::types::settings::GeneralSettings;

/// Trait defining the navigation toolbar interface.
pub trait NavigationManagerTrait {
    fn resolve_input(&self, text: &str) -> Option<String>;
    fn show_url(&mut self, url: &str);
    fn submit<V: PageView>(&mut self, text: &str, active: Option<&mut V>) -> Option<String>;
    fn navigate<V: PageView>(&self, command: NavCommand, active: Option<&mut V>) -> bool;
    fn url_field(&self) -> &UrlField;
    fn home_url(&self) -> &str;
}

/// The toolbar: back/forward/reload, URL submission, and the shared URL field.
pub struct NavigationManager {
    home_url: String,
    search_url: String,
    url_field: UrlField,
}

impl NavigationManager {
    pub fn new(settings: &GeneralSettings) -> Self {
        Self {
            home_url: settings.home_url.clone(),
            search_url: settings.search_url.clone(),
            url_field: UrlField {
                placeholder: settings.url_placeholder.clone(),
                ..UrlField::default()
            },
        }
    }

    /// True when `url` is the new-tab destination. A trailing slash is ignored
    /// because engines normalize `https://host` to `https://host/`.
    pub fn is_home_url(&self, url: &str) -> bool {
        url.trim_end_matches('/') == self.home_url.trim_end_matches('/')
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.url_field.focused = focused;
    }
}

impl NavigationManagerTrait for NavigationManager {
    /// Turns URL-field input into a URL.
    ///
    /// - `http://` / `https://` prefixed text is used as-is.
    /// - Text containing a `.` is treated as a bare domain and gets `http://`.
    /// - Anything else becomes a search query, spaces encoded as `+`.
    ///
    /// Returns `None` for blank input.
    fn resolve_input(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if text.starts_with("http://") || text.starts_with("https://") {
            return Some(text.to_string());
        }
        if text.contains('.') {
            return Some(format!("http://{}", text));
        }
        Some(format!("{}{}", self.search_url, text.replace(' ', "+")))
    }

    /// Repopulates the URL field for a page URL. The home URL leaves the field
    /// blank so the placeholder shows.
    fn show_url(&mut self, url: &str) {
        if url.is_empty() || self.is_home_url(url) {
            self.url_field.text.clear();
        } else {
            self.url_field.text = url.to_string();
        }
        self.url_field.cursor = 0;
    }

    /// Resolves `text` and loads it in the active page-view, then drops focus
    /// from the field. Returns the dispatched URL.
    fn submit<V: PageView>(&mut self, text: &str, active: Option<&mut V>) -> Option<String> {
        let url = self.resolve_input(text)?;
        let view = active?;
        view.load(&url);
        self.url_field.text = text.trim().to_string();
        self.url_field.focused = false;
        Some(url)
    }

    fn navigate<V: PageView>(&self, command: NavCommand, active: Option<&mut V>) -> bool {
        let Some(view) = active else {
            return false;
        };
        match command {
            NavCommand::Back => view.back(),
            NavCommand::Forward => view.forward(),
            NavCommand::Reload => view.reload(),
        }
        true
    }

    fn url_field(&self) -> &UrlField {
        &self.url_field
    }

    fn home_url(&self) -> &str {
        &self.home_url
    }
}
