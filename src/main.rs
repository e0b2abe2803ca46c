//! FoxBr: a frameless, tabbed web browser shell.
//!
//! Entry point: loads settings and opens the browser window.
//! When built without the `gui` feature, runs a console demo of the shell
//! against logging page-views.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use foxbr::services::settings_engine::SettingsEngine;
use foxbr::types::errors::ShellError;
use foxbr::types::settings::BrowserSettings;

/// FoxBr - a frameless tabbed browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL or search text for the first tab (defaults to the home page)
    url: Option<String>,

    /// Settings file to use instead of the platform default
    #[arg(long)]
    config: Option<String>,

    /// Override a setting for this run, e.g. --set window.width=1280
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "foxbr=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_settings(args: &Args) -> Result<BrowserSettings, ShellError> {
    let mut engine = SettingsEngine::new(args.config.clone());
    engine.load_or_init()?;
    for assignment in &args.overrides {
        engine.apply_override(assignment)?;
    }
    Ok(engine.into_settings())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    info!("FoxBr v{}", env!("CARGO_PKG_VERSION"));

    let result = load_settings(&args).and_then(|settings| run(settings, args.url));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "browser failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "gui")]
fn run(settings: BrowserSettings, url: Option<String>) -> Result<(), ShellError> {
    foxbr::ui::webview_app::run(settings, url)
}

#[cfg(not(feature = "gui"))]
fn run(settings: BrowserSettings, url: Option<String>) -> Result<(), ShellError> {
    demo::run(settings, url)
}

/// Console walkthrough of the shell: every page-view command is printed
/// instead of rendered.
#[cfg(not(feature = "gui"))]
mod demo {
    use foxbr::app::App;
    use foxbr::managers::navigation_manager::NavigationManagerTrait;
    use foxbr::managers::tab_manager::TabManagerTrait;
    use foxbr::managers::window_manager::WindowManagerTrait;
    use foxbr::types::chrome::{ChromeMessage, PointerButton, PointerEvent};
    use foxbr::types::errors::{ShellError, ViewError};
    use foxbr::types::geometry::Rect;
    use foxbr::types::page_view::{PageNotification, PageView, PageViewFactory, ViewId};
    use foxbr::types::settings::BrowserSettings;

    struct ConsolePageView {
        id: ViewId,
        location: Option<String>,
    }

    impl PageView for ConsolePageView {
        fn show_placeholder(&mut self) {
            println!("  [{}] placeholder", self.id);
        }
        fn load(&mut self, url: &str) {
            println!("  [{}] load {}", self.id, url);
            self.location = Some(url.to_string());
        }
        fn back(&mut self) {
            println!("  [{}] back", self.id);
        }
        fn forward(&mut self) {
            println!("  [{}] forward", self.id);
        }
        fn reload(&mut self) {
            println!("  [{}] reload", self.id);
        }
        fn set_visible(&mut self, visible: bool) {
            println!("  [{}] visible={}", self.id, visible);
        }
        fn set_bounds(&mut self, bounds: Rect) {
            println!("  [{}] bounds {}x{} at ({}, {})", self.id, bounds.width, bounds.height, bounds.x, bounds.y);
        }
        fn current_url(&self) -> Option<String> {
            self.location.clone()
        }
    }

    impl Drop for ConsolePageView {
        fn drop(&mut self) {
            println!("  [{}] released", self.id);
        }
    }

    struct ConsoleFactory;

    impl PageViewFactory for ConsoleFactory {
        type View = ConsolePageView;

        fn create(&mut self, id: ViewId, _bounds: Rect) -> Result<ConsolePageView, ViewError> {
            println!("  [{}] created", id);
            Ok(ConsolePageView { id, location: None })
        }
    }

    fn section(name: &str) {
        println!("───────────────────────────────────────────────────────────────");
        println!("  {}", name);
        println!("───────────────────────────────────────────────────────────────");
    }

    fn pointer(x: i32, y: i32, screen_x: i32, screen_y: i32) -> PointerEvent {
        PointerEvent {
            button: PointerButton::Left,
            left_held: true,
            x,
            y,
            screen_x,
            screen_y,
            in_title_bar: true,
            title_bar_width: 1000,
        }
    }

    pub fn run(settings: BrowserSettings, url: Option<String>) -> Result<(), ShellError> {
        println!();
        println!("FoxBr v{} (console mode)", env!("CARGO_PKG_VERSION"));
        println!();

        let mut app = App::new(settings, ConsoleFactory);

        section("Startup");
        let first = app.startup(url.as_deref())?;
        app.run_deferred();

        section("Tabs");
        app.handle_chrome_message(ChromeMessage::NewTab);
        app.run_deferred();
        let first_view = app.tab_manager.get_tab(first).map(|t| t.view_id);
        if let Some(view) = first_view {
            app.on_page_notification(view, PageNotification::TitleChanged("Start page".to_string()));
        }
        for entry in app.tab_manager.entries() {
            println!("  tab {:?} {:?}", entry.style, entry.title);
        }
        app.handle_chrome_message(ChromeMessage::SwitchTab { id: first });

        section("Navigation");
        app.handle_chrome_message(ChromeMessage::Submit { text: "rust lang".to_string() });
        app.handle_chrome_message(ChromeMessage::Back);
        println!("  url field: {:?}", app.navigation_manager.url_field().text);

        section("Window chrome");
        app.handle_chrome_message(ChromeMessage::PointerDown(pointer(300, 20, 400, 120)));
        let dispatch = app.handle_chrome_message(ChromeMessage::PointerMove(pointer(300, 20, 450, 160)));
        println!("  drag actions: {:?}", dispatch.actions);
        app.handle_chrome_message(ChromeMessage::PointerUp(pointer(300, 20, 450, 160)));
        let dispatch = app.handle_chrome_message(ChromeMessage::ToggleMaximize);
        println!("  maximize actions: {:?} (maximized={})", dispatch.actions, app.window_manager.is_maximized());

        section("Shutdown");
        app.handle_chrome_message(ChromeMessage::CloseWindow);
        println!("  state: {:?}", app.state());
        println!();
        Ok(())
    }
}
