#[path = "../common/mod.rs"]
mod common;

use rstest::rstest;

use common::{MockFactory, ViewCall};
use foxbr::managers::navigation_manager::{NavigationManager, NavigationManagerTrait};
use foxbr::types::geometry::Rect;
use foxbr::types::navigation::NavCommand;
use foxbr::types::page_view::{PageViewFactory, ViewId};
use foxbr::types::settings::GeneralSettings;

fn manager() -> NavigationManager {
    NavigationManager::new(&GeneralSettings::default())
}

fn view(factory: &mut MockFactory) -> common::MockPageView {
    factory.create(ViewId(1), Rect::new(0, 0, 100, 100)).unwrap()
}

#[rstest]
#[case("example.com", "http://example.com")]
#[case("openai", "https://www.google.com/search?q=openai")]
#[case("https://a.com", "https://a.com")]
#[case("http://a.com/path?x=1", "http://a.com/path?x=1")]
#[case("  docs.rs  ", "http://docs.rs")]
#[case("rust borrow checker", "https://www.google.com/search?q=rust+borrow+checker")]
fn test_submit_dispatches(#[case] input: &str, #[case] expected: &str) {
    let mut nav = manager();
    let mut factory = MockFactory::new();
    let mut page = view(&mut factory);

    assert_eq!(nav.submit(input, Some(&mut page)).as_deref(), Some(expected));
    assert_eq!(factory.loads(), vec![(ViewId(1), expected.to_string())]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_submit_blank_is_noop(#[case] input: &str) {
    let mut nav = manager();
    let mut factory = MockFactory::new();
    let mut page = view(&mut factory);

    assert_eq!(nav.submit(input, Some(&mut page)), None);
    assert!(factory.loads().is_empty());
}

#[test]
fn test_submit_clears_focus_and_keeps_text() {
    let mut nav = manager();
    nav.set_focused(true);
    let mut factory = MockFactory::new();
    let mut page = view(&mut factory);

    nav.submit("  example.com ", Some(&mut page));
    assert!(!nav.url_field().focused);
    assert_eq!(nav.url_field().text, "example.com");
}

#[test]
fn test_submit_without_active_tab() {
    let mut nav = manager();
    assert_eq!(nav.submit::<common::MockPageView>("example.com", None), None);
}

#[test]
fn test_custom_search_template() {
    let settings = GeneralSettings {
        search_url: "https://duckduckgo.com/?q=".to_string(),
        ..GeneralSettings::default()
    };
    let nav = NavigationManager::new(&settings);
    assert_eq!(nav.resolve_input("foo bar").as_deref(), Some("https://duckduckgo.com/?q=foo+bar"));
}

#[rstest]
#[case(NavCommand::Back, ViewCall::Back)]
#[case(NavCommand::Forward, ViewCall::Forward)]
#[case(NavCommand::Reload, ViewCall::Reload)]
fn test_navigate_delegates(#[case] command: NavCommand, #[case] expected: ViewCall) {
    let nav = manager();
    let mut factory = MockFactory::new();
    let mut page = view(&mut factory);

    assert!(nav.navigate(command, Some(&mut page)));
    assert_eq!(factory.calls(ViewId(1)).last(), Some(&expected));
}

#[test]
fn test_navigate_without_active_tab() {
    let nav = manager();
    assert!(!nav.navigate::<common::MockPageView>(NavCommand::Back, None));
}

#[rstest]
#[case("https://www.google.com")]
#[case("https://www.google.com/")]
#[case("")]
fn test_show_url_blanks_home(#[case] url: &str) {
    let mut nav = manager();
    nav.show_url("https://example.com/");
    nav.show_url(url);
    assert!(nav.url_field().text.is_empty());
    assert_eq!(nav.url_field().placeholder, "Search or enter address");
}

#[test]
fn test_show_url_literal_with_cursor_at_start() {
    let mut nav = manager();
    nav.show_url("https://example.com/some/long/path");
    assert_eq!(nav.url_field().text, "https://example.com/some/long/path");
    assert_eq!(nav.url_field().cursor, 0);
}

#[test]
fn test_is_home_url() {
    let nav = manager();
    assert!(nav.is_home_url("https://www.google.com/"));
    assert!(!nav.is_home_url("https://www.google.com/search?q=x"));
}
