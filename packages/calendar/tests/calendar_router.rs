use calendar::{
    host::Host,
    router::{router, router_with_mode, CALENDAR_PAGE},
};
use calendar_history::HistoryMode;
use calendar_router::{navigation::NavigationTarget, NavigationError};
use pretty_assertions::assert_eq;

#[test]
fn root_resolves_to_calendar_page() {
    let router = router("");
    assert_eq!(router.resolve("/").map(|route| route.name()), Some(CALENDAR_PAGE));
}

#[test]
fn exactly_one_route() {
    let router = router("");
    let routes: Vec<_> = router
        .routes()
        .iter()
        .map(|route| (route.path(), route.name()))
        .collect();
    assert_eq!(routes, vec![("/", "CalendarPage")]);
}

#[test]
fn construction_is_deterministic() {
    assert_eq!(router(""), router(""));
    assert_eq!(router("/app/"), router("/app/"));
}

#[test]
fn base_path_moves_the_root_but_not_the_routes() {
    let at_root = router("");
    let under_app = router("/app/");

    assert_eq!(at_root.routes(), under_app.routes());
    assert_eq!(at_root.history_mode().href("/"), "/");
    assert_eq!(under_app.history_mode().href("/"), "/app/");
    assert_eq!(
        under_app.href(&NavigationTarget::named(CALENDAR_PAGE)).unwrap(),
        "/app/"
    );
}

#[test]
fn history_mode_is_path_based() {
    assert!(router("").history_mode().is_path());
    assert_eq!(router("/app/").history_mode(), &HistoryMode::web("/app"));
}

#[test]
fn other_paths_do_not_match() {
    let router = router("");
    assert!(router.resolve("/foo").is_none());

    let mut host = Host::install(&router, "/");
    assert_eq!(
        host.open("/foo").unwrap_err(),
        NavigationError::NotFound("/foo".to_string())
    );
}

#[test]
fn paths_outside_the_base_do_not_match() {
    let router = router("/app/");
    assert!(router.resolve_location("/foo").is_none());
    assert!(router.resolve_location("https://example.com/foo").is_none());
    assert_eq!(
        router.resolve_location("/app/").map(|route| route.name()),
        Some(CALENDAR_PAGE)
    );

    let host = Host::install(&router, "/foo");
    assert!(host.mounted().is_none());
}

#[test]
fn hash_mode_serves_the_same_table() {
    let hashed = router_with_mode(HistoryMode::hash("/app/"));
    assert_eq!(hashed.routes(), router("/app/").routes());

    let host = Host::install(&hashed, "/app/#/");
    let mounted = host.mounted().unwrap();
    assert_eq!(mounted.name, Some(CALENDAR_PAGE));
    assert_eq!(mounted.href, "/app/#/");
}

#[test]
fn mounting_renders_the_calendar_view() {
    let router = router("/app/");
    let host = Host::install(&router, "https://example.com/app/");
    let mounted = host.mounted().unwrap();
    assert!(mounted.element.as_str().contains("Calendar"));
}
