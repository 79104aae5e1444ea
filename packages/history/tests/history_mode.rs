use calendar_history::{History, HistoryMode, MemoryHistory};
use pretty_assertions::assert_eq;

#[test]
fn switching_base_moves_the_root() {
    let at_root = HistoryMode::web("");
    let under_app = HistoryMode::web("/app/");

    assert_eq!(at_root.href("/"), "/");
    assert_eq!(under_app.href("/"), "/app/");

    // both bases map their own root back to the same route
    assert_eq!(at_root.route_from_location("/"), "/");
    assert_eq!(under_app.route_from_location("/app/"), "/");
}

#[test]
fn path_and_hash_render_the_same_route_differently() {
    let route = "/";
    let rendered: Vec<String> = [HistoryMode::web("/cal"), HistoryMode::hash("/cal")]
        .iter()
        .map(|mode| mode.href(route))
        .collect();
    assert_eq!(rendered, vec!["/cal/".to_string(), "/cal/#/".to_string()]);
}

#[test]
fn memory_history_renders_through_its_mode() {
    let history = MemoryHistory::with_initial_path("/").with_prefix("/app/");
    assert_eq!(history.full_route_path(), "/app/");

    history.push("/week".to_string());
    assert_eq!(history.full_route_path(), "/app/week");
    assert_eq!(history.current_route(), "/week");
}
