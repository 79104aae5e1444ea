//! The route table of the app.

use calendar_cli_config::{base_path_from, CalendarConfig, ConfigError, BASE_PATH};
use calendar_history::HistoryMode;
use calendar_router::{Router, RouterConfig};

use crate::views::CalendarPage;

/// The name of the calendar route.
pub const CALENDAR_PAGE: &str = "CalendarPage";

/// Build the app's router, navigating through real URL paths under `base_path`.
///
/// An empty `base_path` serves the app from the root.
///
/// | Path | Name           | View             |
/// |------|----------------|------------------|
/// | `/`  | `CalendarPage` | [`CalendarPage`] |
pub fn router(base_path: &str) -> Router {
    router_with_mode(HistoryMode::web(base_path))
}

/// Build the app's router with an explicit history mode.
pub fn router_with_mode(history: HistoryMode) -> Router {
    RouterConfig::new(history)
        .route("/", CALENDAR_PAGE, &CalendarPage)
        .build()
}

/// The history mode the app runs under.
///
/// The base path comes from the first of these that is set:
/// 1. `base`, the command line or the runtime `CALENDAR_BASE_PATH`,
/// 2. the build-time `CALENDAR_BASE_PATH`,
/// 3. `[web.app] base_path` in `Calendar.toml`,
/// 4. the serving root.
///
/// `hash` switches to fragment navigation and keeps whichever base was picked.
pub fn history_mode(
    config: &CalendarConfig,
    hash: bool,
    base: Option<String>,
) -> Result<HistoryMode, ConfigError> {
    history_mode_with(config, hash, base, BASE_PATH)
}

fn history_mode_with(
    config: &CalendarConfig,
    hash: bool,
    base: Option<String>,
    build_time: Option<&str>,
) -> Result<HistoryMode, ConfigError> {
    let mut mode = config.history_mode()?;
    if hash {
        mode = HistoryMode::hash(mode.base());
    }
    if let Some(base) = base_path_from(base, build_time) {
        mode = mode.with_base(base);
    }
    Ok(mode)
}
