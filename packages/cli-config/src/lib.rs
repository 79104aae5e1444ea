//! Configuration for the calendar app.
//!
//! The base path the app is served under can come from three places, in order of precedence:
//! 1. the `CALENDAR_BASE_PATH` environment variable at runtime,
//! 2. the `CALENDAR_BASE_PATH` environment variable when the crate was built ([`BASE_PATH`]),
//! 3. `[web.app] base_path` in `Calendar.toml` ([`CalendarConfig`]).
//!
//! If none is set the app is served from the root.

mod config;
pub use config::*;

/// The environment variable holding the base path.
pub const BASE_PATH_ENV: &str = "CALENDAR_BASE_PATH";

/// The base path baked in at build time.
pub const BASE_PATH: Option<&str> = std::option_env!("CALENDAR_BASE_PATH");

/// The base path from the environment, falling back to the build-time value.
///
/// Returns [`None`] if neither is set.
pub fn base_path() -> Option<String> {
    base_path_from(std::env::var(BASE_PATH_ENV).ok(), BASE_PATH)
}

/// Pick the runtime base path over the build-time one.
pub fn base_path_from(runtime: Option<String>, build_time: Option<&str>) -> Option<String> {
    match runtime {
        Some(path) => {
            tracing::trace!(%path, "base path from the environment");
            Some(path)
        }
        None => build_time.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_wins_over_build_time() {
        assert_eq!(
            base_path_from(Some("/run/".into()), Some("/build/")),
            Some("/run/".to_string())
        );
        assert_eq!(base_path_from(None, Some("/build/")), Some("/build/".to_string()));
        assert_eq!(base_path_from(None, None), None);
    }

    #[test]
    fn empty_runtime_value_is_kept() {
        // an explicitly empty base means the serving root
        assert_eq!(base_path_from(Some(String::new()), Some("/build/")), Some(String::new()));
    }
}
