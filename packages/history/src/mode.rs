use std::{borrow::Cow, fmt, str::FromStr};

use url::Url;

/// How the current route is reflected in the URL.
///
/// Both modes are parameterized by a base path: the prefix the application is served under. The
/// base is normalized on construction, see [`normalize_base`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HistoryMode {
    /// Real URL paths, driven by the platform's history API. `/app` + `/` renders as `/app/`.
    Path {
        /// The normalized base path.
        base: String,
    },
    /// Fragment based navigation. `/app` + `/` renders as `/app/#/`.
    Hash {
        /// The normalized base path.
        base: String,
    },
}

impl Default for HistoryMode {
    fn default() -> Self {
        Self::web("")
    }
}

impl HistoryMode {
    /// Navigation through real URL paths under `base`.
    ///
    /// ```rust
    /// # use calendar_history::HistoryMode;
    /// let mode = HistoryMode::web("/app/");
    /// assert_eq!(mode.base(), "/app");
    /// assert_eq!(mode.href("/"), "/app/");
    /// ```
    pub fn web(base: impl AsRef<str>) -> Self {
        Self::Path {
            base: normalize_base(base.as_ref()),
        }
    }

    /// Navigation through the URL fragment under `base`.
    ///
    /// ```rust
    /// # use calendar_history::HistoryMode;
    /// let mode = HistoryMode::hash("");
    /// assert_eq!(mode.href("/"), "/#/");
    /// ```
    pub fn hash(base: impl AsRef<str>) -> Self {
        Self::Hash {
            base: normalize_base(base.as_ref()),
        }
    }

    /// The same mode, served under a different base.
    pub fn with_base(self, base: impl AsRef<str>) -> Self {
        match self {
            Self::Path { .. } => Self::web(base),
            Self::Hash { .. } => Self::hash(base),
        }
    }

    /// The normalized base path. Empty when served from the root.
    pub fn base(&self) -> &str {
        match self {
            Self::Path { base } | Self::Hash { base } => base,
        }
    }

    /// Returns `true` if this mode uses the history API.
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path { .. })
    }

    /// The URL the platform should display for a router-internal `route`.
    pub fn href(&self, route: &str) -> String {
        let route = rooted(route);
        match self {
            Self::Path { base } => format!("{base}{route}"),
            Self::Hash { base } => format!("{base}/#{route}"),
        }
    }

    /// The router-internal route for a location the platform reports.
    ///
    /// `location` may be a full URL or just its path, query and fragment. A location outside of
    /// the base is kept whole, so it only matches a route if the route spells out the full path.
    /// In hash mode the fragment is only read under the base, and an empty fragment yields `/`.
    ///
    /// ```rust
    /// # use calendar_history::HistoryMode;
    /// let mode = HistoryMode::web("/app");
    /// assert_eq!(mode.route_from_location("/app/"), "/");
    /// assert_eq!(mode.route_from_location("https://example.com/app/?week=3"), "/?week=3");
    /// assert_eq!(mode.route_from_location("/elsewhere"), "/elsewhere");
    /// ```
    pub fn route_from_location(&self, location: &str) -> String {
        let location = match Url::parse(location) {
            Ok(url) if url.has_host() => {
                let mut relative = url.path().to_string();
                if let Some(query) = url.query() {
                    relative.push('?');
                    relative.push_str(query);
                }
                if let Some(fragment) = url.fragment() {
                    relative.push('#');
                    relative.push_str(fragment);
                }
                Cow::Owned(relative)
            }
            _ => Cow::Borrowed(location),
        };

        let (path, fragment) = match location.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (&*location, None),
        };

        let base = self.base();
        let Some(rest) = strip_base(base, path) else {
            tracing::trace!(%location, %base, "location is outside of the base path");
            return rooted(path).into_owned();
        };

        match self {
            Self::Path { .. } => rest,
            Self::Hash { .. } => match fragment {
                Some(fragment) if !fragment.is_empty() => rooted(fragment).into_owned(),
                _ => "/".to_string(),
            },
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path { .. } => f.write_str("path"),
            Self::Hash { .. } => f.write_str("hash"),
        }
    }
}

/// The error returned when parsing an unknown [`HistoryMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown history mode `{0}`, expected `path` or `hash`")]
pub struct ParseHistoryModeError(String);

impl FromStr for HistoryMode {
    type Err = ParseHistoryModeError;

    /// Parses a mode name. The base is left empty; set it with [`HistoryMode::with_base`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" | "web" | "history" => Ok(Self::web("")),
            "hash" => Ok(Self::hash("")),
            other => Err(ParseHistoryModeError(other.to_string())),
        }
    }
}

/// Normalize a base path.
///
/// - An empty base means the application's serving root and stays empty.
/// - A scheme and host are dropped, only the path is kept.
/// - Anything from a `#` on is dropped.
/// - A leading `/` is added and trailing `/`s are removed.
///
/// ```rust
/// # use calendar_history::normalize_base;
/// assert_eq!(normalize_base(""), "");
/// assert_eq!(normalize_base("/"), "");
/// assert_eq!(normalize_base("app/"), "/app");
/// assert_eq!(normalize_base("https://example.com/calendar/"), "/calendar");
/// ```
pub fn normalize_base(base: &str) -> String {
    let base = base.trim();
    let base = match Url::parse(base) {
        Ok(url) if url.has_host() => Cow::Owned(url.path().to_string()),
        _ => Cow::Borrowed(base),
    };

    let base = base.split('#').next().unwrap_or_default();
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        String::new()
    } else if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{base}")
    }
}

/// The part of `path` under `base`, rooted. [`None`] if `path` is not under `base`.
fn strip_base(base: &str, path: &str) -> Option<String> {
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/".to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else if rest.starts_with('?') {
        Some(format!("/{rest}"))
    } else {
        None
    }
}

fn rooted(route: &str) -> Cow<'_, str> {
    if route.starts_with('/') {
        Cow::Borrowed(route)
    } else {
        Cow::Owned(format!("/{route}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_serves_from_root() {
        let mode = HistoryMode::web("");
        assert_eq!(mode.base(), "");
        assert_eq!(mode.href("/"), "/");
        assert_eq!(mode.href("/week"), "/week");
    }

    #[test]
    fn base_changes_href_but_not_route() {
        let mode = HistoryMode::web("/app/");
        assert_eq!(mode.href("/"), "/app/");
        assert_eq!(mode.route_from_location("/app/"), "/");
        assert_eq!(mode.route_from_location("/app"), "/");
        assert_eq!(mode.route_from_location("/app?day=2"), "/?day=2");
    }

    #[test]
    fn base_prefix_must_end_on_a_segment() {
        let mode = HistoryMode::web("/app");
        assert_eq!(mode.route_from_location("/apple/pie"), "/apple/pie");
    }

    #[test]
    fn locations_outside_the_base_are_kept_whole() {
        let mode = HistoryMode::web("/app/");
        assert_eq!(mode.route_from_location("/foo"), "/foo");
        assert_eq!(mode.route_from_location("/foo?day=2#top"), "/foo?day=2");
        assert_eq!(mode.route_from_location("https://example.com/"), "/");
    }

    #[test]
    fn hash_mode_only_reads_fragments_under_the_base() {
        let mode = HistoryMode::hash("/app");
        assert_eq!(mode.route_from_location("/other/#/week"), "/other/");
        assert_eq!(mode.route_from_location("/app#/week"), "/week");
        assert_eq!(HistoryMode::hash("").route_from_location("/#/week"), "/week");
    }

    #[test]
    fn hash_mode_reads_the_fragment() {
        let mode = HistoryMode::hash("/app/");
        assert_eq!(mode.href("/"), "/app/#/");
        assert_eq!(mode.route_from_location("/app/#/"), "/");
        assert_eq!(mode.route_from_location("/app/#/week"), "/week");
        assert_eq!(mode.route_from_location("/app/#week"), "/week");
        assert_eq!(mode.route_from_location("/app/"), "/");
        assert_eq!(mode.route_from_location("/app/#"), "/");
    }

    #[test]
    fn with_base_keeps_the_strategy() {
        let mode = HistoryMode::hash("").with_base("/cal");
        assert_eq!(mode, HistoryMode::hash("/cal"));
        assert!(!mode.is_path());
        assert!(HistoryMode::default().is_path());
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("path".parse::<HistoryMode>(), Ok(HistoryMode::web("")));
        assert_eq!("History".parse::<HistoryMode>(), Ok(HistoryMode::web("")));
        assert_eq!("hash".parse::<HistoryMode>(), Ok(HistoryMode::hash("")));
        assert_eq!(
            "fragment".parse::<HistoryMode>().unwrap_err().to_string(),
            "unknown history mode `fragment`, expected `path` or `hash`"
        );
        assert_eq!(HistoryMode::hash("/x").to_string(), "hash");
    }

    #[test]
    fn base_drops_fragment_and_slashes() {
        assert_eq!(normalize_base("/app/#"), "/app");
        assert_eq!(normalize_base("//"), "");
        assert_eq!(normalize_base("  /cal/  "), "/cal");
    }
}
