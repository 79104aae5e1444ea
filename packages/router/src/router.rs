use std::fmt;

use calendar_history::{History, HistoryMode};
use tracing::{debug, trace, warn};

use crate::{
    navigation::NavigationTarget,
    route_definition::{is_protocol_relative, RouteDefinition, RouteTable},
    Element, NavigationError, RouterConfig, View,
};

/// A route table combined with the history mode it is navigated through.
///
/// A router is built once, usually at startup, and never changes afterwards. Hand it to whatever
/// hosts the application by reference; it is `Send + Sync` and safe to share between readers.
#[derive(Clone)]
pub struct Router {
    routes: RouteTable,
    history: HistoryMode,
    fallback: Option<&'static dyn View>,
}

/// What a path resolved to.
#[derive(Clone, Copy)]
pub enum Resolved<'a> {
    /// A route of the table.
    Route(&'a RouteDefinition),
    /// No route matched, the configured fallback view takes over.
    Fallback(&'static dyn View),
}

impl Resolved<'_> {
    /// The name of the matched route, if a route matched.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Route(route) => Some(route.name()),
            Self::Fallback(_) => None,
        }
    }

    /// The view to mount.
    pub fn view(&self) -> &'static dyn View {
        match self {
            Self::Route(route) => route.component(),
            Self::Fallback(view) => *view,
        }
    }

    /// Render the view to mount.
    pub fn render(&self) -> Element {
        self.view().render()
    }
}

impl fmt::Debug for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route(route) => f.debug_tuple("Route").field(route).finish(),
            Self::Fallback(_) => f.write_str("Fallback"),
        }
    }
}

impl Router {
    pub(crate) fn from_config(cfg: RouterConfig) -> Self {
        Self {
            routes: cfg.routes,
            history: cfg.history,
            fallback: cfg.fallback,
        }
    }

    /// The route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The history mode routes are reflected in the URL with.
    pub fn history_mode(&self) -> &HistoryMode {
        &self.history
    }

    /// Returns `true` if a fallback view is configured for unmatched paths.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Find the route for a router-internal path. Unmatched paths yield [`None`], even if a
    /// fallback view is configured.
    pub fn resolve(&self, path: &str) -> Option<&RouteDefinition> {
        let route = self.routes.resolve(path);
        trace!(path, route = route.map(RouteDefinition::name), "resolved path");
        route
    }

    /// Find the route for a location as the platform reports it, base path and all.
    pub fn resolve_location(&self, location: &str) -> Option<&RouteDefinition> {
        self.resolve(&self.history.route_from_location(location))
    }

    /// Find what to mount for `path`: its route, or the fallback view.
    pub fn mount_target(&self, path: &str) -> Option<Resolved<'_>> {
        match self.resolve(path) {
            Some(route) => Some(Resolved::Route(route)),
            None => self.fallback.map(Resolved::Fallback),
        }
    }

    /// What to mount for the route `history` currently points at.
    pub fn current(&self, history: &dyn History) -> Option<Resolved<'_>> {
        self.mount_target(&history.current_route())
    }

    /// The URL the platform should display for `target`.
    ///
    /// Named targets must exist. Internal paths are rendered even if no route matches them.
    pub fn href(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        match target {
            NavigationTarget::Internal(path) => Ok(self.history.href(path)),
            NavigationTarget::Named(name) => self
                .routes
                .by_name(name)
                .map(|route| self.history.href(route.path()))
                .ok_or_else(|| NavigationError::UnknownName(name.clone())),
            NavigationTarget::External(url) => Ok(url.clone()),
        }
    }

    /// Navigate `history` to `target`.
    ///
    /// On success the new route is pushed onto the history and the view to mount is returned. A
    /// failed navigation leaves the history untouched. External targets are handed to
    /// [`History::external`] and yield [`None`].
    pub fn navigate(
        &self,
        history: &dyn History,
        target: impl Into<NavigationTarget>,
    ) -> Result<Option<Resolved<'_>>, NavigationError> {
        let target = target.into();
        let (path, resolved) = match &target {
            NavigationTarget::Internal(path) if is_protocol_relative(path) => {
                warn!(path = %path, r#"cannot navigate to paths starting with "//""#);
                return Err(NavigationError::NotFound(path.clone()));
            }
            NavigationTarget::Internal(path) => match self.mount_target(path) {
                Some(resolved) => (path.clone(), resolved),
                None => {
                    warn!(path = %path, "no route matches path");
                    return Err(NavigationError::NotFound(path.clone()));
                }
            },
            NavigationTarget::Named(name) => match self.routes.by_name(name) {
                Some(route) => (route.path().to_string(), Resolved::Route(route)),
                None => {
                    warn!(name = %name, "no route carries name");
                    return Err(NavigationError::UnknownName(name.clone()));
                }
            },
            NavigationTarget::External(url) => {
                return match history.external(url.clone()) {
                    true => Ok(None),
                    false => Err(NavigationError::External(url.clone())),
                };
            }
        };

        if resolved.name().is_none() {
            warn!(path = %path, "no route matches path, mounting the fallback view");
        }
        debug!(%target, route = resolved.name(), "navigating");
        history.push(path);
        Ok(Some(resolved))
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("history", &self.history)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl PartialEq for Router {
    fn eq(&self, other: &Self) -> bool {
        self.routes == other.routes
            && self.history == other.history
            && self.fallback.is_some() == other.fallback.is_some()
    }
}
