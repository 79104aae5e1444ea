use calendar_history::HistoryMode;

use crate::{route_definition::RouteDefinition, route_definition::RouteTable, Router, View};

/// Global configuration options for the router.
///
/// This implements [`Default`] and follows the builder pattern, so you can use it like this:
/// ```rust
/// # use calendar_router::prelude::*;
/// struct Index;
/// impl View for Index {
///     fn render(&self) -> Element {
///         Element::new("index")
///     }
/// }
///
/// let router = RouterConfig::default()
///     .history(HistoryMode::hash("/docs"))
///     .route("/", "Index", &Index)
///     .build();
///
/// assert_eq!(router.routes().len(), 1);
/// ```
#[derive(Default)]
pub struct RouterConfig {
    pub(crate) routes: RouteTable,
    pub(crate) history: HistoryMode,
    pub(crate) fallback: Option<&'static dyn View>,
}

impl RouterConfig {
    /// Start a configuration navigating through `history`.
    pub fn new(history: HistoryMode) -> Self {
        Self {
            history,
            ..Default::default()
        }
    }

    /// The history mode the router reflects routes with.
    ///
    /// Defaults to [`HistoryMode::web`] served from the root.
    pub fn history(self, history: HistoryMode) -> Self {
        Self { history, ..self }
    }

    /// Add a route. See [`RouteTable::route`] for how collisions are handled.
    pub fn route(self, path: &'static str, name: &'static str, component: &'static dyn View) -> Self {
        self.definition(RouteDefinition::new(path, name, component))
    }

    /// Add an already built route definition.
    pub fn definition(self, route: RouteDefinition) -> Self {
        Self {
            routes: self.routes.route(route),
            ..self
        }
    }

    /// Replace the whole route table.
    pub fn routes(self, routes: RouteTable) -> Self {
        Self { routes, ..self }
    }

    /// A view to mount when no route matches a path.
    ///
    /// Defaults to [`None`]: navigating to an unmatched path fails with
    /// [`NavigationError::NotFound`](crate::NavigationError::NotFound).
    pub fn fallback(self, component: &'static dyn View) -> Self {
        Self {
            fallback: Some(component),
            ..self
        }
    }

    /// Finish the configuration.
    pub fn build(self) -> Router {
        Router::from_config(self)
    }
}
