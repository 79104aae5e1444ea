/// An invalid entry in a [`RouteTable`](crate::route_definition::RouteTable).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The path of a route is not root-relative.
    #[error("route path `{path}` must start with `/`")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },

    /// Two routes resolve the same path.
    #[error("two routes with identical path: `{path}`")]
    DuplicatePath {
        /// The path of the rejected route.
        path: String,
    },

    /// Two routes share a name.
    #[error("two routes with identical name: `{name}`")]
    DuplicateName {
        /// The name of the rejected route.
        name: String,
    },
}

/// A navigation the router could not carry out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No route matches the path and no fallback view is configured.
    #[error("no route matches `{0}`")]
    NotFound(String),

    /// No route carries the requested name.
    #[error("no route is named `{0}`")]
    UnknownName(String),

    /// The history provider cannot leave the application.
    #[error("failed to navigate to external url `{0}`")]
    External(String),
}
