//! Data types for defining which view to render for which path.

use std::{borrow::Cow, fmt};

use crate::{RouteError, View};

/// A single entry of a [`RouteTable`]: a path, the name used for programmatic navigation, and the
/// view mounted when the path is active.
#[derive(Clone, Copy)]
pub struct RouteDefinition {
    path: &'static str,
    name: &'static str,
    component: &'static dyn View,
}

impl RouteDefinition {
    /// Create a new route definition. The path is checked when the route is added to a table.
    pub const fn new(path: &'static str, name: &'static str, component: &'static dyn View) -> Self {
        Self {
            path,
            name,
            component,
        }
    }

    /// The path pattern of this route.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The unique name of this route.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The view mounted for this route.
    pub fn component(&self) -> &'static dyn View {
        self.component
    }

    fn matches(&self, canonical: &str) -> bool {
        canonical_path(self.path) == canonical
    }
}

/// Definitions are equal when their path and name are. Views have no identity to compare.
impl PartialEq for RouteDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.name == other.name
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered list of [`RouteDefinition`]s.
///
/// Lookups walk the table front to back, so if two patterns could ever overlap the earlier one
/// wins. Paths and names are unique within a table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    ///
    /// # Panic
    /// If the route is invalid or collides with an existing one, but only in debug builds. In
    /// release builds the route is logged and skipped.
    ///
    /// # Example
    /// ```rust
    /// # use calendar_router::prelude::*;
    /// struct Index;
    /// impl View for Index {
    ///     fn render(&self) -> Element {
    ///         Element::default()
    ///     }
    /// }
    ///
    /// let table = RouteTable::new().route(RouteDefinition::new("/", "Index", &Index));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn route(mut self, route: RouteDefinition) -> Self {
        if let Err(err) = self.try_insert(route) {
            tracing::error!("{err}, route ignored");
            #[cfg(debug_assertions)]
            panic!("{err}");
        }

        self
    }

    /// Add a route, rejecting it if its path is not root-relative or if its path or name is
    /// already taken.
    pub fn try_insert(&mut self, route: RouteDefinition) -> Result<(), RouteError> {
        if !route.path.starts_with('/') {
            return Err(RouteError::InvalidPath {
                path: route.path.to_string(),
            });
        }

        let canonical = canonical_path(route.path);
        if self.routes.iter().any(|existing| existing.matches(&canonical)) {
            return Err(RouteError::DuplicatePath {
                path: route.path.to_string(),
            });
        }

        if self.by_name(route.name).is_some() {
            return Err(RouteError::DuplicateName {
                name: route.name.to_string(),
            });
        }

        self.routes.push(route);
        Ok(())
    }

    /// Find the route active for `path`.
    ///
    /// The query and fragment are ignored, the path is percent-decoded and trailing `/`s don't
    /// matter: `/week`, `/week/` and `/week?day=2` all resolve the same route.
    pub fn resolve(&self, path: &str) -> Option<&RouteDefinition> {
        let canonical = canonical_path(path);
        if path.starts_with("//") || canonical.starts_with("//") {
            tracing::trace!(path, "protocol relative path never matches a route");
            return None;
        }
        self.routes.iter().find(|route| route.matches(&canonical))
    }

    /// Find the route with the given name.
    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Iterate over the routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    /// The number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDefinition;
    type IntoIter = std::slice::Iter<'a, RouteDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// The form paths are compared in.
pub(crate) fn canonical_path(path: &str) -> String {
    // trailing slashes are trimmed before decoding, an encoded `%2F` is part of a segment
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let decoded = urlencoding::decode(path).unwrap_or(Cow::Borrowed(path));

    if decoded.is_empty() {
        "/".to_string()
    } else if decoded.starts_with('/') {
        decoded.into_owned()
    } else {
        format!("/{decoded}")
    }
}

/// Paths starting with `//`, raw or once decoded, are protocol relative URLs, not routes.
pub(crate) fn is_protocol_relative(path: &str) -> bool {
    path.starts_with("//") || canonical_path(path).starts_with("//")
}
