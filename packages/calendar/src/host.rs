//! A headless rendering host.
//!
//! The host is what a router gets installed into: it owns the navigation history, asks the router
//! what to mount for the current route and keeps the rendered output of the mounted view.

use calendar_history::{History, MemoryHistory};
use calendar_router::{navigation::NavigationTarget, Element, NavigationError, Router};

/// A host for a [`Router`] that keeps its history in memory.
pub struct Host<'a> {
    router: &'a Router,
    history: MemoryHistory,
    mounted: Option<Mounted>,
}

/// The view currently mounted by a [`Host`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mounted {
    /// The name of the mounted route, [`None`] for a fallback view.
    pub name: Option<&'static str>,
    /// The URL the platform displays for the mounted route.
    pub href: String,
    /// The rendered view.
    pub element: Element,
}

impl<'a> Host<'a> {
    /// Install `router`, starting at the location the platform reports.
    ///
    /// Nothing is mounted if no route matches the initial location.
    pub fn install(router: &'a Router, location: &str) -> Self {
        let mode = router.history_mode().clone();
        let initial = mode.route_from_location(location);
        let mut host = Self {
            router,
            history: MemoryHistory::with_initial_path(initial).with_mode(mode),
            mounted: None,
        };
        host.remount();
        host
    }

    /// Navigate to `target` and mount the resolved view.
    pub fn open(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<Option<&Mounted>, NavigationError> {
        let internal = self.router.navigate(&self.history, target)?.is_some();
        if !internal {
            return Ok(None);
        }

        self.remount();
        Ok(self.mounted.as_ref())
    }

    /// Go back one entry and remount.
    pub fn back(&mut self) -> Option<&Mounted> {
        self.history.go_back();
        self.remount();
        self.mounted.as_ref()
    }

    /// Go forward one entry and remount.
    pub fn forward(&mut self) -> Option<&Mounted> {
        self.history.go_forward();
        self.remount();
        self.mounted.as_ref()
    }

    /// The mounted view, if any route matched.
    pub fn mounted(&self) -> Option<&Mounted> {
        self.mounted.as_ref()
    }

    /// The history the host navigates.
    pub fn history(&self) -> &dyn History {
        &self.history
    }

    fn remount(&mut self) {
        self.mounted = self.router.current(&self.history).map(|resolved| Mounted {
            name: resolved.name(),
            href: self.history.full_route_path(),
            element: resolved.render(),
        });

        match &self.mounted {
            Some(mounted) => tracing::debug!(route = mounted.name, href = %mounted.href, "mounted view"),
            None => tracing::warn!(route = %self.history.current_route(), "nothing to mount"),
        }
    }
}
