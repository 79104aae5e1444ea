//! History integration for the calendar router.
//!
//! The router never talks to the platform's navigation state directly. Instead it relies on a
//! [`History`] provider to store the current route, the past (a browser's back button) and the
//! future (a browser's forward button). How routes are reflected in the URL is decided by the
//! [`HistoryMode`]: real paths through the history API, or a `#` fragment.
#![deny(missing_docs)]

mod memory;
pub use memory::*;

mod mode;
pub use mode::*;

/// An integration with some kind of navigation history.
///
/// Depending on your use case, your implementation may deviate from the described procedure. This
/// is fine, as long as `current_route` keeps the described format.
///
/// The described behaviors are designed to mimic a web browser, which most users should already
/// know. Deviations might confuse them.
pub trait History {
    /// Get the path of the current route.
    ///
    /// **Must start** with `/`. **Must _not_ contain** the prefix.
    ///
    /// ```rust
    /// # use calendar_history::*;
    /// let history = MemoryHistory::default();
    /// assert_eq!(history.current_route(), "/");
    ///
    /// history.push(String::from("/path"));
    /// assert_eq!(history.current_route(), "/path");
    /// ```
    #[must_use]
    fn current_route(&self) -> String;

    /// Get the current path prefix of the URL.
    ///
    /// Not all [`History`]s need a prefix feature. It is meant for environments where the
    /// application is not served from `/`. The [`History`] is responsible for removing the prefix
    /// from the router-internal path, and also for adding it back in during navigation.
    fn current_prefix(&self) -> Option<String> {
        None
    }

    /// The URL of the current route, as the platform would display it.
    ///
    /// ```rust
    /// # use calendar_history::*;
    /// let history = MemoryHistory::default().with_prefix("/app/");
    /// assert_eq!(history.full_route_path(), "/app/");
    /// ```
    fn full_route_path(&self) -> String {
        let route = self.current_route();
        match self.current_prefix() {
            Some(prefix) => format!("{prefix}{route}"),
            None => route,
        }
    }

    /// Check whether there is a previous page to navigate back to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous page.
    ///
    /// If a [`History`] cannot go to a previous page, it should do nothing. This method might be
    /// called, even if `can_go_back` returns [`false`].
    ///
    /// ```rust
    /// # use calendar_history::*;
    /// let history = MemoryHistory::default();
    /// history.go_back();
    /// assert_eq!(history.current_route(), "/");
    ///
    /// history.push(String::from("/week"));
    /// history.go_back();
    /// assert_eq!(history.current_route(), "/");
    /// ```
    fn go_back(&self);

    /// Check whether there is a future page to navigate forward to.
    ///
    /// If a [`History`] cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future page.
    ///
    /// If a [`History`] cannot go to a future page, it should do nothing.
    fn go_forward(&self);

    /// Go to another page.
    ///
    /// This should do three things:
    /// 1. Replace the current route with `route`.
    /// 2. Add the previous route to the navigation history.
    /// 3. Clear the navigation future.
    fn push(&self, route: String);

    /// Replace the current page with another one.
    ///
    /// In contrast to [`History::push`], the navigation history and future stay untouched.
    fn replace(&self, route: String);

    /// Navigate to an external URL.
    ///
    /// This should navigate to an URL the router does not control. If a [`History`] cannot do
    /// that, it should return [`false`], otherwise [`true`].
    #[allow(unused_variables)]
    fn external(&self, url: String) -> bool {
        false
    }
}
