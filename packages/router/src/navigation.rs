//! Types relating to navigation.

use std::{convert::Infallible, fmt, str::FromStr};

use url::{ParseError, Url};

/// A target for the router to navigate to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavigationTarget {
    /// Navigate to the specified router-internal path.
    Internal(String),
    /// Navigate to the route with the corresponding name.
    Named(String),
    /// Navigate to an external page.
    External(String),
}

impl NavigationTarget {
    /// Navigate to the route called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns `true` if the navigation target is [`External`].
    ///
    /// [`External`]: NavigationTarget::External
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(..))
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal(path) => f.write_str(path),
            Self::Named(name) => write!(f, "<{name}>"),
            Self::External(url) => f.write_str(url),
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(target) => target,
            Err(infallible) => match infallible {},
        }
    }
}

impl From<String> for NavigationTarget {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for NavigationTarget {
    type Err = Infallible;

    /// Anything that parses as an absolute URL is external, everything else is a path.
    ///
    /// ```rust
    /// # use calendar_router::navigation::NavigationTarget;
    /// assert!("https://example.com/".parse::<NavigationTarget>().unwrap().is_external());
    /// assert_eq!(
    ///     NavigationTarget::from("/"),
    ///     NavigationTarget::Internal("/".to_string())
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Url::parse(s) {
            Ok(_) => Ok(Self::External(s.to_string())),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(Self::Internal(s.to_string())),
            Err(err) => {
                tracing::trace!(%err, target = s, "treating unparsable target as a path");
                Ok(Self::Internal(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_targets() {
        assert_eq!(
            NavigationTarget::from("/week?day=2"),
            NavigationTarget::Internal("/week?day=2".to_string())
        );
        assert_eq!(
            NavigationTarget::from("mailto:someone@example.com"),
            NavigationTarget::External("mailto:someone@example.com".to_string())
        );
        assert!(!NavigationTarget::named("CalendarPage").is_external());
    }

    #[test]
    fn displays_names_in_brackets() {
        assert_eq!(NavigationTarget::named("CalendarPage").to_string(), "<CalendarPage>");
        assert_eq!(NavigationTarget::from("/").to_string(), "/");
    }
}
