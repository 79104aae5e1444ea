use std::fmt;

/// The rendered output of a [`View`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Element(String);

impl Element {
    /// Wrap already rendered markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The rendered markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A mountable unit of user interface.
///
/// Views are defined outside of the router. A route only borrows them, so they are registered as
/// `&'static dyn View` and rendered whenever their route is mounted.
pub trait View: Sync {
    /// Render the view.
    fn render(&self) -> Element;
}
