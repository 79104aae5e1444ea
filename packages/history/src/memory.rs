use std::cell::RefCell;

use crate::{History, HistoryMode};

struct MemoryHistoryState {
    current: String,
    history: Vec<String>,
    future: Vec<String>,
}

/// A [`History`] provider that stores all navigation information in memory.
///
/// The [`HistoryMode`] is only used to render [`History::full_route_path`]; the stored routes never
/// carry the base path.
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
    mode: HistoryMode,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// ```rust
    /// # use calendar_history::*;
    /// let history = MemoryHistory::with_initial_path("/week");
    /// assert_eq!(history.current_route(), "/week");
    /// assert_eq!(history.can_go_back(), false);
    /// ```
    pub fn with_initial_path(path: impl ToString) -> Self {
        let mut current = path.to_string();
        if !current.starts_with('/') {
            current.insert(0, '/');
        }

        Self {
            state: MemoryHistoryState {
                current,
                history: Vec::new(),
                future: Vec::new(),
            }
            .into(),
            mode: HistoryMode::default(),
        }
    }

    /// Set the base path for the history. All routes will be prefixed with this path when rendered.
    ///
    /// ```rust
    /// # use calendar_history::*;
    /// let history = MemoryHistory::default().with_prefix("/my-app/");
    ///
    /// // The base path is normalized to "/my-app"
    /// assert_eq!(history.current_prefix(), Some("/my-app".to_string()));
    /// ```
    pub fn with_prefix(self, prefix: impl AsRef<str>) -> Self {
        let mode = self.mode.clone().with_base(prefix);
        self.with_mode(mode)
    }

    /// Render routes through `mode`.
    pub fn with_mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    /// The mode routes are rendered with.
    pub fn mode(&self) -> &HistoryMode {
        &self.mode
    }
}

impl History for MemoryHistory {
    fn current_prefix(&self) -> Option<String> {
        let base = self.mode.base();
        (!base.is_empty()).then(|| base.to_string())
    }

    fn full_route_path(&self) -> String {
        self.mode.href(&self.state.borrow().current)
    }

    fn current_route(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    fn go_back(&self) {
        let mut write = self.state.borrow_mut();
        if let Some(last) = write.history.pop() {
            let old = std::mem::replace(&mut write.current, last);
            write.future.push(old);
        }
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        let mut write = self.state.borrow_mut();
        if let Some(next) = write.future.pop() {
            let old = std::mem::replace(&mut write.current, next);
            write.history.push(old);
        }
    }

    fn push(&self, new: String) {
        if new.starts_with("//") {
            tracing::error!(r#"cannot navigate to paths starting with "//", path: {new}"#);
            return;
        }

        let mut write = self.state.borrow_mut();
        // don't push the same route twice
        if write.current == new {
            return;
        }
        let old = std::mem::replace(&mut write.current, new);
        write.history.push(old);
        write.future.clear();
    }

    fn replace(&self, path: String) {
        if path.starts_with("//") {
            tracing::error!(r#"cannot navigate to paths starting with "//", path: {path}"#);
            return;
        }

        let mut write = self.state.borrow_mut();
        write.current = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_and_forward() {
        let history = MemoryHistory::default();
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());

        history.push("/week".to_string());
        history.push("/day".to_string());
        assert!(history.can_go_back());

        history.go_back();
        assert_eq!(history.current_route(), "/week");
        assert!(history.can_go_forward());

        history.go_forward();
        assert_eq!(history.current_route(), "/day");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_clears_the_future() {
        let history = MemoryHistory::default();
        history.push("/week".to_string());
        history.go_back();
        history.push("/month".to_string());
        assert!(!history.can_go_forward());
        assert_eq!(history.current_route(), "/month");
    }

    #[test]
    fn pushing_the_current_route_is_a_noop() {
        let history = MemoryHistory::default();
        history.push("/".to_string());
        assert!(!history.can_go_back());
    }

    #[test]
    fn replace_keeps_the_past() {
        let history = MemoryHistory::default();
        history.push("/week".to_string());
        history.replace("/month".to_string());
        assert_eq!(history.current_route(), "/month");
        history.go_back();
        assert_eq!(history.current_route(), "/");
    }

    #[test]
    fn protocol_relative_paths_are_rejected() {
        let history = MemoryHistory::default();
        history.push("//evil.example".to_string());
        history.replace("//evil.example".to_string());
        assert_eq!(history.current_route(), "/");
        assert!(!history.can_go_back());
    }

    #[test]
    fn prefix_keeps_the_strategy() {
        let history = MemoryHistory::default()
            .with_mode(HistoryMode::hash(""))
            .with_prefix("/cal/");
        assert_eq!(history.mode(), &HistoryMode::hash("/cal"));
        assert_eq!(history.full_route_path(), "/cal/#/");
    }

    #[test]
    fn full_route_path_follows_the_mode() {
        let history = MemoryHistory::default().with_mode(HistoryMode::hash("/app/"));
        assert_eq!(history.full_route_path(), "/app/#/");
        assert_eq!(history.current_prefix(), Some("/app".to_string()));
        assert_eq!(history.mode(), &HistoryMode::hash("/app"));

        let history = MemoryHistory::default();
        assert_eq!(history.mode(), &HistoryMode::web(""));
        assert_eq!(history.current_prefix(), None);
        assert_eq!(history.full_route_path(), "/");
        assert!(!history.external("https://example.com".to_string()));
    }
}
