//! Loading/ready state of a screen.

use serde::Serialize;

/// What a renderer sees. Content exists only once loading is over.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "lowercase")]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}

/// Events that move a [`ViewState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<T> {
    /// The current fetch cycle finished, successfully or not.
    Resolved(T),
    /// A new cycle replaced the current one.
    Superseded,
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Content, or `None` while loading.
    pub fn content(&self) -> Option<&T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(content) => Some(content),
        }
    }

    pub fn into_content(self) -> Option<T> {
        match self {
            ViewState::Loading => None,
            ViewState::Ready(content) => Some(content),
        }
    }

    /// Apply a transition in place.
    pub fn apply(&mut self, transition: Transition<T>) {
        *self = match transition {
            Transition::Resolved(content) => ViewState::Ready(content),
            Transition::Superseded => ViewState::Loading,
        };
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_without_content() {
        let state: ViewState<Vec<u32>> = ViewState::default();
        assert!(state.is_loading());
        assert_eq!(state.content(), None);
    }

    #[test]
    fn test_resolve_then_supersede() {
        let mut state = ViewState::Loading;
        state.apply(Transition::Resolved(vec![1, 2]));
        assert_eq!(state.content(), Some(&vec![1, 2]));

        state.apply(Transition::Superseded);
        assert!(state.is_loading());
        assert_eq!(state.into_content(), None);
    }

    #[test]
    fn test_resolve_replaces_wholesale() {
        let mut state = ViewState::Ready(vec![1, 2, 3]);
        state.apply(Transition::Resolved(vec![9]));
        assert_eq!(state, ViewState::Ready(vec![9]));
    }
}
