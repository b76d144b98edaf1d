//! Screen lifecycle: one view-state per mounted screen, fetch cycles that
//! can be superseded, and cancellation on unmount.
//!
//! A [`Screen`] publishes its [`ViewState`] through a `watch` channel so a
//! renderer can subscribe. Each fetch runs inside a [`Cycle`] bound to a
//! child of the screen's mount token. Starting a new cycle or unmounting
//! cancels the old one, and a cancelled cycle can no longer touch state.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::view_state::{Transition, ViewState};

/// Owner of one screen's view-state.
pub struct Screen<T> {
    state: Arc<watch::Sender<ViewState<T>>>,
    /// Cancelled on unmount; parent of every cycle token.
    mount: CancellationToken,
    /// Token of the current cycle.
    cycle: CancellationToken,
    /// Content handed to the current cycle; survives while it is loading.
    carried: Option<T>,
}

/// One fetch cycle of a screen.
pub struct Cycle<T> {
    state: Arc<watch::Sender<ViewState<T>>>,
    token: CancellationToken,
    previous: Option<T>,
}

impl<T: Clone> Screen<T> {
    /// A freshly mounted screen, in the loading state.
    pub fn new() -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        let mount = CancellationToken::new();
        let cycle = mount.child_token();
        Self {
            state: Arc::new(state),
            mount,
            cycle,
            carried: None,
        }
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    /// Start a new cycle, superseding the current one.
    ///
    /// The state drops back to loading. The last ready content is handed
    /// to the new cycle as [`Cycle::previous`], even when the superseded
    /// cycle never resolved.
    pub fn begin_cycle(&mut self) -> Cycle<T> {
        self.cycle.cancel();
        self.cycle = self.mount.child_token();

        let ready = self.state.borrow().content().cloned();
        let previous = ready.or_else(|| self.carried.take());
        self.carried = previous.clone();
        if !self.mount.is_cancelled() {
            self.state.send_modify(|s| s.apply(Transition::Superseded));
        }

        Cycle {
            state: Arc::clone(&self.state),
            token: self.cycle.clone(),
            previous,
        }
    }

    /// Tear the screen down. In-flight cycles stop without touching state.
    pub fn unmount(&self) {
        if !self.mount.is_cancelled() {
            tracing::debug!("Screen unmounted");
        }
        self.mount.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.mount.is_cancelled()
    }

    /// Wait until the state is ready, or return the current state once the
    /// screen is unmounted.
    pub async fn settled(&self) -> ViewState<T> {
        let mut rx = self.subscribe();
        let ready = async {
            rx.wait_for(|s| !s.is_loading())
                .await
                .map(|s| (*s).clone())
                .ok()
        };

        tokio::select! {
            _ = self.mount.cancelled() => self.state(),
            state = ready => state.unwrap_or_else(|| self.state()),
        }
    }
}

impl<T: Clone> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Screen<T> {
    fn drop(&mut self) {
        self.mount.cancel();
    }
}

impl<T> Cycle<T> {
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Content that was ready before this cycle began.
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    pub fn take_previous(&mut self) -> Option<T> {
        self.previous.take()
    }

    /// Drive a fetch unless the cycle is cancelled first.
    ///
    /// Returns `None` when cancelled; the fetch future is dropped.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            out = fut => Some(out),
        }
    }

    /// Publish the cycle's result. Does nothing if the cycle was cancelled.
    ///
    /// Returns whether the state was updated.
    pub fn resolve(self, content: T) -> bool {
        if self.token.is_cancelled() {
            tracing::debug!("Dropping result of a cancelled cycle");
            return false;
        }
        self.state.send_modify(|s| s.apply(Transition::Resolved(content)));
        true
    }
}
