//! Fetch state machine: `Loading -> {Ready, Failed}`.

use tokio::sync::watch;
use tracing::debug;

/// Publication state of a one-shot fetch.
///
/// `Loading` is the initial state. `Ready` and `Failed` are terminal:
/// once either is published, no further transition occurs for the
/// lifetime of the owning model.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    /// Request in flight; nothing to render yet.
    Loading,
    /// Response decoded; payload is final.
    Ready(T),
    /// Request or decode failed; carries a human-readable cause.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Decoded payload, if the fetch succeeded.
    pub fn payload(&self) -> Option<&T> {
        match self {
            FetchState::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    /// Failure cause, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(cause) => Some(cause),
            _ => None,
        }
    }
}

/// Single-writer cell publishing [`FetchState`] over a watch channel.
///
/// Accepts exactly one terminal transition; later completions are
/// dropped so a stray duplicate callback cannot disturb a settled
/// state.
pub(crate) struct StateCell<T> {
    tx: watch::Sender<FetchState<T>>,
}

impl<T> StateCell<T> {
    pub(crate) fn new() -> (Self, watch::Receiver<FetchState<T>>) {
        let (tx, rx) = watch::channel(FetchState::Loading);
        (Self { tx }, rx)
    }

    pub(crate) fn failed(cause: String) -> (Self, watch::Receiver<FetchState<T>>) {
        let (tx, rx) = watch::channel(FetchState::Failed(cause));
        (Self { tx }, rx)
    }

    /// Publish a terminal state. Returns `false` if the cell already
    /// settled, in which case `next` is discarded.
    pub(crate) fn complete(&self, next: FetchState<T>) -> bool {
        debug_assert!(next.is_terminal());
        let mut next = Some(next);
        let applied = self.tx.send_if_modified(|current| {
            if current.is_terminal() {
                return false;
            }
            if let Some(next) = next.take() {
                *current = next;
                return true;
            }
            false
        });
        if !applied {
            debug!("completion ignored: fetch state already terminal");
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_loading() {
        let (_cell, rx) = StateCell::<u32>::new();
        assert!(rx.borrow().is_loading());
    }

    #[test]
    fn first_completion_is_published() {
        let (cell, rx) = StateCell::new();
        assert!(cell.complete(FetchState::Ready(7)));
        assert_eq!(*rx.borrow(), FetchState::Ready(7));
    }

    #[test]
    fn second_completion_is_a_no_op() {
        let (cell, rx) = StateCell::new();
        assert!(cell.complete(FetchState::Ready(7)));
        assert!(!cell.complete(FetchState::Failed("late".to_string())));
        assert_eq!(*rx.borrow(), FetchState::Ready(7));
    }

    #[test]
    fn failure_is_terminal_too() {
        let (cell, rx) = StateCell::<u32>::new();
        assert!(cell.complete(FetchState::Failed("boom".to_string())));
        assert!(!cell.complete(FetchState::Ready(1)));
        assert_eq!(rx.borrow().error(), Some("boom"));
    }

    #[test]
    fn accessors_track_variants() {
        let loading = FetchState::<u32>::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_terminal());
        assert_eq!(loading.payload(), None);
        assert_eq!(loading.error(), None);

        let ready = FetchState::Ready(3);
        assert!(ready.is_terminal());
        assert_eq!(ready.payload(), Some(&3));

        let failed = FetchState::<u32>::Failed("x".to_string());
        assert!(failed.is_terminal());
        assert_eq!(failed.error(), Some("x"));
    }
}
