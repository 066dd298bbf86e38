//! Fetch lifetime tied to the view that started it.
//!
//! Every page owns one [`FetchSlot`] per data set. Spawning a new request
//! aborts the one in flight and bumps the slot's generation; results come
//! back tagged with the [`RequestTicket`] they were started with and are
//! dropped unless that ticket is still current. Tearing the slot down (or
//! dropping it) aborts the task, so nothing lands on a view that is gone.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;

// ============================================================================
// Loadable
// ============================================================================

/// Progress of one data set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    /// Nothing requested yet, or the request was torn down.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// The request failed; carries a message for logs and fallbacks.
    Failed(String),
}

impl<T> Loadable<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// Request Ticket
// ============================================================================

/// Generation stamp handed to a spawned request.
///
/// Unique across every slot, so a result from a torn-down page can never
/// match the slot of the page that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

// ============================================================================
// Fetch Slot
// ============================================================================

/// One cancellable request at a time, plus the state it produced.
///
/// Views that keep their data elsewhere (a rotator, a filter list) use the
/// default `FetchSlot<()>` and only track progress here.
#[derive(Debug)]
pub struct FetchSlot<T = ()> {
    state: Loadable<T>,
    /// `None` until the first request starts.
    generation: Option<u64>,
    handle: Option<JoinHandle<()>>,
    torn_down: bool,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            state: Loadable::Idle,
            generation: None,
            handle: None,
            torn_down: false,
        }
    }
}

impl<T> FetchSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The ticket of the latest request, if one was ever started.
    #[must_use]
    pub fn current_ticket(&self) -> Option<RequestTicket> {
        self.generation.map(RequestTicket)
    }

    /// Whether a result carrying `ticket` would be applied.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.torn_down && self.generation == Some(ticket.0)
    }

    /// Starts a request, aborting the one in flight.
    ///
    /// `request` receives the ticket its result must be reported with.
    pub fn spawn<F, Fut>(&mut self, request: F) -> RequestTicket
    where
        F: FnOnce(RequestTicket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.abort();
        let ticket = self.begin();
        self.handle = Some(tokio::spawn(request(ticket)));
        ticket
    }

    /// Bumps the generation and marks the slot loading without spawning.
    ///
    /// Used when the caller drives the future itself.
    pub fn begin(&mut self) -> RequestTicket {
        let ticket = RequestTicket(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed));
        self.generation = Some(ticket.0);
        self.torn_down = false;
        self.state = Loadable::Loading;
        ticket
    }

    /// Applies a result. Stale or post-teardown results are dropped.
    pub fn complete<E: fmt::Display>(&mut self, ticket: RequestTicket, result: Result<T, E>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Ignoring stale result (ticket {}, current {:?}, torn down: {})",
                ticket.0,
                self.generation,
                self.torn_down
            );
            return false;
        }

        self.handle = None;
        self.state = match result {
            Ok(value) => Loadable::Loaded(value),
            Err(error) => Loadable::Failed(error.to_string()),
        };
        true
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Aborts the request in flight and rejects every later result.
    pub fn teardown(&mut self) {
        self.abort();
        self.torn_down = true;
        if self.state.is_loading() {
            self.state = Loadable::Idle;
        }
    }
}

impl<T> Drop for FetchSlot<T> {
    fn drop(&mut self) {
        self.abort();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::{mpsc, oneshot};

    /// A request that never finishes; `alive` closes when it is dropped.
    fn pending_request(alive: oneshot::Sender<()>) -> impl Future<Output = ()> + Send + 'static {
        async move {
            let _alive = alive;
            std::future::pending::<()>().await;
        }
    }

    #[tokio::test]
    async fn test_result_applies_with_current_ticket() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        slot.spawn(|ticket| async move {
            let _ = tx.send((ticket, 7));
        });
        assert!(slot.is_loading());

        let (ticket, value) = rx.recv().await.unwrap();
        assert!(slot.complete(ticket, Ok::<_, String>(value)));
        assert_eq!(slot.state(), &Loadable::Loaded(7));
    }

    #[tokio::test]
    async fn test_stale_ticket_is_ignored() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(!slot.complete(first, Ok::<_, String>(1)));
        assert!(slot.is_loading());
        assert!(slot.complete(second, Ok::<_, String>(2)));
        assert_eq!(slot.state().loaded(), Some(&2));
    }

    #[tokio::test]
    async fn test_respawn_aborts_previous_request() {
        let mut slot: FetchSlot = FetchSlot::new();
        let (alive_tx, alive_rx) = oneshot::channel();

        slot.spawn(|_| pending_request(alive_tx));
        slot.spawn(|_| async {});

        assert!(alive_rx.await.is_err());
    }

    #[tokio::test]
    async fn test_teardown_aborts_and_rejects_late_results() {
        let mut slot: FetchSlot = FetchSlot::new();
        let (alive_tx, alive_rx) = oneshot::channel();
        let ticket = slot.spawn(|_| pending_request(alive_tx));

        slot.teardown();
        assert!(alive_rx.await.is_err());
        assert!(!slot.complete(ticket, Ok::<_, String>(())));
        assert_eq!(slot.state(), &Loadable::Idle);
    }

    #[tokio::test]
    async fn test_drop_aborts_request() {
        let (alive_tx, alive_rx) = oneshot::channel();
        {
            let mut slot: FetchSlot = FetchSlot::new();
            slot.spawn(|_| pending_request(alive_tx));
        }
        assert!(alive_rx.await.is_err());
    }

    #[test]
    fn test_tickets_differ_across_slots() {
        let mut first: FetchSlot = FetchSlot::new();
        let mut second: FetchSlot = FetchSlot::new();
        let ticket = first.begin();
        second.begin();
        assert!(!second.is_current(ticket));
    }

    #[test]
    fn test_failure_keeps_message() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        let ticket = slot.begin();
        assert!(slot.complete(ticket, Err::<u32, _>("HTTP 500")));
        assert_eq!(slot.state().error(), Some("HTTP 500"));
    }

    #[test]
    fn test_fresh_slot_accepts_no_ticket() {
        let mut slot: FetchSlot<u32> = FetchSlot::new();
        assert_eq!(slot.current_ticket(), None);
        assert!(!slot.is_current(RequestTicket(0)));

        let mut other: FetchSlot<u32> = FetchSlot::new();
        let foreign = other.begin();
        assert!(!slot.complete(foreign, Ok::<_, String>(1)));
        assert_eq!(slot.state(), &Loadable::Idle);

        let own = slot.begin();
        assert_eq!(slot.current_ticket(), Some(own));
    }
}
