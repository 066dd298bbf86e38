//! Overlay bookkeeping shared by every modal on a page.
//!
//! - [`ScrollLock`] - reference-counted body scroll lock, one guard per open overlay
//! - [`KeyListeners`] - stack of Escape listeners; only the topmost one hears Escape
//! - [`Overlays`] - both of the above, cloned into whatever opens an overlay
//!
//! Ownership is per overlay instance: two galleries open at once each hold
//! their own guard and listener, so closing one never unlocks the page for
//! the other.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ============================================================================
// Scroll Lock
// ============================================================================

/// Reference-counted page scroll lock.
///
/// The page body is locked while at least one [`ScrollLockGuard`] is alive.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes one hold on the lock. The hold is released when the guard drops.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Scroll lock acquired ({} holders)", previous + 1);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }
}

/// One hold on a [`ScrollLock`].
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!("Scroll lock released ({} holders)", previous.saturating_sub(1));
    }
}

// ============================================================================
// Escape Listeners
// ============================================================================

/// Identifies one registered Escape listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct ListenerStack {
    next_id: u64,
    stack: Vec<ListenerId>,
}

/// Stack of Escape listeners, most recent on top.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Arc<Mutex<ListenerStack>>,
}

impl KeyListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn stack(&self) -> MutexGuard<'_, ListenerStack> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a listener on top of the stack.
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn register(&self) -> ListenerGuard {
        let mut stack = self.stack();
        stack.next_id += 1;
        let id = ListenerId(stack.next_id);
        stack.stack.push(id);
        ListenerGuard {
            id,
            listeners: self.clone(),
        }
    }

    /// The listener that should receive the next Escape press.
    #[must_use]
    pub fn topmost(&self) -> Option<ListenerId> {
        self.stack().stack.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack().stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove(&self, id: ListenerId) {
        self.stack().stack.retain(|live| *live != id);
    }
}

/// Keeps one listener registered until dropped.
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    listeners: KeyListeners,
}

impl ListenerGuard {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listeners.remove(self.id);
    }
}

// ============================================================================
// Overlays
// ============================================================================

/// The scroll lock and Escape listeners of one page.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    pub scroll_lock: ScrollLock,
    pub escape: KeyListeners,
}

impl Overlays {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    #[must_use]
    pub fn topmost_escape(&self) -> Option<ListenerId> {
        self.escape.topmost()
    }
}

// ============================================================================
// Tests
// ============================================================================
