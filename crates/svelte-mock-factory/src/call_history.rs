//! Shared, append-only call recorder.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered record of the arguments a mocked entry point was called with.
///
/// Clones share the same underlying record, so a handle given to a component
/// proxy and the one kept by the test observe the same calls.
///
/// # Example
/// ```
/// use svelte_mock_factory::CallHistory;
///
/// let spy = CallHistory::new();
/// let handle = spy.clone();
/// handle.record("first");
/// handle.record("second");
///
/// assert_eq!(spy.call_count(), 2);
/// assert_eq!(spy.last_call(), Some("second"));
/// ```
#[derive(Debug)]
pub struct CallHistory<A> {
    calls: Arc<RwLock<Vec<A>>>,
}

impl<A> CallHistory<A> {
    /// Create an empty call history.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append one call.
    pub fn record(&self, args: A) {
        self.write().push(args);
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.read().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Whether `other` records into the same history as `self`.
    pub fn same_history(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.calls, &other.calls)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<A>> {
        // Recording never panics mid-write, so a poisoned record is still consistent
        self.calls.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<A>> {
        self.calls.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A: Clone> CallHistory<A> {
    /// Snapshot of every recorded call, oldest first.
    pub fn calls(&self) -> Vec<A> {
        self.read().clone()
    }

    /// The most recent call.
    pub fn last_call(&self) -> Option<A> {
        self.read().last().cloned()
    }

    /// The call at `index`, oldest first.
    pub fn nth_call(&self, index: usize) -> Option<A> {
        self.read().get(index).cloned()
    }
}

impl<A> Clone for CallHistory<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> Default for CallHistory<A> {
    fn default() -> Self {
        Self::new()
    }
}
