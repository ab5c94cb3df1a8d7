use crate::ConnectionPermit;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::error;

/// Bounded admission control for concurrent connections.
///
/// A gate built with capacity `0` is unlimited: every `try_acquire` succeeds
/// and releases only adjust the in-use count. Otherwise at most `capacity`
/// permits are outstanding at any time. Rejection is immediate, there is no
/// waiting queue.
#[derive(Clone)]
pub struct ConnectionGate {
    inner: Arc<GateInner>,
}

struct GateInner {
    capacity: usize,
    /// Free permits (bounded mode only)
    available: AtomicUsize,
    /// Outstanding permits (unlimited mode only)
    unlimited_in_use: AtomicUsize,
}

impl ConnectionGate {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(GateInner {
                capacity,
                available: AtomicUsize::new(capacity),
                unlimited_in_use: AtomicUsize::new(0),
            }),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(0)
    }

    pub fn is_unlimited(&self) -> bool {
        self.inner.capacity == 0
    }

    /// Configured capacity, `0` when unlimited
    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Free permits, or `None` when the gate is unlimited
    pub fn available(&self) -> Option<usize> {
        if self.is_unlimited() {
            None
        } else {
            Some(self.inner.available.load(Ordering::SeqCst))
        }
    }

    /// Permits currently held
    pub fn in_use(&self) -> usize {
        if self.is_unlimited() {
            self.inner.unlimited_in_use.load(Ordering::SeqCst)
        } else {
            self.inner.capacity - self.inner.available.load(Ordering::SeqCst)
        }
    }

    /// Take a permit if one is free. Never blocks.
    pub fn try_acquire(&self) -> Option<ConnectionPermit> {
        if self.is_unlimited() {
            self.inner.unlimited_in_use.fetch_add(1, Ordering::SeqCst);
            return Some(ConnectionPermit::new(self.clone()));
        }

        self.inner
            .available
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |available| {
                available.checked_sub(1)
            })
            .ok()?;

        Some(ConnectionPermit::new(self.clone()))
    }

    /// Return a permit. Only called from `ConnectionPermit::drop`.
    pub(crate) fn release(&self) {
        if self.is_unlimited() {
            self.inner.unlimited_in_use.fetch_sub(1, Ordering::SeqCst);
            return;
        }

        let capacity = self.inner.capacity;
        let released = self
            .inner
            .available
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |available| {
                (available < capacity).then_some(available + 1)
            });

        if released.is_err() {
            error!("Connection gate released past its capacity of {capacity}");
            debug_assert!(false, "connection gate released past capacity");
        }
    }
}

impl fmt::Debug for ConnectionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGate")
            .field("capacity", &self.capacity())
            .field("available", &self.available())
            .field("in_use", &self.in_use())
            .finish()
    }
}
