use crate::ConnectionGate;

use std::fmt;

/// A single admitted connection slot.
///
/// Dropping the permit returns it to its gate, so every successful
/// `try_acquire` is matched by exactly one release.
#[must_use = "dropping a permit releases it immediately"]
pub struct ConnectionPermit {
    gate: ConnectionGate,
}

impl ConnectionPermit {
    pub(crate) fn new(gate: ConnectionGate) -> Self {
        Self { gate }
    }

    /// Give the slot back before the permit would otherwise go out of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ConnectionPermit {
    fn drop(&mut self) {
        self.gate.release();
    }
}

impl fmt::Debug for ConnectionPermit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPermit")
            .field("capacity", &self.gate.capacity())
            .finish()
    }
}
