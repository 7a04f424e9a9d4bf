//! Cross-context change-notification bus.
//!
//! Models the browser "storage" event: a payload-free signal that some other
//! context wrote to the shared store. Listeners re-read whatever they depend
//! on; they never receive a diff.

use tokio::sync::broadcast;
use uuid::Uuid;

const CHANNEL_CAPACITY: usize = 64;

/// Identifies one handle on the store (the "tab").
pub type ContextId = Uuid;

/// Broadcast channel shared by every context over one backend.
#[derive(Debug, Clone)]
pub struct ChangeBus {
    tx: broadcast::Sender<ContextId>,
}

impl ChangeBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Announces a write made by `origin`. A notification nobody is
    /// listening for is simply dropped.
    pub fn publish(&self, origin: ContextId) {
        let _ = self.tx.send(origin);
    }

    pub fn subscribe(&self, context: ContextId) -> ExternalChanges {
        ExternalChanges {
            context,
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Listener for writes made by *other* contexts.
///
/// Rapid writes may coalesce into a single wake: treat every wake as
/// "something changed", not as one change.
pub struct ExternalChanges {
    context: ContextId,
    rx: broadcast::Receiver<ContextId>,
}

impl ExternalChanges {
    /// Waits until another context writes. Returns `false` once every other
    /// handle on the store is gone.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.rx.recv().await {
                Ok(origin) if origin != self.context => return true,
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_)) => return true,
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }

    /// Non-blocking probe: drains queued notifications and reports whether
    /// any external write happened since the last call.
    pub fn try_changed(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(origin) => {
                    if origin != self.context {
                        changed = true;
                    }
                }
                Err(broadcast::error::TryRecvError::Lagged(_)) => changed = true,
                Err(_) => break,
            }
        }
        changed
    }
}
