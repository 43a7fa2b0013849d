use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc::{self, error::TrySendError};

/// Process-unique id of a live connection. Never reused.
pub type ConnectionId = u64;

/// Outbound queue feeding one connection's socket, FIFO.
pub type ConnectionSender = mpsc::Sender<String>;

/// Messages a connection may have queued before it counts as stalled.
pub const OUTBOUND_CAPACITY: usize = 64;

/// Queue for a new connection, sized at [`OUTBOUND_CAPACITY`].
pub fn outbound_queue() -> (ConnectionSender, mpsc::Receiver<String>) {
    mpsc::channel(OUTBOUND_CAPACITY)
}

/// Set of live connections that broadcasts fan out to.
///
/// Owned by the app and injected where broadcasting is needed.
pub struct ConnectionRegistry {
    next_id: AtomicU64,
    connections: RwLock<HashMap<ConnectionId, ConnectionSender>>,
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a connection's outbound queue and return its id.
    pub fn add(&self, sender: ConnectionSender) -> ConnectionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut map = self.connections.write().unwrap_or_else(|e| e.into_inner());
        map.insert(id, sender);
        id
    }

    /// Remove a connection. Returns false if it was already gone.
    pub fn remove(&self, id: ConnectionId) -> bool {
        let mut map = self.connections.write().unwrap_or_else(|e| e.into_inner());
        map.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        let map = self.connections.read().unwrap_or_else(|e| e.into_inner());
        map.len()
    }

    /// Queue `message` on every connection except `exclude`.
    ///
    /// A connection whose queue is closed or full is dropped from the
    /// registry; dropping its sender ends that connection's socket task.
    /// Delivery to the rest carries on. Returns the number of connections
    /// the message was queued on.
    pub fn broadcast(&self, message: &str, exclude: Option<ConnectionId>) -> usize {
        let mut delivered = 0;
        let mut dead = Vec::new();
        {
            let map = self.connections.read().unwrap_or_else(|e| e.into_inner());
            for (&id, sender) in map.iter() {
                if Some(id) == exclude {
                    continue;
                }
                match sender.try_send(message.to_string()) {
                    Ok(()) => delivered += 1,
                    Err(TrySendError::Full(_)) => {
                        log::debug!("Dropping connection {id}: outbound queue full");
                        dead.push(id);
                    }
                    Err(TrySendError::Closed(_)) => {
                        log::debug!("Dropping connection {id}: delivery failed");
                        dead.push(id);
                    }
                }
            }
        }

        if !dead.is_empty() {
            let mut map = self.connections.write().unwrap_or_else(|e| e.into_inner());
            for id in dead {
                map.remove(&id);
            }
        }
        delivered
    }
}
