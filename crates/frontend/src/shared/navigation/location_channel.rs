use contracts::system::navigation::LocationChangedDetail;
use std::sync::{Arc, Mutex};

type LocationHandler = Arc<dyn Fn(LocationChangedDetail) + Send + Sync>;

/// Upward channel for location-change requests.
///
/// Routed descendants `emit` the route they want; the panel that owns the route
/// `listen`s. A signal is delivered to exactly one listener and stops there.
/// Listeners are keyed, so listening twice under the same key replaces the handler
/// instead of adding a second one.
#[derive(Clone, Default)]
pub struct LocationChannel {
    listeners: Arc<Mutex<Vec<(&'static str, LocationHandler)>>>,
}

impl LocationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `key`. Returns `false` when the key was already
    /// registered and the handler got replaced.
    pub fn listen<F>(&self, key: &'static str, handler: F) -> bool
    where
        F: Fn(LocationChangedDetail) + Send + Sync + 'static,
    {
        let handler: LocationHandler = Arc::new(handler);
        let Ok(mut listeners) = self.listeners.lock() else {
            return false;
        };
        match listeners.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                entry.1 = handler;
                false
            }
            None => {
                listeners.push((key, handler));
                true
            }
        }
    }

    pub fn unlisten(&self, key: &'static str) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(k, _)| *k != key);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }

    /// Deliver a signal to the most recently registered listener.
    /// Returns `false` if nobody is listening.
    pub fn emit(&self, detail: LocationChangedDetail) -> bool {
        // the lock is released before the handler runs so it may emit again
        let handler = match self.listeners.lock() {
            Ok(listeners) => listeners.last().map(|(_, h)| h.clone()),
            Err(_) => None,
        };
        match handler {
            Some(handler) => {
                handler(detail);
                true
            }
            None => {
                log::debug!("location-changed signal dropped: no listener");
                false
            }
        }
    }
}
