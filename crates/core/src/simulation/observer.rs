//! State-change notification
//!
//! Replaces UI data binding with explicit observer registration: a
//! collaborator registers a callback and receives an event after every
//! externally visible engine transition.

use std::sync::{Mutex, PoisonError};

/// Externally visible engine state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    /// The run flag was set.
    Started,
    /// The run flag was cleared.
    Stopped,
    /// One update pass completed and the new grid was swapped in.
    Stepped,
    /// The forest was regrown to all trees.
    Reset,
    /// A tree cell was set on fire by an external caller.
    Ignited { index: usize },
}

type StateChangedCallback = Box<dyn Fn(SimulationEvent) + Send + Sync>;

/// Registry of state-change observers.
///
/// Callbacks run in registration order while the registry lock is held; a
/// callback must not register further observers or issue engine commands.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    callbacks: Mutex<Vec<StateChangedCallback>>,
}

impl ObserverRegistry {
    pub fn register(&self, callback: StateChangedCallback) {
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(callback);
    }

    pub fn notify(&self, event: SimulationEvent) {
        let callbacks = self.callbacks.lock().unwrap_or_else(PoisonError::into_inner);
        for callback in callbacks.iter() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_notify_reaches_every_observer() {
        let registry = ObserverRegistry::default();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            registry.register(Box::new(move |_| {
                hits.fetch_add(1, Ordering::Relaxed);
            }));
        }

        registry.notify(SimulationEvent::Stepped);
        assert_eq!(hits.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_event_payload_delivered() {
        let registry = ObserverRegistry::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        registry.register(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        registry.notify(SimulationEvent::Ignited { index: 42 });
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[SimulationEvent::Ignited { index: 42 }]
        );
    }
}
