//! Change notification for settings observers.
//!
//! Widgets that render colour-scheme values subscribe here and re-read the
//! values they care about when a broadcast arrives. Subscriptions are RAII
//! handles: dropping the handle deregisters the observer, so a destroyed
//! widget can never be called back.

use std::sync::{Arc, Mutex, Weak};

/// What changed, as far as observers are told.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
    /// A single named property changed (carries the identifier only;
    /// observers re-read the value themselves).
    Property(String),
    /// Something changed; observers should refresh whatever they display.
    Changed,
}

type Callback = Arc<dyn Fn(&SettingsEvent) + Send + Sync>;

struct Registry {
    next_id: u64,
    observers: Vec<(u64, Callback)>,
}

/// Broadcasts [`SettingsEvent`]s to registered observers.
///
/// Cloning yields another handle to the same observer registry.
#[derive(Clone)]
pub struct ChangeNotifier {
    inner: Arc<Mutex<Registry>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                next_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Register an observer. The returned [`Subscription`] must be kept
    /// alive for as long as deliveries are wanted.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&SettingsEvent) + Send + Sync + 'static,
    {
        let id = {
            let mut reg = self.inner.lock().unwrap();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.observers.push((id, Arc::new(callback)));
            id
        };
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every live observer.
    ///
    /// Callbacks run outside the registry lock, so an observer may itself
    /// trigger further broadcasts or new subscriptions.
    pub fn broadcast(&self, event: &SettingsEvent) {
        let callbacks: Vec<Callback> = {
            let reg = self.inner.lock().unwrap();
            reg.observers.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };
        for cb in callbacks {
            cb(event);
        }
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.lock().unwrap().observers.len()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII observer registration; dropping it deregisters the observer.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut reg) = registry.lock() {
                reg.observers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
