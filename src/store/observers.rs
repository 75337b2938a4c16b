//! Registry of snapshot observers.
//!
//! Each subscription gets a [`SubscriptionId`] handle so it can be enumerated and
//! removed independently of whatever UI component registered it. Observers are
//! invoked in subscription order.

use crate::domain::Project;
use std::fmt;

/// Callback receiving a full, owned copy of the project sequence.
pub type Observer = Box<dyn FnMut(Vec<Project>)>;

/// Handle identifying one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Ordered set of observers keyed by subscription handle.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer and returns its handle.
    ///
    /// Handles are never reused within one registry.
    pub fn register(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes the observer with the given handle.
    ///
    /// Returns `false` if no such observer is registered.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Returns the handles of all registered observers, in notification order.
    #[must_use]
    pub fn ids(&self) -> Vec<SubscriptionId> {
        self.observers.iter().map(|(id, _)| *id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers a separate copy of `projects` to every observer, in order.
    pub fn notify(&mut self, projects: &[Project]) {
        for (id, observer) in &mut self.observers {
            tracing::trace!(subscription = %id, project_count = projects.len(), "notifying observer");
            observer(projects.to_vec());
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("next_id", &self.next_id)
            .field("subscriptions", &self.ids())
            .finish()
    }
}
