//! The authoritative project store.
//!
//! [`ProjectStore`] owns the project sequence and the observer registry. Every
//! mutation runs to completion and then delivers the entire sequence to every
//! observer, so observers never see a partial update. Mutation takes `&mut self`;
//! the single-threaded plugin event loop plus the borrow checker give exclusive
//! writes without locking.
//!
//! # Example
//!
//! ```
//! use projboard::domain::ProjectStatus;
//! use projboard::store::ProjectStore;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut store = ProjectStore::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! store.subscribe(move |projects| sink.borrow_mut().push(projects.len()));
//!
//! let id = store.add_project("Build Bridge".into(), "Construct a bridge over river".into(), 30.0);
//! assert!(store.move_project(&id, ProjectStatus::Finished));
//! assert!(!store.move_project(&id, ProjectStatus::Finished));
//!
//! assert_eq!(*seen.borrow(), vec![1, 1]);
//! ```

use super::observers::{ObserverRegistry, SubscriptionId};
use crate::domain::{Project, ProjectId, ProjectStatus};

/// Holds all projects and notifies subscribers on every change.
///
/// Constructed once by [`crate::app::AppState::new`] and lent to the form and
/// list components that need it.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    observers: ObserverRegistry,
}

impl ProjectStore {
    /// Creates an empty store with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer invoked after every future mutation.
    ///
    /// The observer is not called with the current projects; it first hears from
    /// the store on the next mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(Vec<Project>) + 'static,
    {
        let id = self.observers.register(Box::new(observer));
        tracing::debug!(subscription = %id, observer_count = self.observers.len(), "observer subscribed");
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `false` if the handle was unknown or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.remove(id);
        tracing::debug!(subscription = %id, removed = removed, "observer unsubscribed");
        removed
    }

    /// Returns the handles of all current subscriptions, in notification order.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<SubscriptionId> {
        self.observers.ids()
    }

    /// Appends a new active project and notifies every observer once.
    ///
    /// Performs no validation; callers validate input first.
    pub fn add_project(&mut self, title: String, description: String, manday: f64) -> ProjectId {
        let project = Project::new(title, description, manday);
        let id = project.id();

        tracing::debug!(project_id = %id, title = %project.title(), manday = manday, "adding project");

        self.projects.push(project);
        self.notify();
        id
    }

    /// Moves a project to `new_status`.
    ///
    /// Notifies observers and returns `true` only when the project exists and its
    /// status actually changes. An unknown id or an unchanged status is a silent
    /// no-op, which is what happens when a project is dropped back onto its own
    /// list.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id() == *id) else {
            tracing::debug!(project_id = %id, "move ignored, project not found");
            return false;
        };

        if project.status() == new_status {
            tracing::debug!(project_id = %id, status = %new_status, "move ignored, status unchanged");
            return false;
        }

        tracing::debug!(
            project_id = %id,
            from = %project.status(),
            to = %new_status,
            "moving project"
        );
        project.set_status(new_status);
        self.notify();
        true
    }

    /// Returns an owned copy of all projects in creation order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Borrows all projects in creation order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == *id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify(&mut self) {
        let _span = tracing::debug_span!(
            "notify_observers",
            project_count = self.projects.len(),
            observer_count = self.observers.len()
        )
        .entered();
        self.observers.notify(&self.projects);
    }
}
