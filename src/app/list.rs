//! Project list component.
//!
//! A [`ProjectList`] shows the projects of one status. When mounted it subscribes
//! to the store; every notification replaces its assigned projects with the
//! subset matching its status, keeping creation order. The list is also a
//! [`DragTarget`]: dropping a project on it moves that project to its status.

use super::component::Component;
use super::drag::{DragPayload, DragTarget, Draggable, TEXT_PLAIN};
use crate::domain::{Project, ProjectId, ProjectStatus};
use crate::store::{ProjectStore, SubscriptionId};
use crate::ui::viewmodel::{ItemView, ListView};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// One of the two project lists on the board.
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    /// Shared with the store subscription, which rewrites it on every notification.
    assigned: Rc<RefCell<Vec<Project>>>,
    selected: usize,
    droppable: bool,
    subscription: Option<SubscriptionId>,
}

impl ProjectList {
    /// Creates an unmounted, empty list for `status`.
    #[must_use]
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Rc::new(RefCell::new(Vec::new())),
            selected: 0,
            droppable: false,
            subscription: None,
        }
    }

    /// Creates the list and subscribes it to `store`.
    pub fn mount(status: ProjectStatus, store: &mut ProjectStore) -> Self {
        let mut list = Self::new(status);
        list.configure(store);
        list
    }

    /// Cancels the list's store subscription.
    ///
    /// The assigned projects are kept as they were at the last notification.
    pub fn unmount(&mut self, store: &mut ProjectStore) -> bool {
        self.subscription
            .take()
            .is_some_and(|id| store.unsubscribe(id))
    }

    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    #[must_use]
    pub const fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// Returns a copy of the projects currently shown by the list.
    #[must_use]
    pub fn assigned(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.borrow().is_empty()
    }

    #[must_use]
    pub fn project_at(&self, index: usize) -> Option<Project> {
        self.assigned.borrow().get(index).cloned()
    }

    /// Index of a project within this list.
    #[must_use]
    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.assigned.borrow().iter().position(|p| p.id() == *id)
    }

    /// Selected index, clamped to the current contents.
    ///
    /// The assigned projects change behind the list's back when the store
    /// notifies, so the stored index may be stale.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected.min(self.len().saturating_sub(1))
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<Project> {
        self.project_at(self.selected_index())
    }

    /// Moves the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected_index() + 1) % len;
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let current = self.selected_index();
        self.selected = if current == 0 { len - 1 } else { current - 1 };
    }

    /// Selects `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.selected = index;
        true
    }

    #[must_use]
    pub const fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Items visible in `window`, with the selection and dragged project marked.
    ///
    /// `dragging` is the id of the project being dragged, if any.
    #[must_use]
    pub fn items(&self, window: Range<usize>, dragging: Option<ProjectId>) -> Vec<ItemView> {
        let selected = self.selected_index();
        let assigned = self.assigned.borrow();
        let end = window.end.min(assigned.len());
        let start = window.start.min(end);

        assigned[start..end]
            .iter()
            .enumerate()
            .map(|(offset, project)| ItemView {
                title: project.title().to_string(),
                effort: project.effort_label(),
                description: project.description().to_string(),
                is_selected: start + offset == selected,
                is_dragging: dragging == Some(project.id()),
            })
            .collect()
    }

    fn heading(&self) -> String {
        format!("{} ({})", self.status.list_label(), self.len())
    }
}

impl Component for ProjectList {
    type View = ListView;

    fn configure(&mut self, store: &mut ProjectStore) {
        if self.subscription.is_some() {
            return;
        }

        let status = self.status;
        let assigned = Rc::clone(&self.assigned);
        let id = store.subscribe(move |projects| {
            let relevant: Vec<Project> = projects
                .into_iter()
                .filter(|p| p.status() == status)
                .collect();
            tracing::trace!(list = %status, count = relevant.len(), "list received projects");
            *assigned.borrow_mut() = relevant;
        });

        tracing::debug!(list = %status, subscription = %id, "list mounted");
        self.subscription = Some(id);
    }

    fn render_content(&self) -> ListView {
        let empty_message = self
            .is_empty()
            .then(|| format!("No {} projects", self.status));

        ListView {
            title: self.heading(),
            items: self.items(0..self.len(), None),
            is_focused: false,
            is_droppable: self.droppable,
            empty_message,
        }
    }
}

impl DragTarget for ProjectList {
    fn drag_over(&mut self, payload: &DragPayload) -> bool {
        if payload.format() != TEXT_PLAIN {
            return false;
        }
        if !self.droppable {
            tracing::trace!(list = %self.status, "drag entered list");
        }
        self.droppable = true;
        true
    }

    fn drop_project(&mut self, store: &mut ProjectStore, payload: &DragPayload) -> bool {
        self.droppable = false;

        let Some(id) = payload.project_id() else {
            tracing::debug!(list = %self.status, data = %payload.data(), "dropped payload is not a project id");
            return false;
        };

        let moved = store.move_project(&id, self.status);
        if moved {
            if let Some(index) = self.position(&id) {
                self.selected = index;
            }
        }
        moved
    }

    fn drag_leave(&mut self) {
        self.droppable = false;
    }
}

/// A single project rendered inside a list, usable as a drag source.
#[derive(Debug, Clone, Copy)]
pub struct ProjectItem<'a> {
    project: &'a Project,
}

impl<'a> ProjectItem<'a> {
    #[must_use]
    pub const fn new(project: &'a Project) -> Self {
        Self { project }
    }

    #[must_use]
    pub const fn project(&self) -> &'a Project {
        self.project
    }
}

impl Draggable for ProjectItem<'_> {
    fn drag_start(&self) -> DragPayload {
        tracing::debug!(project_id = %self.project.id(), "drag started");
        DragPayload::for_project(self.project.id())
    }

    fn drag_end(&self) {
        tracing::debug!(project_id = %self.project.id(), "drag finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    struct Board {
        store: ProjectStore,
        active: ProjectList,
        finished: ProjectList,
    }

    #[fixture]
    fn board() -> Board {
        let mut store = ProjectStore::new();
        let active = ProjectList::mount(ProjectStatus::Active, &mut store);
        let finished = ProjectList::mount(ProjectStatus::Finished, &mut store);
        Board { store, active, finished }
    }

    #[rstest]
    fn lists_start_empty_until_notified(board: Board) {
        assert!(board.active.is_empty());
        assert!(board.finished.is_empty());
        assert_eq!(board.store.subscriptions().len(), 2);
    }

    #[rstest]
    fn new_projects_land_in_active_list(mut board: Board) {
        let id = board
            .store
            .add_project("Build Bridge".into(), "Construct a bridge over river".into(), 30.0);

        assert_eq!(board.active.len(), 1);
        assert_eq!(board.active.project_at(0).map(|p| p.id()), Some(id));
        assert!(board.finished.is_empty());
    }

    #[rstest]
    fn lists_keep_creation_order(mut board: Board) {
        let a = board.store.add_project("A".into(), "First project".into(), 1.0);
        let b = board.store.add_project("B".into(), "Second project".into(), 2.0);
        let c = board.store.add_project("C".into(), "Third project".into(), 3.0);
        board.store.move_project(&c, ProjectStatus::Finished);
        board.store.move_project(&a, ProjectStatus::Finished);

        let finished: Vec<ProjectId> = board.finished.assigned().iter().map(Project::id).collect();
        assert_eq!(finished, vec![a, c]);
        assert_eq!(board.active.position(&b), Some(0));
    }

    #[rstest]
    fn drop_moves_project_between_lists(mut board: Board) {
        let id = board
            .store
            .add_project("Build Bridge".into(), "Construct a bridge over river".into(), 30.0);
        let project = board.store.get(&id).cloned().unwrap();
        let payload = ProjectItem::new(&project).drag_start();

        assert!(board.finished.drag_over(&payload));
        assert!(board.finished.is_droppable());
        assert!(board.finished.drop_project(&mut board.store, &payload));

        assert!(!board.finished.is_droppable());
        assert!(board.active.is_empty());
        assert_eq!(board.finished.len(), 1);
    }

    #[rstest]
    fn drop_on_own_list_changes_nothing(mut board: Board) {
        let id = board.store.add_project("Only".into(), "The only project".into(), 4.0);
        let payload = DragPayload::for_project(id);

        assert!(!board.active.drop_project(&mut board.store, &payload));
        assert_eq!(board.active.len(), 1);
    }

    #[rstest]
    fn foreign_payload_is_rejected(mut board: Board) {
        let payload = DragPayload::new("text/html", "<b>x</b>");
        assert!(!board.active.drag_over(&payload));
        assert!(!board.active.is_droppable());
    }

    #[rstest]
    fn drag_leave_clears_droppable(mut board: Board) {
        board.active.drag_over(&DragPayload::new(TEXT_PLAIN, "anything"));
        assert!(board.active.is_droppable());
        board.active.drag_leave();
        assert!(!board.active.is_droppable());
    }

    #[rstest]
    fn stale_id_drop_is_ignored(mut board: Board) {
        board.store.add_project("Only".into(), "The only project".into(), 4.0);
        let payload = DragPayload::for_project(ProjectId::new());
        assert!(!board.finished.drop_project(&mut board.store, &payload));
        assert!(board.finished.is_empty());
    }

    #[rstest]
    fn selection_wraps_and_clamps(mut board: Board) {
        let a = board.store.add_project("A".into(), "First project".into(), 1.0);
        board.store.add_project("B".into(), "Second project".into(), 2.0);

        board.active.select_previous();
        assert_eq!(board.active.selected_index(), 1);
        board.active.select_next();
        assert_eq!(board.active.selected_index(), 0);

        board.active.select(1);
        board.store.move_project(&a, ProjectStatus::Finished);
        assert_eq!(board.active.selected_index(), 0);
        assert!(!board.active.select(5));
    }

    #[rstest]
    fn unmounted_list_stops_updating(mut board: Board) {
        assert!(board.active.unmount(&mut board.store));
        board.store.add_project("Late".into(), "Added after unmount".into(), 1.0);
        assert!(board.active.is_empty());
        assert!(!board.active.unmount(&mut board.store));
    }

    #[rstest]
    fn render_content_reports_heading_and_empty_state(mut board: Board) {
        let view = board.finished.render_content();
        assert_eq!(view.title, "Finished Projects (0)");
        assert_eq!(view.empty_message.as_deref(), Some("No finished projects"));

        board.store.add_project("A".into(), "First project".into(), 25.0);
        let view = board.active.render_content();
        assert_eq!(view.title, "Active Projects (1)");
        assert_eq!(view.items[0].effort, "1 man-month, 5 man-days");
        assert!(view.items[0].is_selected);
        assert!(view.empty_message.is_none());
    }
}
