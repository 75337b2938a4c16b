//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of the [`ProjectStore`]. It mounts the two
//! project lists against that store at construction, before any project can
//! exist, and lends the store to the form and lists whenever they need it.
//!
//! # State Components
//!
//! - **Store**: the authoritative project sequence and its observers
//! - **Form**: raw text of the new-project inputs
//! - **Lists**: the active and finished partitions, each with a selection
//! - **Drag**: the drag in progress, if any
//! - **Notice**: one-line feedback from the last submit or drop
//! - **Viewport**: terminal size of the last render, used for mouse hit-testing
//!
//! # Example
//!
//! ```rust
//! use projboard::app::{form::FormLimits, AppState};
//! use projboard::domain::ProjectStatus;
//! use projboard::ui::Theme;
//!
//! let mut state = AppState::new(FormLimits::default(), Theme::default());
//! state.store_mut().add_project("Build Bridge".into(), "Construct a bridge over river".into(), 30.0);
//! assert_eq!(state.list(ProjectStatus::Active).len(), 1);
//! ```

use super::component::Component;
use super::drag::{DragSession, DragTarget, Draggable};
use super::form::{FormLimits, ProjectForm};
use super::list::{ProjectItem, ProjectList};
use super::modes::{FormField, InputMode};
use crate::domain::{ProjectId, ProjectStatus};
use crate::store::ProjectStore;
use crate::ui::layout::{visible_window, BoardLayout, HitTarget};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, ListView, NoticeInfo, UIViewModel};
use std::ops::Range;

const INVALID_INPUT_NOTICE: &str = "Invalid input, please try again!";

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    store: ProjectStore,
    form: ProjectForm,
    active: ProjectList,
    finished: ProjectList,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// List targeted by keyboard navigation.
    pub focused_list: ProjectStatus,

    drag: Option<DragSession>,

    /// Feedback shown above the footer until the next submit or drop.
    pub notice: Option<NoticeInfo>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    viewport: BoardLayout,
}

impl AppState {
    /// Creates the store, mounts both lists on it and prepares an empty form.
    #[must_use]
    pub fn new(limits: FormLimits, theme: Theme) -> Self {
        let mut store = ProjectStore::new();
        let mut form = ProjectForm::new(limits);
        form.configure(&mut store);
        let active = ProjectList::mount(ProjectStatus::Active, &mut store);
        let finished = ProjectList::mount(ProjectStatus::Finished, &mut store);

        Self {
            store,
            form,
            active,
            finished,
            input_mode: InputMode::Normal,
            focused_list: ProjectStatus::Active,
            drag: None,
            notice: None,
            theme,
            viewport: BoardLayout::new(0, 0),
        }
    }

    /// The one project store of this plugin instance.
    #[must_use]
    pub const fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    #[must_use]
    pub const fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    #[must_use]
    pub const fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn list_mut(&mut self, status: ProjectStatus) -> &mut ProjectList {
        match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        }
    }

    #[must_use]
    pub const fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub const fn viewport(&self) -> BoardLayout {
        self.viewport
    }

    /// Records the terminal size; called before every render.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = BoardLayout::new(rows, cols);
    }

    pub fn move_selection_down(&mut self) {
        let status = self.focused_list;
        self.list_mut(status).select_next();
    }

    pub fn move_selection_up(&mut self) {
        let status = self.focused_list;
        self.list_mut(status).select_previous();
    }

    /// Moves keyboard focus to a list. During a drag this also drags over it.
    pub fn focus_list(&mut self, status: ProjectStatus) {
        self.focused_list = status;
        if self.drag.is_some() {
            self.drag_over(Some(status));
        }
    }

    /// Enters editing mode on a form field.
    pub fn edit_field(&mut self, field: FormField) {
        self.form.focus(field);
        self.input_mode = InputMode::Editing(field);
    }

    /// Leaves editing mode, keeping the typed text.
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Picks up the selected project of the focused list.
    ///
    /// Returns `false` when the list is empty or a drag is already running.
    pub fn begin_drag(&mut self) -> bool {
        if self.drag.is_some() {
            return false;
        }

        let source = self.focused_list;
        let Some(project) = self.list(source).selected_project() else {
            tracing::debug!(list = %source, "nothing to pick up");
            return false;
        };

        let payload = ProjectItem::new(&project).drag_start();
        self.drag = Some(DragSession::new(payload, source));
        self.drag_over(Some(source));
        true
    }

    /// Selects an item and picks it up.
    pub fn begin_drag_at(&mut self, status: ProjectStatus, index: usize) -> bool {
        if !self.list_mut(status).select(index) {
            return false;
        }
        self.focused_list = status;
        self.begin_drag()
    }

    /// Moves the drag over `target`, or off every list when `None`.
    ///
    /// Returns `true` when the hovered list changed.
    pub fn drag_over(&mut self, target: Option<ProjectStatus>) -> bool {
        let Some(session) = self.drag.as_ref() else {
            return false;
        };
        if session.hover == target {
            return false;
        }

        let payload = session.payload.clone();
        if let Some(previous) = session.hover {
            self.list_mut(previous).drag_leave();
        }

        let accepted = target.filter(|status| self.list_mut(*status).drag_over(&payload));
        if let Some(session) = self.drag.as_mut() {
            session.hover = accepted;
        }
        true
    }

    /// Drops the dragged project on `target`.
    ///
    /// Returns `true` if the project moved. Dropping on the list the project is
    /// already in ends the drag without a change.
    pub fn drop_on(&mut self, target: ProjectStatus) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };

        let _span = tracing::debug_span!("drop", source = %session.source, target = %target).entered();

        let list = match target {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        };
        let moved = list.drop_project(&mut self.store, &session.payload);
        self.active.drag_leave();
        self.finished.drag_leave();

        let id = session.payload.project_id();
        self.finish_drag(id);

        if moved {
            self.focused_list = target;
            if let Some(project) = id.and_then(|id| self.store.get(&id)) {
                self.notice = Some(NoticeInfo {
                    message: format!("Moved \"{}\" to {}", project.title(), target.list_label()),
                    is_error: false,
                });
            }
        }
        moved
    }

    /// Drops on the hovered list, or cancels when nothing is hovered.
    pub fn drop_on_hover(&mut self) -> bool {
        match self.drag.as_ref().and_then(|session| session.hover) {
            Some(target) => self.drop_on(target),
            None => {
                self.cancel_drag();
                false
            }
        }
    }

    /// Abandons the drag without touching the store.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        self.active.drag_leave();
        self.finished.drag_leave();
        self.finish_drag(session.payload.project_id());
        true
    }

    fn finish_drag(&self, id: Option<ProjectId>) {
        if let Some(project) = id.and_then(|id| self.store.get(&id)) {
            ProjectItem::new(project).drag_end();
        }
    }

    /// Submits the form; on rejection the store is untouched and a notice is set.
    pub fn submit_form(&mut self) -> Option<ProjectId> {
        let Some(id) = self.form.submit(&mut self.store) else {
            tracing::warn!("project rejected, invalid input");
            self.notice = Some(NoticeInfo {
                message: INVALID_INPUT_NOTICE.to_string(),
                is_error: true,
            });
            return None;
        };

        self.input_mode = InputMode::Normal;
        self.focused_list = ProjectStatus::Active;
        if let Some(index) = self.active.position(&id) {
            self.active.select(index);
        }
        if let Some(project) = self.store.get(&id) {
            self.notice = Some(NoticeInfo {
                message: format!("Added \"{}\"", project.title()),
                is_error: false,
            });
        }
        Some(id)
    }

    /// Items of a list that fit the current viewport.
    #[must_use]
    pub fn window(&self, status: ProjectStatus) -> Range<usize> {
        let list = self.list(status);
        visible_window(list.selected_index(), list.len(), self.viewport.item_capacity())
    }

    /// Maps a 1-indexed screen position to what was drawn there.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Option<HitTarget> {
        self.viewport
            .hit_test(row, col, |status| self.window(status).start)
    }

    /// Computes the view model for the current viewport.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let mut form = self.form.render_content();
        for field in &mut form.fields {
            field.is_editing = field.is_focused && self.input_mode.is_editing();
        }

        UIViewModel {
            header: self.compute_header(),
            form,
            active: self.compute_list(ProjectStatus::Active),
            finished: self.compute_list(ProjectStatus::Finished),
            footer: self.compute_footer(),
            notice: self.notice.clone(),
        }
    }

    fn compute_list(&self, status: ProjectStatus) -> ListView {
        let list = self.list(status);
        let dragging = self.drag.as_ref().and_then(|session| session.payload.project_id());

        let mut view = list.render_content();
        view.items = list.items(self.window(status), dragging);
        view.is_focused = !self.input_mode.is_editing() && self.focused_list == status;
        view
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Project Board ({}) ", self.store.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.drag.is_some()) {
            (InputMode::Editing(_), _) => {
                "Tab/Shift+Tab: field  Enter: add project  ESC: back to lists".to_string()
            }
            (InputMode::Normal, true) => "h/l or Tab: choose list  Enter/Space: drop  ESC: cancel".to_string(),
            (InputMode::Normal, false) => {
                "j/k: navigate  h/l or Tab: switch list  m: pick up  i: new project  q: quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn state() -> AppState {
        let mut state = AppState::new(FormLimits::default(), Theme::default());
        state.set_viewport(24, 80);
        state
    }

    fn add(state: &mut AppState, title: &str) -> ProjectId {
        state
            .store_mut()
            .add_project(title.into(), format!("{title} description"), 10.0)
    }

    #[rstest]
    fn lists_are_subscribed_at_construction(state: AppState) {
        assert_eq!(state.store().subscriptions().len(), 2);
        assert!(state.store().is_empty());
    }

    #[rstest]
    fn keyboard_drag_moves_project(mut state: AppState) {
        let id = add(&mut state, "Build Bridge");

        assert!(state.begin_drag());
        state.focus_list(ProjectStatus::Finished);
        assert!(state.list(ProjectStatus::Finished).is_droppable());
        assert!(!state.list(ProjectStatus::Active).is_droppable());
        assert!(state.drop_on_hover());

        assert_eq!(state.store().get(&id).map(|p| p.status()), Some(ProjectStatus::Finished));
        assert!(!state.is_dragging());
        assert_eq!(state.focused_list, ProjectStatus::Finished);
        assert!(!state.list(ProjectStatus::Finished).is_droppable());
        assert!(state.notice.as_ref().is_some_and(|n| !n.is_error));
    }

    #[rstest]
    fn dropping_on_source_list_changes_nothing(mut state: AppState) {
        let id = add(&mut state, "Stay");
        assert!(state.begin_drag());
        assert!(!state.drop_on_hover());
        assert_eq!(state.store().get(&id).map(|p| p.status()), Some(ProjectStatus::Active));
        assert!(state.notice.is_none());
    }

    #[rstest]
    fn cancel_leaves_store_untouched(mut state: AppState) {
        add(&mut state, "Cancelled");
        let before = state.store().snapshot();
        state.begin_drag();
        state.focus_list(ProjectStatus::Finished);
        assert!(state.cancel_drag());
        assert_eq!(state.store().snapshot(), before);
        assert!(!state.list(ProjectStatus::Finished).is_droppable());
    }

    #[rstest]
    fn empty_list_cannot_start_drag(mut state: AppState) {
        assert!(!state.begin_drag());
        assert!(!state.is_dragging());
    }

    #[rstest]
    fn submit_rejection_sets_error_notice(mut state: AppState) {
        state.form_mut().set_field(FormField::Title, "Title");
        assert!(state.submit_form().is_none());
        assert!(state.store().is_empty());
        assert_eq!(
            state.notice,
            Some(NoticeInfo {
                message: INVALID_INPUT_NOTICE.to_string(),
                is_error: true
            })
        );
    }

    #[rstest]
    fn submit_selects_new_project(mut state: AppState) {
        add(&mut state, "Existing");
        state.edit_field(FormField::Title);
        let form = state.form_mut();
        form.set_field(FormField::Title, "Build Bridge");
        form.set_field(FormField::Description, "Construct a bridge over river");
        form.set_field(FormField::Manday, "30");

        let id = state.submit_form().unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.list(ProjectStatus::Active).selected_project().map(|p| p.id()), Some(id));
    }

    #[rstest]
    fn mouse_coordinates_hit_the_drawn_item(mut state: AppState) {
        for i in 0..10 {
            add(&mut state, &format!("P{i}"));
        }
        for _ in 0..8 {
            state.move_selection_down();
        }
        let window = state.window(ProjectStatus::Active);
        assert_eq!(window, 4..10);

        let hit = state.hit_test(9, 3);
        assert_eq!(hit, Some(HitTarget::Item { list: ProjectStatus::Active, index: 4 }));
    }

    #[rstest]
    fn viewmodel_marks_dragged_item(mut state: AppState) {
        add(&mut state, "Dragged");
        state.begin_drag();
        let vm = state.compute_viewmodel();
        assert!(vm.active.items[0].is_dragging);
        assert!(vm.active.is_droppable);
        assert!(vm.footer.keybindings.contains("drop"));
    }
}
