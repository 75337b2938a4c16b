//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! translates it into state changes and action sequences. Store mutations and
//! the notifications they trigger complete inside a single [`handle_event`] call.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `FocusList`, `ToggleList`
//! - **Form**: `EditForm`, `NextField`, `PreviousField`, `Char`, `Backspace`, `SubmitForm`
//! - **Drag and drop**: `PickUp`, `Drop`, `Escape`
//! - **Mouse**: `MouseDown`, `MouseDrag`, `MouseUp` (1-indexed screen positions)
//! - **System**: `CloseFocus`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use projboard::app::{form::FormLimits, handle_event, AppState, Event};
//! use projboard::ui::Theme;
//!
//! let mut state = AppState::new(FormLimits::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), projboard::ProjboardError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ProjectStatus;
use crate::ui::layout::HitTarget;

use super::modes::InputMode;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the focused list's selection down (wraps to top).
    KeyDown,
    /// Moves the focused list's selection up (wraps to bottom).
    KeyUp,
    /// Focuses a list; during a drag this drags over it.
    FocusList(ProjectStatus),
    /// Focuses the other list.
    ToggleList,
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts editing the form at its focused field.
    EditForm,
    /// Focuses the next form field.
    NextField,
    /// Focuses the previous form field.
    PreviousField,
    /// Types a character into the focused form field.
    Char(char),
    /// Deletes the last character of the focused form field.
    Backspace,
    /// Validates the form and adds a project.
    SubmitForm,

    /// Picks up the selected project of the focused list.
    PickUp,
    /// Drops the dragged project on the hovered list.
    Drop,
    /// Cancels the drag, or leaves the form when editing.
    Escape,

    /// Left button pressed at a screen position.
    MouseDown { row: usize, col: usize },
    /// Pointer moved with the left button held.
    MouseDrag { row: usize, col: usize },
    /// Left button released.
    MouseUp { row: usize, col: usize },

    /// Reports whether the requested permissions were granted.
    PermissionsResult { granted: bool },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render along with the actions to run, in
/// order.
///
/// # Errors
///
/// Event handling itself has no failure modes today; the `Result` keeps the
/// shim's error path in place for handlers that do.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusList(status) => {
            state.focus_list(*status);
            Ok((true, vec![]))
        }
        Event::ToggleList => {
            let other = state.focused_list.toggled();
            state.focus_list(other);
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::EditForm => {
            state.cancel_drag();
            let field = state.form().focused();
            state.edit_field(field);
            Ok((true, vec![]))
        }
        Event::NextField | Event::PreviousField => {
            if !state.input_mode.is_editing() {
                return Ok((false, vec![]));
            }
            let form = state.form_mut();
            if *event == Event::NextField {
                form.focus_next();
            } else {
                form.focus_previous();
            }
            let field = form.focused();
            state.edit_field(field);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_editing() {
                return Ok((false, vec![]));
            }
            state.form_mut().push_char(*c);
            tracing::trace!(char = %c, "form input updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_editing() {
                return Ok((false, vec![]));
            }
            state.form_mut().backspace();
            Ok((true, vec![]))
        }
        Event::SubmitForm => {
            let actions = state
                .submit_form()
                .map(|_| vec![rename_action(state)])
                .unwrap_or_default();
            Ok((true, actions))
        }
        Event::PickUp => Ok((state.begin_drag(), vec![])),
        Event::Drop => {
            if !state.is_dragging() {
                return Ok((false, vec![]));
            }
            state.drop_on_hover();
            Ok((true, vec![]))
        }
        Event::Escape => match state.input_mode {
            InputMode::Editing(_) => {
                state.stop_editing();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((state.cancel_drag(), vec![])),
        },
        Event::MouseDown { row, col } => Ok((handle_mouse_down(state, *row, *col), vec![])),
        Event::MouseDrag { row, col } => {
            if !state.is_dragging() {
                return Ok((false, vec![]));
            }
            let target = list_under(state, *row, *col);
            Ok((state.drag_over(target), vec![]))
        }
        Event::MouseUp { row, col } => {
            if !state.is_dragging() {
                return Ok((false, vec![]));
            }
            match list_under(state, *row, *col) {
                Some(target) => {
                    state.drag_over(Some(target));
                    state.drop_on(target);
                }
                None => {
                    state.cancel_drag();
                }
            }
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if *granted {
                Ok((false, vec![rename_action(state)]))
            } else {
                tracing::warn!("permissions denied, pane title will not be updated");
                Ok((false, vec![]))
            }
        }
    }
}

fn handle_mouse_down(state: &mut AppState, row: usize, col: usize) -> bool {
    let Some(target) = state.hit_test(row, col) else {
        return false;
    };
    tracing::debug!(row = row, col = col, target = ?target, "mouse down");

    match target {
        HitTarget::Field(field) => {
            state.cancel_drag();
            state.edit_field(field);
        }
        HitTarget::Item { list, index } => {
            state.stop_editing();
            state.cancel_drag();
            state.begin_drag_at(list, index);
        }
        HitTarget::List(list) => {
            state.stop_editing();
            state.focus_list(list);
        }
    }
    true
}

fn list_under(state: &AppState, row: usize, col: usize) -> Option<ProjectStatus> {
    match state.hit_test(row, col)? {
        HitTarget::Item { list, .. } | HitTarget::List(list) => Some(list),
        HitTarget::Field(_) => None,
    }
}

fn rename_action(state: &AppState) -> Action {
    Action::RenamePane {
        title: format!("Project Board ({})", state.store().len()),
    }
}
