//! View model types representing renderable UI state.
//!
//! View models are computed from application state and consumed by the
//! renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use projboard::ui::viewmodel::{FieldView, FormView};
//!
//! let form = FormView {
//!     fields: vec![FieldView {
//!         label: "Title".to_string(),
//!         value: "Build Bridge".to_string(),
//!         is_focused: true,
//!         is_editing: false,
//!     }],
//! };
//! assert_eq!(form.fields.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, project counts).
    pub header: HeaderInfo,

    /// The new-project form.
    pub form: FormView,

    /// The active list, windowed to the rows available.
    pub active: ListView,

    /// The finished list, windowed to the rows available.
    pub finished: ListView,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Optional message from the last submission or drop.
    pub notice: Option<NoticeInfo>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// The new-project form.
#[derive(Debug, Clone)]
pub struct FormView {
    /// Fields in display order.
    pub fields: Vec<FieldView>,
}

/// One input field of the form.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub label: String,
    pub value: String,
    /// Whether this is the form's focused field.
    pub is_focused: bool,
    /// Whether keystrokes currently go into this field.
    pub is_editing: bool,
}

/// One project list panel.
#[derive(Debug, Clone)]
pub struct ListView {
    /// Heading, e.g. "Active Projects (3)".
    pub title: String,

    /// Items to display; a window of the list when it does not fit.
    pub items: Vec<ItemView>,

    /// Whether keyboard navigation targets this list.
    pub is_focused: bool,

    /// Whether a compatible drag is hovering over this list.
    pub is_droppable: bool,

    /// Message shown instead of items when the list is empty.
    pub empty_message: Option<String>,
}

/// Display information for a single project.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub title: String,

    /// Effort label, e.g. "1 man-month, 10 man-days".
    pub effort: String,

    pub description: String,

    /// Whether this is the list's selected item.
    pub is_selected: bool,

    /// Whether this item is the one being dragged.
    pub is_dragging: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  m: pick up").
    pub keybindings: String,
}

/// A one-line message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    pub message: String,
    /// Rendered in the error color when set.
    pub is_error: bool,
}
