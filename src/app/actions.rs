//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in order. Store mutations never become actions:
//! they happen synchronously inside the handler.
//!
//! # Example
//!
//! ```rust
//! use projboard::app::Action;
//!
//! let actions = vec![Action::RenamePane { title: "Project Board (2)".into() }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to close the board (e.g., pressing 'q').
    CloseFocus,

    /// Renames the plugin pane, used to show the project count in the pane frame.
    RenamePane {
        /// New pane title.
        title: String,
    },
}
