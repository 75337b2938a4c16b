//! Input mode state types for the application.
//!
//! The board operates in one of two input modes:
//! - **Normal**: keys navigate the lists and drive drag-and-drop
//! - **Editing**: keys edit the focused field of the new-project form
//!
//! # Example
//!
//! ```rust
//! use projboard::app::modes::{FormField, InputMode};
//!
//! let mode = InputMode::Editing(FormField::Title);
//! assert_eq!(FormField::Title.next(), FormField::Description);
//! assert!(mode.is_editing());
//! ```

/// Fields of the new-project form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    /// Project title.
    #[default]
    Title,
    /// Free-text description.
    Description,
    /// Effort estimate in man-days.
    Manday,
}

impl FormField {
    /// All fields in display and tab order.
    pub const ALL: [Self; 3] = [Self::Title, Self::Description, Self::Manday];

    /// Returns the field after this one, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Manday,
            Self::Manday => Self::Title,
        }
    }

    /// Returns the field before this one, wrapping to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Manday,
            Self::Description => Self::Title,
            Self::Manday => Self::Description,
        }
    }

    /// Label rendered in front of the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Manday => "Man-days",
        }
    }
}

/// Current input handling mode.
///
/// Determines active keybindings and the footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and drag-and-drop over the two lists.
    Normal,

    /// Typing into the given form field.
    Editing(FormField),
}

impl InputMode {
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }
}
