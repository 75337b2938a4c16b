//! Drag-and-drop protocol between list items and lists.
//!
//! A drag carries the dragged project's identifier as text in a [`DragPayload`],
//! tagged with the [`TEXT_PLAIN`] format. List items are [`Draggable`]; lists are
//! [`DragTarget`]s that accept only `text/plain` payloads and, on drop, ask the
//! store to move the project to the list's status.
//!
//! ```text
//! ProjectItem::drag_start ──► DragPayload("text/plain", id)
//!                                   │
//!            DragTarget::drag_over ◄┤ (marks list droppable)
//!            DragTarget::drag_leave │ (clears it)
//!                                   ▼
//!            DragTarget::drop_project ──► ProjectStore::move_project(id, list status)
//! ```

use crate::domain::{ProjectId, ProjectStatus};
use crate::store::ProjectStore;

/// Payload format used for project identifiers.
pub const TEXT_PLAIN: &str = "text/plain";

/// Data transferred from a drag source to a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    format: String,
    data: String,
}

impl DragPayload {
    /// Creates a payload with an explicit format.
    #[must_use]
    pub fn new(format: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            data: data.into(),
        }
    }

    /// Creates the `text/plain` payload carrying a project identifier.
    #[must_use]
    pub fn for_project(id: ProjectId) -> Self {
        Self::new(TEXT_PLAIN, id.to_string())
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Parses the carried text back into a project identifier.
    ///
    /// Returns `None` for payloads that are not `text/plain` or whose text is not
    /// an identifier.
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        if self.format != TEXT_PLAIN {
            return None;
        }
        self.data.parse().ok()
    }
}

/// A drag in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// What is being dragged.
    pub payload: DragPayload,
    /// List the drag started from.
    pub source: ProjectStatus,
    /// List currently under the pointer, if any.
    pub hover: Option<ProjectStatus>,
}

impl DragSession {
    #[must_use]
    pub const fn new(payload: DragPayload, source: ProjectStatus) -> Self {
        Self {
            payload,
            source,
            hover: None,
        }
    }
}

/// Something that can be picked up and dragged.
pub trait Draggable {
    /// Starts a drag and returns the payload to transfer.
    fn drag_start(&self) -> DragPayload;

    /// Called once the drag finished, whether or not it was dropped.
    fn drag_end(&self);
}

/// Something that accepts dropped payloads.
pub trait DragTarget {
    /// A drag moved over this target. Returns `true` if the payload is acceptable.
    fn drag_over(&mut self, payload: &DragPayload) -> bool;

    /// The payload was dropped on this target. Returns `true` if the store changed.
    fn drop_project(&mut self, store: &mut ProjectStore, payload: &DragPayload) -> bool;

    /// The drag left this target without dropping.
    fn drag_leave(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_payload_round_trips_the_id() {
        let id = ProjectId::new();
        let payload = DragPayload::for_project(id);
        assert_eq!(payload.format(), TEXT_PLAIN);
        assert_eq!(payload.project_id(), Some(id));
    }

    #[test]
    fn foreign_format_yields_no_id() {
        let id = ProjectId::new();
        let payload = DragPayload::new("text/uri-list", id.to_string());
        assert_eq!(payload.project_id(), None);
    }

    #[test]
    fn stale_text_yields_no_id() {
        let payload = DragPayload::new(TEXT_PLAIN, "not-an-id");
        assert_eq!(payload.project_id(), None);
    }
}
