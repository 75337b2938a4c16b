//! Application layer coordinating state, components, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain/store
//! layers. Data flows one way:
//!
//! ```text
//! User Input → Events → Event Handler → Store Mutation → Observers (lists)
//!                                   └──→ Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`component`]: Mountable component capability
//! - [`drag`]: Drag-and-drop payload and hooks
//! - [`form`]: New-project form component
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`list`]: Project list component and draggable list item
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod component;
pub mod drag;
pub mod form;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use component::Component;
pub use drag::{DragPayload, DragTarget, Draggable};
pub use handler::{handle_event, Event};
pub use modes::{FormField, InputMode};
pub use state::AppState;
