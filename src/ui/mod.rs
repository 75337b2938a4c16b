//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled terminal output.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Screen geometry shared by rendering and mouse hit-testing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, text fitting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{BoardLayout, HitTarget};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{FieldView, FooterInfo, FormView, HeaderInfo, ItemView, ListView, NoticeInfo, UIViewModel};
