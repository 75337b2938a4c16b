//! Domain layer for the projboard plugin.
//!
//! This module contains the core domain types and rules, independent of Zellij
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`project`]: Project, identifier and status types
//! - [`validation`]: Declarative field validation used by the input form

pub mod error;
pub mod project;
pub mod validation;

pub use error::{ProjboardError, Result};
pub use project::{format_effort, Project, ProjectId, ProjectStatus};
pub use validation::{validate, Validatable};
