//! Error types for the projboard plugin.
//!
//! This module defines the centralized error type [`ProjboardError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. The project store
//! itself has no failure modes; these errors cover the ambient concerns around it
//! (theme loading, configuration, trace file I/O).

use thiserror::Error;

/// The main error type for projboard operations.
///
/// Validation failures are deliberately absent: a rejected form submission is an
/// expected outcome reported through [`crate::domain::validation::validate`], not
/// an error.
///
/// # Examples
///
/// ```
/// use projboard::ProjboardError;
///
/// fn check_bounds(min: f64, max: f64) -> Result<(), ProjboardError> {
///     if min > max {
///         return Err(ProjboardError::Config(format!("manday_min {min} exceeds manday_max {max}")));
///     }
///     Ok(())
/// }
///
/// assert!(check_bounds(1.0, 1000.0).is_ok());
/// assert!(check_bounds(10.0, 1.0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum ProjboardError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. reading a custom
    /// theme file or writing the trace export file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a custom theme file is not valid TOML or is missing colors.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for projboard operations.
pub type Result<T> = std::result::Result<T, ProjboardError>;
