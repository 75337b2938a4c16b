//! Projboard: a Zellij plugin for tracking projects on a two-column board.
//!
//! Projboard keeps a list of projects in memory and shows them in two panels:
//! - **Active Projects** for work in progress
//! - **Finished Projects** for completed work
//!
//! New projects are entered through a three-field form (title, description,
//! estimated man-days). Projects move between the panels by drag and drop,
//! either with the mouse or with the keyboard (`m` to pick up, `Enter` to drop).

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - Form and list components                         │
//! │  - Drag-and-drop session                            │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────┐               ┌───────────────────┐
//! │ Store (store/)    │               │ UI Layer (ui/)    │
//! │ - Project store   │               │ - View model      │
//! │ - Observers       │               │ - Layout, themes  │
//! └───────────────────┘               └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Project model, validation, errors (domain/)      │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - File-based OTLP trace export                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/projboard.wasm" {
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!         description_min_length "5"
//!         manday_min "1"
//!         manday_max "1000"
//!         title_max_length "60"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use projboard::{handle_event, initialize, Config, Event, ProjectStatus};
//!
//! let mut state = initialize(&Config::default());
//!
//! handle_event(&mut state, &Event::EditForm)?;
//! for c in "Build Bridge".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! state.form_mut().set_field(projboard::app::FormField::Description, "Construct a bridge over river");
//! state.form_mut().set_field(projboard::app::FormField::Manday, "30");
//! handle_event(&mut state, &Event::SubmitForm)?;
//!
//! assert_eq!(state.list(ProjectStatus::Active).len(), 1);
//! # Ok::<(), projboard::ProjboardError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

use std::collections::BTreeMap;

use app::form::FormLimits;
use infrastructure::expand_tilde;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{ProjboardError, Project, ProjectId, ProjectStatus, Result};
pub use store::ProjectStore;
pub use ui::Theme;

/// Plugin configuration parsed from Zellij's plugin block.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    ///
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. `~/` is expanded against the host home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Minimum description length in characters. Default: 5
    pub description_min_length: usize,

    /// Smallest accepted man-day estimate. Default: 1
    pub manday_min: f64,

    /// Largest accepted man-day estimate. Default: 1000
    pub manday_max: f64,

    /// Optional upper bound on the title length.
    pub title_max_length: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        let limits = FormLimits::default();
        Self {
            theme: None,
            theme_file: None,
            trace_level: None,
            description_min_length: limits.description_min_length,
            manday_min: limits.manday_min,
            manday_max: limits.manday_max,
            title_max_length: limits.title_max_length,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys and numbers that fail to parse keep their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use projboard::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("manday_max".to_string(), "250".to_string());
    /// map.insert("description_min_length".to_string(), "many".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.manday_max, 250.0);
    /// assert_eq!(config.description_min_length, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            theme: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            description_min_length: parse_or(config, "description_min_length", defaults.description_min_length),
            manday_min: parse_or(config, "manday_min", defaults.manday_min),
            manday_max: parse_or(config, "manday_max", defaults.manday_max),
            title_max_length: config
                .get("title_max_length")
                .and_then(|s| s.trim().parse().ok())
                .or(defaults.title_max_length),
        }
    }

    /// Checks that the man-day bounds describe a non-empty range.
    ///
    /// # Errors
    ///
    /// Returns [`ProjboardError::Config`] if a bound is not finite or the
    /// minimum exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        if !self.manday_min.is_finite() || !self.manday_max.is_finite() {
            return Err(ProjboardError::Config(format!(
                "man-day bounds must be finite, got {}..{}",
                self.manday_min, self.manday_max
            )));
        }
        if self.manday_min > self.manday_max {
            return Err(ProjboardError::Config(format!(
                "manday_min {} exceeds manday_max {}",
                self.manday_min, self.manday_max
            )));
        }
        Ok(())
    }

    /// Validation limits for the project form.
    #[must_use]
    pub const fn form_limits(&self) -> FormLimits {
        FormLimits {
            description_min_length: self.description_min_length,
            manday_min: self.manday_min,
            manday_max: self.manday_max,
            title_max_length: self.title_max_length,
        }
    }

    /// Resolves the theme: `theme_file` first, then `theme`, then the default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                }
            }
        }

        self.theme.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_or<T: std::str::FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    config
        .get(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Creates the application state for a configuration.
///
/// Both project lists are mounted against a fresh, empty store. Invalid form
/// limits are logged and replaced by the defaults.
///
/// ```rust
/// use projboard::{initialize, Config, ProjectStatus};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.store().subscriptions().len(), 2);
/// assert!(state.list(ProjectStatus::Finished).is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing projboard plugin");

    let limits = match config.validate() {
        Ok(()) => config.form_limits(),
        Err(e) => {
            tracing::warn!(error = %e, "invalid form limits, using defaults");
            FormLimits::default()
        }
    };

    AppState::new(limits, config.load_theme())
}
