//! Project domain model.
//!
//! This module defines the core [`Project`] type representing one committed unit of
//! work, its identifier [`ProjectId`], and the two-state [`ProjectStatus`] that the
//! board's drag-and-drop moves between.
//!
//! Projects are only ever created by [`crate::store::ProjectStore::add_project`], and
//! their status only changes through [`crate::store::ProjectStore::move_project`]. All
//! fields are private; everything outside the store sees read-only accessors.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of man-days counted as one man-month in effort labels.
const MANDAYS_PER_MONTH: f64 = 20.0;

/// Unique, opaque identifier of a project.
///
/// Backed by a random v4 UUID, so identifiers generated within one plugin run never
/// collide in practice. The textual form is what travels through a drag payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Creates a new random project identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Lifecycle status of a project.
///
/// The only transition is the toggle between the two variants; there are no
/// intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    /// Work in progress. Every project starts here.
    Active,
    /// Completed work.
    Finished,
}

impl ProjectStatus {
    /// Returns the other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }

    /// Heading shown above the list holding projects of this status.
    #[must_use]
    pub const fn list_label(self) -> &'static str {
        match self {
            Self::Active => "Active Projects",
            Self::Finished => "Finished Projects",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Finished => f.write_str("finished"),
        }
    }
}

/// One committed unit of work on the board.
///
/// `id`, `title`, `description` and `manday` are fixed at creation. `status` is the
/// only field that changes afterwards, and only through the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    manday: f64,
    status: ProjectStatus,
}

impl Project {
    /// Creates a new active project with a fresh identifier.
    pub(crate) fn new(title: String, description: String, manday: f64) -> Self {
        Self {
            id: ProjectId::new(),
            title,
            description,
            manday,
            status: ProjectStatus::Active,
        }
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    /// Returns the project's identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the effort estimate in man-days.
    #[must_use]
    pub const fn manday(&self) -> f64 {
        self.manday
    }

    /// Returns the project's current status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns a human-readable effort label.
    ///
    /// Twenty man-days count as one man-month:
    /// - Less than 20: "N man-days"
    /// - Exact multiple of 20: "M man-months"
    /// - Otherwise: "M man-months, R man-days"
    ///
    /// # Examples
    ///
    /// ```
    /// use projboard::store::ProjectStore;
    ///
    /// let mut store = ProjectStore::new();
    /// let id = store.add_project("Bridge".into(), "Build a bridge".into(), 45.0);
    /// assert_eq!(store.get(&id).unwrap().effort_label(), "2 man-months, 5 man-days");
    /// ```
    #[must_use]
    pub fn effort_label(&self) -> String {
        format_effort(self.manday)
    }
}

/// Formats a man-day estimate using man-months for anything of 20 days or more.
#[must_use]
pub fn format_effort(manday: f64) -> String {
    if manday < MANDAYS_PER_MONTH {
        return format!("{} {}", manday, unit(manday, "man-day"));
    }

    let months = (manday / MANDAYS_PER_MONTH).floor();
    let days = manday % MANDAYS_PER_MONTH;
    if days == 0.0 {
        format!("{} {}", months, unit(months, "man-month"))
    } else {
        format!(
            "{} {}, {} {}",
            months,
            unit(months, "man-month"),
            days,
            unit(days, "man-day")
        )
    }
}

fn unit(amount: f64, singular: &str) -> String {
    if (amount - 1.0).abs() < f64::EPSILON {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}
