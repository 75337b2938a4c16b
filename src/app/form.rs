//! New-project form component.
//!
//! Holds the raw text of the three inputs. On submit the inputs are gathered,
//! validated, and handed to the store; invalid input leaves the store untouched.

use super::component::Component;
use super::modes::FormField;
use crate::domain::{validate, ProjectId, Validatable};
use crate::store::ProjectStore;
use crate::ui::viewmodel::{FieldView, FormView};

/// Validation bounds applied on submit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormLimits {
    pub description_min_length: usize,
    pub manday_min: f64,
    pub manday_max: f64,
    /// No upper bound on title length when `None`.
    pub title_max_length: Option<usize>,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            manday_min: 1.0,
            manday_max: 1000.0,
            title_max_length: None,
        }
    }
}

/// Validated form input: title, description and man-days.
pub type ProjectInput = (String, String, f64);

/// The form used to create projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    title: String,
    description: String,
    manday: String,
    focused: FormField,
    limits: FormLimits,
}

impl ProjectForm {
    #[must_use]
    pub fn new(limits: FormLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn limits(&self) -> &FormLimits {
        &self.limits
    }

    #[must_use]
    pub const fn focused(&self) -> FormField {
        self.focused
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Raw text of a field.
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Manday => &self.manday,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Manday => &mut self.manday,
        }
    }

    /// Types a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        let field = self.focused;
        self.field_mut(field).push(c);
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focused;
        self.field_mut(field).pop();
    }

    /// Replaces the text of a field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Empties every field and returns focus to the title.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.manday.clear();
        self.focused = FormField::Title;
    }

    /// Man-days as typed; text that is not a number becomes NaN.
    #[must_use]
    pub fn manday_value(&self) -> f64 {
        self.manday.trim().parse().unwrap_or(f64::NAN)
    }

    /// Validates the inputs and returns them if every rule holds.
    #[must_use]
    pub fn gather_input(&self) -> Option<ProjectInput> {
        let manday = self.manday_value();

        let mut title = Validatable::text(self.title.as_str()).required();
        if let Some(bound) = self.limits.title_max_length {
            title = title.max_length(bound);
        }
        let description = Validatable::text(self.description.as_str())
            .required()
            .min_length(self.limits.description_min_length);
        let manday_rule = Validatable::number(manday)
            .required()
            .min(self.limits.manday_min)
            .max(self.limits.manday_max);

        let checks = [
            (FormField::Title, validate(&title)),
            (FormField::Description, validate(&description)),
            (FormField::Manday, validate(&manday_rule)),
        ];
        if let Some((field, _)) = checks.iter().find(|(_, ok)| !ok) {
            tracing::debug!(field = field.label(), "form input rejected");
            return None;
        }

        Some((self.title.clone(), self.description.clone(), manday))
    }

    /// Adds a project from the form's inputs and clears the form.
    ///
    /// Returns `None` and leaves both store and form untouched when the input is
    /// invalid.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Option<ProjectId> {
        let (title, description, manday) = self.gather_input()?;
        let id = store.add_project(title, description, manday);
        self.clear();
        Some(id)
    }
}

impl Component for ProjectForm {
    type View = FormView;

    fn configure(&mut self, _store: &mut ProjectStore) {}

    fn render_content(&self) -> FormView {
        let fields = FormField::ALL
            .into_iter()
            .map(|field| FieldView {
                label: field.label().to_string(),
                value: self.field(field).to_string(),
                is_focused: field == self.focused,
                is_editing: false,
            })
            .collect();
        FormView { fields }
    }
}
