//! Form error payloads.
use std::collections::BTreeMap;

use serde::Serialize;

/// Message for an empty required field.
pub const REQUIRED: &str = "Обязательное поле.";

/// Key of errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Message for a value longer than `limit` characters.
#[must_use]
pub fn max_length_message(limit: usize, actual: usize) -> String {
    format!("Убедитесь, что это значение содержит не более {limit} символов (сейчас {actual}).")
}

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    /// No errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.0.entry(field.into()).or_default().push(message.into());
        self
    }

    /// Whether the form passed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` has at least one message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages attached to `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Adds [`REQUIRED`] to `field` when `value` is blank; returns whether it was.
    pub fn require(&mut self, field: &str, value: &str) -> bool {
        let blank = value.trim().is_empty();
        if blank {
            self.add(field, REQUIRED);
        }
        blank
    }

    /// Adds a length error to `field` when `value` exceeds `limit` characters.
    pub fn max_length(&mut self, field: &str, value: &str, limit: usize) {
        let actual = value.chars().count();
        if actual > limit {
            self.add(field, max_length_message(limit, actual));
        }
    }
}

/// Submitted data together with its validation result.
///
/// This is what pages expose as `form` in their context.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BoundForm<T> {
    /// Submitted (or cleaned) values.
    pub data: T,
    /// Validation messages; empty for a valid or unbound form.
    pub errors: FormErrors,
}

impl<T> BoundForm<T> {
    /// A form with no errors yet.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: FormErrors::new(),
        }
    }

    /// A form with the given errors.
    pub fn with_errors(data: T, errors: FormErrors) -> Self {
        Self { data, errors }
    }

    /// Whether validation found nothing to complain about.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
