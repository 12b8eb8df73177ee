//! Note form.
use serde::{Deserialize, Serialize};
use ya_core::{BoundForm, FormErrors, Pool, Result};

use crate::models::Note;
use crate::translit;

/// Longest allowed title and slug, in characters.
pub const MAX_LENGTH: usize = 100;
/// Suffix of the message attached to `slug` when it is already taken.
pub const WARNING: &str = " - такой slug уже существует, придумайте уникальное значение!";
/// Message for a slug with characters outside `[-a-zA-Z0-9_]`.
pub const INVALID_SLUG: &str =
    "Значение должно состоять только из латинских букв, цифр, знаков подчеркивания или дефиса.";
/// Slugs taken by the `notes:add` and `notes:success` pages.
pub const RESERVED_SLUGS: [&str; 2] = ["add", "done"];
/// Message for a reserved slug.
pub const RESERVED: &str = " - этот адрес занят служебной страницей, придумайте другой!";

/// Fields of the note form.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NoteForm {
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Body.
    #[serde(default)]
    pub text: String,
    /// Wanted slug; derived from the title when left empty.
    #[serde(default)]
    pub slug: String,
}

/// The slug a note titled `title` gets when none is supplied.
#[must_use]
pub fn derive_slug(title: &str) -> String {
    translit::slugify(title).chars().take(MAX_LENGTH).collect()
}

fn is_valid_slug(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl NoteForm {
    /// The form prefilled with `note`.
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
        }
    }

    /// Validates the form for a new note, or for note `instance` when editing.
    ///
    /// The returned data carries the final slug, derived from the title when
    /// none was supplied. A slug is unique across all notes, whoever owns them.
    pub async fn clean(mut self, pool: &Pool, instance: Option<i64>) -> Result<BoundForm<Self>> {
        self.title = self.title.trim().to_owned();
        self.text = self.text.trim().to_owned();
        self.slug = self.slug.trim().to_owned();

        let mut errors = FormErrors::new();
        if !errors.require("title", &self.title) {
            errors.max_length("title", &self.title, MAX_LENGTH);
        }
        errors.require("text", &self.text);

        if self.slug.is_empty() {
            self.slug = derive_slug(&self.title);
            if self.slug.is_empty() && !errors.contains("title") {
                errors.add("slug", ya_core::forms::REQUIRED);
            }
        } else {
            errors.max_length("slug", &self.slug, MAX_LENGTH);
            if !is_valid_slug(&self.slug) {
                errors.add("slug", INVALID_SLUG);
            }
        }

        if !self.slug.is_empty() && !errors.contains("slug") {
            if RESERVED_SLUGS.contains(&self.slug.as_str()) {
                errors.add("slug", format!("{}{RESERVED}", self.slug));
            } else if Note::slug_taken(pool, &self.slug, instance).await? {
                tracing::debug!(slug = %self.slug, "slug already taken");
                errors.add("slug", format!("{}{WARNING}", self.slug));
            }
        }
        Ok(BoundForm::with_errors(self, errors))
    }
}
