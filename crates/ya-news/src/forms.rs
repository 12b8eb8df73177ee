//! Comment form.
use serde::{Deserialize, Serialize};
use ya_core::{BoundForm, FormErrors};

/// Words a comment must not contain, in lower case.
pub const BAD_WORDS: [&str; 2] = ["редиска", "негодяй"];
/// Message attached to `text` when a bad word is found.
pub const WARNING: &str = "Не ругайтесь!";

/// Fields of the comment form.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CommentForm {
    /// Comment body.
    #[serde(default)]
    pub text: String,
}

impl CommentForm {
    /// Checks the text is present and free of bad words.
    ///
    /// Matching ignores case and finds words inside longer words too.
    #[must_use]
    pub fn validate(mut self) -> BoundForm<Self> {
        self.text = self.text.trim().to_owned();
        let mut errors = FormErrors::new();
        if !errors.require("text", &self.text) {
            let lowered = self.text.to_lowercase();
            if BAD_WORDS.iter().any(|word| lowered.contains(word)) {
                tracing::debug!("comment rejected by the bad word filter");
                errors.add("text", WARNING);
            }
        }
        BoundForm::with_errors(self, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(text: &str) -> BoundForm<CommentForm> {
        CommentForm { text: text.into() }.validate()
    }

    #[test]
    fn test_clean_text_passes() {
        assert!(validate("Это тестовый комментарий.").is_valid());
    }

    #[test]
    fn test_bad_words_rejected_in_any_case() {
        for word in BAD_WORDS {
            let form = validate(&format!("Комментарий с запрещённым словом {word}."));
            assert_eq!(form.errors.get("text"), [WARNING]);
            let form = validate(&format!("Ты {}!", word.to_uppercase()));
            assert_eq!(form.errors.get("text"), [WARNING]);
        }
        assert!(!validate("Вот редисками и закусим").is_valid());
    }

    #[test]
    fn test_empty_text_required() {
        let form = validate("   ");
        assert_eq!(form.errors.get("text"), [ya_core::forms::REQUIRED]);
    }
}
