//! Paths of the `notes:*` pages.

/// `notes:home`
#[must_use]
pub fn home() -> String {
    "/".to_owned()
}

/// `notes:list`
#[must_use]
pub fn list() -> String {
    "/notes/".to_owned()
}

/// `notes:add`
#[must_use]
pub fn add() -> String {
    "/notes/add/".to_owned()
}

/// `notes:success`, where every successful change ends.
#[must_use]
pub fn success() -> String {
    "/notes/done/".to_owned()
}

/// `notes:detail`
#[must_use]
pub fn detail(slug: &str) -> String {
    format!("/notes/{slug}/")
}

/// `notes:edit`
#[must_use]
pub fn edit(slug: &str) -> String {
    format!("/notes/{slug}/edit/")
}

/// `notes:delete`
#[must_use]
pub fn delete(slug: &str) -> String {
    format!("/notes/{slug}/delete/")
}
