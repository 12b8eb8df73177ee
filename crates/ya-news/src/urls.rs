//! Paths of the `news:*` pages.

/// `news:home`
#[must_use]
pub fn home() -> String {
    "/".to_owned()
}

/// `news:detail`
#[must_use]
pub fn detail(pk: i64) -> String {
    format!("/news/{pk}/")
}

/// Where a comment mutation sends the user back to.
#[must_use]
pub fn detail_comments(pk: i64) -> String {
    format!("{}#comments", detail(pk))
}

/// `news:edit`
#[must_use]
pub fn edit(pk: i64) -> String {
    format!("/edit_comment/{pk}/")
}

/// `news:delete`
#[must_use]
pub fn delete(pk: i64) -> String {
    format!("/delete_comment/{pk}/")
}
