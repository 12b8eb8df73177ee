//! Public news site.
//!
//! Anybody can read the latest news and their comments; logged in users can
//! comment, and only the author of a comment may edit or delete it.
use salvo::prelude::*;
use ya_core::{AppState, LoginRequired, Result, Settings, db, site};

pub mod forms;
pub mod models;
pub mod urls;
pub mod views;

/// Pages of the news site.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("news/home.html", include_str!("templates/news/home.html")),
    ("news/detail.html", include_str!("templates/news/detail.html")),
    ("news/edit.html", include_str!("templates/news/edit.html")),
    ("news/delete.html", include_str!("templates/news/delete.html")),
];

/// Connects the database and creates every table the site needs.
pub async fn prepare(settings: Settings) -> Result<AppState> {
    let state = AppState::new(settings, TEMPLATES).await?;
    db::migrate(&state.pool, models::SCHEMA).await?;
    Ok(state)
}

/// `news:*` routes.
pub fn routes() -> Router {
    Router::new()
        .get(views::home)
        .push(
            Router::with_path("news/{pk}")
                .get(views::detail)
                .post(views::comment_create),
        )
        .push(
            Router::with_path("edit_comment/{pk}")
                .hoop(LoginRequired)
                .get(views::comment_edit_page)
                .post(views::comment_edit),
        )
        .push(
            Router::with_path("delete_comment/{pk}")
                .hoop(LoginRequired)
                .get(views::comment_delete_page)
                .post(views::comment_delete),
        )
}

/// The whole site, accounts included.
pub fn service(state: &AppState) -> Result<Service> {
    Ok(Service::new(site::router(state)?.push(routes())))
}
