//! Private notes site.
//!
//! Every user keeps their own notes, each addressed by a unique slug. Nobody
//! but the author can see, change or delete a note.
use salvo::prelude::*;
use ya_core::{AppState, LoginRequired, Result, Settings, db, site};

pub mod forms;
pub mod models;
pub mod translit;
pub mod urls;
pub mod views;

/// Pages of the notes site.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("notes/home.html", include_str!("templates/notes/home.html")),
    ("notes/list.html", include_str!("templates/notes/list.html")),
    ("notes/form.html", include_str!("templates/notes/form.html")),
    ("notes/success.html", include_str!("templates/notes/success.html")),
    ("notes/detail.html", include_str!("templates/notes/detail.html")),
    ("notes/delete.html", include_str!("templates/notes/delete.html")),
];

/// Connects the database and creates every table the site needs.
pub async fn prepare(settings: Settings) -> Result<AppState> {
    let state = AppState::new(settings, TEMPLATES).await?;
    db::migrate(&state.pool, models::SCHEMA).await?;
    Ok(state)
}

/// `notes:*` routes.
///
/// `add` and `done` are matched before `{slug}`; the note form refuses
/// those slugs.
pub fn routes() -> Router {
    Router::new().get(views::home).push(
        Router::with_path("notes")
            .hoop(LoginRequired)
            .get(views::list)
            .push(Router::with_path("add").get(views::add_page).post(views::add))
            .push(Router::with_path("done").get(views::success))
            .push(
                Router::with_path("{slug}")
                    .get(views::detail)
                    .push(Router::with_path("edit").get(views::edit_page).post(views::edit))
                    .push(Router::with_path("delete").get(views::delete_page).post(views::delete)),
            ),
    )
}

/// The whole site, accounts included.
pub fn service(state: &AppState) -> Result<Service> {
    Ok(Service::new(site::router(state)?.push(routes())))
}
