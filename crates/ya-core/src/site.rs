//! Shared state and the router skeleton every site starts from.
use std::sync::Arc;

use salvo::logging::Logger;
use salvo::prelude::*;
use salvo::session::{MemoryStore, SessionHandler};

use crate::accounts::{self, views};
use crate::auth::Authentication;
use crate::{Error, Pool, Result, Settings, Templates, db};

/// State injected into every request.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database pool.
    pub pool: Pool,
    /// Compiled templates.
    pub templates: Templates,
    /// Settings the site was started with.
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Connects the database, creates the accounts table and compiles the
    /// core templates plus `pages`.
    pub async fn new(settings: Settings, pages: &[(&str, &str)]) -> Result<Self> {
        let pool = db::connect(&settings.database_url).await?;
        db::migrate(&pool, accounts::SCHEMA).await?;
        let templates = Templates::new(pages)?;
        Ok(Self {
            pool,
            templates,
            settings: Arc::new(settings),
        })
    }

    /// The state injected by [`router`].
    pub fn from_depot(depot: &Depot) -> Result<&Self> {
        depot.obtain::<Self>().map_err(|_| Error::MissingState)
    }
}

/// Root router with request logging, state injection, sessions,
/// authentication and the `users:*` pages.
///
/// Sites push their own routes onto it.
pub fn router(state: &AppState) -> Result<Router> {
    let session_handler = SessionHandler::builder(MemoryStore::new(), &state.settings.secret_key)
        .cookie_name("ya.session.id")
        .build()?;
    Ok(Router::new()
        .hoop(Logger::new())
        .hoop(affix_state::inject(state.clone()))
        .hoop(session_handler)
        .hoop(Authentication)
        .push(
            Router::with_path("auth")
                .push(Router::with_path("login").get(views::login_page).post(views::login))
                .push(Router::with_path("logout").get(views::logout).post(views::logout))
                .push(Router::with_path("signup").get(views::signup_page).post(views::signup)),
        ))
}

/// Logs where the site listens and serves `router` until shutdown.
pub async fn serve(settings: &Settings, router: Router) {
    tracing::info!(addr = %settings.listen_addr, "listening");
    let acceptor = TcpListener::new(settings.listen_addr.clone()).bind().await;
    Server::new(acceptor).serve(router).await;
}
