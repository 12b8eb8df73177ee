use salvo::prelude::*;

use crate::{Found, urls};

/// Errors raised while serving a page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The visitor has to log in first.
    #[error("login required")]
    Unauthorized,
    /// The object does not exist or belongs to somebody else.
    #[error("not found")]
    NotFound,
    /// Storage failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Template lookup or rendering failure.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    /// Password hashing failure.
    #[error("password hash error: {0}")]
    PasswordHash(String),
    /// Session or context (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Invalid or missing setting.
    #[error("configuration error: {0}")]
    Config(String),
    /// Shared state was not injected into the depot.
    #[error("application state missing from depot")]
    MissingState,
    /// No session handler runs in front of the handler.
    #[error("session middleware is not installed")]
    MissingSession,
    /// Error reported by salvo itself.
    #[error(transparent)]
    Salvo(#[from] salvo::Error),
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[async_trait]
impl Writer for Error {
    async fn write(self, req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        match self {
            Self::Unauthorized => {
                let next = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
                let location = urls::login_with_next(next);
                tracing::debug!(%location, "login required");
                res.render(Found(location));
            }
            Self::NotFound => {
                res.render(StatusError::not_found());
            }
            e => {
                tracing::error!(error = ?e, path = %req.uri().path(), "request failed");
                res.render(StatusError::internal_server_error());
            }
        }
    }
}
