//! Settings read from the environment.
use std::env;
use std::fmt::{self, Formatter};
use std::str::FromStr;

use crate::{Error, Result};

/// Default `DATABASE_URL`.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
/// Default `LISTEN_ADDR`.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
/// Default `NEWS_COUNT_ON_HOME_PAGE`.
pub const DEFAULT_NEWS_COUNT_ON_HOME_PAGE: usize = 10;
/// Session cookies are signed with keys derived from at least this many bytes.
pub const MIN_SECRET_KEY_LEN: usize = 64;

const DEVELOPMENT_SECRET_KEY: &[u8] =
    b"ya-sites-development-secret-ya-sites-development-secret-ya-sites-development";

/// Process-wide settings.
#[derive(Clone)]
pub struct Settings {
    /// sqlx connection url of the SQLite database.
    pub database_url: String,
    /// Secret used to sign session cookies.
    pub secret_key: Vec<u8>,
    /// Address the binaries listen on.
    pub listen_addr: String,
    /// Upper bound of news items on the news home page.
    pub news_count_on_home_page: usize,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("secret_key", &"..")
            .field("listen_addr", &self.listen_addr)
            .field("news_count_on_home_page", &self.news_count_on_home_page)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            secret_key: DEVELOPMENT_SECRET_KEY.to_vec(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            news_count_on_home_page: DEFAULT_NEWS_COUNT_ON_HOME_PAGE,
        }
    }
}

impl Settings {
    /// Loads `.env` if present, then reads `DATABASE_URL`, `SECRET_KEY`,
    /// `LISTEN_ADDR` and `NEWS_COUNT_ON_HOME_PAGE`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(url) = lookup("DATABASE_URL") {
            settings.database_url = url;
        }
        if let Some(key) = lookup("SECRET_KEY") {
            settings.secret_key = key.into_bytes();
        }
        if let Some(addr) = lookup("LISTEN_ADDR") {
            settings.listen_addr = addr;
        }
        if let Some(count) = lookup("NEWS_COUNT_ON_HOME_PAGE") {
            settings.news_count_on_home_page = parse("NEWS_COUNT_ON_HOME_PAGE", &count)?;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Overrides the home page news limit.
    #[must_use]
    pub fn with_news_count_on_home_page(mut self, count: usize) -> Self {
        self.news_count_on_home_page = count;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.secret_key.len() < MIN_SECRET_KEY_LEN {
            return Err(Error::Config(format!(
                "SECRET_KEY must be at least {MIN_SECRET_KEY_LEN} bytes long"
            )));
        }
        if self.database_url.is_empty() {
            return Err(Error::Config("DATABASE_URL must not be empty".into()));
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} has an invalid value: {value:?}")))
}
