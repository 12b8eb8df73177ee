/*!
# ya-core

Shared plumbing for the ya sites.

Both sites are ordinary salvo applications. This crate carries the pieces
they have in common:

- [`Settings`] loaded from the environment,
- a SQLite [`Pool`] and the accounts table,
- user accounts with argon2 password hashes and session login,
- the two access rules: anonymous visitors of protected pages are redirected
  to the login page, and users touching somebody else's object get a 404,
- form error payloads and page rendering.

## Pages

Every page is rendered from a JSON context object by tera. A client that
sends `Accept: application/json` receives the context itself instead of the
HTML, which is how the test suites inspect what a view produced.

## Errors

Handlers return [`Result`]. [`Error`] implements salvo's `Writer`, so `?`
inside a handler turns a missing row into a 404, a missing login into a
redirect to the login page, and anything else into a logged 500.
*/
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod accounts;
pub mod auth;
pub mod config;
pub mod db;
mod error;
pub mod forms;
pub mod pages;
pub mod site;
pub mod urls;


pub use accounts::User;
pub use auth::{AuthDepotExt, LoginRequired, Owned};
pub use config::Settings;
pub use db::Pool;
pub use error::{Error, Result};
pub use forms::{BoundForm, FormErrors};
pub use pages::{Found, Page, Templates};
pub use site::AppState;
