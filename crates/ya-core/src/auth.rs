//! Session authentication and the two access rules.
//!
//! - [`LoginRequired`] sends anonymous visitors to the login page, keeping
//!   the requested path in `next`.
//! - [`Owned::owned_by`] hides objects from everybody but their author: a
//!   foreign object is reported exactly like a missing one.
use salvo::prelude::*;
use salvo::session::SessionDepotExt;

use crate::{AppState, Error, Result, User};

/// Key used when inserting the current user into the depot.
pub const USER_KEY: &str = "::ya::auth::user";
/// Session entry holding the logged in user's id.
pub const SESSION_USER_ID: &str = "user_id";

/// Access to the logged in user.
pub trait AuthDepotExt {
    /// The logged in user, if any.
    fn current_user(&self) -> Option<&User>;

    /// The logged in user, or [`Error::Unauthorized`].
    fn require_user(&self) -> Result<&User> {
        self.current_user().ok_or(Error::Unauthorized)
    }
}

impl AuthDepotExt for Depot {
    #[inline]
    fn current_user(&self) -> Option<&User> {
        self.get(USER_KEY).ok()
    }
}

/// Remembers `user` in the current session.
pub fn login(depot: &mut Depot, user: &User) -> Result<()> {
    let session = depot.session_mut().ok_or(Error::MissingSession)?;
    session.insert(SESSION_USER_ID, user.id)?;
    tracing::info!(user_id = user.id, "user logged in");
    Ok(())
}

/// Forgets the user of the current session.
pub fn logout(depot: &mut Depot) {
    if let Some(session) = depot.session_mut() {
        session.remove(SESSION_USER_ID);
    }
    depot.delete(USER_KEY);
}

/// Middleware loading the session's user into the depot.
///
/// Must run after the session handler. A session pointing at a deleted user
/// is treated as anonymous.
#[derive(Clone, Copy, Debug, Default)]
pub struct Authentication;

#[async_trait]
impl Handler for Authentication {
    async fn handle(&self, req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
        let user_id = depot
            .session()
            .and_then(|session| session.get::<i64>(SESSION_USER_ID));
        if let Some(user_id) = user_id {
            match load_user(depot, user_id).await {
                Ok(Some(user)) => {
                    depot.insert(USER_KEY, user);
                }
                Ok(None) => {
                    tracing::debug!(user_id, "session refers to a missing user");
                }
                Err(e) => {
                    e.write(req, depot, res).await;
                    ctrl.skip_rest();
                    return;
                }
            }
        }
        ctrl.call_next(req, depot, res).await;
    }
}

async fn load_user(depot: &Depot, user_id: i64) -> Result<Option<User>> {
    let state = AppState::from_depot(depot)?;
    User::find(&state.pool, user_id).await
}

/// Middleware redirecting anonymous visitors to the login page.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoginRequired;

#[async_trait]
impl Handler for LoginRequired {
    async fn handle(&self, req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
        if depot.current_user().is_some() {
            ctrl.call_next(req, depot, res).await;
        } else {
            Error::Unauthorized.write(req, depot, res).await;
            ctrl.skip_rest();
        }
    }
}

/// Objects that belong to exactly one user.
pub trait Owned: Sized {
    /// Primary key of the owner.
    fn author_id(&self) -> i64;

    /// Keeps the object only when `user` owns it.
    ///
    /// Missing and foreign objects both end in [`Error::NotFound`].
    fn owned_by(found: Option<Self>, user: &User) -> Result<Self> {
        match found {
            Some(object) if object.author_id() == user.id => Ok(object),
            Some(object) => {
                tracing::debug!(owner = object.author_id(), user_id = user.id, "object hidden from non-owner");
                Err(Error::NotFound)
            }
            None => Err(Error::NotFound),
        }
    }
}
