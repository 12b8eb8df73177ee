//! `users:login`, `users:logout` and `users:signup`.
use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::forms::NON_FIELD_ERRORS;
use crate::{AppState, BoundForm, FormErrors, Found, Page, Result, User, auth, urls};

/// Message shown for a wrong username/password pair.
pub const INVALID_LOGIN: &str =
    "Пожалуйста, введите правильные имя пользователя и пароль. Оба поля могут быть чувствительны к регистру.";
/// Message for a taken username.
pub const USERNAME_TAKEN: &str = "Пользователь с таким именем уже существует.";
/// Message for mismatched passwords.
pub const PASSWORD_MISMATCH: &str = "Введенные пароли не совпадают.";

const USERNAME_MAX_LENGTH: usize = 150;

/// Fields of the login form.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LoginForm {
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Plaintext password; never echoed back.
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Where to go after logging in.
    #[serde(default)]
    pub next: String,
}

/// Fields of the signup form.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SignupForm {
    /// Wanted login name.
    #[serde(default)]
    pub username: String,
    /// Password.
    #[serde(default, skip_serializing)]
    pub password1: String,
    /// Password confirmation.
    #[serde(default, skip_serializing)]
    pub password2: String,
}

fn login_form_page(form: BoundForm<LoginForm>) -> Result<Page> {
    Page::new("users/login.html").insert("form", form)
}

/// Renders the login form.
#[handler]
pub async fn login_page(req: &mut Request) -> Result<Page> {
    let next = req.query::<String>("next").unwrap_or_default();
    login_form_page(BoundForm::new(LoginForm {
        next,
        ..LoginForm::default()
    }))
}

/// Checks the credentials and logs the user in.
#[handler]
pub async fn login(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let mut form = req.parse_form::<LoginForm>().await.unwrap_or_default();
    if form.next.is_empty() {
        form.next = req.query::<String>("next").unwrap_or_default();
    }
    let pool = AppState::from_depot(depot)?.pool.clone();

    let mut errors = FormErrors::new();
    errors.require("username", &form.username);
    errors.require("password", &form.password);
    if errors.is_empty() {
        match User::authenticate(&pool, &form.username, &form.password).await? {
            Some(user) => {
                auth::login(depot, &user)?;
                let target = if urls::is_local(&form.next) { form.next.as_str() } else { "/" };
                res.render(Found(target.to_owned()));
                return Ok(());
            }
            None => {
                tracing::warn!(username = %form.username, "failed login attempt");
                errors.add(NON_FIELD_ERRORS, INVALID_LOGIN);
            }
        }
    }
    let page = login_form_page(BoundForm::with_errors(form, errors))?;
    page.write(req, depot, res).await;
    Ok(())
}

/// Logs the user out and confirms it.
#[handler]
pub async fn logout(depot: &mut Depot) -> Page {
    auth::logout(depot);
    Page::new("users/logged_out.html")
}

/// Renders the signup form.
#[handler]
pub async fn signup_page() -> Result<Page> {
    Page::new("users/signup.html").insert("form", BoundForm::new(SignupForm::default()))
}

/// Registers a new user and sends them to the login page.
#[handler]
pub async fn signup(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let form = req.parse_form::<SignupForm>().await.unwrap_or_default();
    let pool = AppState::from_depot(depot)?.pool.clone();

    let mut errors = FormErrors::new();
    if !errors.require("username", &form.username) {
        errors.max_length("username", &form.username, USERNAME_MAX_LENGTH);
        if User::find_by_username(&pool, &form.username).await?.is_some() {
            errors.add("username", USERNAME_TAKEN);
        }
    }
    errors.require("password1", &form.password1);
    errors.require("password2", &form.password2);
    if !form.password2.is_empty() && form.password1 != form.password2 {
        errors.add("password2", PASSWORD_MISMATCH);
    }

    if errors.is_empty() {
        User::create(&pool, &form.username, &form.password1).await?;
        res.render(Found(urls::login()));
        return Ok(());
    }
    let page = Page::new("users/signup.html").insert("form", BoundForm::with_errors(form, errors))?;
    page.write(req, depot, res).await;
    Ok(())
}
