//! Page rendering.
use std::sync::Arc;

use salvo::http::HeaderValue;
use salvo::http::header::{ACCEPT, LOCATION};
use salvo::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{AppState, AuthDepotExt, Result};

/// Templates every site carries: the layout and the account pages.
pub const CORE_TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    ("users/login.html", include_str!("templates/users/login.html")),
    ("users/logged_out.html", include_str!("templates/users/logged_out.html")),
    ("users/signup.html", include_str!("templates/users/signup.html")),
];

/// Compiled tera templates.
#[derive(Clone, Debug)]
pub struct Templates(Arc<tera::Tera>);

impl Templates {
    /// Compiles [`CORE_TEMPLATES`] followed by the site's own `pages`.
    ///
    /// A site page named like a core template replaces it.
    pub fn new(pages: &[(&str, &str)]) -> Result<Self> {
        let mut tera = tera::Tera::default();
        tera.add_raw_templates(CORE_TEMPLATES.iter().chain(pages).copied())?;
        Ok(Self(Arc::new(tera)))
    }

    /// Renders `template` with `context`.
    pub fn render(&self, template: &str, context: &Value) -> Result<String> {
        let context = tera::Context::from_value(context.clone())?;
        Ok(self.0.render(template, &context)?)
    }
}

/// A template plus the context it is rendered from.
#[derive(Clone, Debug)]
pub struct Page {
    template: &'static str,
    context: Map<String, Value>,
}

impl Page {
    /// A page with an empty context.
    #[must_use]
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            context: Map::new(),
        }
    }

    /// Adds `value` to the context under `key`.
    pub fn insert(mut self, key: &str, value: impl Serialize) -> Result<Self> {
        self.context.insert(key.to_owned(), serde_json::to_value(value)?);
        Ok(self)
    }

    fn finish(mut self, depot: &Depot) -> Value {
        let user = depot.current_user().map(|user| user.username.clone());
        self.context.insert("user".to_owned(), user.into());
        Value::Object(self.context)
    }

    fn render_html(template: &str, context: &Value, depot: &Depot) -> Result<String> {
        AppState::from_depot(depot)?.templates.render(template, context)
    }
}

/// `302 Found` to a local target, fragment included.
///
/// salvo's `Redirect` goes through `Uri`, which drops `#fragment`s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Found(pub String);

impl Scribe for Found {
    fn render(self, res: &mut Response) {
        match HeaderValue::from_str(&self.0) {
            Ok(location) => {
                res.status_code(StatusCode::FOUND);
                res.headers_mut().insert(LOCATION, location);
            }
            Err(_) => {
                tracing::error!(location = %self.0, "invalid redirect target");
                res.render(StatusError::internal_server_error());
            }
        }
    }
}

fn wants_json(req: &Request) -> bool {
    req.headers()
        .get(ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

#[async_trait]
impl Writer for Page {
    async fn write(self, req: &mut Request, depot: &mut Depot, res: &mut Response) {
        let template = self.template;
        let context = self.finish(depot);
        if wants_json(req) {
            res.render(Json(context));
            return;
        }
        match Self::render_html(template, &context, depot) {
            Ok(body) => res.render(Text::Html(body)),
            Err(e) => e.write(req, depot, res).await,
        }
    }
}
