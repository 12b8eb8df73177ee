//! Handlers of the `news:*` pages.
use salvo::prelude::*;
use serde::Serialize;
use ya_core::{AppState, AuthDepotExt, BoundForm, Error, Found, Owned, Page, Pool, Result};

use crate::forms::CommentForm;
use crate::models::{Comment, NewComment, News};
use crate::urls;

/// A news item together with its comments, oldest first.
#[derive(Debug, Serialize)]
pub struct NewsDetail {
    /// The news item itself.
    #[serde(flatten)]
    pub news: News,
    /// Its comments.
    pub comments: Vec<Comment>,
}

fn pk(req: &Request) -> Result<i64> {
    req.param::<i64>("pk").ok_or(Error::NotFound)
}

fn pool(depot: &Depot) -> Result<Pool> {
    Ok(AppState::from_depot(depot)?.pool.clone())
}

/// `news:home`: the latest news, freshest first.
#[handler]
pub async fn home(depot: &mut Depot) -> Result<Page> {
    let state = AppState::from_depot(depot)?;
    let object_list = News::latest(&state.pool, state.settings.news_count_on_home_page).await?;
    Page::new("news/home.html").insert("object_list", object_list)
}

/// The detail page; the comment form is offered to logged in users only.
async fn detail_page(
    pool: &Pool,
    news: News,
    authenticated: bool,
    form: Option<BoundForm<CommentForm>>,
) -> Result<Page> {
    let comments = Comment::for_news(pool, news.id).await?;
    let page = Page::new("news/detail.html").insert("news", NewsDetail { news, comments })?;
    if authenticated {
        page.insert("form", form.unwrap_or_default())
    } else {
        Ok(page)
    }
}

/// `news:detail`
#[handler]
pub async fn detail(req: &mut Request, depot: &mut Depot) -> Result<Page> {
    let pool = pool(depot)?;
    let news = News::find(&pool, pk(req)?).await?.ok_or(Error::NotFound)?;
    detail_page(&pool, news, depot.current_user().is_some(), None).await
}

/// `POST news:detail`: adds a comment by the current user.
#[handler]
pub async fn comment_create(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let author_id = depot.require_user()?.id;
    let pool = pool(depot)?;
    let news = News::find(&pool, pk(req)?).await?.ok_or(Error::NotFound)?;
    let form = req.parse_form::<CommentForm>().await.unwrap_or_default().validate();
    if form.is_valid() {
        Comment::create(
            &pool,
            &NewComment {
                news_id: news.id,
                author_id,
                text: form.data.text,
                created: None,
            },
        )
        .await?;
        res.render(Found(urls::detail_comments(news.id)));
        return Ok(());
    }
    let page = detail_page(&pool, news, true, Some(form)).await?;
    page.write(req, depot, res).await;
    Ok(())
}

/// The comment addressed by `pk`, provided the current user wrote it.
async fn own_comment(req: &Request, depot: &Depot) -> Result<(Pool, Comment)> {
    let user = depot.require_user()?;
    let pool = pool(depot)?;
    let found = Comment::find(&pool, pk(req)?).await?;
    let comment = Comment::owned_by(found, user)?;
    Ok((pool, comment))
}

fn edit_page(comment: &Comment, form: BoundForm<CommentForm>) -> Result<Page> {
    Page::new("news/edit.html")
        .insert("comment", comment)?
        .insert("form", form)
}

/// `news:edit`
#[handler]
pub async fn comment_edit_page(req: &mut Request, depot: &mut Depot) -> Result<Page> {
    let (_, comment) = own_comment(req, depot).await?;
    let form = BoundForm::new(CommentForm {
        text: comment.text.clone(),
    });
    edit_page(&comment, form)
}

/// `POST news:edit`
#[handler]
pub async fn comment_edit(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let (pool, comment) = own_comment(req, depot).await?;
    let form = req.parse_form::<CommentForm>().await.unwrap_or_default().validate();
    if form.is_valid() {
        Comment::update_text(&pool, comment.id, &form.data.text).await?;
        res.render(Found(urls::detail_comments(comment.news_id)));
        return Ok(());
    }
    let page = edit_page(&comment, form)?;
    page.write(req, depot, res).await;
    Ok(())
}

/// `news:delete`: asks for confirmation.
#[handler]
pub async fn comment_delete_page(req: &mut Request, depot: &mut Depot) -> Result<Page> {
    let (_, comment) = own_comment(req, depot).await?;
    Page::new("news/delete.html").insert("comment", comment)
}

/// `POST news:delete`
#[handler]
pub async fn comment_delete(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let (pool, comment) = own_comment(req, depot).await?;
    Comment::delete(&pool, comment.id).await?;
    tracing::info!(comment_id = comment.id, "comment deleted");
    res.render(Found(urls::detail_comments(comment.news_id)));
    Ok(())
}
