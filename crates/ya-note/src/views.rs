//! Handlers of the `notes:*` pages.
//!
//! Everything but the home page sits behind [`ya_core::LoginRequired`];
//! notes of other users answer 404.
use salvo::prelude::*;
use ya_core::{AppState, AuthDepotExt, BoundForm, Error, Found, Owned, Page, Pool, Result};

use crate::forms::NoteForm;
use crate::models::{NewNote, Note};
use crate::urls;

fn pool(depot: &Depot) -> Result<Pool> {
    Ok(AppState::from_depot(depot)?.pool.clone())
}

/// `notes:home`
#[handler]
pub async fn home() -> Page {
    Page::new("notes/home.html")
}

/// `notes:list`: the current user's notes.
#[handler]
pub async fn list(depot: &mut Depot) -> Result<Page> {
    let author_id = depot.require_user()?.id;
    let object_list = Note::for_author(&pool(depot)?, author_id).await?;
    Page::new("notes/list.html").insert("object_list", object_list)
}

/// `notes:success`
#[handler]
pub async fn success() -> Page {
    Page::new("notes/success.html")
}

fn form_page(form: BoundForm<NoteForm>, note: Option<&Note>) -> Result<Page> {
    Page::new("notes/form.html")
        .insert("form", form)?
        .insert("note", note)
}

/// `notes:add`
#[handler]
pub async fn add_page() -> Result<Page> {
    form_page(BoundForm::default(), None)
}

/// `POST notes:add`
#[handler]
pub async fn add(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let author_id = depot.require_user()?.id;
    let pool = pool(depot)?;
    let form = req.parse_form::<NoteForm>().await.unwrap_or_default();
    let form = form.clean(&pool, None).await?;
    if form.is_valid() {
        let NoteForm { title, text, slug } = form.data;
        Note::create(
            &pool,
            &NewNote {
                title,
                text,
                slug,
                author_id,
            },
        )
        .await?;
        res.render(Found(urls::success()));
        return Ok(());
    }
    let page = form_page(form, None)?;
    page.write(req, depot, res).await;
    Ok(())
}

/// The note addressed by `slug`, provided the current user wrote it.
async fn own_note(req: &Request, depot: &Depot) -> Result<(Pool, Note)> {
    let user = depot.require_user()?;
    let slug = req.param::<String>("slug").ok_or(Error::NotFound)?;
    let pool = pool(depot)?;
    let found = Note::find_by_slug(&pool, &slug).await?;
    let note = Note::owned_by(found, user)?;
    Ok((pool, note))
}

/// `notes:detail`
#[handler]
pub async fn detail(req: &mut Request, depot: &mut Depot) -> Result<Page> {
    let (_, note) = own_note(req, depot).await?;
    Page::new("notes/detail.html").insert("note", note)
}

/// `notes:edit`
#[handler]
pub async fn edit_page(req: &mut Request, depot: &mut Depot) -> Result<Page> {
    let (_, note) = own_note(req, depot).await?;
    form_page(BoundForm::new(NoteForm::from_note(&note)), Some(&note))
}

/// `POST notes:edit`
#[handler]
pub async fn edit(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let (pool, note) = own_note(req, depot).await?;
    let form = req.parse_form::<NoteForm>().await.unwrap_or_default();
    let form = form.clean(&pool, Some(note.id)).await?;
    if form.is_valid() {
        let data = &form.data;
        Note::update(&pool, note.id, &data.title, &data.text, &data.slug).await?;
        res.render(Found(urls::success()));
        return Ok(());
    }
    let page = form_page(form, Some(&note))?;
    page.write(req, depot, res).await;
    Ok(())
}

/// `notes:delete`: asks for confirmation.
#[handler]
pub async fn delete_page(req: &mut Request, depot: &mut Depot) -> Result<Page> {
    let (_, note) = own_note(req, depot).await?;
    Page::new("notes/delete.html").insert("note", note)
}

/// `POST notes:delete`
#[handler]
pub async fn delete(req: &mut Request, depot: &mut Depot, res: &mut Response) -> Result<()> {
    let (pool, note) = own_note(req, depot).await?;
    Note::delete(&pool, note.id).await?;
    tracing::info!(note_id = note.id, slug = %note.slug, "note deleted");
    res.render(Found(urls::success()));
    Ok(())
}
