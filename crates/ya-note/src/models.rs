//! Notes.
use serde::Serialize;
use sqlx::FromRow;
use ya_core::{Owned, Pool, Result};

/// Tables of the notes site.
pub const SCHEMA: &[&str] = &["CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        text TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        author_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE
    )"];

/// A private note.
#[derive(Clone, Debug, FromRow, Serialize, PartialEq, Eq)]
pub struct Note {
    /// Primary key.
    pub id: i64,
    /// Title, at most 100 characters.
    pub title: String,
    /// Body.
    pub text: String,
    /// Unique address of the note.
    pub slug: String,
    /// Owner.
    pub author_id: i64,
}

impl Owned for Note {
    fn author_id(&self) -> i64 {
        self.author_id
    }
}

/// Fields of a note to be stored.
#[derive(Clone, Debug)]
pub struct NewNote {
    /// Title.
    pub title: String,
    /// Body.
    pub text: String,
    /// Cleaned, unique slug.
    pub slug: String,
    /// Owner.
    pub author_id: i64,
}

const SELECT_NOTE: &str = "SELECT id, title, text, slug, author_id FROM notes";

impl Note {
    /// Stores a note and returns it.
    pub async fn create(pool: &Pool, note: &NewNote) -> Result<Self> {
        let note = sqlx::query_as::<_, Self>(
            "INSERT INTO notes (title, text, slug, author_id) VALUES (?, ?, ?, ?)
             RETURNING id, title, text, slug, author_id",
        )
        .bind(&note.title)
        .bind(&note.text)
        .bind(&note.slug)
        .bind(note.author_id)
        .fetch_one(pool)
        .await?;
        tracing::debug!(note_id = note.id, slug = %note.slug, "note created");
        Ok(note)
    }

    /// Notes of one author, in creation order.
    pub async fn for_author(pool: &Pool, author_id: i64) -> Result<Vec<Self>> {
        Ok(
            sqlx::query_as::<_, Self>(&format!("{SELECT_NOTE} WHERE author_id = ? ORDER BY id"))
                .bind(author_id)
                .fetch_all(pool)
                .await?,
        )
    }

    /// Looks a note up by slug, whoever owns it.
    pub async fn find_by_slug(pool: &Pool, slug: &str) -> Result<Option<Self>> {
        Ok(sqlx::query_as::<_, Self>(&format!("{SELECT_NOTE} WHERE slug = ?"))
            .bind(slug)
            .fetch_optional(pool)
            .await?)
    }

    /// Whether a note other than `exclude` already uses `slug`.
    pub async fn slug_taken(pool: &Pool, slug: &str, exclude: Option<i64>) -> Result<bool> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes WHERE slug = ? AND id IS NOT ?")
            .bind(slug)
            .bind(exclude)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    /// Replaces title, text and slug of note `id`.
    pub async fn update(pool: &Pool, id: i64, title: &str, text: &str, slug: &str) -> Result<()> {
        sqlx::query("UPDATE notes SET title = ?, text = ?, slug = ? WHERE id = ?")
            .bind(title)
            .bind(text)
            .bind(slug)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Deletes note `id`.
    pub async fn delete(pool: &Pool, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Number of stored notes.
    pub async fn count(pool: &Pool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
