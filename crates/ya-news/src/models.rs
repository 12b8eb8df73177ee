//! News and comments.
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use ya_core::{Owned, Pool, Result};

/// Tables of the news site.
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS news (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        text TEXT NOT NULL,
        date DATE NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        news_id INTEGER NOT NULL REFERENCES news (id) ON DELETE CASCADE,
        author_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
        text TEXT NOT NULL,
        created DATETIME NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS comments_news_created ON comments (news_id, created)",
];

/// A published news item.
#[derive(Clone, Debug, FromRow, Serialize, PartialEq, Eq)]
pub struct News {
    /// Primary key.
    pub id: i64,
    /// Headline.
    pub title: String,
    /// Body.
    pub text: String,
    /// Publication date.
    pub date: NaiveDate,
}

/// Fields of a news item to be stored.
#[derive(Clone, Debug)]
pub struct NewNews {
    /// Headline.
    pub title: String,
    /// Body.
    pub text: String,
    /// Publication date.
    pub date: NaiveDate,
}

impl News {
    /// Stores one news item.
    pub async fn create(pool: &Pool, news: &NewNews) -> Result<Self> {
        Ok(sqlx::query_as::<_, Self>(
            "INSERT INTO news (title, text, date) VALUES (?, ?, ?) RETURNING id, title, text, date",
        )
        .bind(&news.title)
        .bind(&news.text)
        .bind(news.date)
        .fetch_one(pool)
        .await?)
    }

    /// Stores many news items in one transaction.
    pub async fn bulk_create(pool: &Pool, items: &[NewNews]) -> Result<Vec<Self>> {
        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(items.len());
        for news in items {
            let row = sqlx::query_as::<_, Self>(
                "INSERT INTO news (title, text, date) VALUES (?, ?, ?) RETURNING id, title, text, date",
            )
            .bind(&news.title)
            .bind(&news.text)
            .bind(news.date)
            .fetch_one(&mut *tx)
            .await?;
            created.push(row);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// At most `limit` items, freshest first.
    pub async fn latest(pool: &Pool, limit: usize) -> Result<Vec<Self>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Ok(sqlx::query_as::<_, Self>(
            "SELECT id, title, text, date FROM news ORDER BY date DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?)
    }

    /// Looks a news item up by primary key.
    pub async fn find(pool: &Pool, id: i64) -> Result<Option<Self>> {
        Ok(
            sqlx::query_as::<_, Self>("SELECT id, title, text, date FROM news WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?,
        )
    }
}

/// A comment on a news item, with its author's name.
#[derive(Clone, Debug, FromRow, Serialize, PartialEq, Eq)]
pub struct Comment {
    /// Primary key.
    pub id: i64,
    /// News item the comment belongs to.
    pub news_id: i64,
    /// Owner.
    pub author_id: i64,
    /// Owner's username.
    pub author: String,
    /// Body.
    pub text: String,
    /// Creation time (UTC).
    pub created: NaiveDateTime,
}

impl Owned for Comment {
    fn author_id(&self) -> i64 {
        self.author_id
    }
}

/// Fields of a comment to be stored.
#[derive(Clone, Debug)]
pub struct NewComment {
    /// News item commented on.
    pub news_id: i64,
    /// Owner.
    pub author_id: i64,
    /// Body.
    pub text: String,
    /// Creation time; now when unset.
    pub created: Option<NaiveDateTime>,
}

const SELECT_COMMENT: &str = "SELECT c.id, c.news_id, c.author_id, u.username AS author, c.text, c.created
    FROM comments c JOIN users u ON u.id = c.author_id";

impl Comment {
    /// Stores a comment and returns it.
    pub async fn create(pool: &Pool, comment: &NewComment) -> Result<Self> {
        let created = comment.created.unwrap_or_else(|| Utc::now().naive_utc());
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO comments (news_id, author_id, text, created) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(comment.news_id)
        .bind(comment.author_id)
        .bind(&comment.text)
        .bind(created)
        .fetch_one(pool)
        .await?;
        tracing::debug!(comment_id = id, news_id = comment.news_id, "comment created");
        Self::find(pool, id).await?.ok_or(ya_core::Error::NotFound)
    }

    /// Stores many comments in one transaction.
    pub async fn bulk_create(pool: &Pool, items: &[NewComment]) -> Result<Vec<Self>> {
        let mut tx = pool.begin().await?;
        let mut ids = Vec::with_capacity(items.len());
        for comment in items {
            let created = comment.created.unwrap_or_else(|| Utc::now().naive_utc());
            let (id,): (i64,) = sqlx::query_as(
                "INSERT INTO comments (news_id, author_id, text, created) VALUES (?, ?, ?, ?) RETURNING id",
            )
            .bind(comment.news_id)
            .bind(comment.author_id)
            .bind(&comment.text)
            .bind(created)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }
        tx.commit().await?;
        let mut created = Vec::with_capacity(ids.len());
        for id in ids {
            created.extend(Self::find(pool, id).await?);
        }
        Ok(created)
    }

    /// Looks a comment up by primary key.
    pub async fn find(pool: &Pool, id: i64) -> Result<Option<Self>> {
        Ok(sqlx::query_as::<_, Self>(&format!("{SELECT_COMMENT} WHERE c.id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Comments of one news item, oldest first.
    pub async fn for_news(pool: &Pool, news_id: i64) -> Result<Vec<Self>> {
        Ok(sqlx::query_as::<_, Self>(&format!(
            "{SELECT_COMMENT} WHERE c.news_id = ? ORDER BY c.created ASC, c.id ASC"
        ))
        .bind(news_id)
        .fetch_all(pool)
        .await?)
    }

    /// Replaces the text of comment `id`.
    pub async fn update_text(pool: &Pool, id: i64, text: &str) -> Result<()> {
        sqlx::query("UPDATE comments SET text = ? WHERE id = ?")
            .bind(text)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Deletes comment `id`.
    pub async fn delete(pool: &Pool, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Number of stored comments.
    pub async fn count(pool: &Pool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
