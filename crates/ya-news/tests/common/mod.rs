#![allow(dead_code, unreachable_pub)]

use chrono::{Duration, NaiveDate, Utc};
use salvo::Service;
use ya_core::{AppState, Settings, User};
use ya_news::models::{Comment, NewComment, NewNews, News};

pub const PASSWORD: &str = "password";

/// A fresh site on its own in-memory database.
pub struct Site {
    pub state: AppState,
    pub service: Service,
}

impl Site {
    pub async fn new() -> Self {
        let state = ya_news::prepare(Settings::default()).await.unwrap();
        let service = ya_news::service(&state).unwrap();
        Self { state, service }
    }

    pub async fn user(&self, username: &str) -> User {
        User::create(&self.state.pool, username, PASSWORD).await.unwrap()
    }

    pub async fn news(&self) -> News {
        News::create(
            &self.state.pool,
            &NewNews {
                title: "Тестовая новость".into(),
                text: "Это текст тестовой новости.".into(),
                date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn comment(&self, author: &User, news: &News) -> Comment {
        Comment::create(
            &self.state.pool,
            &NewComment {
                news_id: news.id,
                author_id: author.id,
                text: "Это тестовый комментарий.".into(),
                created: None,
            },
        )
        .await
        .unwrap()
    }

    /// Fifteen news items dated 2023-10-01 to 2023-10-15.
    pub async fn multiple_news(&self) -> Vec<News> {
        self.news_items(15).await
    }

    /// `count` news items dated from 2023-10-01 on, one per day.
    pub async fn news_items(&self, count: u32) -> Vec<News> {
        let items: Vec<NewNews> = (0..count)
            .map(|index| NewNews {
                title: format!("Новость {index}"),
                text: "Просто текст.".into(),
                date: NaiveDate::from_ymd_opt(2023, 10, index + 1).unwrap(),
            })
            .collect();
        News::bulk_create(&self.state.pool, &items).await.unwrap()
    }

    /// Five comments, each a day older than the one before.
    pub async fn multiple_comments(&self, author: &User, news: &News) -> Vec<Comment> {
        let now = Utc::now().naive_utc();
        let items: Vec<NewComment> = (0..5)
            .map(|index| NewComment {
                news_id: news.id,
                author_id: author.id,
                text: format!("Комментарий {index}"),
                created: Some(now - Duration::days(index)),
            })
            .collect();
        Comment::bulk_create(&self.state.pool, &items).await.unwrap()
    }

    pub async fn comment_count(&self) -> i64 {
        Comment::count(&self.state.pool).await.unwrap()
    }
}
